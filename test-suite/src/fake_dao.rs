use std::collections::HashMap;

use directory::{UserDao, UserId};

use anyhow::{Error, Result};

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("database is not available while deleting user {id}")]
pub struct DatabaseUnavailable {
    pub id: UserId,
}

enum Answer {
    Deleted(bool),
    Fail,
}

/// Store double. Answers are set per id, anything else gets the default
/// answer. Every id it is asked to delete is recorded.
pub struct FakeUserDao {
    answers: HashMap<UserId, Answer>,
    default_answer: bool,
    calls: Vec<UserId>,
}

impl FakeUserDao {
    pub fn new(default_answer: bool) -> FakeUserDao {
        FakeUserDao {
            answers: HashMap::new(),
            default_answer,
            calls: Vec::new(),
        }
    }

    pub fn answer(&mut self, id: UserId, deleted: bool) -> &mut FakeUserDao {
        self.answers.insert(id, Answer::Deleted(deleted));
        self
    }

    pub fn fail(&mut self, id: UserId) -> &mut FakeUserDao {
        self.answers.insert(id, Answer::Fail);
        self
    }

    pub fn calls(&self) -> &[UserId] {
        &self.calls
    }

    pub fn last_call(&self) -> Option<UserId> {
        self.calls.last().copied()
    }
}

impl Default for FakeUserDao {
    fn default() -> Self {
        FakeUserDao::new(false)
    }
}

impl UserDao for FakeUserDao {
    fn delete(&mut self, id: UserId) -> Result<bool> {
        self.calls.push(id);
        match self.answers.get(&id) {
            Some(Answer::Deleted(deleted)) => Ok(*deleted),
            Some(Answer::Fail) => Err(Error::new(DatabaseUnavailable { id })),
            None => Ok(self.default_answer),
        }
    }
}
