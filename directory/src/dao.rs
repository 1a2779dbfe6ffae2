use std::collections::HashSet;

use crate::UserId;

use anyhow::{Error, Result};

/// Persistence side of the directory. The directory never looks behind this
/// trait: it only forwards deletes and hands back whatever comes out.
pub trait UserDao {
    fn delete(&mut self, id: UserId) -> Result<bool>;
}

impl<D: UserDao + ?Sized> UserDao for Box<D> {
    fn delete(&mut self, id: UserId) -> Result<bool> {
        (**self).delete(id)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("user store is not available")]
    Unavailable,
}

/// Store that only remembers which ids exist.
#[derive(Debug)]
pub struct InMemoryUserDao {
    ids: HashSet<UserId>,
    available: bool,
}

impl InMemoryUserDao {
    pub fn new<I>(ids: I) -> InMemoryUserDao
    where
        I: IntoIterator<Item = UserId>,
    {
        InMemoryUserDao {
            ids: ids.into_iter().collect(),
            available: true,
        }
    }

    pub fn with_unavailable() -> InMemoryUserDao {
        InMemoryUserDao {
            ids: HashSet::new(),
            available: false,
        }
    }

    pub fn contains(&self, id: UserId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl Default for InMemoryUserDao {
    fn default() -> Self {
        InMemoryUserDao::new(std::iter::empty())
    }
}

impl UserDao for InMemoryUserDao {
    fn delete(&mut self, id: UserId) -> Result<bool> {
        if !self.available {
            return Err(Error::new(StoreError::Unavailable));
        }
        Ok(self.ids.remove(&id))
    }
}
