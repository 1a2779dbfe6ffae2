use std::collections::HashMap;

use crate::{DirectoryError, User, UserDao, UserId};

/// Users kept in memory in the order they were added.
///
/// Ids are not checked for uniqueness. Adding two users with the same id
/// keeps both; [`UserDirectory::get_all_converted_by_id`] then returns the
/// one added last.
pub struct UserDirectory<D> {
    users: Vec<User>,
    dao: D,
}

impl<D: UserDao> UserDirectory<D> {
    pub fn new(dao: D) -> UserDirectory<D> {
        UserDirectory {
            users: Vec::new(),
            dao,
        }
    }

    pub fn add(&mut self, user: User) {
        log::debug!("Adding user {} with id {}", user.username, user.id);
        self.users.push(user);
    }

    pub fn add_all<I>(&mut self, users: I)
    where
        I: IntoIterator<Item = User>,
    {
        for user in users {
            self.add(user);
        }
    }

    pub fn get_all(&self) -> &[User] {
        &self.users
    }

    pub fn get_all_converted_by_id(&self) -> HashMap<UserId, User> {
        self.users
            .iter()
            .map(|user| (user.id, user.clone()))
            .collect()
    }

    /// Forwards to the store. Its answer and its errors come back untouched;
    /// the users held here are left as they are.
    pub fn delete(&mut self, id: UserId) -> Result<bool, DirectoryError> {
        match self.dao.delete(id) {
            Ok(deleted) => {
                log::debug!("Store answered {} to deleting user {}", deleted, id);
                Ok(deleted)
            }
            Err(err) => {
                log::error!("Store failed to delete user {}: {}", id, err);
                Err(err.into())
            }
        }
    }

    pub fn login(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<Option<&User>, DirectoryError> {
        let (username, password) = match (username, password) {
            (Some(username), Some(password)) => (username, password),
            _ => return Err(DirectoryError::null_credentials()),
        };
        let user = self
            .users
            .iter()
            .find(|user| user.has_credentials(username, password));
        match user {
            Some(user) => log::info!("User {} logged in", user.username),
            None => log::warn!("Rejected login attempt for {}", username),
        }
        Ok(user)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn dao(&self) -> &D {
        &self.dao
    }

    pub fn dao_mut(&mut self) -> &mut D {
        &mut self.dao
    }
}

impl<D: UserDao> Extend<User> for UserDirectory<D> {
    fn extend<I: IntoIterator<Item = User>>(&mut self, users: I) {
        self.add_all(users)
    }
}
