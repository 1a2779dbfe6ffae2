mod dao;
mod directory;
mod error;
mod user;

pub use dao::{InMemoryUserDao, StoreError, UserDao};
pub use directory::UserDirectory;
pub use error::DirectoryError;
pub use user::{Password, User, UserId, Username};
