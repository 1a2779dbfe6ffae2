mod fake_dao;
#[cfg(test)]
mod test_login;
#[cfg(test)]
mod test_users;

use std::fs::File;
use std::ops::{Deref, DerefMut};
use std::sync::Once;

use directory::{User, UserDirectory};
pub use fake_dao::{DatabaseUnavailable, FakeUserDao};

use rstest::fixture;
use simplelog::*;

pub fn ivan() -> User {
    User::new(1, "Ivan", "123")
}

pub fn petr() -> User {
    User::new(2, "Petr", "111")
}

/// A fresh directory per test. The store already answers `true` for
/// Ivan's id; tests reconfigure it through `dao_mut`.
pub struct TestEnvironment {
    directory: UserDirectory<FakeUserDao>,
}

static INIT_LOG: Once = Once::new();

fn initialize_logger() {
    CombinedLogger::init(vec![
        TermLogger::new(
            LevelFilter::Warn,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(
            LevelFilter::Debug,
            Config::default(),
            File::create("test.log").unwrap(),
        ),
    ])
    .unwrap();
    log::debug!("Logger initialized for the test run");
}

impl TestEnvironment {
    pub fn new() -> TestEnvironment {
        INIT_LOG.call_once(initialize_logger);
        log::debug!("Setting up {:?}", std::thread::current().name());
        let mut dao = FakeUserDao::default();
        dao.answer(ivan().id, true);
        TestEnvironment {
            directory: UserDirectory::new(dao),
        }
    }

    pub fn into_directory(mut self) -> UserDirectory<FakeUserDao> {
        std::mem::replace(
            &mut self.directory,
            UserDirectory::new(FakeUserDao::default()),
        )
    }
}

impl Default for TestEnvironment {
    fn default() -> Self {
        TestEnvironment::new()
    }
}

impl Deref for TestEnvironment {
    type Target = UserDirectory<FakeUserDao>;

    fn deref(&self) -> &Self::Target {
        &self.directory
    }
}

impl DerefMut for TestEnvironment {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.directory
    }
}

impl Drop for TestEnvironment {
    fn drop(&mut self) {
        log::debug!(
            "Tearing down {:?} with {} users",
            std::thread::current().name(),
            self.directory.len()
        );
    }
}

#[fixture]
pub fn env() -> TestEnvironment {
    TestEnvironment::new()
}
