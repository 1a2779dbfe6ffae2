use directory::{InMemoryUserDao, User, UserDirectory};

use clap::ArgEnum;
use log::LevelFilter;
use serde::Deserialize;

#[derive(Default)]
pub struct Config {
    pub users: Vec<User>,
    pub store_unavailable: bool,
    pub log: LogOpts,
}

impl Config {
    pub fn merge<C: ?Sized>(&mut self, changes: &C)
    where
        C: ConfigChanges,
    {
        changes.apply(self)
    }

    pub fn push_user(&mut self, user: User) {
        self.users.push(user)
    }

    /// Directory holding the configured users, backed by a store that knows
    /// the same ids.
    pub fn build_directory(&self) -> UserDirectory<InMemoryUserDao> {
        let dao = if self.store_unavailable {
            InMemoryUserDao::with_unavailable()
        } else {
            InMemoryUserDao::new(self.users.iter().map(|user| user.id))
        };
        let mut directory = UserDirectory::new(dao);
        directory.add_all(self.users.iter().cloned());
        directory
    }
}

pub trait ConfigChanges {
    fn apply(&self, config: &mut Config);
}

#[derive(Default)]
pub struct LogOpts {
    pub file: Option<FileLogOpts>,
    pub console: ConsoleLogOpts,
}

pub struct FileLogOpts {
    pub file_path: String,
    pub level: LevelFilter,
}

pub struct ConsoleLogOpts {
    pub level: LevelFilter,
}

impl Default for ConsoleLogOpts {
    fn default() -> Self {
        ConsoleLogOpts {
            level: LevelFilter::Warn,
        }
    }
}

#[derive(Deserialize, ArgEnum, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}
