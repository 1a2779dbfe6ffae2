use std::str::FromStr;

use directory::{User, UserId};

use super::{Config, ConfigChanges, FileLogOpts, LogLevel};

use serde::Deserialize;

#[derive(Deserialize)]
pub struct TomlConfig {
    #[serde(rename(deserialize = "user"))]
    users: Option<Vec<UserEntry>>,
    store: Option<StoreConfig>,
    #[serde(rename(deserialize = "log"))]
    log_opts: Option<LogOpts>,
}

impl FromStr for TomlConfig {
    type Err = toml::de::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config = toml::from_str(s)?;
        Ok(config)
    }
}

impl ConfigChanges for TomlConfig {
    fn apply(&self, config: &mut Config) {
        if let Some(users) = &self.users {
            for user in users {
                config.push_user(User::new(
                    user.id,
                    user.username.clone(),
                    user.password.clone(),
                ))
            }
        }
        if let Some(store) = &self.store {
            if let Some(unavailable) = store.unavailable {
                config.store_unavailable = unavailable;
            }
        }
        if let Some(log_opts) = &self.log_opts {
            if let Some(file_log_opts) = &log_opts.file_log_opts {
                config.log.file = Some(FileLogOpts {
                    file_path: file_log_opts.path.clone(),
                    level: file_log_opts.level.into(),
                });
            }
            if let Some(console_log_opts) = &log_opts.console_log_opts {
                config.log.console.level = console_log_opts.level.into();
            }
        }
    }
}

#[derive(Deserialize)]
struct UserEntry {
    id: UserId,
    username: String,
    password: String,
}

#[derive(Deserialize)]
struct StoreConfig {
    unavailable: Option<bool>,
}

#[derive(Deserialize)]
struct FileLogOptsEntry {
    path: String,
    level: LogLevel,
}

#[derive(Deserialize)]
struct ConsoleLogOpts {
    level: LogLevel,
}

#[derive(Deserialize)]
struct LogOpts {
    #[serde(rename(deserialize = "file"))]
    file_log_opts: Option<FileLogOptsEntry>,
    #[serde(rename(deserialize = "console"))]
    console_log_opts: Option<ConsoleLogOpts>,
}
