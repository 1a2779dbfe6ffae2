use directory::UserId;

use clap::{Parser, Subcommand};

use super::{Config, ConfigChanges, LogLevel};

#[derive(Parser)]
#[clap(version, author)]
pub struct CliConfig {
    /// Sets the path to toml configuration file
    #[clap(name = "config", short, long)]
    pub config_file: Option<String>,

    /// Sets the level of messages printed to the terminal
    #[clap(short, long, arg_enum)]
    pub log_level: Option<LogLevel>,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Prints every user in the order they were added
    List,
    /// Prints users keyed by their id
    Map,
    /// Looks a user up by username and password
    Login { username: String, password: String },
    /// Asks the user store to delete a user
    Delete { id: UserId },
}

impl ConfigChanges for CliConfig {
    fn apply(&self, config: &mut Config) {
        if let Some(level) = self.log_level {
            config.log.console.level = level.into();
        }
    }
}
