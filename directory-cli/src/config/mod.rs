mod cli;
mod toml_config;
mod types;

pub use cli::{CliConfig, Command};
pub use toml_config::TomlConfig;
pub use types::*;
