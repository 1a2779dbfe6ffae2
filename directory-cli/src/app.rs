use crate::config::{CliConfig, Command, Config, LogOpts, TomlConfig};
use directory::{InMemoryUserDao, User, UserDirectory};

use clap::Parser;
use simplelog::{ColorChoice, CombinedLogger, SharedLogger, TermLogger, TerminalMode, WriteLogger};
use user_error::UserFacingError;

use std::fs::{read_to_string, File};
use std::io::ErrorKind;
use std::path::Path;
use std::str::FromStr;

pub struct App {}

impl App {
    pub fn run() -> Result<(), UserFacingError> {
        let mut config = Config::default();

        let cli_config = CliConfig::parse();

        let toml_config = if let Some(toml_path) = &cli_config.config_file {
            let toml_input = Self::fallible_config_read(toml_path)?;
            Some((toml_path.to_string(), toml_input))
        } else {
            Self::read_default_config(Path::new("."))
        };

        if let Some((toml_path, toml_input)) = toml_config {
            let toml_config = Self::decode_toml(&toml_path, &toml_input)?;
            config.merge(&toml_config);
        }

        config.merge(&cli_config);

        Self::init_logger(&config.log)?;

        let mut directory = config.build_directory();
        log::debug!("Loaded {} users", directory.len());
        for line in Self::execute(&cli_config.command, &mut directory)? {
            println!("{}", line);
        }
        Ok(())
    }

    fn execute(
        command: &Command,
        directory: &mut UserDirectory<InMemoryUserDao>,
    ) -> Result<Vec<String>, UserFacingError> {
        let lines = match command {
            Command::List => directory.get_all().iter().map(Self::describe).collect(),
            Command::Map => {
                let users = directory.get_all_converted_by_id();
                let mut ids: Vec<_> = users.keys().copied().collect();
                ids.sort_unstable();
                ids.iter()
                    .map(|id| format!("{} => {}", id, Self::describe(&users[id])))
                    .collect()
            }
            Command::Login { username, password } => {
                match directory.login(Some(username.as_str()), Some(password.as_str())) {
                    Ok(Some(user)) => vec![format!("logged in as {}", Self::describe(user))],
                    Ok(None) => vec!["invalid credentials".to_owned()],
                    Err(err) => {
                        return Err(UserFacingError::new("Login failed").reason(err.to_string()))
                    }
                }
            }
            Command::Delete { id } => match directory.delete(*id) {
                Ok(deleted) => vec![deleted.to_string()],
                Err(err) => {
                    return Err(UserFacingError::new(format!("Could not delete user {}", id))
                        .reason(err.to_string())
                        .help("Check the [store] section of the config file"))
                }
            },
        };
        Ok(lines)
    }

    // Passwords never leave the directory
    fn describe(user: &User) -> String {
        format!("{}\t{}", user.id, user.username)
    }

    fn init_logger(log_opts: &LogOpts) -> Result<(), UserFacingError> {
        let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
            log_opts.console.level,
            simplelog::Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        )];
        if let Some(file_log_opts) = &log_opts.file {
            let file = match File::create(&file_log_opts.file_path) {
                Ok(file) => file,
                Err(err) => {
                    let error = UserFacingError::new(format!(
                        "Could not open {} log file",
                        file_log_opts.file_path
                    ));
                    let error = match err.kind() {
                        ErrorKind::NotFound => error.reason("Parent directory does not exist"),
                        ErrorKind::PermissionDenied => {
                            error.reason("Insufficient permissions to create the file")
                        }
                        _ => error.reason("It is due to unexpected reasons"),
                    };
                    return Err(error.help(err.to_string()));
                }
            };
            loggers.push(WriteLogger::new(
                file_log_opts.level,
                simplelog::Config::default(),
                file,
            ));
        }
        CombinedLogger::init(loggers).map_err(|err| {
            UserFacingError::new("Unable to set up logging").reason(err.to_string())
        })
    }

    fn fallible_config_read(path: &str) -> Result<String, UserFacingError> {
        match read_to_string(path) {
            Ok(config) => Ok(config),
            Err(err) => {
                let error = UserFacingError::new(format!("Could not read {} config file", path));
                let error = match err.kind() {
                    ErrorKind::NotFound => error.reason("File not found"),
                    ErrorKind::PermissionDenied => {
                        error.reason("Insufficient permissions to open the file")
                    }
                    ErrorKind::InvalidData => error.reason("Config file is probably invalid UTF-8"),
                    _ => error.reason("It is due to unexpected reasons"),
                };
                Err(error.help(err.to_string()))
            }
        }
    }

    fn read_default_config(dir: &Path) -> Option<(String, String)> {
        static TOML_CONFIG_PATHS: &[&str] = &["directory.toml"];

        for path in TOML_CONFIG_PATHS {
            let path = dir.join(path);
            if let Ok(config) = read_to_string(&path) {
                return Some((path.to_string_lossy().to_string(), config));
            }
        }
        None
    }

    fn decode_toml(toml_path: &str, toml_input: &str) -> Result<TomlConfig, UserFacingError> {
        match TomlConfig::from_str(toml_input) {
            Ok(toml_config) => Ok(toml_config),
            Err(err) => {
                let error = UserFacingError::new(format!("Unable to decode {} file", toml_path))
                    .reason("Could not deserialize toml input");
                let error = match err.line_col() {
                    None => error,
                    Some((line, col)) => {
                        error.help(format!("The problem is on line {} column {}", line, col))
                    }
                };
                Err(error.help(err.to_string()))
            }
        }
    }
}
