use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CliError {
    #[error("Invalid command line flag")]
    InvalidCommandLineFlag,
    #[error("Invalid command line flag value")]
    InvalidCommandLineFlagValue,
    #[error("--user requires --password")]
    UserWithoutPassword,
}

/// Where and how to reach the Redis node to analyse.
#[derive(Debug, Clone, PartialEq)]
pub struct AdvisorConfig {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub db: u32,
    pub timeout: Duration,
    pub section: Option<String>,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        AdvisorConfig {
            host: "127.0.0.1".to_string(),
            port: 6379,
            username: None,
            password: None,
            db: 0,
            timeout: Duration::from_millis(5000),
            section: None,
        }
    }
}

impl AdvisorConfig {
    /// Builds the configuration from the process arguments. The first item is
    /// the program name and is skipped.
    ///
    /// # Arguments
    ///
    /// * `command_line_args` - Flags given as `--name value` pairs, e.g. `--port 6380`
    ///
    /// # Returns
    ///
    /// * `Ok(AdvisorConfig)` - Defaults overridden by the given flags
    /// * `Err(CliError::InvalidCommandLineFlag)` - If a flag is not recognised
    /// * `Err(CliError::InvalidCommandLineFlagValue)` - If a value is missing or out of range
    /// * `Err(CliError::UserWithoutPassword)` - If `--user` is given without `--password`
    pub fn new<I: IntoIterator<Item = String>>(command_line_args: I) -> Result<Self, CliError> {
        let mut iter = command_line_args.into_iter().skip(1);
        let mut config = AdvisorConfig::default();

        while let Some(arg) = iter.next() {
            let Some(value) = iter.next() else {
                return Err(match arg.as_str() {
                    "--host" | "--port" | "--user" | "--password" | "--db" | "--timeout"
                    | "--section" => CliError::InvalidCommandLineFlagValue,
                    _ => CliError::InvalidCommandLineFlag,
                });
            };

            match arg.as_str() {
                "--host" => {
                    if value.trim().is_empty() {
                        return Err(CliError::InvalidCommandLineFlagValue);
                    }

                    config.host = value;
                }
                "--port" => {
                    let port_number = value
                        .parse::<u16>()
                        .map_err(|_| CliError::InvalidCommandLineFlagValue)?;

                    if port_number < 1 {
                        return Err(CliError::InvalidCommandLineFlagValue);
                    }

                    config.port = port_number;
                }
                "--user" => config.username = Some(value),
                "--password" => config.password = Some(value),
                "--db" => {
                    config.db = value
                        .parse::<u32>()
                        .map_err(|_| CliError::InvalidCommandLineFlagValue)?;
                }
                "--timeout" => {
                    let milliseconds = value
                        .parse::<u64>()
                        .map_err(|_| CliError::InvalidCommandLineFlagValue)?;

                    if milliseconds == 0 {
                        return Err(CliError::InvalidCommandLineFlagValue);
                    }

                    config.timeout = Duration::from_millis(milliseconds);
                }
                "--section" => config.section = Some(value.to_lowercase()),
                _ => return Err(CliError::InvalidCommandLineFlag),
            }
        }

        if config.username.is_some() && config.password.is_none() {
            return Err(CliError::UserWithoutPassword);
        }

        Ok(config)
    }

    /// The `host:port` pair to connect to.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
