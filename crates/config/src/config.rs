//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the kanban application.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::input::InputConfig;
use crate::logging::{LogLevel, LoggingConfig};
use crate::persistence::{find_config_file, read_config_file, write_config_file};

/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "KANBAN_LOG";

/// Environment variable overriding the log file.
pub const ENV_LOG_FILE: &str = "KANBAN_LOG_FILE";

/// The main configuration struct for the kanban application.
///
/// # Examples
///
/// ```
/// use kanban_config::{Config, InputConfig};
///
/// let config = Config::default();
/// assert!(config.input.mouse);
///
/// let config = Config {
///     input: InputConfig { mouse: false, double_click_ms: 300 },
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Mouse and keyboard behavior.
    #[serde(default)]
    pub input: InputConfig,

    /// Log destination and verbosity.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations.
    ///
    /// Searches for configuration files in the following order:
    ///
    /// 1. Local: `./kanban.json5` or `./kanban.json`
    /// 2. User: `~/.config/kanban/config.json5` or `~/.config/kanban/config.json`
    ///
    /// If no configuration file is found, the defaults are used. Environment
    /// overrides (`KANBAN_LOG`, `KANBAN_LOG_FILE`) are applied last.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read or parsed, or if the resulting configuration is invalid.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use kanban_config::Config;
    ///
    /// # async fn example() -> kanban_config::Result<()> {
    /// let config = Config::load().await?;
    /// println!("Double-click window: {} ms", config.input.double_click_ms);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn load() -> Result<Self> {
        let mut config = match find_config_file() {
            Some(path) => read_config_file(&path)?,
            None => Self::default(),
        };
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a specific file.
    ///
    /// Environment overrides are not applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// configuration is invalid.
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use kanban_config::Config;
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.input.double_click_ms = 5;
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        self.input.validate()?;
        Ok(())
    }

    /// Applies overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `KANBAN_LOG` is not a recognized level.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides looked up by environment variable name.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the log level override is not a recognized level.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = level.parse::<LogLevel>()?;
        }
        if let Some(file) = lookup(ENV_LOG_FILE) {
            self.logging.file = Some(PathBuf::from(file));
        }
        Ok(())
    }
}
