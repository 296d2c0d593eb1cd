//! Logging configuration.
//!
//! The TUI owns the terminal, so logs are only written when a log file is
//! configured. The level maps onto a `tracing` filter directive.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Verbosity of the log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Everything, including per-event traces.
    Trace,
    /// Ignored commands and rejected drops.
    Debug,
    /// Applied board commands.
    #[default]
    Info,
    /// Unexpected but recoverable conditions.
    Warn,
    /// Failures only.
    Error,
}

impl LogLevel {
    /// Returns the level as a filter directive.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_owned())),
        }
    }
}

/// Where and how verbosely to log.
///
/// # Examples
///
/// ```
/// use kanban_config::{LogLevel, LoggingConfig};
///
/// let config = LoggingConfig::default();
/// assert_eq!(config.level, LogLevel::Info);
/// assert!(config.file.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level written to the log.
    #[serde(default)]
    pub level: LogLevel,

    /// Log file path. Logging is disabled when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}
