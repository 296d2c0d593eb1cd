//! Configuration management for the kanban application.
//!
//! This crate handles loading, validating, and persisting configuration
//! from multiple sources (files, environment variables, defaults).
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`input`]: Mouse capture and double-click timing
//! - [`logging`]: Log level and log file
//! - [`persistence`]: Config file reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! Configuration is loaded from multiple sources with the following priority
//! (highest to lowest):
//!
//! 1. Environment variables (`KANBAN_LOG`, `KANBAN_LOG_FILE`)
//! 2. Local config (`./kanban.json5` or `./kanban.json`)
//! 3. User config (`~/.config/kanban/config.json5` or `~/.config/kanban/config.json`)
//! 4. Built-in defaults
//!
//! # File Format
//!
//! ```json5
//! {
//!   input: { mouse: true, double_click_ms: 400 },
//!   logging: { level: "debug", file: "/tmp/kanban.log" },
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use kanban_config::Config;
//!
//! # async fn example() -> kanban_config::Result<()> {
//! let config = Config::load().await?;
//! if let Some(file) = &config.logging.file {
//!     println!("Logging at {} to {}", config.logging.level, file.display());
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod persistence;

// Re-export primary types at crate root for convenience
pub use config::Config;
pub use error::{ConfigError, Result};
pub use input::InputConfig;
pub use logging::{LogLevel, LoggingConfig};
