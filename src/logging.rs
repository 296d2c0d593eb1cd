//! Tracing subscriber setup.
//!
//! The terminal belongs to the board while the app runs, so log output
//! only ever goes to a file. Without a configured file nothing is logged.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::Context;
use kanban_config::LoggingConfig;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber described by `config`.
///
/// Returns `false` when logging is disabled.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a global
/// subscriber is already installed.
pub fn init(config: &LoggingConfig) -> anyhow::Result<bool> {
    let Some(path) = &config.file else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    // Third-party crates stay at warn; ours log at the configured level
    let level = config.level;
    let filter = EnvFilter::new(format!(
        "warn,kanban={level},kanban_config={level},kanban_protocol={level},kanban_tui={level}"
    ));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false), // No color codes in file
        )
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(true)
}
