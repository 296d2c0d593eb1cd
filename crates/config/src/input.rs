//! Input handling configuration.
//!
//! This module provides the [`InputConfig`] type which controls mouse
//! capture and the double-click window used to start editing a card.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default double-click window in milliseconds.
pub const DEFAULT_DOUBLE_CLICK_MS: u64 = 400;

/// Minimum allowed double-click window in milliseconds.
pub const MIN_DOUBLE_CLICK_MS: u64 = 100;

/// Maximum allowed double-click window in milliseconds.
pub const MAX_DOUBLE_CLICK_MS: u64 = 2000;

/// Configuration for keyboard and mouse input.
///
/// # Examples
///
/// ```
/// use kanban_config::InputConfig;
///
/// let config = InputConfig::default();
/// assert!(config.mouse);
/// assert_eq!(config.double_click_ms, 400);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Whether to capture the mouse.
    ///
    /// Without mouse capture, cards can only be moved with the keyboard.
    #[serde(default = "default_mouse")]
    pub mouse: bool,

    /// Maximum delay between two clicks for them to count as a double-click.
    #[serde(default = "default_double_click_ms")]
    pub double_click_ms: u64,
}

fn default_mouse() -> bool {
    true
}

fn default_double_click_ms() -> u64 {
    DEFAULT_DOUBLE_CLICK_MS
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            mouse: true,
            double_click_ms: DEFAULT_DOUBLE_CLICK_MS,
        }
    }
}

impl InputConfig {
    /// Returns the double-click window as a [`Duration`].
    #[must_use]
    pub fn double_click_window(&self) -> Duration {
        Duration::from_millis(self.double_click_ms)
    }

    /// Validates the input configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the double-click window is outside the allowed
    /// range.
    pub fn validate(&self) -> crate::Result<()> {
        if !(MIN_DOUBLE_CLICK_MS..=MAX_DOUBLE_CLICK_MS).contains(&self.double_click_ms) {
            return Err(crate::ConfigError::InvalidDoubleClick {
                reason: format!(
                    "{} ms is outside the allowed range of {}-{} ms",
                    self.double_click_ms, MIN_DOUBLE_CLICK_MS, MAX_DOUBLE_CLICK_MS
                ),
            });
        }
        Ok(())
    }
}
