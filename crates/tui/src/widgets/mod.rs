//! Widget components for the kanban TUI.
//!
//! This module provides reusable rendering functions for the board UI,
//! organized into focused submodules for each visual component.
//!
//! # Overview
//!
//! The widget system follows a functional rendering approach where each widget
//! is a pure function that renders state to a buffer. Geometry comes from
//! [`BoardLayout`](crate::layout::BoardLayout), so the widgets never decide
//! where things go on their own.
//!
//! # Modules
//!
//! - [`board`]: Renders the three columns side by side
//! - [`column`]: Renders one column with its header, cards and add button
//! - [`card`]: Renders a card, its delete button and the title editor
//! - [`status_bar`]: Renders the footer with keybinding hints
//! - [`help`]: Renders the keybinding overlay
//!
//! # Color Coding
//!
//! Each card carries a color bar keyed to its column:
//!
//! | Column | Color |
//! |--------|-------|
//! | `Todo` | Yellow (`Color::Yellow`) |
//! | `InProgress` | Blue (`Color::Blue`) |
//! | `Done` | Green (`Color::Green`) |

pub mod board;
pub mod card;
pub mod column;
pub mod help;
pub mod status_bar;

// Re-export primary rendering functions for convenience
pub use board::render_board;
pub use card::{DELETE_SYMBOL, column_color, render_card};
pub use column::{ADD_CARD_LABEL, DROP_HINT, HEADER_ADD_LABEL, render_column};
pub use help::render_help_overlay;
pub use status_bar::render_status_bar;

#[cfg(test)]
mod tests;
