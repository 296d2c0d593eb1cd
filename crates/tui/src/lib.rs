//! Terminal UI for the kanban board.
//!
//! This crate provides a Ratatui-based terminal interface for viewing and
//! editing a three-column Kanban board with the keyboard or the mouse.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`app`]: Main application struct and run loop
//! - [`state`]: Application state: the board, its views, selection and drag
//! - [`card_view`]: Per-card interaction state (idle, editing, dragging)
//! - [`column_view`]: Per-column drop target state
//! - [`gesture`]: Mouse gesture recognition
//! - [`layout`]: Shared geometry for rendering and hit-testing
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Event handling and key mappings
//! - [`widgets`]: Rendering functions
//!
//! # Example
//!
//! ```no_run
//! use kanban_protocol::seed::seed_board;
//! use kanban_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal(true)?;
//!
//!     let mut app = App::new(seed_board());
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod card_view;
pub mod column_view;
pub mod event;
pub mod gesture;
pub mod layout;
pub mod state;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::App;
pub use card_view::{CardMode, CardView};
pub use column_view::ColumnView;
pub use state::AppState;
