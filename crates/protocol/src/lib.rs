//! Shared protocol types for the kanban application.
//!
//! This crate defines the core types used across all kanban components:
//! cards, the three-column board and its reducer, drag payloads, TUI
//! messages, and error types.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`card`]: Card identifiers and the `Card` struct
//! - [`board`]: Column ids, columns, and the `Board` reducer
//! - [`command`]: Board mutation commands
//! - [`drag`]: Drag payloads and the `DataTransfer` they travel in
//! - [`message`]: TUI event messages
//! - [`seed`]: The startup board
//! - [`error`]: Error types for protocol operations
//!
//! # Examples
//!
//! ```
//! use kanban_protocol::{CardId, ColumnId, Command, seed::seed_board};
//!
//! let mut board = seed_board();
//!
//! // Finish a card
//! let moved = board.dispatch(Command::MoveCard {
//!     card: CardId::new("4"),
//!     from: ColumnId::InProgress,
//!     to: ColumnId::Done,
//! });
//! assert!(moved);
//! assert_eq!(board.column(ColumnId::Done).len(), 3);
//! ```

pub mod board;
pub mod card;
pub mod command;
pub mod drag;
pub mod error;
pub mod message;
pub mod seed;

// Re-export primary types at crate root for convenience
pub use board::{Board, Column, ColumnId};
pub use card::{Card, CardId, DEFAULT_CARD_TITLE};
pub use command::Command;
pub use drag::{DRAG_FORMAT, DataTransfer, DragPayload, DropEffect};
pub use error::{ProtocolError, Result};
pub use message::Message;
