//! Board mutation commands.
//!
//! Views never mutate the board directly. They produce a [`Command`] which
//! is dispatched upward to [`Board::dispatch`](crate::Board::dispatch), the
//! single reducer that owns all card state.

use serde::{Deserialize, Serialize};

use crate::board::ColumnId;
use crate::card::CardId;

/// A request to change the board.
///
/// # Examples
///
/// ```
/// use kanban_protocol::{Board, ColumnId, Command};
///
/// let mut board = Board::new();
/// assert!(board.dispatch(Command::AddCard { column: ColumnId::Todo }));
/// assert_eq!(board.column(ColumnId::Todo).len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Append a new placeholder card to a column.
    AddCard {
        /// Column receiving the card.
        column: ColumnId,
    },
    /// Remove a card from a column.
    DeleteCard {
        /// Column holding the card.
        column: ColumnId,
        /// Card to remove.
        card: CardId,
    },
    /// Rename a card.
    EditCard {
        /// Column holding the card.
        column: ColumnId,
        /// Card to rename.
        card: CardId,
        /// The new title. Surrounding whitespace is ignored.
        title: String,
    },
    /// Relocate a card to the end of another column.
    MoveCard {
        /// Card to move.
        card: CardId,
        /// Column the card is expected to be in.
        from: ColumnId,
        /// Column the card should end up in.
        to: ColumnId,
    },
}

impl Command {
    /// Returns a short, stable name for the command, used in logs.
    ///
    /// # Examples
    ///
    /// ```
    /// use kanban_protocol::{ColumnId, Command};
    ///
    /// assert_eq!(Command::AddCard { column: ColumnId::Done }.name(), "add_card");
    /// ```
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddCard { .. } => "add_card",
            Self::DeleteCard { .. } => "delete_card",
            Self::EditCard { .. } => "edit_card",
            Self::MoveCard { .. } => "move_card",
        }
    }

    /// Returns the card this command targets, if it targets an existing one.
    #[must_use]
    pub fn card(&self) -> Option<&CardId> {
        match self {
            Self::AddCard { .. } => None,
            Self::DeleteCard { card, .. }
            | Self::EditCard { card, .. }
            | Self::MoveCard { card, .. } => Some(card),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_names() {
        let id = CardId::new("1");
        assert_eq!(
            Command::DeleteCard {
                column: ColumnId::Todo,
                card: id.clone()
            }
            .name(),
            "delete_card"
        );
        assert_eq!(
            Command::EditCard {
                column: ColumnId::Todo,
                card: id.clone(),
                title: "x".into()
            }
            .name(),
            "edit_card"
        );
        assert_eq!(
            Command::MoveCard {
                card: id,
                from: ColumnId::Todo,
                to: ColumnId::Done
            }
            .name(),
            "move_card"
        );
    }

    #[test]
    fn add_card_targets_no_existing_card() {
        assert!(Command::AddCard { column: ColumnId::Todo }.card().is_none());
    }

    #[test]
    fn move_command_json_format() {
        let cmd = Command::MoveCard {
            card: CardId::new("4"),
            from: ColumnId::InProgress,
            to: ColumnId::Done,
        };
        let json = serde_json::to_string(&cmd).expect("serialize");
        assert_eq!(
            json,
            r#"{"type":"move_card","card":"4","from":"in-progress","to":"done"}"#
        );
    }
}
