//! Seed data loaded at startup.
//!
//! # Examples
//!
//! ```
//! use kanban_protocol::seed::seed_board;
//!
//! let board = seed_board();
//! assert_eq!(board.total_cards(), 8);
//! ```

use crate::board::{Board, Column, ColumnId};
use crate::card::Card;

/// Builds the board every session starts from.
///
/// - **Todo**: cards 1-3
/// - **In Progress**: cards 4-6
/// - **Done**: cards 7-8
#[must_use]
pub fn seed_board() -> Board {
    Board {
        columns: [
            Column::with_cards(
                ColumnId::Todo,
                vec![
                    Card::with_id("1", "Create initial project plan"),
                    Card::with_id("2", "Design landing page"),
                    Card::with_id("3", "Review codebase structure"),
                ],
            ),
            Column::with_cards(
                ColumnId::InProgress,
                vec![
                    Card::with_id("4", "Implement authentication"),
                    Card::with_id("5", "Set up database schema"),
                    Card::with_id("6", "Fix navbar bugs"),
                ],
            ),
            Column::with_cards(
                ColumnId::Done,
                vec![
                    Card::with_id("7", "Organize project repository"),
                    Card::with_id("8", "Write API documentation"),
                ],
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_distribution() {
        let board = seed_board();
        assert_eq!(board.column(ColumnId::Todo).len(), 3);
        assert_eq!(board.column(ColumnId::InProgress).len(), 3);
        assert_eq!(board.column(ColumnId::Done).len(), 2);
    }

    #[test]
    fn seed_ids_are_one_through_eight_in_order() {
        let board = seed_board();
        let ids: Vec<_> = board
            .columns
            .iter()
            .flat_map(|column| column.cards.iter().map(|card| card.id.as_str()))
            .collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6", "7", "8"]);
    }

    #[test]
    fn seed_satisfies_invariants() {
        assert!(seed_board().check_invariants().is_ok());
    }
}
