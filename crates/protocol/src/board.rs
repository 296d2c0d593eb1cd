//! Kanban board types and the board reducer.
//!
//! This module defines the fixed column set, the column structure and the
//! [`Board`] that owns every card. All mutations go through
//! [`Board::reduce`], which derives the next board value from the current
//! one without touching it.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::card::{Card, CardId};
use crate::command::Command;
use crate::error::{ProtocolError, Result};

/// Identifier of one of the three fixed board columns.
///
/// # Examples
///
/// ```
/// use kanban_protocol::ColumnId;
///
/// let column: ColumnId = "in-progress".parse().unwrap();
/// assert_eq!(column, ColumnId::InProgress);
/// assert_eq!(column.display_name(), "In Progress");
/// assert!("backlog".parse::<ColumnId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnId {
    /// Work not started yet.
    #[default]
    Todo,
    /// Work underway.
    InProgress,
    /// Finished work.
    Done,
}

impl ColumnId {
    /// Number of columns on a board.
    pub const COUNT: usize = 3;

    /// Returns all column ids in board order.
    #[must_use]
    pub const fn all() -> [Self; Self::COUNT] {
        [Self::Todo, Self::InProgress, Self::Done]
    }

    /// Returns the wire identifier (`"todo"`, `"in-progress"`, `"done"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }

    /// Returns the label shown in the column header.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Todo => "Todo",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    /// Returns the position of this column on the board (0-2).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Todo => 0,
            Self::InProgress => 1,
            Self::Done => 2,
        }
    }

    /// Creates a `ColumnId` from its board position.
    ///
    /// Returns `None` if the index is out of range (>= 3).
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Todo),
            1 => Some(Self::InProgress),
            2 => Some(Self::Done),
            _ => None,
        }
    }

    /// Returns the column to the left, if any.
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self.index().checked_sub(1) {
            Some(idx) => Self::from_index(idx),
            None => None,
        }
    }

    /// Returns the column to the right, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// Returns `true` if cards in this column offer a delete control.
    ///
    /// Finished cards are kept: the "done" column has no delete control.
    ///
    /// # Examples
    ///
    /// ```
    /// use kanban_protocol::ColumnId;
    ///
    /// assert!(ColumnId::Todo.allows_delete());
    /// assert!(!ColumnId::Done.allows_delete());
    /// ```
    #[must_use]
    pub const fn allows_delete(self) -> bool {
        !matches!(self, Self::Done)
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnId {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self> {
        Self::all()
            .into_iter()
            .find(|column| column.as_str() == s)
            .ok_or_else(|| ProtocolError::UnknownColumn(s.to_owned()))
    }
}

/// A single column on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Which column this is.
    pub id: ColumnId,
    /// Label shown in the header.
    pub title: String,
    /// Cards in insertion order.
    pub cards: Vec<Card>,
}

impl Column {
    /// Creates an empty column titled with the id's display name.
    #[must_use]
    pub fn new(id: ColumnId) -> Self {
        Self {
            id,
            title: id.display_name().to_owned(),
            cards: Vec::new(),
        }
    }

    /// Creates a column holding the given cards.
    #[must_use]
    pub fn with_cards(id: ColumnId, cards: Vec<Card>) -> Self {
        Self {
            cards,
            ..Self::new(id)
        }
    }

    /// Returns the number of cards in this column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns `true` if the column has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the position of a card in this column, if present.
    #[must_use]
    pub fn position(&self, id: &CardId) -> Option<usize> {
        self.cards.iter().position(|card| &card.id == id)
    }

    /// Returns a card by id, if present.
    #[must_use]
    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|card| &card.id == id)
    }
}

/// A Kanban board with three fixed columns.
///
/// The board is a value: [`Board::reduce`] never mutates it and returns the
/// next board instead, and [`Board::dispatch`] swaps the whole value in one
/// assignment. A move is therefore never observable half-done.
///
/// # Examples
///
/// ```
/// use kanban_protocol::{Board, ColumnId};
///
/// let mut board = Board::new();
/// let id = board.add_card(ColumnId::Todo);
///
/// assert!(board.move_card(&id, ColumnId::Todo, ColumnId::Done));
/// assert_eq!(board.locate_card(&id), Some(ColumnId::Done));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// The three columns, indexed by [`ColumnId::index`].
    pub columns: [Column; ColumnId::COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates a board with three empty columns.
    #[must_use]
    pub fn new() -> Self {
        Self {
            columns: ColumnId::all().map(Column::new),
        }
    }

    /// Returns the column with the given id.
    #[must_use]
    pub fn column(&self, id: ColumnId) -> &Column {
        &self.columns[id.index()]
    }

    fn column_mut(&mut self, id: ColumnId) -> &mut Column {
        &mut self.columns[id.index()]
    }

    /// Finds a card anywhere on the board.
    #[must_use]
    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.columns.iter().find_map(|column| column.card(id))
    }

    /// Returns the column currently holding a card.
    #[must_use]
    pub fn locate_card(&self, id: &CardId) -> Option<ColumnId> {
        self.columns
            .iter()
            .find(|column| column.position(id).is_some())
            .map(|column| column.id)
    }

    /// Returns `true` if any column holds a card with this id.
    #[must_use]
    pub fn contains_card(&self, id: &CardId) -> bool {
        self.locate_card(id).is_some()
    }

    /// Returns the total number of cards across all columns.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    /// Computes the board that results from applying `command`.
    ///
    /// Returns `None` when the command changes nothing:
    ///
    /// - deleting, editing or moving a card that is not in the named column
    /// - editing to a title that is empty after trimming, or unchanged
    /// - moving a card to the column it is already in
    #[must_use]
    pub fn reduce(&self, command: &Command) -> Option<Self> {
        match command {
            Command::AddCard { column } => Some(self.with_card_appended(*column, self.fresh_card())),
            Command::DeleteCard { column, card } => {
                let position = self.column(*column).position(card)?;
                let mut next = self.clone();
                next.column_mut(*column).cards.remove(position);
                Some(next)
            }
            Command::EditCard {
                column,
                card,
                title,
            } => {
                let title = title.trim();
                if title.is_empty() {
                    return None;
                }
                let position = self.column(*column).position(card)?;
                if self.column(*column).cards[position].title == title {
                    return None;
                }
                let mut next = self.clone();
                next.column_mut(*column).cards[position].title = title.to_owned();
                Some(next)
            }
            Command::MoveCard { card, from, to } => {
                if from == to {
                    return None;
                }
                let position = self.column(*from).position(card)?;
                let mut next = self.clone();
                let moved = next.column_mut(*from).cards.remove(position);
                next.column_mut(*to).cards.push(moved);
                Some(next)
            }
        }
    }

    /// Applies a command, replacing the board with the reduced value.
    ///
    /// Returns `true` if the board changed, `false` if the command was a
    /// no-op.
    #[instrument(level = "debug", skip_all, fields(command = command.name()))]
    pub fn dispatch(&mut self, command: Command) -> bool {
        match self.reduce(&command) {
            Some(next) => {
                *self = next;
                info!(card = ?command.card(), "applied board command");
                true
            }
            None => {
                debug!(card = ?command.card(), "ignored board command");
                false
            }
        }
    }

    /// Appends a placeholder card to a column and returns its id.
    pub fn add_card(&mut self, column: ColumnId) -> CardId {
        let card = self.fresh_card();
        let id = card.id.clone();
        *self = self.with_card_appended(column, card);
        info!(command = "add_card", card = %id, "applied board command");
        id
    }

    /// Removes a card from a column. See [`Command::DeleteCard`].
    pub fn delete_card(&mut self, column: ColumnId, card: &CardId) -> bool {
        self.dispatch(Command::DeleteCard {
            column,
            card: card.clone(),
        })
    }

    /// Renames a card. See [`Command::EditCard`].
    pub fn edit_card(&mut self, column: ColumnId, card: &CardId, title: impl Into<String>) -> bool {
        self.dispatch(Command::EditCard {
            column,
            card: card.clone(),
            title: title.into(),
        })
    }

    /// Moves a card between columns. See [`Command::MoveCard`].
    pub fn move_card(&mut self, card: &CardId, from: ColumnId, to: ColumnId) -> bool {
        self.dispatch(Command::MoveCard {
            card: card.clone(),
            from,
            to,
        })
    }

    /// Verifies the structural invariants of the board.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::MisplacedColumn`] if a column sits at the
    /// wrong index, or [`ProtocolError::DuplicateCard`] if a card id appears
    /// more than once.
    pub fn check_invariants(&self) -> Result<()> {
        for (index, column) in self.columns.iter().enumerate() {
            if column.id.index() != index {
                return Err(ProtocolError::MisplacedColumn {
                    column: column.id,
                    index,
                });
            }
        }

        let mut seen = HashSet::with_capacity(self.total_cards());
        for card in self.columns.iter().flat_map(|column| &column.cards) {
            if !seen.insert(&card.id) {
                return Err(ProtocolError::DuplicateCard(card.id.clone()));
            }
        }
        Ok(())
    }

    /// Creates a placeholder card whose id is not already on the board.
    fn fresh_card(&self) -> Card {
        loop {
            let card = Card::placeholder();
            if !self.contains_card(&card.id) {
                return card;
            }
        }
    }

    fn with_card_appended(&self, column: ColumnId, card: Card) -> Self {
        let mut next = self.clone();
        next.column_mut(column).cards.push(card);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_board() -> Board {
        Board {
            columns: [
                Column::with_cards(
                    ColumnId::Todo,
                    vec![Card::with_id("a", "Alpha"), Card::with_id("b", "Beta")],
                ),
                Column::with_cards(ColumnId::InProgress, vec![Card::with_id("c", "Gamma")]),
                Column::new(ColumnId::Done),
            ],
        }
    }

    #[test]
    fn column_id_index_roundtrip() {
        for id in ColumnId::all() {
            assert_eq!(ColumnId::from_index(id.index()), Some(id));
        }
        assert_eq!(ColumnId::from_index(3), None);
    }

    #[test]
    fn column_id_neighbours() {
        assert_eq!(ColumnId::Todo.previous(), None);
        assert_eq!(ColumnId::Todo.next(), Some(ColumnId::InProgress));
        assert_eq!(ColumnId::Done.next(), None);
        assert_eq!(ColumnId::Done.previous(), Some(ColumnId::InProgress));
    }

    #[test]
    fn column_id_json_format() {
        let json = serde_json::to_string(&ColumnId::InProgress).expect("serialize");
        assert_eq!(json, r#""in-progress""#);
        let parsed: ColumnId = serde_json::from_str(r#""done""#).expect("deserialize");
        assert_eq!(parsed, ColumnId::Done);
    }

    #[test]
    fn column_id_parse_rejects_unknown() {
        let err = "doing".parse::<ColumnId>().unwrap_err();
        assert!(matches!(err, ProtocolError::UnknownColumn(ref s) if s == "doing"));
    }

    #[test]
    fn new_board_has_three_empty_titled_columns() {
        let board = Board::new();
        let titles: Vec<_> = board.columns.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["Todo", "In Progress", "Done"]);
        assert_eq!(board.total_cards(), 0);
        assert!(board.check_invariants().is_ok());
    }

    #[test]
    fn add_card_appends_placeholder() {
        let mut board = sample_board();
        assert!(board.dispatch(Command::AddCard {
            column: ColumnId::Todo
        }));

        let todo = board.column(ColumnId::Todo);
        assert_eq!(todo.len(), 3);
        assert_eq!(todo.cards[2].title, "New Card");
        assert_eq!(board.total_cards(), 4);
    }

    #[test]
    fn add_card_returns_id_of_new_card() {
        let mut board = sample_board();
        let id = board.add_card(ColumnId::Done);
        assert_eq!(board.locate_card(&id), Some(ColumnId::Done));
        assert_eq!(board.card(&id).map(|c| c.title.as_str()), Some("New Card"));
    }

    #[test]
    fn delete_card_removes_only_that_card() {
        let mut board = sample_board();
        assert!(board.delete_card(ColumnId::Todo, &CardId::new("a")));
        assert_eq!(board.column(ColumnId::Todo).cards[0].id.as_str(), "b");
        assert_eq!(board.total_cards(), 2);
    }

    #[test]
    fn delete_card_in_wrong_column_is_noop() {
        let mut board = sample_board();
        let before = board.clone();
        assert!(!board.delete_card(ColumnId::Done, &CardId::new("a")));
        assert_eq!(board, before);
    }

    #[test]
    fn edit_card_trims_title() {
        let mut board = sample_board();
        assert!(board.edit_card(ColumnId::Todo, &CardId::new("b"), "  Better beta  "));
        assert_eq!(
            board.card(&CardId::new("b")).map(|c| c.title.as_str()),
            Some("Better beta")
        );
    }

    #[test]
    fn edit_card_rejects_blank_title() {
        let mut board = sample_board();
        let before = board.clone();
        assert!(!board.edit_card(ColumnId::Todo, &CardId::new("a"), " \t "));
        assert_eq!(board, before);
    }

    #[test]
    fn edit_card_unknown_is_noop() {
        let mut board = sample_board();
        let before = board.clone();
        assert!(!board.edit_card(ColumnId::Todo, &CardId::new("zzz"), "Title"));
        assert_eq!(board, before);
    }

    #[test]
    fn move_card_appends_to_target() {
        let mut board = sample_board();
        board.add_card(ColumnId::Done);
        assert!(board.move_card(&CardId::new("a"), ColumnId::Todo, ColumnId::Done));

        let done = board.column(ColumnId::Done);
        assert_eq!(done.len(), 2);
        assert_eq!(done.cards[1].id.as_str(), "a");
        assert_eq!(board.column(ColumnId::Todo).len(), 1);
        assert!(board.check_invariants().is_ok());
    }

    #[test]
    fn move_card_same_column_is_noop() {
        let mut board = sample_board();
        let before = board.clone();
        assert!(!board.move_card(&CardId::new("a"), ColumnId::Todo, ColumnId::Todo));
        assert_eq!(board, before);
    }

    #[test]
    fn move_card_from_wrong_source_is_noop() {
        let mut board = sample_board();
        let before = board.clone();
        assert!(!board.move_card(&CardId::new("c"), ColumnId::Todo, ColumnId::Done));
        assert_eq!(board, before);
    }

    #[test]
    fn reduce_leaves_original_untouched() {
        let board = sample_board();
        let next = board
            .reduce(&Command::MoveCard {
                card: CardId::new("c"),
                from: ColumnId::InProgress,
                to: ColumnId::Todo,
            })
            .expect("move should apply");

        assert_eq!(board.column(ColumnId::InProgress).len(), 1);
        assert_eq!(next.column(ColumnId::InProgress).len(), 0);
        assert_eq!(next.column(ColumnId::Todo).len(), 3);
    }

    #[test]
    fn check_invariants_detects_duplicates() {
        let mut board = sample_board();
        board.columns[2].cards.push(Card::with_id("a", "Copy"));
        assert!(matches!(
            board.check_invariants(),
            Err(ProtocolError::DuplicateCard(ref id)) if id.as_str() == "a"
        ));
    }

    #[test]
    fn check_invariants_detects_misplaced_columns() {
        let mut board = sample_board();
        board.columns.swap(0, 2);
        assert!(matches!(
            board.check_invariants(),
            Err(ProtocolError::MisplacedColumn { .. })
        ));
    }

    #[test]
    fn board_serialization_roundtrip() {
        let board = sample_board();
        let json = serde_json::to_string(&board).expect("serialize");
        let parsed: Board = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(board, parsed);
    }
}
