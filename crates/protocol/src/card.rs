//! Card types for the Kanban board.
//!
//! This module defines the card identifier and the card structure itself.
//! Cards are deliberately small: an immutable identifier and a user-editable
//! title.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Title given to every card created through [`Command::AddCard`].
///
/// [`Command::AddCard`]: crate::Command::AddCard
pub const DEFAULT_CARD_TITLE: &str = "New Card";

/// Unique identifier for a card.
///
/// Identifiers are opaque strings. Seed cards use short numeric ids
/// (`"1"`, `"2"`, ...); cards created at runtime use UUID v4 strings.
///
/// # Examples
///
/// ```
/// use kanban_protocol::CardId;
///
/// let id = CardId::new("42");
/// assert_eq!(id.as_str(), "42");
/// assert_ne!(CardId::generate(), CardId::generate());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Wraps an existing identifier string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CardId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A card on the Kanban board.
///
/// # Examples
///
/// ```
/// use kanban_protocol::{Card, DEFAULT_CARD_TITLE};
///
/// let card = Card::placeholder();
/// assert_eq!(card.title, DEFAULT_CARD_TITLE);
///
/// let card = Card::with_id("7", "Organize project repository");
/// assert_eq!(card.id.as_str(), "7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier for this card. Never changes after creation.
    pub id: CardId,
    /// Short summary shown on the card.
    pub title: String,
}

impl Card {
    /// Creates a card with a freshly generated identifier.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: CardId::generate(),
            title: title.into(),
        }
    }

    /// Creates a card with a specific identifier.
    ///
    /// Useful for seed data and tests.
    #[must_use]
    pub fn with_id(id: impl Into<CardId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }

    /// Creates a card titled [`DEFAULT_CARD_TITLE`] with a fresh identifier.
    #[must_use]
    pub fn placeholder() -> Self {
        Self::new(DEFAULT_CARD_TITLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_distinct() {
        let ids: std::collections::HashSet<_> = (0..100).map(|_| CardId::generate()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn card_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&CardId::new("3")).expect("serialize");
        assert_eq!(json, r#""3""#);
    }

    #[test]
    fn placeholder_uses_default_title() {
        let card = Card::placeholder();
        assert_eq!(card.title, "New Card");
        assert!(!card.id.as_str().is_empty());
    }

    #[test]
    fn card_id_display_matches_inner() {
        assert_eq!(CardId::from("abc").to_string(), "abc");
    }
}
