//! Error types for the kanban-protocol crate.
//!
//! None of these errors reach the user: a rejected drag payload or a broken
//! invariant is logged and the triggering action is ignored.

use thiserror::Error;

use crate::board::ColumnId;
use crate::card::CardId;

/// Errors that can occur during protocol operations.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Failed to serialize a protocol type to JSON.
    #[error("failed to serialize to JSON: {0}")]
    SerializationFailed(#[source] serde_json::Error),

    /// Failed to deserialize a protocol type from JSON.
    #[error("failed to deserialize from JSON: {0}")]
    DeserializationFailed(#[source] serde_json::Error),

    /// The drag transfer holds no data in the expected format.
    #[error("drag transfer has no {0} data")]
    MissingTransferData(&'static str),

    /// A required drag payload field was absent or empty.
    #[error("drag payload is missing `{0}`")]
    MissingPayloadField(&'static str),

    /// A column identifier did not name one of the board columns.
    #[error("unknown column: {0:?}")]
    UnknownColumn(String),

    /// The same card id appears more than once on the board.
    #[error("duplicate card id: {0}")]
    DuplicateCard(CardId),

    /// A column is stored at an index that does not match its id.
    #[error("column {column} stored at index {index}")]
    MisplacedColumn {
        /// The misplaced column.
        column: ColumnId,
        /// Where it was found.
        index: usize,
    },
}

/// A specialized Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = ProtocolError::MissingPayloadField("cardId");
        assert_eq!(err.to_string(), "drag payload is missing `cardId`");

        let err = ProtocolError::UnknownColumn("doing".into());
        assert_eq!(err.to_string(), r#"unknown column: "doing""#);

        let err = ProtocolError::DuplicateCard(CardId::new("9"));
        assert!(err.to_string().contains("duplicate card id: 9"));
    }
}
