//! Drag-and-drop payloads.
//!
//! A drag carries a [`DragPayload`] serialized as JSON inside a
//! [`DataTransfer`], keyed by [`DRAG_FORMAT`]. The dragged card writes it on
//! drag start; the column under the pointer reads it back on drop. The drop
//! side never trusts the data: [`DragPayload::decode`] validates every field
//! and a payload that fails validation is simply not acted upon.
//!
//! # Examples
//!
//! ```
//! use kanban_protocol::{CardId, ColumnId, Command, DataTransfer, DragPayload};
//!
//! let mut transfer = DataTransfer::new();
//! DragPayload::new("4", ColumnId::InProgress)
//!     .write_to(&mut transfer)
//!     .unwrap();
//!
//! let payload = DragPayload::read_from(&transfer).unwrap();
//! assert_eq!(
//!     payload.into_move(ColumnId::Done),
//!     Command::MoveCard {
//!         card: CardId::new("4"),
//!         from: ColumnId::InProgress,
//!         to: ColumnId::Done,
//!     }
//! );
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::board::ColumnId;
use crate::card::CardId;
use crate::command::Command;
use crate::error::{ProtocolError, Result};

/// The transfer format a card drag is published under.
pub const DRAG_FORMAT: &str = "application/json";

/// The operation a drag source permits or a drop target accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropEffect {
    /// Nothing may happen.
    #[default]
    None,
    /// The dragged item is relocated.
    Move,
}

/// Data attached to an in-flight drag gesture.
///
/// Holds one string per format, plus the effect negotiation between the
/// drag source (`effect_allowed`) and the drop target (`drop_effect`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTransfer {
    data: BTreeMap<String, String>,
    /// Effects the drag source allows.
    pub effect_allowed: DropEffect,
    /// Effect the current drop target would apply.
    pub drop_effect: DropEffect,
}

impl DataTransfer {
    /// Creates an empty transfer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `data` under `format`, replacing any previous value.
    pub fn set_data(&mut self, format: impl Into<String>, data: impl Into<String>) {
        self.data.insert(format.into(), data.into());
    }

    /// Returns the data stored under `format`.
    #[must_use]
    pub fn get_data(&self, format: &str) -> Option<&str> {
        self.data.get(format).map(String::as_str)
    }

    /// Returns `true` if data is stored under `format`.
    #[must_use]
    pub fn has_format(&self, format: &str) -> bool {
        self.data.contains_key(format)
    }
}

/// Identity of a dragged card: which card, from which column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DragPayload {
    /// The dragged card.
    pub card_id: CardId,
    /// The column the drag started in.
    pub column_id: ColumnId,
}

/// Wire shape accepted by [`DragPayload::decode`] before validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPayload {
    card_id: Option<String>,
    column_id: Option<String>,
}

impl DragPayload {
    /// Creates a payload for a card in `column`.
    #[must_use]
    pub fn new(card_id: impl Into<CardId>, column_id: ColumnId) -> Self {
        Self {
            card_id: card_id.into(),
            column_id,
        }
    }

    /// Serializes the payload as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::SerializationFailed`] if serialization fails.
    pub fn encode(&self) -> Result<String> {
        serde_json::to_string(self).map_err(ProtocolError::SerializationFailed)
    }

    /// Parses and validates a JSON payload.
    ///
    /// # Errors
    ///
    /// - [`ProtocolError::DeserializationFailed`] if the input is not a JSON
    ///   object with string fields
    /// - [`ProtocolError::MissingPayloadField`] if `cardId` or `columnId` is
    ///   absent or empty
    /// - [`ProtocolError::UnknownColumn`] if `columnId` names no column
    pub fn decode(json: &str) -> Result<Self> {
        let raw: RawPayload =
            serde_json::from_str(json).map_err(ProtocolError::DeserializationFailed)?;

        let card_id = raw
            .card_id
            .filter(|id| !id.is_empty())
            .ok_or(ProtocolError::MissingPayloadField("cardId"))?;
        let column_id = raw
            .column_id
            .filter(|id| !id.is_empty())
            .ok_or(ProtocolError::MissingPayloadField("columnId"))?;

        Ok(Self {
            card_id: CardId::new(card_id),
            column_id: column_id.parse()?,
        })
    }

    /// Publishes the payload on a transfer and allows the move effect.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be serialized.
    pub fn write_to(&self, transfer: &mut DataTransfer) -> Result<()> {
        transfer.set_data(DRAG_FORMAT, self.encode()?);
        transfer.effect_allowed = DropEffect::Move;
        Ok(())
    }

    /// Reads and validates the payload published on a transfer.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::MissingTransferData`] if nothing was
    /// published under [`DRAG_FORMAT`], or any error from [`Self::decode`].
    pub fn read_from(transfer: &DataTransfer) -> Result<Self> {
        let data = transfer
            .get_data(DRAG_FORMAT)
            .ok_or(ProtocolError::MissingTransferData(DRAG_FORMAT))?;
        Self::decode(data)
    }

    /// Turns the payload into a move request towards `to`.
    #[must_use]
    pub fn into_move(self, to: ColumnId) -> Command {
        Command::MoveCard {
            card: self.card_id,
            from: self.column_id,
            to,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_wire_format() {
        let payload = DragPayload::new("7", ColumnId::Done);
        insta::assert_snapshot!(payload.encode().unwrap(), @r#"{"cardId":"7","columnId":"done"}"#);
    }

    #[test]
    fn decode_accepts_extra_fields() {
        let payload =
            DragPayload::decode(r#"{"cardId":"1","columnId":"todo","extra":true}"#).unwrap();
        assert_eq!(payload, DragPayload::new("1", ColumnId::Todo));
    }

    #[test]
    fn decode_rejects_malformed_json() {
        assert!(matches!(
            DragPayload::decode("not json"),
            Err(ProtocolError::DeserializationFailed(_))
        ));
        assert!(matches!(
            DragPayload::decode(r#"{"cardId":7,"columnId":"todo"}"#),
            Err(ProtocolError::DeserializationFailed(_))
        ));
    }

    #[test]
    fn decode_rejects_missing_fields() {
        assert!(matches!(
            DragPayload::decode(r#"{"columnId":"todo"}"#),
            Err(ProtocolError::MissingPayloadField("cardId"))
        ));
        assert!(matches!(
            DragPayload::decode(r#"{"cardId":"1","columnId":""}"#),
            Err(ProtocolError::MissingPayloadField("columnId"))
        ));
    }

    #[test]
    fn decode_rejects_unknown_column() {
        assert!(matches!(
            DragPayload::decode(r#"{"cardId":"1","columnId":"archive"}"#),
            Err(ProtocolError::UnknownColumn(_))
        ));
    }

    #[test]
    fn write_to_allows_move() {
        let mut transfer = DataTransfer::new();
        DragPayload::new("2", ColumnId::Todo)
            .write_to(&mut transfer)
            .unwrap();

        assert!(transfer.has_format(DRAG_FORMAT));
        assert_eq!(transfer.effect_allowed, DropEffect::Move);
        assert_eq!(transfer.drop_effect, DropEffect::None);
    }

    #[test]
    fn read_from_empty_transfer_fails() {
        let transfer = DataTransfer::new();
        assert!(matches!(
            DragPayload::read_from(&transfer),
            Err(ProtocolError::MissingTransferData(DRAG_FORMAT))
        ));
    }
}
