//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input handler and the application. Messages describe what the
//! user did; the application decides which board [`Command`](crate::Command),
//! if any, results from it.

use serde::{Deserialize, Serialize};

/// Messages that represent user actions in the TUI.
///
/// # Examples
///
/// ```
/// use kanban_protocol::Message;
///
/// let msg = Message::NavigateRight;
/// assert!(msg.is_navigation());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Move selection to the left column.
    NavigateLeft,
    /// Move selection to the right column.
    NavigateRight,
    /// Move selection up within the current column.
    NavigateUp,
    /// Move selection down within the current column.
    NavigateDown,
    /// Escape: cancel a drag or clear the selection (contextual).
    Escape,
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // --- Board actions ---
    /// Add a card to the selected column.
    AddCard,
    /// Delete the selected card.
    DeleteCard,
    /// Start editing the selected card's title.
    StartEdit,
    /// Move the selected card to the column on its left.
    MoveCardLeft,
    /// Move the selected card to the column on its right.
    MoveCardRight,

    // --- Mouse messages ---
    /// Left button pressed at coordinates.
    MouseDown {
        /// Column (x coordinate) of the pointer.
        column: u16,
        /// Row (y coordinate) of the pointer.
        row: u16,
    },
    /// Pointer moved with the left button held.
    MouseDrag {
        /// Column (x coordinate) of the pointer.
        column: u16,
        /// Row (y coordinate) of the pointer.
        row: u16,
    },
    /// Left button released at coordinates.
    MouseUp {
        /// Column (x coordinate) of the pointer.
        column: u16,
        /// Row (y coordinate) of the pointer.
        row: u16,
    },
    /// Wheel scrolled up over the given cell.
    ScrollUp {
        /// Column (x coordinate) of the pointer.
        column: u16,
        /// Row (y coordinate) of the pointer.
        row: u16,
    },
    /// Wheel scrolled down over the given cell.
    ScrollDown {
        /// Column (x coordinate) of the pointer.
        column: u16,
        /// Row (y coordinate) of the pointer.
        row: u16,
    },

    // --- Edit messages ---
    /// Insert a character at the cursor.
    EditInput {
        /// The character typed.
        ch: char,
    },
    /// Delete the character before the cursor.
    EditBackspace,
    /// Delete the character under the cursor.
    EditDelete,
    /// Move the cursor one character left.
    EditCursorLeft,
    /// Move the cursor one character right.
    EditCursorRight,
    /// Move the cursor to the start of the input.
    EditCursorHome,
    /// Move the cursor to the end of the input.
    EditCursorEnd,
    /// Save the edit.
    EditConfirm,
    /// Discard the edit.
    EditCancel,
}

impl Message {
    /// Returns `true` if this message is a navigation action.
    ///
    /// # Examples
    ///
    /// ```
    /// use kanban_protocol::Message;
    ///
    /// assert!(Message::NavigateLeft.is_navigation());
    /// assert!(!Message::AddCard.is_navigation());
    /// ```
    #[must_use]
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::NavigateLeft | Self::NavigateRight | Self::NavigateUp | Self::NavigateDown
        )
    }

    /// Returns `true` if this message should terminate the application.
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit)
    }

    /// Returns `true` if this message is only meaningful while editing.
    ///
    /// # Examples
    ///
    /// ```
    /// use kanban_protocol::Message;
    ///
    /// assert!(Message::EditInput { ch: 'a' }.is_edit());
    /// assert!(!Message::StartEdit.is_edit());
    /// ```
    #[must_use]
    pub fn is_edit(&self) -> bool {
        matches!(
            self,
            Self::EditInput { .. }
                | Self::EditBackspace
                | Self::EditDelete
                | Self::EditCursorLeft
                | Self::EditCursorRight
                | Self::EditCursorHome
                | Self::EditCursorEnd
                | Self::EditConfirm
                | Self::EditCancel
        )
    }

    /// Returns `true` if this message comes from the mouse.
    #[must_use]
    pub fn is_mouse(&self) -> bool {
        matches!(
            self,
            Self::MouseDown { .. }
                | Self::MouseDrag { .. }
                | Self::MouseUp { .. }
                | Self::ScrollUp { .. }
                | Self::ScrollDown { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_navigation_detection() {
        assert!(Message::NavigateLeft.is_navigation());
        assert!(Message::NavigateRight.is_navigation());
        assert!(Message::NavigateUp.is_navigation());
        assert!(Message::NavigateDown.is_navigation());
        assert!(!Message::MoveCardLeft.is_navigation());
        assert!(!Message::Quit.is_navigation());
    }

    #[test]
    fn message_terminating_detection() {
        assert!(Message::Quit.is_terminating());
        assert!(!Message::Escape.is_terminating());
        assert!(!Message::EditCancel.is_terminating());
    }

    #[test]
    fn message_edit_detection() {
        assert!(Message::EditBackspace.is_edit());
        assert!(Message::EditConfirm.is_edit());
        assert!(Message::EditCursorHome.is_edit());
        assert!(!Message::DeleteCard.is_edit());
        assert!(!Message::MouseDown { column: 0, row: 0 }.is_edit());
    }

    #[test]
    fn message_mouse_detection() {
        assert!(Message::MouseDown { column: 1, row: 2 }.is_mouse());
        assert!(Message::MouseDrag { column: 1, row: 2 }.is_mouse());
        assert!(Message::MouseUp { column: 1, row: 2 }.is_mouse());
        assert!(Message::ScrollDown { column: 1, row: 2 }.is_mouse());
        assert!(!Message::AddCard.is_mouse());
    }

    #[test]
    fn message_json_format() {
        let json = serde_json::to_string(&Message::MoveCardLeft).expect("serialize");
        assert_eq!(json, r#""move_card_left""#);

        let json = serde_json::to_string(&Message::EditInput { ch: 'x' }).expect("serialize");
        assert_eq!(json, r#"{"edit_input":{"ch":"x"}}"#);
    }
}
