//! Per-card view state.
//!
//! A [`CardView`] tracks what a single card is doing on screen: resting,
//! being renamed, or being dragged. It never mutates the board; saving and
//! deleting produce [`Command`]s for the board to apply.

use kanban_protocol::{Card, CardId, ColumnId, Command, DataTransfer, DragPayload};
use tracing::{debug, warn};

/// The interaction mode of a card.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CardMode {
    /// Displayed normally.
    #[default]
    Idle,
    /// The title is being edited.
    Editing {
        /// The text being edited.
        buffer: String,
        /// Cursor position, in characters.
        cursor: usize,
    },
    /// The card is the source of an in-flight drag.
    Dragging,
}

/// Transient UI state for one card.
///
/// # Examples
///
/// ```
/// use kanban_protocol::{Card, ColumnId, Command};
/// use kanban_tui::CardView;
///
/// let card = Card::with_id("1", "Draft");
/// let mut view = CardView::new(&card, ColumnId::Todo);
///
/// assert!(view.begin_edit());
/// view.insert_char('!');
/// let command = view.save().unwrap();
/// assert!(matches!(command, Command::EditCard { ref title, .. } if title == "Draft!"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    card_id: CardId,
    column: ColumnId,
    title: String,
    mode: CardMode,
}

impl CardView {
    /// Creates an idle view for `card` sitting in `column`.
    #[must_use]
    pub fn new(card: &Card, column: ColumnId) -> Self {
        Self {
            card_id: card.id.clone(),
            column,
            title: card.title.clone(),
            mode: CardMode::Idle,
        }
    }

    /// The card this view renders.
    #[must_use]
    pub fn card_id(&self) -> &CardId {
        &self.card_id
    }

    /// The column the card sits in.
    #[must_use]
    pub fn column(&self) -> ColumnId {
        self.column
    }

    /// The last title seen from the board.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The current interaction mode.
    #[must_use]
    pub fn mode(&self) -> &CardMode {
        &self.mode
    }

    /// Returns `true` while the title is being edited.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        matches!(self.mode, CardMode::Editing { .. })
    }

    /// Returns `true` while the card is being dragged.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.mode, CardMode::Dragging)
    }

    /// Returns `true` if the card offers a delete action.
    #[must_use]
    pub fn can_delete(&self) -> bool {
        self.column.allows_delete()
    }

    /// Accepts the authoritative title from the board.
    ///
    /// When the title changed since it was last seen, any edit or drag in
    /// progress is abandoned.
    pub fn sync(&mut self, title: &str) {
        if self.title != title {
            title.clone_into(&mut self.title);
            self.mode = CardMode::Idle;
        }
    }

    /// Enters edit mode with the buffer holding the current title.
    ///
    /// Returns `false` unless the card was idle.
    pub fn begin_edit(&mut self) -> bool {
        if self.mode != CardMode::Idle {
            return false;
        }
        self.mode = CardMode::Editing {
            buffer: self.title.clone(),
            cursor: self.title.chars().count(),
        };
        true
    }

    /// Inserts a character at the cursor.
    pub fn insert_char(&mut self, ch: char) {
        if let CardMode::Editing { buffer, cursor } = &mut self.mode {
            let at = byte_offset(buffer, *cursor);
            buffer.insert(at, ch);
            *cursor += 1;
        }
    }

    /// Removes the character before the cursor.
    pub fn backspace(&mut self) {
        if let CardMode::Editing { buffer, cursor } = &mut self.mode
            && *cursor > 0
        {
            *cursor -= 1;
            let at = byte_offset(buffer, *cursor);
            buffer.remove(at);
        }
    }

    /// Removes the character under the cursor.
    pub fn delete_forward(&mut self) {
        if let CardMode::Editing { buffer, cursor } = &mut self.mode
            && *cursor < buffer.chars().count()
        {
            let at = byte_offset(buffer, *cursor);
            buffer.remove(at);
        }
    }

    /// Moves the cursor one character left.
    pub fn cursor_left(&mut self) {
        if let CardMode::Editing { cursor, .. } = &mut self.mode {
            *cursor = cursor.saturating_sub(1);
        }
    }

    /// Moves the cursor one character right.
    pub fn cursor_right(&mut self) {
        if let CardMode::Editing { buffer, cursor } = &mut self.mode {
            *cursor = (*cursor + 1).min(buffer.chars().count());
        }
    }

    /// Moves the cursor to the start of the buffer.
    pub fn cursor_home(&mut self) {
        if let CardMode::Editing { cursor, .. } = &mut self.mode {
            *cursor = 0;
        }
    }

    /// Moves the cursor past the end of the buffer.
    pub fn cursor_end(&mut self) {
        if let CardMode::Editing { buffer, cursor } = &mut self.mode {
            *cursor = buffer.chars().count();
        }
    }

    /// Leaves edit mode, producing a rename when the trimmed buffer is
    /// non-empty.
    pub fn save(&mut self) -> Option<Command> {
        let CardMode::Editing { buffer, .. } = std::mem::take(&mut self.mode) else {
            return None;
        };

        let title = buffer.trim();
        if title.is_empty() {
            debug!(card = %self.card_id, "discarding empty title");
            return None;
        }

        Some(Command::EditCard {
            column: self.column,
            card: self.card_id.clone(),
            title: title.to_owned(),
        })
    }

    /// Leaves edit mode without saving.
    pub fn cancel(&mut self) {
        if self.is_editing() {
            self.mode = CardMode::Idle;
        }
    }

    /// Publishes this card as a drag payload on `transfer`.
    ///
    /// Returns `false` while editing, in which case `transfer` is untouched.
    pub fn drag_start(&mut self, transfer: &mut DataTransfer) -> bool {
        if self.is_editing() {
            debug!(card = %self.card_id, "drag refused while editing");
            return false;
        }

        let payload = DragPayload::new(self.card_id.clone(), self.column);
        if let Err(err) = payload.write_to(transfer) {
            warn!(card = %self.card_id, error = %err, "failed to publish drag payload");
            return false;
        }
        self.mode = CardMode::Dragging;
        true
    }

    /// Ends a drag regardless of how it finished.
    pub fn drag_end(&mut self) {
        if self.is_dragging() {
            self.mode = CardMode::Idle;
        }
    }

    /// Requests deletion of this card. Cards in "done" cannot be deleted.
    #[must_use]
    pub fn delete(&self) -> Option<Command> {
        self.can_delete().then(|| Command::DeleteCard {
            column: self.column,
            card: self.card_id.clone(),
        })
    }
}

fn byte_offset(s: &str, chars: usize) -> usize {
    s.char_indices().nth(chars).map_or(s.len(), |(i, _)| i)
}
