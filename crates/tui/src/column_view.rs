//! Per-column view state: add affordances, drop targeting and scrolling.

use kanban_protocol::{ColumnId, Command, DRAG_FORMAT, DataTransfer, DragPayload, DropEffect};
use tracing::debug;

use crate::layout::keep_visible;

/// Transient UI state for one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnView {
    id: ColumnId,
    drag_over: bool,
    scroll_offset: usize,
}

impl ColumnView {
    /// Creates an inactive view for column `id`.
    #[must_use]
    pub fn new(id: ColumnId) -> Self {
        Self {
            id,
            drag_over: false,
            scroll_offset: 0,
        }
    }

    /// The column this view renders.
    #[must_use]
    pub fn id(&self) -> ColumnId {
        self.id
    }

    /// Returns `true` while an acceptable drag hovers over the column.
    #[must_use]
    pub fn is_drag_over(&self) -> bool {
        self.drag_over
    }

    /// Number of cards scrolled out above the first visible card.
    #[must_use]
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Scrolls by `delta` cards, given `total` cards of which `visible` fit.
    pub fn scroll_by(&mut self, delta: isize, total: usize, visible: usize) {
        let offset = self.scroll_offset.saturating_add_signed(delta);
        self.scroll_offset = keep_visible(offset, None, total, visible);
    }

    /// Scrolls just far enough to show card `index`, or only clamps the
    /// offset when `index` is `None`.
    pub fn scroll_to(&mut self, index: Option<usize>, total: usize, visible: usize) {
        self.scroll_offset = keep_visible(self.scroll_offset, index, total, visible);
    }

    /// The command behind both "add card" buttons.
    #[must_use]
    pub fn add_card(&self) -> Command {
        Command::AddCard { column: self.id }
    }

    /// Offers the column as a drop target for `transfer`.
    ///
    /// Only transfers carrying [`DRAG_FORMAT`] are accepted; accepting sets
    /// the drop effect to [`DropEffect::Move`].
    pub fn drag_over(&mut self, transfer: &mut DataTransfer) -> bool {
        if !transfer.has_format(DRAG_FORMAT) {
            return false;
        }
        transfer.drop_effect = DropEffect::Move;
        self.drag_over = true;
        true
    }

    /// Clears the drop highlight.
    pub fn drag_leave(&mut self) {
        self.drag_over = false;
    }

    /// Completes a drop on this column.
    ///
    /// Returns a move into this column, or `None` when the payload is
    /// missing or invalid.
    pub fn drop(&mut self, transfer: &DataTransfer) -> Option<Command> {
        self.drag_over = false;
        match DragPayload::read_from(transfer) {
            Ok(payload) => Some(payload.into_move(self.id)),
            Err(err) => {
                debug!(column = %self.id, error = %err, "ignoring drop");
                None
            }
        }
    }
}
