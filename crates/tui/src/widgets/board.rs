//! Kanban board rendering widget.
//!
//! This module renders the three columns side by side, using the
//! [`BoardLayout`] that mouse handling resolves clicks against.

use kanban_protocol::ColumnId;
use ratatui::buffer::Buffer;

use super::column::render_column;
use crate::layout::BoardLayout;
use crate::state::AppState;

/// Renders the complete board to the buffer.
///
/// The focused column is highlighted, and the selected card is
/// highlighted within it. A column hovered by a drag shows as the drop
/// target.
///
/// # Layout
///
/// ```text
/// ╭Todo (3)───[+]╮╭In Progress─[+]╮╭Done (2)───[+]╮
/// │ card         ││ card          ││ card         │
/// │ card         ││ card          ││ card         │
/// │+ Add Card    ││+ Add Card     ││+ Add Card    │
/// ╰──────────────╯╰───────────────╯╰──────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use kanban_protocol::seed::seed_board;
/// use kanban_tui::{AppState, layout::BoardLayout, widgets::render_board};
/// use ratatui::{buffer::Buffer, layout::Rect};
///
/// let state = AppState::new(seed_board());
/// let area = Rect::new(0, 0, 90, 20);
/// let layout = BoardLayout::compute(area, &state.board, state.scroll_offsets());
/// let mut buf = Buffer::empty(area);
///
/// render_board(&state, &layout, &mut buf);
/// ```
pub fn render_board(state: &AppState, layout: &BoardLayout, buf: &mut Buffer) {
    let selected = state.selected_card_id();

    for id in ColumnId::all() {
        let is_focused = state.selected_column == id;
        // Only show card selection in the focused column
        let selected = selected.as_ref().filter(|_| is_focused);

        render_column(
            state.board.column(id),
            state.column_view(id),
            &state.cards,
            is_focused,
            selected,
            layout.column(id),
            buf,
        );
    }
}
