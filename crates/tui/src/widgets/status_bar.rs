//! Status bar rendering widget.
//!
//! This module renders the footer line with the keybinding hints for the
//! current interaction mode and the number of cards on the board.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::state::AppState;

/// Key hints shown while editing a card title.
const EDIT_HINTS: &[(&str, &str)] = &[("Enter", "Save"), ("Esc", "Cancel")];

/// Key hints shown while dragging a card.
const DRAG_HINTS: &[(&str, &str)] = &[("Release", "Drop"), ("Esc", "Cancel drag")];

/// Key hints shown otherwise.
const BOARD_HINTS: &[(&str, &str)] = &[
    ("←→↑↓", "Navigate"),
    ("a", "Add"),
    ("e", "Edit"),
    ("d", "Delete"),
    ("Shift+←→", "Move"),
    ("?", "Help"),
    ("Ctrl+C", "Quit"),
];

/// Renders the status bar.
///
/// # Layout
///
/// ```text
/// ←→↑↓ Navigate  a Add  e Edit  d Delete  Shift+←→ Move  ? Help      8 cards
/// ```
///
/// # Examples
///
/// ```
/// use kanban_protocol::seed::seed_board;
/// use kanban_tui::{AppState, widgets::render_status_bar};
/// use ratatui::{buffer::Buffer, layout::Rect};
///
/// let state = AppState::new(seed_board());
/// let area = Rect::new(0, 0, 100, 1);
/// let mut buf = Buffer::empty(area);
///
/// render_status_bar(&state, area, &mut buf);
/// ```
pub fn render_status_bar(state: &AppState, area: Rect, buf: &mut Buffer) {
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::White);

    let hints = if state.is_editing() {
        EDIT_HINTS
    } else if state.is_dragging() {
        DRAG_HINTS
    } else {
        BOARD_HINTS
    };

    let total = state.board.total_cards();
    let count = match total {
        1 => "1 card".to_string(),
        n => format!("{n} cards"),
    };
    let [hints_area, count_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(count.len() as u16 + 1)])
            .areas(area);

    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(*key, key_style),
                Span::styled(format!(" {action}  "), text_style),
            ]
        })
        .collect();
    Paragraph::new(Line::from(spans)).render(hints_area, buf);

    Line::from(Span::styled(count, Style::default().fg(Color::DarkGray)))
        .right_aligned()
        .render(count_area, buf);
}
