//! Column rendering widget.
//!
//! This module renders a single board column: its header with title, card
//! count and "[+]" button, the cards, and the "+ Add Card" button or the
//! drop hint while a drag hovers over it.

use kanban_protocol::{CardId, Column};
use ratatui::{
    buffer::Buffer,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};

use super::card::render_card;
use crate::column_view::ColumnView;
use crate::layout::ColumnLayout;
use crate::state::CardViews;

/// Label of the add button below the cards.
pub const ADD_CARD_LABEL: &str = "+ Add Card";

/// Hint shown in place of the add button on the active drop target.
pub const DROP_HINT: &str = "+ drop here";

/// Label of the add button in the column header.
pub const HEADER_ADD_LABEL: &str = "[+]";

/// Renders a single column to the buffer.
///
/// # Arguments
///
/// * `column` - The column to render
/// * `view` - The column's view state (drop highlight)
/// * `cards` - Card view state, for editing and dragging cards
/// * `is_focused` - Whether this column currently has focus
/// * `selected` - The selected card, if it sits in this column
/// * `layout` - Where to draw
/// * `buf` - The buffer to render into
///
/// # Layout
///
/// ```text
/// ╭Todo (2)──────────[+]╮
/// │╭──────────────────╮ │
/// ││▌ Create plan   ✕ │ │
/// │╰──────────────────╯ │
/// │╭──────────────────╮ │
/// ││▌ Design page   ✕ │ │
/// │╰──────────────────╯ │
/// │+ Add Card           │
/// ╰─────────────────────╯
/// ```
pub fn render_column(
    column: &Column,
    view: &ColumnView,
    cards: &CardViews,
    is_focused: bool,
    selected: Option<&CardId>,
    layout: &ColumnLayout,
    buf: &mut Buffer,
) {
    let area = layout.area;
    if area.width < 2 || area.height < 2 {
        return;
    }

    let drop_target = view.is_drag_over();
    let (border_type, border_style) = if drop_target {
        (BorderType::Double, Style::default().fg(Color::Green))
    } else if is_focused {
        (BorderType::Rounded, Style::default().fg(Color::Cyan))
    } else {
        (BorderType::Rounded, Style::default().fg(Color::DarkGray))
    };

    let title_style = if is_focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let title = format!("{} ({})", column.title, column.len());

    let block = Block::default()
        .title(Line::from(Span::styled(title, title_style)))
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style);
    block.render(area, buf);

    if let Some(plus) = layout.header_add {
        buf.set_string(
            plus.x,
            plus.y,
            HEADER_ADD_LABEL,
            Style::default().fg(Color::Green),
        );
    }

    for card_layout in &layout.cards {
        let Some(card) = column.cards.get(card_layout.index) else {
            continue;
        };
        let is_selected = selected == Some(&card.id);
        render_card(
            card,
            cards.get(&card.id),
            column.id,
            is_selected,
            card_layout,
            buf,
        );
    }

    if let Some(button) = layout.add_button {
        let (label, style) = if drop_target {
            (
                DROP_HINT,
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (ADD_CARD_LABEL, Style::default().fg(Color::DarkGray))
        };
        buf.set_stringn(button.x, button.y, label, button.width as usize, style);
    }
}
