//! Card rendering widget.
//!
//! This module renders individual cards with a color bar keyed to their
//! column, an optional delete button, and an inline title editor.

use kanban_protocol::{Card, ColumnId};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};

use crate::card_view::{CardMode, CardView};
use crate::layout::CardLayout;

/// Symbol drawn for the delete button.
pub const DELETE_SYMBOL: &str = "✕";

/// Symbol drawn for the color bar.
const BAR_SYMBOL: &str = "▌";

/// Returns the color associated with a column.
///
/// # Examples
///
/// ```
/// use kanban_protocol::ColumnId;
/// use kanban_tui::widgets::column_color;
/// use ratatui::style::Color;
///
/// assert_eq!(column_color(ColumnId::Todo), Color::Yellow);
/// assert_eq!(column_color(ColumnId::InProgress), Color::Blue);
/// assert_eq!(column_color(ColumnId::Done), Color::Green);
/// ```
#[must_use]
pub const fn column_color(column: ColumnId) -> Color {
    match column {
        ColumnId::Todo => Color::Yellow,
        ColumnId::InProgress => Color::Blue,
        ColumnId::Done => Color::Green,
    }
}

/// Renders a card into the rectangles of `layout`.
///
/// # Layout
///
/// ```text
/// ╭──────────────────────╮
/// │▌ Design landing…   ✕ │
/// ╰──────────────────────╯
/// ```
///
/// While dragging, the card is dimmed. While editing, the title line shows
/// the edit buffer with the cursor highlighted.
pub fn render_card(
    card: &Card,
    view: Option<&CardView>,
    column: ColumnId,
    is_selected: bool,
    layout: &CardLayout,
    buf: &mut Buffer,
) {
    let area = layout.area;
    if area.width < 4 || area.height < 3 {
        return;
    }

    let idle = CardMode::Idle;
    let mode = view.map_or(&idle, CardView::mode);
    let dragging = matches!(mode, CardMode::Dragging);

    let border_style = match (dragging, is_selected) {
        (true, _) => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM),
        (false, true) => Style::default().fg(Color::White),
        (false, false) => Style::default().fg(Color::DarkGray),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);
    let inner = block.inner(area);
    block.render(area, buf);

    let bar_style = if dragging {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(column_color(column))
    };
    for y in inner.y..inner.bottom() {
        buf.set_string(inner.x, y, BAR_SYMBOL, bar_style);
    }

    match mode {
        CardMode::Editing { buffer, cursor } => {
            render_editor(buffer, *cursor, layout.title, buf);
        }
        _ => {
            let title_style = match (dragging, is_selected) {
                (true, _) => Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::DIM),
                (false, true) => Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
                (false, false) => Style::default().fg(Color::Gray),
            };
            let title = truncate_string(&card.title, layout.title.width as usize);
            Line::from(Span::styled(title, title_style)).render(layout.title, buf);
        }
    }

    if let Some(delete) = layout.delete {
        let style = if dragging {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Red)
        };
        buf.set_string(delete.x, delete.y, DELETE_SYMBOL, style);
    }
}

/// Renders the edit buffer, scrolled so the cursor stays visible.
fn render_editor(buffer: &str, cursor: usize, area: Rect, buf: &mut Buffer) {
    let width = area.width as usize;
    if width == 0 {
        return;
    }

    let start = (cursor + 1).saturating_sub(width);
    let chars: Vec<char> = buffer.chars().collect();
    let visible = |from: usize, to: usize| -> String {
        chars
            .get(from.min(chars.len())..to.min(chars.len()))
            .map(|slice| slice.iter().collect())
            .unwrap_or_default()
    };

    let text_style = Style::default().fg(Color::White).bg(Color::DarkGray);
    let cursor_style = Style::default().fg(Color::Black).bg(Color::White);
    let under_cursor = chars.get(cursor).map_or(" ".to_string(), char::to_string);

    let line = Line::from(vec![
        Span::styled(visible(start, cursor), text_style),
        Span::styled(under_cursor, cursor_style),
        Span::styled(visible(cursor + 1, start + width), text_style),
    ]);

    // Fill the field so the input reads as a text box.
    buf.set_style(area, text_style);
    line.render(area, buf);
}

/// Truncates a string to fit within a given width, adding ellipsis if needed.
fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width > 1 {
        let truncated: String = s.chars().take(max_width - 1).collect();
        format!("{truncated}…")
    } else {
        s.chars().take(max_width).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use kanban_protocol::CardId;

    fn layout(deletable: bool) -> CardLayout {
        let area = Rect::new(0, 0, 24, 3);
        CardLayout {
            card: CardId::new("1"),
            index: 0,
            area,
            title: Rect::new(3, 1, if deletable { 17 } else { 19 }, 1),
            delete: deletable.then(|| Rect::new(21, 1, 1, 1)),
        }
    }

    #[test]
    fn column_color_mapping() {
        assert_eq!(column_color(ColumnId::Todo), Color::Yellow);
        assert_eq!(column_color(ColumnId::InProgress), Color::Blue);
        assert_eq!(column_color(ColumnId::Done), Color::Green);
    }

    #[test]
    fn truncate_string_short() {
        assert_eq!(truncate_string("Hello", 10), "Hello");
        assert_eq!(truncate_string("Hello", 5), "Hello");
    }

    #[test]
    fn truncate_string_long() {
        assert_eq!(truncate_string("Hello, World!", 6), "Hello…");
        assert_eq!(truncate_string("Hello", 1), "H");
    }

    #[test]
    fn render_card_shows_title_bar_and_delete() {
        let card = Card::with_id("1", "Plan");
        let layout = layout(true);
        let mut buf = Buffer::empty(layout.area);

        render_card(&card, None, ColumnId::Todo, false, &layout, &mut buf);

        let content = buffer_to_string(&buf);
        let title_row = content.lines().nth(1).unwrap();
        assert!(title_row.contains("▌ Plan"), "got {title_row:?}");
        assert!(title_row.contains(DELETE_SYMBOL));
        assert_eq!(
            buf.cell((1, 1)).map(|c| c.fg),
            Some(Color::Yellow),
            "color bar uses the column color"
        );
    }

    #[test]
    fn render_card_without_delete_button() {
        let card = Card::with_id("7", "Shipped");
        let layout = layout(false);
        let mut buf = Buffer::empty(layout.area);

        render_card(&card, None, ColumnId::Done, false, &layout, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Shipped"));
        assert!(!content.contains(DELETE_SYMBOL));
    }

    #[test]
    fn render_card_dimmed_while_dragging() {
        let card = Card::with_id("1", "Plan");
        let mut view = CardView::new(&card, ColumnId::Todo);
        view.drag_start(&mut kanban_protocol::DataTransfer::new());
        let layout = layout(true);
        let mut buf = Buffer::empty(layout.area);

        render_card(&card, Some(&view), ColumnId::Todo, true, &layout, &mut buf);

        let cell = buf.cell((3, 1)).unwrap();
        assert_eq!(cell.symbol(), "P");
        assert!(cell.modifier.contains(Modifier::DIM));
    }

    #[test]
    fn render_card_shows_editor() {
        let card = Card::with_id("1", "Plan");
        let mut view = CardView::new(&card, ColumnId::Todo);
        view.begin_edit();
        view.insert_char('s');
        let layout = layout(true);
        let mut buf = Buffer::empty(layout.area);

        render_card(&card, Some(&view), ColumnId::Todo, true, &layout, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.lines().nth(1).unwrap().contains("Plans"));
        // The cursor sits after the last character
        let cursor = buf.cell((8, 1)).unwrap();
        assert_eq!(cursor.bg, Color::White);
    }

    #[test]
    fn editor_scrolls_to_cursor() {
        let area = Rect::new(0, 0, 5, 1);
        let mut buf = Buffer::empty(area);
        render_editor("abcdefgh", 8, area, &mut buf);
        assert_eq!(buffer_to_string(&buf), "efgh\n");
    }
}
