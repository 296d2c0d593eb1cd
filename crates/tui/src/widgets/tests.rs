//! Rendering tests across widgets.
//!
//! Small widgets are pinned with inline insta snapshots; whole-board
//! renders are checked cell by cell where exact output would be brittle.

use kanban_protocol::{Card, CardId, ColumnId, seed::seed_board};
use ratatui::{buffer::Buffer, layout::Rect, style::Color};

use super::{DELETE_SYMBOL, DROP_HINT, render_board, render_card, render_help_overlay};
use crate::layout::{BoardLayout, CardLayout};
use crate::state::AppState;
use crate::test_utils::buffer_to_string;

fn card_layout(area: Rect, deletable: bool) -> CardLayout {
    CardLayout {
        card: CardId::new("1"),
        index: 0,
        area,
        title: Rect::new(area.x + 3, area.y + 1, if deletable { 17 } else { 19 }, 1),
        delete: deletable.then(|| Rect::new(area.right() - 3, area.y + 1, 1, 1)),
    }
}

fn render_seed(state: &AppState) -> Buffer {
    let area = Rect::new(0, 0, 90, 20);
    let layout = BoardLayout::compute(area, &state.board, state.scroll_offsets());
    let mut buf = Buffer::empty(area);
    render_board(state, &layout, &mut buf);
    buf
}

/// Symbols in the cells of one column, row by row.
fn column_text(buf: &Buffer, x_range: std::ops::Range<u16>) -> String {
    let mut out = String::new();
    for y in 0..buf.area.height {
        for x in x_range.clone() {
            if let Some(cell) = buf.cell((x, y)) {
                out.push_str(cell.symbol());
            }
        }
        out.push('\n');
    }
    out
}

#[test]
fn snapshot_card() {
    let card = Card::with_id("1", "Plan");
    let layout = card_layout(Rect::new(0, 0, 24, 3), true);
    let mut buf = Buffer::empty(layout.area);

    render_card(&card, None, ColumnId::Todo, false, &layout, &mut buf);

    insta::assert_snapshot!(buffer_to_string(&buf), @r"
    ╭──────────────────────╮
    │▌ Plan              ✕ │
    ╰──────────────────────╯
    ");
}

#[test]
fn snapshot_card_long_title_truncated() {
    let card = Card::with_id("1", "Create initial project plan");
    let layout = card_layout(Rect::new(0, 0, 24, 3), true);
    let mut buf = Buffer::empty(layout.area);

    render_card(&card, None, ColumnId::Todo, false, &layout, &mut buf);

    insta::assert_snapshot!(buffer_to_string(&buf), @r"
    ╭──────────────────────╮
    │▌ Create initial p… ✕ │
    ╰──────────────────────╯
    ");
}

#[test]
fn done_column_has_no_delete_buttons() {
    let state = AppState::new(seed_board());
    let buf = render_seed(&state);

    let todo = column_text(&buf, 0..30);
    let done = column_text(&buf, 60..90);
    assert_eq!(todo.matches(DELETE_SYMBOL).count(), 3);
    assert!(!done.contains(DELETE_SYMBOL));
    assert!(done.contains("Organize project repo"));
}

#[test]
fn selected_card_title_is_bold_white() {
    let mut state = AppState::new(seed_board());
    state.select_card(&CardId::new("5"));
    let layout = BoardLayout::compute(Rect::new(0, 0, 90, 20), &state.board, state.scroll_offsets());
    let buf = render_seed(&state);

    let title = layout.column(ColumnId::InProgress).cards[1].title;
    let cell = buf.cell((title.x, title.y)).unwrap();
    assert_eq!(cell.symbol(), "S");
    assert_eq!(cell.fg, Color::White);
}

#[test]
fn drag_highlights_only_the_hovered_column() {
    let mut state = AppState::new(seed_board());
    state.begin_drag(&CardId::new("2"));
    state.drag_over(Some(ColumnId::InProgress));
    let buf = render_seed(&state);

    assert!(column_text(&buf, 30..60).contains(DROP_HINT));
    assert!(!column_text(&buf, 0..30).contains(DROP_HINT));
    assert!(!column_text(&buf, 60..90).contains(DROP_HINT));
}

#[test]
fn editing_card_shows_buffer() {
    let mut state = AppState::new(seed_board());
    state.begin_edit(&CardId::new("3"));
    if let Some(view) = state.editing_card_mut() {
        view.cursor_home();
        view.insert_char('!');
    }
    let buf = render_seed(&state);

    assert!(column_text(&buf, 0..30).contains("!Review codebase"));
}

#[test]
fn help_overlay_draws_over_board() {
    let state = AppState::new(seed_board());
    let mut buf = render_seed(&state);
    render_help_overlay(buf.area, &mut buf);

    let content = buffer_to_string(&buf);
    assert!(content.contains("Help"));
    assert!(content.contains("Mouse"));
}
