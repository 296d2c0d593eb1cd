//! Centralized layout measurements and hit-testing for the TUI.
//!
//! [`BoardLayout`] is computed once per frame from the board area and the
//! board contents. The widgets draw into its rectangles and the mouse
//! handling resolves clicks against the same rectangles, so what is drawn
//! is exactly what can be clicked.

use kanban_protocol::{Board, CardId, ColumnId};
use ratatui::layout::{Position, Rect};

/// Height of the header bar in rows.
///
/// The header displays the application title and help cue.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the status bar in rows.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of each card in rows: top border, title, bottom border.
pub const CARD_HEIGHT: u16 = 3;

/// Height of the "+ Add Card" button in rows.
pub const ADD_BUTTON_HEIGHT: u16 = 1;

/// Width of the header "[+]" button.
pub const HEADER_ADD_WIDTH: u16 = 3;

/// Minimum terminal height for useful rendering.
///
/// Below this height, we display a "terminal too small" message. It fits
/// one card and the add button in each column, plus the status bar.
pub const MIN_HEIGHT: u16 = 8;

/// Minimum terminal height for rendering with header.
///
/// When terminal height is between `MIN_HEIGHT` and `MIN_HEIGHT_WITH_HEADER`,
/// we hide the header to reclaim 3 rows of content space.
pub const MIN_HEIGHT_WITH_HEADER: u16 = MIN_HEIGHT + HEADER_HEIGHT;

/// Minimum terminal width for useful rendering.
///
/// The board has 3 columns; each needs at least 15 characters for
/// borders, the header button and a truncated title.
pub const MIN_WIDTH: u16 = 45;

/// Number of whole cards that fit in a column drawn within `board`.
///
/// One row below the cards is kept for the add button.
#[must_use]
pub fn card_capacity(board: Rect) -> usize {
    let body_height = board.height.saturating_sub(2);
    (body_height.saturating_sub(ADD_BUTTON_HEIGHT) / CARD_HEIGHT) as usize
}

/// Returns `true` if the terminal is too small to render the board.
#[must_use]
pub fn is_too_small(area: Rect) -> bool {
    area.width < MIN_WIDTH || area.height < MIN_HEIGHT
}

/// The vertical split of the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Header bar, hidden on short terminals.
    pub header: Option<Rect>,
    /// The three columns.
    pub board: Rect,
    /// Key hints along the bottom.
    pub status: Rect,
}

impl ScreenAreas {
    /// Splits `area` into header, board and status bar.
    #[must_use]
    pub fn split(area: Rect) -> Self {
        let header_height = if area.height >= MIN_HEIGHT_WITH_HEADER {
            HEADER_HEIGHT
        } else {
            0
        };
        let status_height = STATUS_BAR_HEIGHT.min(area.height);
        let board_height = area
            .height
            .saturating_sub(header_height)
            .saturating_sub(status_height);

        Self {
            header: (header_height > 0)
                .then(|| Rect::new(area.x, area.y, area.width, header_height)),
            board: Rect::new(area.x, area.y + header_height, area.width, board_height),
            status: Rect::new(
                area.x,
                area.y + header_height + board_height,
                area.width,
                status_height,
            ),
        }
    }
}

/// A clickable element of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    /// The "[+]" button in a column header.
    HeaderAdd(ColumnId),
    /// The "+ Add Card" button below a column's cards.
    AddButton(ColumnId),
    /// The "✕" button of a card.
    DeleteButton {
        /// Column holding the card.
        column: ColumnId,
        /// The card to delete.
        card: CardId,
    },
    /// Anywhere else on a card.
    Card {
        /// Column holding the card.
        column: ColumnId,
        /// The card.
        card: CardId,
    },
    /// Empty space within a column.
    Column(ColumnId),
}

/// Where one card is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLayout {
    /// The card being drawn.
    pub card: CardId,
    /// Index of the card within its column.
    pub index: usize,
    /// The whole card, borders included.
    pub area: Rect,
    /// The title line.
    pub title: Rect,
    /// The delete button, absent for cards that cannot be deleted.
    pub delete: Option<Rect>,
}

/// Where one column and its contents are drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    /// The column being drawn.
    pub id: ColumnId,
    /// The whole column, borders included.
    pub area: Rect,
    /// Inside the borders.
    pub body: Rect,
    /// The header "[+]" button, when the column is wide enough.
    pub header_add: Option<Rect>,
    /// The visible cards, top to bottom.
    pub cards: Vec<CardLayout>,
    /// The "+ Add Card" button, when there is room for it.
    pub add_button: Option<Rect>,
    /// Number of cards scrolled out above the first visible card.
    pub scroll_offset: usize,
}

impl ColumnLayout {
    fn compute(id: ColumnId, area: Rect, card_ids: &[CardId], scroll_offset: usize) -> Self {
        let body = Rect::new(
            area.x.saturating_add(1),
            area.y.saturating_add(1),
            area.width.saturating_sub(2),
            area.height.saturating_sub(2),
        );

        let header_add = (area.width >= HEADER_ADD_WIDTH + 5).then(|| {
            Rect::new(
                area.right() - HEADER_ADD_WIDTH - 1,
                area.y,
                HEADER_ADD_WIDTH,
                1,
            )
        });

        let capacity = card_capacity(area);
        let scroll_offset = keep_visible(scroll_offset, None, card_ids.len(), capacity);

        let cards: Vec<CardLayout> = card_ids
            .iter()
            .enumerate()
            .skip(scroll_offset)
            .take(capacity)
            .zip(0u16..)
            .map(|((index, card), slot)| {
                let card_area = Rect::new(body.x, body.y + slot * CARD_HEIGHT, body.width, CARD_HEIGHT);
                CardLayout::compute(card.clone(), index, card_area, id.allows_delete())
            })
            .collect();

        let add_y = body.y + cards.len() as u16 * CARD_HEIGHT;
        let add_button = (add_y < body.bottom() && body.width > 0)
            .then(|| Rect::new(body.x, add_y, body.width, ADD_BUTTON_HEIGHT));

        Self {
            id,
            area,
            body,
            header_add,
            cards,
            add_button,
            scroll_offset,
        }
    }
}

impl CardLayout {
    fn compute(card: CardId, index: usize, area: Rect, deletable: bool) -> Self {
        // Border, color bar and a space precede the title.
        let title_x = area.x.saturating_add(3);
        let line_y = area.y.saturating_add(1);

        let delete = (deletable && area.width >= 8).then(|| Rect::new(area.right() - 3, line_y, 1, 1));
        let title_end = delete.map_or(area.right().saturating_sub(2), |d| d.x.saturating_sub(1));
        let title = Rect::new(title_x, line_y, title_end.saturating_sub(title_x), 1);

        Self {
            card,
            index,
            area,
            title,
            delete,
        }
    }
}

/// The full board geometry for one frame.
///
/// # Examples
///
/// ```
/// use kanban_protocol::{ColumnId, seed::seed_board};
/// use kanban_tui::layout::{BoardLayout, HitTarget};
/// use ratatui::layout::Rect;
///
/// let board = seed_board();
/// let layout = BoardLayout::compute(Rect::new(0, 0, 90, 20), &board, [0; ColumnId::COUNT]);
///
/// let todo = layout.column(ColumnId::Todo);
/// let first = &todo.cards[0];
/// assert_eq!(
///     layout.hit_test(first.title.x, first.title.y),
///     Some(HitTarget::Card { column: ColumnId::Todo, card: first.card.clone() })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardLayout {
    /// One entry per column, in board order.
    pub columns: [ColumnLayout; ColumnId::COUNT],
}

impl BoardLayout {
    /// Lays out `board` within `area`.
    ///
    /// `scroll` holds the scroll offset of each column, clamped so no
    /// column scrolls past its last card.
    #[must_use]
    pub fn compute(area: Rect, board: &Board, scroll: [usize; ColumnId::COUNT]) -> Self {
        let count = ColumnId::COUNT as u16;
        let base_width = area.width / count;
        let remainder = area.width % count;

        let columns = ColumnId::all().map(|id| {
            let i = id.index() as u16;
            let width = if i == count - 1 {
                base_width + remainder
            } else {
                base_width
            };
            let column_area = Rect::new(area.x + i * base_width, area.y, width, area.height);
            let card_ids: Vec<CardId> = board
                .column(id)
                .cards
                .iter()
                .map(|card| card.id.clone())
                .collect();
            ColumnLayout::compute(id, column_area, &card_ids, scroll[id.index()])
        });

        Self { columns }
    }

    /// Returns the layout of column `id`.
    #[must_use]
    pub fn column(&self, id: ColumnId) -> &ColumnLayout {
        &self.columns[id.index()]
    }

    /// Returns the column containing the given cell, if any.
    #[must_use]
    pub fn column_at(&self, x: u16, y: u16) -> Option<ColumnId> {
        let position = Position::new(x, y);
        self.columns
            .iter()
            .find(|column| column.area.contains(position))
            .map(|column| column.id)
    }

    /// Resolves the element under the given cell.
    ///
    /// Buttons take precedence over the card or column around them.
    #[must_use]
    pub fn hit_test(&self, x: u16, y: u16) -> Option<HitTarget> {
        let position = Position::new(x, y);
        let column = self
            .columns
            .iter()
            .find(|column| column.area.contains(position))?;
        let id = column.id;

        if column.header_add.is_some_and(|r| r.contains(position)) {
            return Some(HitTarget::HeaderAdd(id));
        }

        for card in &column.cards {
            if card.delete.is_some_and(|r| r.contains(position)) {
                return Some(HitTarget::DeleteButton {
                    column: id,
                    card: card.card.clone(),
                });
            }
            if card.area.contains(position) {
                return Some(HitTarget::Card {
                    column: id,
                    card: card.card.clone(),
                });
            }
        }

        if column.add_button.is_some_and(|r| r.contains(position)) {
            return Some(HitTarget::AddButton(id));
        }

        Some(HitTarget::Column(id))
    }
}

/// Adjusts a scroll offset so that `selected` is within the visible window.
///
/// The offset only moves when the selected card lies outside the window,
/// and then by as little as possible. It never exceeds `total - visible`.
#[must_use]
pub fn keep_visible(offset: usize, selected: Option<usize>, total: usize, visible: usize) -> usize {
    if visible == 0 || total <= visible {
        return 0;
    }
    let max = total - visible;
    let offset = offset.min(max);
    match selected {
        Some(index) if index < offset => index,
        Some(index) if index >= offset + visible => (index + 1 - visible).min(max),
        _ => offset,
    }
}
