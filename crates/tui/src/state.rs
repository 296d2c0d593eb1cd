//! Application state management.
//!
//! This module defines [`AppState`], which owns the board together with the
//! transient view state of every column and card, the selection, and any
//! drag in progress. All board mutations go through [`AppState::dispatch`],
//! which reconciles the views with the new board value.

use std::collections::HashMap;

use kanban_protocol::{Board, Card, CardId, ColumnId, Command, DataTransfer};
use tracing::debug;

use crate::card_view::CardView;
use crate::column_view::ColumnView;

/// Card views keyed by card id.
pub type CardViews = HashMap<CardId, CardView>;

/// A drag that has started and not yet ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    /// The dragged card.
    pub card: CardId,
    /// The transfer carrying the drag payload.
    pub transfer: DataTransfer,
    /// The column currently highlighted as drop target.
    pub over: Option<ColumnId>,
}

/// Horizontal direction for keyboard moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards "todo".
    Left,
    /// Towards "done".
    Right,
}

/// The application state.
///
/// Contains all mutable state for the TUI application: the board, the
/// per-column and per-card view state, and selection tracking.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The board being displayed. Mutate it through [`AppState::dispatch`].
    pub board: Board,
    /// Per-column view state, indexed by [`ColumnId::index`].
    pub columns: [ColumnView; ColumnId::COUNT],
    /// Per-card view state.
    pub cards: CardViews,
    /// The focused column.
    pub selected_column: ColumnId,
    /// Index of the selected card within the focused column, if any.
    pub selected_card: Option<usize>,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    /// The drag in progress, if any.
    pub drag: Option<DragSession>,
}

impl AppState {
    /// Creates a new application state for `board`.
    ///
    /// Focus starts on the first column with nothing selected.
    ///
    /// # Examples
    ///
    /// ```
    /// use kanban_protocol::{ColumnId, seed::seed_board};
    /// use kanban_tui::AppState;
    ///
    /// let state = AppState::new(seed_board());
    /// assert_eq!(state.selected_column, ColumnId::Todo);
    /// assert_eq!(state.cards.len(), 8);
    /// ```
    #[must_use]
    pub fn new(board: Board) -> Self {
        let mut state = Self {
            board,
            columns: ColumnId::all().map(ColumnView::new),
            cards: CardViews::new(),
            selected_column: ColumnId::Todo,
            selected_card: None,
            help_visible: false,
            drag: None,
        };
        state.reconcile();
        state
    }

    /// Applies a command to the board and reconciles the views.
    ///
    /// Returns `true` if the board changed.
    pub fn dispatch(&mut self, command: Command) -> bool {
        let changed = self.board.dispatch(command);
        if changed {
            self.reconcile();
        }
        changed
    }

    /// Brings the card views in line with the board.
    ///
    /// Views of removed cards are dropped, cards that changed column get a
    /// fresh view, and surviving views see the current title.
    pub fn reconcile(&mut self) {
        let mut seen = HashMap::with_capacity(self.board.total_cards());
        for column in &self.board.columns {
            for card in &column.cards {
                let view = match self.cards.remove(&card.id) {
                    Some(mut view) if view.column() == column.id => {
                        view.sync(&card.title);
                        view
                    }
                    _ => CardView::new(card, column.id),
                };
                seen.insert(card.id.clone(), view);
            }
        }
        self.cards = seen;

        let orphaned = self
            .drag
            .as_ref()
            .is_some_and(|drag| !self.cards.contains_key(&drag.card));
        if orphaned {
            self.end_drag();
        }
        self.clamp_card_selection();
    }

    /// Returns the view of column `id`.
    #[must_use]
    pub fn column_view(&self, id: ColumnId) -> &ColumnView {
        &self.columns[id.index()]
    }

    /// Returns the view of the given card.
    #[must_use]
    pub fn card_view(&self, id: &CardId) -> Option<&CardView> {
        self.cards.get(id)
    }

    /// The selected column and card index, if a card is selected.
    #[must_use]
    pub fn selection(&self) -> Option<(ColumnId, usize)> {
        self.selected_card.map(|index| (self.selected_column, index))
    }

    /// Returns the selected card.
    #[must_use]
    pub fn selected_card(&self) -> Option<&Card> {
        let index = self.selected_card?;
        self.board.column(self.selected_column).cards.get(index)
    }

    /// Returns the id of the selected card.
    #[must_use]
    pub fn selected_card_id(&self) -> Option<CardId> {
        self.selected_card().map(|card| card.id.clone())
    }

    /// Selects the given card, moving focus to its column.
    pub fn select_card(&mut self, id: &CardId) {
        if let Some(column) = self.board.locate_card(id) {
            self.selected_column = column;
            self.selected_card = self.board.column(column).position(id);
        }
    }

    /// Focuses `column` without selecting a card.
    pub fn select_column(&mut self, column: ColumnId) {
        self.selected_column = column;
        self.selected_card = None;
    }

    /// Clears the card selection.
    pub fn clear_selection(&mut self) {
        self.selected_card = None;
    }

    /// The scroll offset of every column, in board order.
    #[must_use]
    pub fn scroll_offsets(&self) -> [usize; ColumnId::COUNT] {
        self.columns.map(|view| view.scroll_offset())
    }

    /// Scrolls `column` by `delta` cards when `visible` cards fit in it.
    pub fn scroll_column(&mut self, column: ColumnId, delta: isize, visible: usize) {
        let total = self.board.column(column).len();
        self.columns[column.index()].scroll_by(delta, total, visible);
    }

    /// Clamps every column's scroll offset for `visible` cards per column.
    ///
    /// With `follow` set, the focused column also scrolls to bring the
    /// selected card into view.
    pub fn sync_scroll(&mut self, follow: bool, visible: usize) {
        for id in ColumnId::all() {
            let total = self.board.column(id).len();
            let selected = self
                .selected_card
                .filter(|_| follow && id == self.selected_column);
            self.columns[id.index()].scroll_to(selected, total, visible);
        }
    }

    /// Toggles the help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Moves focus one column to the left, wrapping around.
    pub fn navigate_left(&mut self) {
        let index = (self.selected_column.index() + ColumnId::COUNT - 1) % ColumnId::COUNT;
        self.focus_column_index(index);
    }

    /// Moves focus one column to the right, wrapping around.
    pub fn navigate_right(&mut self) {
        let index = (self.selected_column.index() + 1) % ColumnId::COUNT;
        self.focus_column_index(index);
    }

    fn focus_column_index(&mut self, index: usize) {
        if let Some(column) = ColumnId::from_index(index) {
            self.selected_column = column;
            self.clamp_card_selection();
        }
    }

    /// Moves the card selection up within the focused column, wrapping.
    pub fn navigate_up(&mut self) {
        let len = self.board.column(self.selected_column).len();
        if len == 0 {
            self.selected_card = None;
            return;
        }

        self.selected_card = Some(match self.selected_card {
            Some(idx) if idx > 0 => idx - 1,
            Some(_) => len - 1,
            None => 0,
        });
    }

    /// Moves the card selection down within the focused column, wrapping.
    pub fn navigate_down(&mut self) {
        let len = self.board.column(self.selected_column).len();
        if len == 0 {
            self.selected_card = None;
            return;
        }

        self.selected_card = Some(match self.selected_card {
            Some(idx) if idx + 1 < len => idx + 1,
            _ => 0,
        });
    }

    fn clamp_card_selection(&mut self) {
        let len = self.board.column(self.selected_column).len();
        self.selected_card = match self.selected_card {
            _ if len == 0 => None,
            Some(idx) => Some(idx.min(len - 1)),
            None => None,
        };
    }

    /// Adds a card to `column` and selects it.
    pub fn add_card(&mut self, column: ColumnId) {
        let command = self.column_view(column).add_card();
        if self.dispatch(command) {
            let len = self.board.column(column).len();
            self.selected_column = column;
            self.selected_card = len.checked_sub(1);
        }
    }

    /// Deletes the given card through its view.
    ///
    /// Returns `false` for cards that cannot be deleted.
    pub fn delete_card(&mut self, id: &CardId) -> bool {
        match self.cards.get(id).and_then(CardView::delete) {
            Some(command) => self.dispatch(command),
            None => false,
        }
    }

    /// Deletes the selected card.
    pub fn delete_selected(&mut self) -> bool {
        self.selected_card_id()
            .is_some_and(|id| self.delete_card(&id))
    }

    /// Returns the card currently being edited.
    #[must_use]
    pub fn editing_card(&self) -> Option<&CardView> {
        self.cards.values().find(|view| view.is_editing())
    }

    /// Returns `true` while a card title is being edited.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editing_card().is_some()
    }

    /// Returns the view of the card being edited, mutably.
    pub fn editing_card_mut(&mut self) -> Option<&mut CardView> {
        self.cards.values_mut().find(|view| view.is_editing())
    }

    /// Starts editing the given card. Any other edit is saved first.
    pub fn begin_edit(&mut self, id: &CardId) -> bool {
        if self.editing_card().is_some_and(|view| view.card_id() != id) {
            self.commit_edit();
        }
        self.cards.get_mut(id).is_some_and(CardView::begin_edit)
    }

    /// Starts editing the selected card.
    pub fn begin_edit_selected(&mut self) -> bool {
        self.selected_card_id()
            .is_some_and(|id| self.begin_edit(&id))
    }

    /// Saves the edit in progress.
    ///
    /// Returns `true` if the board changed.
    pub fn commit_edit(&mut self) -> bool {
        match self.editing_card_mut().and_then(CardView::save) {
            Some(command) => self.dispatch(command),
            None => false,
        }
    }

    /// Abandons the edit in progress.
    pub fn cancel_edit(&mut self) {
        if let Some(view) = self.editing_card_mut() {
            view.cancel();
        }
    }

    /// Starts dragging the given card.
    ///
    /// Returns `false` if the card refuses the drag.
    pub fn begin_drag(&mut self, id: &CardId) -> bool {
        self.end_drag();

        let mut transfer = DataTransfer::new();
        let started = self
            .cards
            .get_mut(id)
            .is_some_and(|view| view.drag_start(&mut transfer));
        if started {
            debug!(card = %id, "drag started");
            self.drag = Some(DragSession {
                card: id.clone(),
                transfer,
                over: None,
            });
        }
        started
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Moves the drag over `column`, or off the board for `None`.
    pub fn drag_over(&mut self, column: Option<ColumnId>) {
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        if drag.over == column {
            return;
        }

        if let Some(previous) = drag.over.take() {
            self.columns[previous.index()].drag_leave();
        }
        if let Some(column) = column
            && self.columns[column.index()].drag_over(&mut drag.transfer)
        {
            drag.over = Some(column);
        }
    }

    /// Drops the dragged card on `column` and ends the drag.
    ///
    /// Returns `true` if the card moved.
    pub fn finish_drag(&mut self, column: Option<ColumnId>) -> bool {
        self.drag_over(column);

        let Some(drag) = self.drag.take() else {
            return false;
        };
        let command = drag
            .over
            .and_then(|target| self.columns[target.index()].drop(&drag.transfer));
        self.end_drag_of(&drag.card);

        let moved = command.is_some_and(|command| self.dispatch(command));
        if moved {
            self.select_card(&drag.card);
        }
        moved
    }

    /// Ends the drag in progress without dropping.
    pub fn cancel_drag(&mut self) {
        if self.drag.is_some() {
            debug!("drag cancelled");
        }
        self.end_drag();
    }

    fn end_drag(&mut self) {
        if let Some(drag) = self.drag.take() {
            self.end_drag_of(&drag.card);
        }
    }

    fn end_drag_of(&mut self, card: &CardId) {
        for column in &mut self.columns {
            column.drag_leave();
        }
        if let Some(view) = self.cards.get_mut(card) {
            view.drag_end();
        }
    }

    /// Moves the selected card to the adjacent column.
    ///
    /// Goes through the same payload and drop path as a mouse drag.
    /// Returns `true` if the card moved.
    pub fn move_selected(&mut self, direction: Direction) -> bool {
        let Some(id) = self.selected_card_id() else {
            return false;
        };
        let target = match direction {
            Direction::Left => self.selected_column.previous(),
            Direction::Right => self.selected_column.next(),
        };
        let Some(target) = target else {
            return false;
        };

        self.begin_drag(&id) && self.finish_drag(Some(target))
    }
}
