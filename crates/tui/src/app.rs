//! Main application struct and run loop.
//!
//! This module provides the `App` struct which orchestrates the TUI
//! application lifecycle including event handling, state updates, and rendering.

use std::time::Instant;

use kanban_config::Config;
use kanban_protocol::{Board, ColumnId, Message};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tracing::{debug, info};

use crate::{
    AppState,
    event::{event_to_message, poll_event},
    gesture::{Gesture, GestureTracker},
    layout::{
        BoardLayout, HitTarget, MIN_HEIGHT, MIN_WIDTH, ScreenAreas, card_capacity, is_too_small,
    },
    state::Direction,
    terminal::AppTerminal,
    widgets::{render_board, render_help_overlay, render_status_bar},
};

/// The main application struct.
///
/// Manages the application state and provides the main event loop.
#[derive(Debug)]
pub struct App {
    state: AppState,
    should_quit: bool,
    /// Last known terminal area, used for mouse hit-testing.
    last_area: Rect,
    /// Turns raw mouse events into clicks and drags.
    gestures: GestureTracker,
    /// The application configuration.
    config: Config,
}

impl App {
    /// Creates a new application with the given board.
    ///
    /// # Examples
    ///
    /// ```
    /// use kanban_protocol::seed::seed_board;
    /// use kanban_tui::App;
    ///
    /// let app = App::new(seed_board());
    /// assert_eq!(app.state().board.total_cards(), 8);
    /// ```
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self::with_config(board, Config::default())
    }

    /// Creates a new application with the given board and configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use kanban_config::Config;
    /// use kanban_protocol::Board;
    /// use kanban_tui::App;
    ///
    /// let app = App::with_config(Board::new(), Config::default());
    /// assert!(app.config().input.mouse);
    /// ```
    #[must_use]
    pub fn with_config(board: Board, config: Config) -> Self {
        Self {
            state: AppState::new(board),
            should_quit: false,
            last_area: Rect::default(),
            gestures: GestureTracker::new(config.input.double_click_window()),
            config,
        }
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns a reference to the application configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns `true` once the user asked to quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Updates the application state based on a message.
    ///
    /// When the help overlay is visible, most messages are intercepted to
    /// dismiss the help instead of their normal action. While a title is
    /// being edited, only edit messages and mouse presses are handled.
    ///
    /// Columns scroll to a newly selected card; otherwise their scroll
    /// position is left alone.
    pub fn update(&mut self, msg: Message) {
        let before = (self.state.selection(), self.state.selected_card_id());
        self.handle(msg);

        if let Some(visible) = self.card_capacity() {
            let after = (self.state.selection(), self.state.selected_card_id());
            self.state.sync_scroll(after != before, visible);
        }
    }

    fn handle(&mut self, msg: Message) {
        if msg == Message::Quit {
            self.should_quit = true;
            return;
        }

        // When help is visible, most input should dismiss it
        if self.state.help_visible {
            match msg {
                Message::ToggleHelp | Message::Escape => self.state.toggle_help(),
                Message::MouseDrag { .. } | Message::MouseUp { .. } => {}
                _ => self.state.help_visible = false,
            }
            return;
        }

        if self.state.is_editing() {
            self.update_editing(msg);
            return;
        }

        match msg {
            Message::Escape => {
                if self.state.is_dragging() {
                    self.state.cancel_drag();
                    self.gestures.cancel();
                } else {
                    self.state.clear_selection();
                }
            }
            Message::NavigateLeft => self.state.navigate_left(),
            Message::NavigateRight => self.state.navigate_right(),
            Message::NavigateUp => self.state.navigate_up(),
            Message::NavigateDown => self.state.navigate_down(),
            Message::ToggleHelp => self.state.toggle_help(),
            Message::AddCard => self.state.add_card(self.state.selected_column),
            Message::DeleteCard => {
                self.state.delete_selected();
            }
            Message::StartEdit => {
                self.state.begin_edit_selected();
            }
            Message::MoveCardLeft => {
                self.state.move_selected(Direction::Left);
            }
            Message::MoveCardRight => {
                self.state.move_selected(Direction::Right);
            }
            Message::MouseDown { column, row } => self.mouse_down(column, row),
            Message::MouseDrag { column, row } => self.mouse_drag(column, row),
            Message::MouseUp { column, row } => self.mouse_up(column, row),
            Message::ScrollUp { column, row } => self.scroll(column, row, -1),
            Message::ScrollDown { column, row } => self.scroll(column, row, 1),
            _ => {}
        }
    }

    fn update_editing(&mut self, msg: Message) {
        match msg {
            Message::EditConfirm => {
                self.state.commit_edit();
            }
            Message::EditCancel => self.state.cancel_edit(),
            Message::MouseDown { column, row } => self.mouse_down(column, row),
            Message::MouseDrag { column, row } => self.mouse_drag(column, row),
            Message::MouseUp { column, row } => self.mouse_up(column, row),
            msg => {
                let Some(view) = self.state.editing_card_mut() else {
                    return;
                };
                match msg {
                    Message::EditInput { ch } => view.insert_char(ch),
                    Message::EditBackspace => view.backspace(),
                    Message::EditDelete => view.delete_forward(),
                    Message::EditCursorLeft => view.cursor_left(),
                    Message::EditCursorRight => view.cursor_right(),
                    Message::EditCursorHome => view.cursor_home(),
                    Message::EditCursorEnd => view.cursor_end(),
                    _ => {}
                }
            }
        }
    }

    /// Computes the board geometry of the last rendered frame.
    ///
    /// Returns `None` when the terminal was too small to show the board.
    fn board_layout(&self) -> Option<BoardLayout> {
        if is_too_small(self.last_area) {
            return None;
        }
        let areas = ScreenAreas::split(self.last_area);
        Some(BoardLayout::compute(
            areas.board,
            &self.state.board,
            self.state.scroll_offsets(),
        ))
    }

    /// Number of cards that fit in a column of the last rendered frame.
    fn card_capacity(&self) -> Option<usize> {
        (!is_too_small(self.last_area))
            .then(|| card_capacity(ScreenAreas::split(self.last_area).board))
    }

    /// Scrolls the column under the pointer by `delta` cards.
    fn scroll(&mut self, x: u16, y: u16, delta: isize) {
        let (Some(column), Some(visible)) = (self.column_at(x, y), self.card_capacity()) else {
            return;
        };
        self.state.scroll_column(column, delta, visible);
    }

    fn column_at(&self, x: u16, y: u16) -> Option<ColumnId> {
        self.board_layout()?.column_at(x, y)
    }

    /// Handles a left button press.
    ///
    /// Pressing anywhere but the card being edited saves the edit. A press
    /// on a delete button deletes the card and ends the gesture there.
    fn mouse_down(&mut self, x: u16, y: u16) {
        let target = self.board_layout().and_then(|layout| layout.hit_test(x, y));

        if let Some(editing) = self.state.editing_card().map(|view| view.card_id().clone()) {
            let on_editor =
                matches!(&target, Some(HitTarget::Card { card, .. }) if *card == editing);
            if !on_editor {
                self.state.commit_edit();
            }
        }

        if let Some(HitTarget::DeleteButton { card, .. }) = &target {
            self.state.delete_card(card);
            self.gestures.reset();
            return;
        }

        self.gestures.press(x, y, target);
    }

    fn mouse_drag(&mut self, x: u16, y: u16) {
        match self.gestures.motion(x, y) {
            Some(Gesture::DragStart { card, .. }) => {
                if self.state.begin_drag(&card) {
                    let over = self.column_at(x, y);
                    self.state.drag_over(over);
                } else {
                    self.gestures.cancel();
                }
            }
            Some(Gesture::DragMove { x, y }) => {
                let over = self.column_at(x, y);
                self.state.drag_over(over);
            }
            _ => {}
        }
    }

    fn mouse_up(&mut self, x: u16, y: u16) {
        let target = self.board_layout().and_then(|layout| layout.hit_test(x, y));

        match self.gestures.release(x, y, target, Instant::now()) {
            Some(Gesture::Drop { x, y }) => {
                let over = self.column_at(x, y);
                if !self.state.finish_drag(over) {
                    debug!(x, y, "drop did not move the card");
                }
            }
            Some(Gesture::Click(target)) => self.click(target),
            Some(Gesture::DoubleClick(target)) => self.double_click(target),
            _ => {}
        }
    }

    fn click(&mut self, target: HitTarget) {
        match target {
            HitTarget::HeaderAdd(column) | HitTarget::AddButton(column) => {
                self.state.add_card(column);
            }
            // Handled on press
            HitTarget::DeleteButton { .. } => {}
            HitTarget::Card { card, .. } => self.state.select_card(&card),
            HitTarget::Column(column) => self.state.select_column(column),
        }
    }

    fn double_click(&mut self, target: HitTarget) {
        match target {
            HitTarget::Card { card, .. } => {
                self.state.select_card(&card);
                self.state.begin_edit(&card);
            }
            other => self.click(other),
        }
    }

    /// Renders the application UI.
    ///
    /// Also records the frame area so mouse events can be resolved against
    /// what was drawn.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.last_area = area;

        // Check if terminal is too small for any useful rendering
        if is_too_small(area) {
            self.render_terminal_too_small(frame, area);
            return;
        }

        let areas = ScreenAreas::split(area);
        if let Some(header) = areas.header {
            self.render_header(frame, header);
        }

        // The area may have changed since the last update
        self.state.sync_scroll(false, card_capacity(areas.board));
        let layout =
            BoardLayout::compute(areas.board, &self.state.board, self.state.scroll_offsets());
        let buf = frame.buffer_mut();
        render_board(&self.state, &layout, buf);
        render_status_bar(&self.state, areas.status, buf);

        // Render help overlay on top if visible
        if self.state.help_visible {
            render_help_overlay(area, buf);
        }
    }

    /// Renders a message indicating the terminal is too small.
    fn render_terminal_too_small(&self, frame: &mut Frame, area: Rect) {
        let message = format!(
            "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );

        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .wrap(ratatui::widgets::Wrap { trim: false });

        // Center the message vertically
        let vertical_offset = area.height.saturating_sub(2) / 2;
        let centered_area = Rect {
            x: area.x,
            y: area.y + vertical_offset,
            width: area.width,
            height: area.height.saturating_sub(vertical_offset),
        };

        frame.render_widget(paragraph, centered_area);
    }

    /// Runs the main application loop.
    ///
    /// This function returns once the user quits the application.
    /// It polls for events, updates state, and renders the UI.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use kanban_protocol::seed::seed_board;
    /// use kanban_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut terminal = terminal::setup_terminal(true)?;
    ///     let mut app = App::new(seed_board());
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        info!(cards = self.state.board.total_cards(), "event loop started");

        while !self.should_quit {
            terminal.draw(|frame| self.view(frame))?;

            // Poll off the runtime threads; the poll blocks for its timeout
            let event = tokio::task::spawn_blocking(poll_event).await??;
            if let Some(msg) = event.and_then(|e| event_to_message(&e, self.state.is_editing())) {
                self.update(msg);
            }
        }

        info!("event loop stopped");
        Ok(())
    }

    /// Renders the header bar with title and help cue.
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Split inner area: title left, help cue right
        let [title_area, help_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(17), // "Press ? for help" = 16 chars + padding
        ])
        .areas(inner);

        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                "kanban",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled("Drag cards between columns", Style::default().fg(Color::White)),
        ]));
        frame.render_widget(title, title_area);

        let help_cue = Paragraph::new(Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" for help", Style::default().fg(Color::DarkGray)),
        ]))
        .alignment(Alignment::Right);
        frame.render_widget(help_cue, help_area);
    }
}
