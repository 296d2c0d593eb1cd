//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages.

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use kanban_protocol::Message;

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts an event (keyboard or mouse) to an application message.
///
/// While a card title is being edited, keys are routed through
/// [`key_to_edit_message`] instead of the board bindings.
#[must_use]
pub fn event_to_message(event: &Event, is_editing: bool) -> Option<Message> {
    match event {
        Event::Key(key) if is_editing => key_to_edit_message(*key),
        Event::Key(key) => key_to_message(*key),
        Event::Mouse(mouse) => mouse_to_message(mouse),
        _ => None,
    }
}

/// Converts a mouse event to an application message.
///
/// The left button's press, drag and release each map to their own
/// message carrying the pointer position. The wheel scrolls.
#[must_use]
fn mouse_to_message(mouse: &MouseEvent) -> Option<Message> {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Message::MouseDown { column, row }),
        MouseEventKind::Drag(MouseButton::Left) => Some(Message::MouseDrag { column, row }),
        MouseEventKind::Up(MouseButton::Left) => Some(Message::MouseUp { column, row }),
        MouseEventKind::ScrollUp => Some(Message::ScrollUp { column, row }),
        MouseEventKind::ScrollDown => Some(Message::ScrollDown { column, row }),
        _ => None,
    }
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

/// Converts a terminal key event to an application message.
///
/// Returns `Some(Message)` if the key event maps to an action,
/// or `None` if the key is not bound.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Esc` | Cancel drag or clear selection |
/// | `Left` / `Right` | Focus previous / next column |
/// | `Up` / `Down` | Select previous / next card |
/// | `Shift+Left` / `Shift+Right` | Move card to previous / next column |
/// | `a` | Add card |
/// | `d` or `Delete` | Delete card |
/// | `e` or `Enter` | Edit card title |
/// | `?` | Toggle help |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if is_ctrl_c(&key) {
        return Some(Message::Quit);
    }

    if key.modifiers.contains(KeyModifiers::SHIFT) {
        match key.code {
            KeyCode::Left => return Some(Message::MoveCardLeft),
            KeyCode::Right => return Some(Message::MoveCardRight),
            _ => {}
        }
    }

    match key.code {
        KeyCode::Esc => Some(Message::Escape),

        // Navigation (arrow keys only)
        KeyCode::Left => Some(Message::NavigateLeft),
        KeyCode::Right => Some(Message::NavigateRight),
        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),

        // Card actions
        KeyCode::Char('a') => Some(Message::AddCard),
        KeyCode::Char('d') | KeyCode::Delete => Some(Message::DeleteCard),
        KeyCode::Char('e') | KeyCode::Enter => Some(Message::StartEdit),

        KeyCode::Char('?') => Some(Message::ToggleHelp),

        _ => None,
    }
}

/// Converts a key event to an edit-mode message.
///
/// # Key Bindings (Edit Mode)
///
/// | Key | Action |
/// |-----|--------|
/// | `Enter` | Save |
/// | `Esc` | Cancel |
/// | `Backspace` / `Delete` | Delete before / under cursor |
/// | `Left` / `Right` / `Home` / `End` | Move cursor |
/// | Any char | Insert |
/// | `Ctrl+C` | Quit |
#[must_use]
pub fn key_to_edit_message(key: KeyEvent) -> Option<Message> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if is_ctrl_c(&key) {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Enter => Some(Message::EditConfirm),
        KeyCode::Esc => Some(Message::EditCancel),
        KeyCode::Backspace => Some(Message::EditBackspace),
        KeyCode::Delete => Some(Message::EditDelete),
        KeyCode::Left => Some(Message::EditCursorLeft),
        KeyCode::Right => Some(Message::EditCursorRight),
        KeyCode::Home => Some(Message::EditCursorHome),
        KeyCode::End => Some(Message::EditCursorEnd),
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(Message::EditInput { ch })
        }
        _ => None,
    }
}
