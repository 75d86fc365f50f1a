use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::app::App;

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    Previous,
    Next,
    HoverEnter,
    HoverLeave,
    FocusEmail,
    LeaveInput,
    Submit,
    InputChar(char),
    Backspace,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    if app.is_input_mode() {
        return handle_input_mode(key);
    }

    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Carousel navigation
        (KeyCode::Char('k'), KeyModifiers::NONE) => Action::Previous,
        (KeyCode::Char('j'), KeyModifiers::NONE) => Action::Next,
        (KeyCode::Up, _) | (KeyCode::Left, _) => Action::Previous,
        (KeyCode::Down, _) | (KeyCode::Right, _) => Action::Next,

        // Email form
        (KeyCode::Tab, _) | (KeyCode::Char('e'), KeyModifiers::NONE) => Action::FocusEmail,

        _ => Action::None,
    }
}

/// Keys while typing an email address
fn handle_input_mode(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) | (KeyCode::Tab, _) => Action::LeaveInput,
        (KeyCode::Enter, _) => Action::Submit,
        (KeyCode::Backspace, _) => Action::Backspace,
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            Action::InputChar(c)
        }
        _ => Action::None,
    }
}

/// Translate mouse movement and clicks into actions
///
/// Moving onto the item stack emits `HoverEnter` once, moving off emits
/// `HoverLeave` once. Left clicks hit the navigation buttons and the input.
pub fn handle_mouse_event(mouse: MouseEvent, app: &App) -> Action {
    let position = Position::new(mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            let over = app.is_over_carousel(mouse.column, mouse.row);
            match (over, app.hovering) {
                (true, false) => Action::HoverEnter,
                (false, true) => Action::HoverLeave,
                _ => Action::None,
            }
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if app.hit.previous.contains(position) {
                Action::Previous
            } else if app.hit.next.contains(position) {
                Action::Next
            } else if app.hit.email.contains(position) {
                Action::FocusEmail
            } else if app.is_input_mode() {
                Action::LeaveInput
            } else {
                Action::None
            }
        }
        _ => Action::None,
    }
}
