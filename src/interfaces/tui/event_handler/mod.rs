//! Event handling for TUI
//!
//! Maps key presses to panel inputs. The TUI never mutates panel state
//! itself; everything goes through the event loop.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::panel::PanelInput;

/// What a key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Panel(PanelInput),
    Quit,
    Ignore,
}

/// Handle keyboard input
pub fn handle_key_event(key: KeyEvent) -> KeyAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => KeyAction::Panel(PanelInput::NavigateUp),
        KeyCode::Down | KeyCode::Char('j') => KeyAction::Panel(PanelInput::NavigateDown),
        KeyCode::Enter => KeyAction::Panel(PanelInput::Activate),
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        _ => KeyAction::Ignore,
    }
}
