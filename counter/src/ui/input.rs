//! Key bindings.

use crate::types::CounterAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the application to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    /// Request an increment
    Increment,
    /// Request a decrement
    Decrement,
    /// Leave the application
    Quit,
}

impl UiCommand {
    /// Map a key event to a command
    ///
    /// Only presses count; releases and repeats map to nothing.
    #[must_use]
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if is_ctrl_char(key, 'c') {
            return Some(Self::Quit);
        }

        match key.code {
            KeyCode::Char('+' | '=' | 'i') | KeyCode::Up => Some(Self::Increment),
            KeyCode::Char('-' | '_' | 'd') | KeyCode::Down => Some(Self::Decrement),
            KeyCode::Char('q') | KeyCode::Esc => Some(Self::Quit),
            _ => None,
        }
    }

    /// The store action this command sends, if any
    #[must_use]
    pub const fn action(self) -> Option<CounterAction> {
        match self {
            Self::Increment => Some(CounterAction::Increment),
            Self::Decrement => Some(CounterAction::Decrement),
            Self::Quit => None,
        }
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
