use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::gating::Gates;

/// What a keystroke means to the game
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Type(char),
    Delete,
    Submit,
    NewGame,
    Quit,
}

impl Action {
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => Some(Action::Quit),
            KeyCode::Char('n') if ctrl => Some(Action::NewGame),
            KeyCode::Char(_) if ctrl => None,
            KeyCode::Char(c) if c.is_ascii_alphabetic() => Some(Action::Type(c)),
            KeyCode::Backspace => Some(Action::Delete),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Right => Some(Action::NewGame),
            KeyCode::Esc => Some(Action::Quit),
            _ => None,
        }
    }

    /// Whether the gates let this action through to the game
    pub fn permitted(&self, gates: &Gates) -> bool {
        match self {
            Action::Type(_) => gates.letters,
            Action::Delete => gates.delete,
            Action::Submit => gates.submit,
            Action::NewGame | Action::Quit => true,
        }
    }
}
