//! Keyboard key names for accessible widgets.
//!
//! `KeyboardEvent.code` depends on the physical layout, so handlers should
//! match on `KeyboardEvent.key`, whose values are listed here.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Tab,
    ArrowDown,
    ArrowUp,
    ArrowLeft,
    ArrowRight,
    Enter,
    Esc,
    Space,
    Shift,
    KeyF,
    Ctrl,
    At,
    Delete,
    Backspace,
}

impl KeyCode {
    pub const ALL: [KeyCode; 14] = [
        KeyCode::Tab,
        KeyCode::ArrowDown,
        KeyCode::ArrowUp,
        KeyCode::ArrowLeft,
        KeyCode::ArrowRight,
        KeyCode::Enter,
        KeyCode::Esc,
        KeyCode::Space,
        KeyCode::Shift,
        KeyCode::KeyF,
        KeyCode::Ctrl,
        KeyCode::At,
        KeyCode::Delete,
        KeyCode::Backspace,
    ];

    /// The `KeyboardEvent.key` value.
    pub fn as_str(self) -> &'static str {
        match self {
            KeyCode::Tab => "Tab",
            KeyCode::ArrowDown => "ArrowDown",
            KeyCode::ArrowUp => "ArrowUp",
            KeyCode::ArrowLeft => "ArrowLeft",
            KeyCode::ArrowRight => "ArrowRight",
            KeyCode::Enter => "Enter",
            KeyCode::Esc => "Escape",
            KeyCode::Space => "Space",
            KeyCode::Shift => "Shift",
            KeyCode::KeyF => "KEY_F",
            KeyCode::Ctrl => "Control",
            KeyCode::At => "@",
            KeyCode::Delete => "Delete",
            KeyCode::Backspace => "Backspace",
        }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyCode {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KeyCode::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| UnknownKey(s.to_string()))
    }
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
#[error("unknown key name: {0}")]
pub struct UnknownKey(pub String);
