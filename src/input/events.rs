//! Generic input event types, independent of any windowing backend.

use serde::Deserialize;

/// Generic key representation.
///
/// Backends (or the script player) map their native key codes to these
/// values before handing them to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Escape key
    Escape,
    /// Return/Enter key
    Return,
    /// Backspace key
    Backspace,
    /// Tab key
    Tab,
    /// Space bar
    Space,
    /// Shift modifier
    Shift,
    /// Ctrl modifier
    Ctrl,
    /// Alt modifier
    Alt,
    /// Unmapped or unrecognized key
    Unknown,
}

impl Key {
    /// Parses a key name as written in scripts: a single character, or one of
    /// `Space`, `Return`/`Enter`, `Escape`/`Esc`, `Backspace`, `Tab`, `Shift`,
    /// `Ctrl`/`Control`, `Alt` (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Some(if c == ' ' { Key::Space } else { Key::Char(c) });
        }

        match name.to_ascii_lowercase().as_str() {
            "space" => Some(Key::Space),
            "return" | "enter" => Some(Key::Return),
            "escape" | "esc" => Some(Key::Escape),
            "backspace" => Some(Key::Backspace),
            "tab" => Some(Key::Tab),
            "shift" => Some(Key::Shift),
            "ctrl" | "control" => Some(Key::Ctrl),
            "alt" => Some(Key::Alt),
            _ => None,
        }
    }

    /// Name used for keybinding lookup, or `None` for modifiers and unknown keys.
    pub fn binding_name(&self) -> Option<String> {
        match self {
            Key::Char(c) => Some(c.to_string()),
            Key::Escape => Some("Escape".to_string()),
            Key::Return => Some("Return".to_string()),
            Key::Backspace => Some("Backspace".to_string()),
            Key::Tab => Some("Tab".to_string()),
            Key::Space => Some("Space".to_string()),
            Key::Shift | Key::Ctrl | Key::Alt | Key::Unknown => None,
        }
    }
}

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    /// Left mouse button (place endpoints, paint barriers, hot-zones)
    Left,
    /// Right mouse button (clear endpoints, erase barriers)
    Right,
    /// Middle mouse button (currently unused)
    Middle,
}

/// One raw input event, in pixel coordinates of the 440x280 surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    PointerMoved { x: i32, y: i32 },
    ButtonPressed { button: MouseButton, x: i32, y: i32 },
    ButtonReleased { button: MouseButton, x: i32, y: i32 },
    KeyPressed(Key),
    KeyReleased(Key),
}
