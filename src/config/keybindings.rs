//! Keybinding configuration types and parsing.
//!
//! Every session action can be bound to any number of key combinations in
//! `config.toml`; the session resolves key presses through the action map
//! built here.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// All actions that can be bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // Piece selection
    SelectRook,
    SelectQueen,
    SelectKnight,
    CyclePiece,

    // Run control
    ToggleAnimate,
    Run,

    // Resets (only honoured once a run has finished)
    FullReset,
    PartialReset,
}

/// A single keybinding: a key name with optional modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyBinding {
    /// Parse a keybinding string like "Ctrl+Shift+R", "Space" or "1".
    ///
    /// Modifiers may appear in any order and spaces around '+' are ignored.
    /// Key names are stored lowercased, so "D" and "d" are the same binding.
    /// A trailing "+" names the plus key itself ("Ctrl++").
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty keybinding string".to_string());
        }

        let compact: String = s.split('+').map(str::trim).collect::<Vec<_>>().join("+");
        let (body, plus_key) = match compact.strip_suffix("++") {
            Some(rest) => (rest, true),
            None if compact == "+" => ("", true),
            None => (compact.as_str(), false),
        };

        let mut binding = Self {
            key: String::new(),
            ctrl: false,
            shift: false,
            alt: false,
        };
        let mut key_parts = Vec::new();

        for part in body.split('+').filter(|part| !part.is_empty()) {
            match part.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => binding.ctrl = true,
                "shift" => binding.shift = true,
                "alt" => binding.alt = true,
                _ => key_parts.push(part),
            }
        }

        if plus_key {
            key_parts.push("+");
        }

        match key_parts.as_slice() {
            [] => Err(format!("No key specified in: {}", s)),
            [key] => {
                binding.key = key.to_ascii_lowercase();
                Ok(binding)
            }
            _ => Err(format!("More than one key in: {}", s)),
        }
    }

    /// Check if this keybinding matches a key name under the given modifiers.
    pub fn matches(&self, key: &str, ctrl: bool, shift: bool, alt: bool) -> bool {
        self.key.eq_ignore_ascii_case(key)
            && self.ctrl == ctrl
            && self.shift == shift
            && self.alt == alt
    }
}

/// Configuration for all keybindings.
///
/// Users specify them in config.toml as:
/// ```toml
/// [keybindings]
/// run = ["Space", "R"]
/// toggle_animate = ["D"]
/// cycle_piece = ["Tab"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct KeybindingsConfig {
    #[serde(default = "default_select_rook")]
    pub select_rook: Vec<String>,

    #[serde(default = "default_select_queen")]
    pub select_queen: Vec<String>,

    #[serde(default = "default_select_knight")]
    pub select_knight: Vec<String>,

    /// Unbound by default; the on-screen piece selector cycles as well
    #[serde(default)]
    pub cycle_piece: Vec<String>,

    #[serde(default = "default_toggle_animate")]
    pub toggle_animate: Vec<String>,

    #[serde(default = "default_run")]
    pub run: Vec<String>,

    #[serde(default = "default_full_reset")]
    pub full_reset: Vec<String>,

    #[serde(default = "default_partial_reset")]
    pub partial_reset: Vec<String>,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            select_rook: default_select_rook(),
            select_queen: default_select_queen(),
            select_knight: default_select_knight(),
            cycle_piece: Vec::new(),
            toggle_animate: default_toggle_animate(),
            run: default_run(),
            full_reset: default_full_reset(),
            partial_reset: default_partial_reset(),
        }
    }
}

impl KeybindingsConfig {
    /// Binding lists paired with the action they trigger.
    fn entries(&self) -> [(&[String], Action); 8] {
        [
            (self.select_rook.as_slice(), Action::SelectRook),
            (self.select_queen.as_slice(), Action::SelectQueen),
            (self.select_knight.as_slice(), Action::SelectKnight),
            (self.cycle_piece.as_slice(), Action::CyclePiece),
            (self.toggle_animate.as_slice(), Action::ToggleAnimate),
            (self.run.as_slice(), Action::Run),
            (self.full_reset.as_slice(), Action::FullReset),
            (self.partial_reset.as_slice(), Action::PartialReset),
        ]
    }

    /// Build a lookup map from keybindings to actions.
    /// Returns an error if any keybinding string is invalid or if duplicates are detected.
    pub fn build_action_map(&self) -> Result<HashMap<KeyBinding, Action>, String> {
        let mut map = HashMap::new();

        for (bindings, action) in self.entries() {
            for binding_str in bindings {
                let binding = KeyBinding::parse(binding_str)?;
                if let Some(existing) = map.insert(binding, action) {
                    return Err(format!(
                        "Duplicate keybinding '{}' assigned to both {:?} and {:?}",
                        binding_str, existing, action
                    ));
                }
            }
        }

        Ok(map)
    }

    /// Human-readable summary of the bindings, one action per line.
    pub fn describe(&self) -> Vec<String> {
        self.entries()
            .iter()
            .map(|(bindings, action)| {
                let keys = if bindings.is_empty() {
                    "(unbound)".to_string()
                } else {
                    bindings.join(", ")
                };
                format!("{:?}: {}", action, keys)
            })
            .collect()
    }
}

// =============================================================================
// Default keybinding functions
// =============================================================================

fn default_select_rook() -> Vec<String> {
    vec!["1".to_string()]
}

fn default_select_queen() -> Vec<String> {
    vec!["2".to_string()]
}

fn default_select_knight() -> Vec<String> {
    vec!["3".to_string()]
}

fn default_toggle_animate() -> Vec<String> {
    vec!["D".to_string()]
}

fn default_run() -> Vec<String> {
    vec!["Space".to_string()]
}

fn default_full_reset() -> Vec<String> {
    vec!["Return".to_string()]
}

fn default_partial_reset() -> Vec<String> {
    vec!["I".to_string()]
}
