//! On-screen text controls and their hit areas.
//!
//! Each control is a line of status text; its clickable rectangle is derived
//! from the label length so the renderer and the hit-testing agree on what
//! the user sees.

use super::{Mode, PieceType};
use crate::util::Rect;

/// Estimated glyph width of the status font in pixels.
pub const GLYPH_WIDTH_ESTIMATE: i32 = 6;

/// Height of a status text line in pixels.
pub const LABEL_HEIGHT: i32 = 15;

/// Label of the partial-reset control.
pub const PARTIAL_RESET_LABEL: &str = "Press 'i' to reset.";

/// Clickable status-text controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HotZone {
    /// Cycles the movement piece
    PieceSelector,
    /// Toggles animated solving
    AnimateToggle,
    /// Starts the run (barrier prompt)
    RunControl,
    /// Full reset (restart prompt)
    FullReset,
    /// Partial reset back to barrier editing
    PartialReset,
}

impl HotZone {
    /// Hit-testing order. Earlier zones win when rectangles overlap.
    pub const ALL: [HotZone; 5] = [
        HotZone::PieceSelector,
        HotZone::AnimateToggle,
        HotZone::RunControl,
        HotZone::FullReset,
        HotZone::PartialReset,
    ];

    /// Top-left pixel where the zone's label is drawn.
    pub fn origin(self) -> (i32, i32) {
        match self {
            HotZone::PieceSelector => (320, 263),
            HotZone::AnimateToggle => (340, 1),
            HotZone::RunControl | HotZone::FullReset => (10, 1),
            HotZone::PartialReset => (150, 1),
        }
    }

    /// Returns true if the zone is clickable in `mode`.
    pub fn active_in(self, mode: Mode) -> bool {
        match self {
            HotZone::PieceSelector | HotZone::AnimateToggle => !mode.is_running(),
            HotZone::RunControl => mode == Mode::Barrier,
            HotZone::FullReset | HotZone::PartialReset => mode.is_finished(),
        }
    }
}

/// Label of the piece selector.
pub fn piece_label(piece: PieceType) -> String {
    format!("Move type: {}", piece.label())
}

/// Label of the animation toggle.
pub fn animate_label(animate: bool) -> String {
    format!("Animation: {}", if animate { "On" } else { "Off" })
}

/// Estimated pixel rectangle covered by `text` drawn at `origin`.
pub fn label_rect(origin: (i32, i32), text: &str) -> Option<Rect> {
    let width = text.chars().count() as i32 * GLYPH_WIDTH_ESTIMATE;
    Rect::new(origin.0, origin.1, width, LABEL_HEIGHT)
}
