//! Continuous barrier painting/erasing while a button is held.

use crate::grid::Cell;

/// Which drag operation a held button performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragAction {
    Paint,
    Erase,
}

/// Drag flags armed on button-down in barrier mode.
///
/// Painting and erasing are tracked independently; if both are armed,
/// painting wins. `last_cell` remembers the cell handled on the previous
/// frame so a resting pointer is only applied once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragState {
    pub painting: bool,
    pub erasing: bool,
    last_cell: Option<Cell>,
}

impl DragState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm_painting(&mut self) {
        self.painting = true;
        self.last_cell = None;
    }

    pub fn arm_erasing(&mut self) {
        self.erasing = true;
        self.last_cell = None;
    }

    /// Disarms both flags (any button release).
    pub fn disarm(&mut self) {
        *self = Self::default();
    }

    /// The active drag operation, if any.
    pub fn action(&self) -> Option<DragAction> {
        if self.painting {
            Some(DragAction::Paint)
        } else if self.erasing {
            Some(DragAction::Erase)
        } else {
            None
        }
    }

    /// Returns true the first frame the pointer rests on `cell`.
    pub fn enter_cell(&mut self, cell: Cell) -> bool {
        if self.last_cell == Some(cell) {
            return false;
        }
        self.last_cell = Some(cell);
        true
    }
}
