//! Grid cell coordinates.

use super::{BORDER_THICKNESS, CELL_SIZE_PX, INTERIOR_COLUMNS, INTERIOR_ROWS};
use std::fmt;

/// One addressable grid square, identified by column and row.
///
/// Coordinates are signed: the outermost border ring sits at column/row -1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Maps a pixel position to the cell underneath it.
    ///
    /// Uses floor division so positions left of or above the origin land in
    /// negative cells rather than collapsing onto column/row 0.
    pub fn from_pixel(x: i32, y: i32) -> Self {
        Self {
            col: x.div_euclid(CELL_SIZE_PX),
            row: y.div_euclid(CELL_SIZE_PX),
        }
    }

    /// Returns the cell shifted by the given offset.
    pub fn offset(&self, dc: i32, dr: i32) -> Self {
        Self::new(self.col + dc, self.row + dr)
    }

    /// Returns true for cells of the editable interior.
    pub fn is_interior(&self) -> bool {
        (1..=INTERIOR_COLUMNS).contains(&self.col) && (1..=INTERIOR_ROWS).contains(&self.row)
    }

    /// Returns true for cells of the permanent border ring.
    pub fn is_border(&self) -> bool {
        let min = 1 - BORDER_THICKNESS;
        let max_col = INTERIOR_COLUMNS + BORDER_THICKNESS;
        let max_row = INTERIOR_ROWS + BORDER_THICKNESS;
        let within_ring = (min..=max_col).contains(&self.col) && (min..=max_row).contains(&self.row);
        within_ring && !self.is_interior()
    }
}

impl From<(i32, i32)> for Cell {
    fn from((col, row): (i32, i32)) -> Self {
        Self::new(col, row)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}
