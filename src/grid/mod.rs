//! Grid data model: cells, the protected border, and placement invariants.
//!
//! The editable interior is 20 columns by 12 rows of 20px cells, drawn inside
//! a 22x14 lattice (440x280 px). A two-cell-thick ring of permanent barriers
//! surrounds the interior so that pieces with long moves (knights) can never
//! step off the board in a single move.

pub mod cell;
pub mod model;

pub use cell::Cell;
pub use model::GridModel;

use crate::util::Rect;

/// Width and height of a single cell in pixels.
pub const CELL_SIZE_PX: i32 = 20;

/// Number of editable interior columns.
pub const INTERIOR_COLUMNS: i32 = 20;

/// Number of editable interior rows.
pub const INTERIOR_ROWS: i32 = 12;

/// Thickness of the permanent border ring, in cells.
pub const BORDER_THICKNESS: i32 = 2;

/// Columns of the drawn lattice (interior plus the inner border ring).
pub const LATTICE_COLUMNS: i32 = INTERIOR_COLUMNS + 2;

/// Rows of the drawn lattice (interior plus the inner border ring).
pub const LATTICE_ROWS: i32 = INTERIOR_ROWS + 2;

/// Pixel area that accepts grid edits. Everything outside it is either a
/// hot-zone or dead space.
pub const GRID_AREA: Rect = Rect {
    x: CELL_SIZE_PX,
    y: CELL_SIZE_PX,
    width: INTERIOR_COLUMNS * CELL_SIZE_PX,
    height: INTERIOR_ROWS * CELL_SIZE_PX,
};

/// Returns true if the pixel position lies inside the editable grid area.
pub fn in_grid_area(x: i32, y: i32) -> bool {
    GRID_AREA.contains(x, y)
}
