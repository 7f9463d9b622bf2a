//! Movement profiles: neighbor offsets and admissible distance estimates.

use crate::grid::Cell;
use crate::input::PieceType;

const ROOK_OFFSETS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

const QUEEN_OFFSETS: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Single-move offsets for a piece.
pub fn offsets(piece: PieceType) -> &'static [(i32, i32)] {
    match piece {
        PieceType::Rook => &ROOK_OFFSETS,
        PieceType::Queen => &QUEEN_OFFSETS,
        PieceType::Knight => &KNIGHT_OFFSETS,
    }
}

/// Cells reachable from `cell` in one move, ignoring obstacles.
pub fn neighbors(cell: Cell, piece: PieceType) -> impl Iterator<Item = Cell> {
    offsets(piece)
        .iter()
        .map(move |&(dc, dr)| cell.offset(dc, dr))
}

/// Lower bound on the number of moves between two cells.
///
/// Never overestimates, so A* stays optimal for every piece.
pub fn estimate(piece: PieceType, from: Cell, to: Cell) -> u32 {
    let dx = from.col.abs_diff(to.col);
    let dy = from.row.abs_diff(to.row);
    match piece {
        PieceType::Rook => dx + dy,
        PieceType::Queen => dx.max(dy),
        PieceType::Knight => {
            // A knight covers at most 2 cells along one axis and 3 cells of
            // combined distance per move.
            dx.max(dy).div_ceil(2).max((dx + dy).div_ceil(3))
        }
    }
}
