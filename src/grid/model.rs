//! Obstacle set and start/goal placement with invariant enforcement.

use super::{BORDER_THICKNESS, Cell, INTERIOR_COLUMNS, INTERIOR_ROWS};
use std::collections::HashSet;

/// Iterates every cell of the permanent border ring.
pub fn border_cells() -> impl Iterator<Item = Cell> {
    let min = 1 - BORDER_THICKNESS;
    let max_col = INTERIOR_COLUMNS + BORDER_THICKNESS;
    let max_row = INTERIOR_ROWS + BORDER_THICKNESS;
    (min..=max_col)
        .flat_map(move |col| (min..=max_row).map(move |row| Cell::new(col, row)))
        .filter(Cell::is_border)
}

/// Grid contents: barriers plus the optional start and goal cells.
///
/// Invariants held by construction:
/// - every border cell is in `barriers`
/// - `start` and `goal` are never barriers
/// - `start != goal` whenever both are set
///
/// Mutations that would break an invariant are silently ignored. Each mutator
/// returns whether it changed anything, which callers use only for logging and
/// mode transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridModel {
    barriers: HashSet<Cell>,
    start: Option<Cell>,
    goal: Option<Cell>,
}

impl Default for GridModel {
    fn default() -> Self {
        Self::new()
    }
}

impl GridModel {
    /// Creates a grid with border-only barriers and no endpoints.
    pub fn new() -> Self {
        Self {
            barriers: border_cells().collect(),
            start: None,
            goal: None,
        }
    }

    pub fn start(&self) -> Option<Cell> {
        self.start
    }

    pub fn goal(&self) -> Option<Cell> {
        self.goal
    }

    /// All barrier cells, border included.
    pub fn barriers(&self) -> &HashSet<Cell> {
        &self.barriers
    }

    pub fn is_barrier(&self, cell: Cell) -> bool {
        self.barriers.contains(&cell)
    }

    /// Returns true for permanent border cells, which can never be removed.
    pub fn is_border(&self, cell: Cell) -> bool {
        cell.is_border()
    }

    /// Returns true if the cell is the current start or goal.
    pub fn is_endpoint(&self, cell: Cell) -> bool {
        self.start == Some(cell) || self.goal == Some(cell)
    }

    /// Barriers placed by the user (border excluded).
    pub fn interior_barriers(&self) -> impl Iterator<Item = Cell> + '_ {
        self.barriers.iter().copied().filter(|cell| !cell.is_border())
    }

    /// Sets the start cell unless it collides with the goal or a barrier.
    pub fn place_start(&mut self, cell: Cell) -> bool {
        if self.goal == Some(cell) || self.is_barrier(cell) {
            return false;
        }
        self.start = Some(cell);
        true
    }

    /// Sets the goal cell unless it collides with the start or a barrier.
    pub fn place_goal(&mut self, cell: Cell) -> bool {
        if self.start == Some(cell) || self.is_barrier(cell) {
            return false;
        }
        self.goal = Some(cell);
        true
    }

    /// Adds a barrier unless the cell holds the start or goal.
    pub fn add_barrier(&mut self, cell: Cell) -> bool {
        if self.is_endpoint(cell) {
            return false;
        }
        self.barriers.insert(cell)
    }

    /// Removes a barrier. Border cells are permanent.
    pub fn remove_barrier(&mut self, cell: Cell) -> bool {
        if self.is_border(cell) {
            return false;
        }
        self.barriers.remove(&cell)
    }

    pub fn clear_start(&mut self) -> Option<Cell> {
        self.start.take()
    }

    pub fn clear_goal(&mut self) -> Option<Cell> {
        self.goal.take()
    }

    /// Clears both endpoints, leaving barriers untouched.
    pub fn clear_endpoints(&mut self) {
        self.start = None;
        self.goal = None;
    }

    /// Clears start, goal, and every non-border barrier.
    pub fn reset_full(&mut self) {
        self.clear_endpoints();
        self.barriers.retain(Cell::is_border);
    }
}
