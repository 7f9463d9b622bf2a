//! Incremental A* over the session grid.
//!
//! Each [`Solver::evaluate`] call pops one node from the open set and expands
//! it, which lets the session show the closed set growing frame by frame.

use super::moves::{estimate, neighbors};
use super::{Solution, Solver, SolverInput};
use crate::grid::Cell;
use crate::input::PieceType;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Open-set entry. Ordered so the `BinaryHeap` pops the lowest `f` first,
/// breaking ties on the lower estimate, then on cell order for determinism.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenNode {
    f: u32,
    h: u32,
    cell: Cell,
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (BinaryHeap is max-heap by default)
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.cell.cmp(&self.cell))
    }
}

/// A* search for a single piece type between two cells.
pub struct AStar {
    goal: Cell,
    piece: PieceType,
    barriers: HashSet<Cell>,
    open: BinaryHeap<OpenNode>,
    g_score: HashMap<Cell, u32>,
    came_from: HashMap<Cell, Cell>,
    closed_set: HashSet<Cell>,
    solution: Solution,
}

impl AStar {
    pub fn new(input: SolverInput) -> Self {
        let SolverInput {
            start,
            goal,
            piece,
            barriers,
        } = input;

        let h = estimate(piece, start, goal);
        let mut open = BinaryHeap::new();
        open.push(OpenNode { f: h, h, cell: start });

        let mut g_score = HashMap::new();
        g_score.insert(start, 0);

        Self {
            goal,
            piece,
            barriers,
            open,
            g_score,
            came_from: HashMap::new(),
            closed_set: HashSet::new(),
            solution: Solution::Pending,
        }
    }

    fn reconstruct(&self, end: Cell) -> Vec<Cell> {
        let mut path = vec![end];
        let mut current = end;
        while let Some(&previous) = self.came_from.get(&current) {
            path.push(previous);
            current = previous;
        }
        path.reverse();
        path
    }
}

impl Solver for AStar {
    fn evaluate(&mut self) {
        if !self.solution.is_pending() {
            return;
        }

        let Some(node) = self.open.pop() else {
            self.solution = Solution::NoPath;
            return;
        };

        // Stale heap entry for a cell that was already expanded via a cheaper route.
        if !self.closed_set.insert(node.cell) {
            return;
        }

        if node.cell == self.goal {
            self.solution = Solution::Path(self.reconstruct(node.cell));
            return;
        }

        let g = self.g_score.get(&node.cell).copied().unwrap_or(u32::MAX);
        for next in neighbors(node.cell, self.piece) {
            if self.barriers.contains(&next) || self.closed_set.contains(&next) {
                continue;
            }
            let tentative = g.saturating_add(1);
            if self.g_score.get(&next).is_some_and(|&known| known <= tentative) {
                continue;
            }
            self.g_score.insert(next, tentative);
            self.came_from.insert(next, node.cell);
            let h = estimate(self.piece, next, self.goal);
            self.open.push(OpenNode {
                f: tentative + h,
                h,
                cell: next,
            });
        }
    }

    fn solution(&self) -> &Solution {
        &self.solution
    }

    fn closed_set(&self) -> &HashSet<Cell> {
        &self.closed_set
    }
}
