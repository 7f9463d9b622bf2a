//! Search engine contract and the bundled A* implementation.
//!
//! The interaction layer never searches by itself. Once the session enters
//! run mode it builds a [`Solver`] through a [`SolverFactory`] and drives it
//! through a [`SolverBridge`], one [`Solver::evaluate`] call at a time.

pub mod astar;
pub mod bridge;
pub mod moves;
pub mod record;

pub use astar::AStar;
pub use bridge::SolverBridge;
pub use record::RunRecord;

use crate::grid::Cell;
use crate::input::PieceType;
use std::collections::HashSet;

/// State of a solver's answer.
///
/// Leaves `Pending` exactly once, either with a path or with `NoPath`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Solution {
    /// Search still in progress
    #[default]
    Pending,
    /// Confirmed path, start to goal inclusive
    Path(Vec<Cell>),
    /// Search space exhausted without reaching the goal
    NoPath,
}

impl Solution {
    pub fn is_pending(&self) -> bool {
        matches!(self, Solution::Pending)
    }

    pub fn path(&self) -> Option<&[Cell]> {
        match self {
            Solution::Path(path) => Some(path),
            Solution::Pending | Solution::NoPath => None,
        }
    }

    /// Number of moves along the path (cells minus the start).
    pub fn steps(&self) -> Option<usize> {
        self.path().map(|path| path.len().saturating_sub(1))
    }
}

/// Everything a solver needs to start a search.
#[derive(Debug, Clone)]
pub struct SolverInput {
    pub start: Cell,
    pub goal: Cell,
    pub piece: PieceType,
    pub barriers: HashSet<Cell>,
}

/// Incremental search engine driven by the session.
pub trait Solver {
    /// Advances the search by one unit of work.
    fn evaluate(&mut self);

    /// Current answer; `Pending` until the search finishes.
    fn solution(&self) -> &Solution;

    /// Cells expanded so far, exposed for visualization only.
    fn closed_set(&self) -> &HashSet<Cell>;
}

/// Builds solvers for the session when run mode is entered.
pub trait SolverFactory {
    fn build(&self, input: SolverInput) -> Box<dyn Solver>;
}

impl<F> SolverFactory for F
where
    F: Fn(SolverInput) -> Box<dyn Solver>,
{
    fn build(&self, input: SolverInput) -> Box<dyn Solver> {
        self(input)
    }
}

/// Factory for the bundled [`AStar`] solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStarFactory;

impl SolverFactory for AStarFactory {
    fn build(&self, input: SolverInput) -> Box<dyn Solver> {
        Box::new(AStar::new(input))
    }
}
