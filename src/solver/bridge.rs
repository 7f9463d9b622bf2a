//! Drives a solver from the frame loop.

use super::{Solution, Solver};
use crate::grid::Cell;
use log::{debug, warn};
use std::collections::HashSet;

/// Owns the single live solver for the duration of a run.
///
/// In animated mode the bridge performs one evaluation per frame so the
/// caller can render the closed set in between. Otherwise it evaluates until
/// the solver leaves `Pending`, blocking the frame that started the run.
pub struct SolverBridge {
    solver: Box<dyn Solver>,
    evaluations: usize,
    max_evaluations: usize,
}

impl SolverBridge {
    /// Wraps a solver. `max_evaluations` bounds solvers that never finish.
    pub fn new(solver: Box<dyn Solver>, max_evaluations: usize) -> Self {
        Self {
            solver,
            evaluations: 0,
            max_evaluations: max_evaluations.max(1),
        }
    }

    /// Number of `evaluate()` calls made so far.
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    pub fn closed_set(&self) -> &HashSet<Cell> {
        self.solver.closed_set()
    }

    /// Advances the search for one frame.
    ///
    /// Returns the final solution once the solver leaves `Pending`.
    pub fn drive(&mut self, animate: bool) -> Option<Solution> {
        if animate {
            self.step()
        } else {
            Some(self.run_to_completion())
        }
    }

    /// Performs exactly one evaluation (unless already finished).
    pub fn step(&mut self) -> Option<Solution> {
        if let Some(done) = self.finished() {
            return Some(done);
        }
        self.solver.evaluate();
        self.evaluations += 1;
        self.finished()
    }

    /// Evaluates until the solver produces an answer.
    pub fn run_to_completion(&mut self) -> Solution {
        loop {
            if let Some(done) = self.step() {
                debug!("Search finished after {} evaluations", self.evaluations);
                return done;
            }
        }
    }

    fn finished(&self) -> Option<Solution> {
        let solution = self.solver.solution();
        if !solution.is_pending() {
            return Some(solution.clone());
        }
        if self.evaluations >= self.max_evaluations {
            warn!(
                "Solver still pending after {} evaluations; treating run as failed",
                self.evaluations
            );
            return Some(Solution::NoPath);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Finishes with a one-cell path after a fixed number of evaluations.
    struct Countdown {
        remaining: usize,
        solution: Solution,
        closed: HashSet<Cell>,
    }

    impl Countdown {
        fn boxed(remaining: usize) -> Box<dyn Solver> {
            Box::new(Self {
                remaining,
                solution: Solution::Pending,
                closed: HashSet::new(),
            })
        }
    }

    impl Solver for Countdown {
        fn evaluate(&mut self) {
            self.closed.insert(Cell::new(self.remaining as i32, 1));
            self.remaining = self.remaining.saturating_sub(1);
            if self.remaining == 0 {
                self.solution = Solution::Path(vec![Cell::new(1, 1)]);
            }
        }

        fn solution(&self) -> &Solution {
            &self.solution
        }

        fn closed_set(&self) -> &HashSet<Cell> {
            &self.closed
        }
    }

    #[test]
    fn animated_drive_evaluates_once_per_call() {
        let mut bridge = SolverBridge::new(Countdown::boxed(3), 100);
        assert_eq!(bridge.drive(true), None);
        assert_eq!(bridge.evaluations(), 1);
        assert_eq!(bridge.closed_set().len(), 1);
        assert_eq!(bridge.drive(true), None);
        assert_eq!(bridge.evaluations(), 2);
        assert!(bridge.drive(true).is_some());
        assert_eq!(bridge.evaluations(), 3);
    }

    #[test]
    fn blocking_drive_finishes_in_one_call() {
        let mut bridge = SolverBridge::new(Countdown::boxed(25), 100);
        let solution = bridge.drive(false).unwrap();
        assert_eq!(solution.path(), Some(&[Cell::new(1, 1)][..]));
        assert_eq!(bridge.evaluations(), 25);
    }

    #[test]
    fn evaluation_bound_fails_the_run() {
        let mut bridge = SolverBridge::new(Countdown::boxed(usize::MAX), 10);
        assert_eq!(bridge.drive(false), Some(Solution::NoPath));
        assert_eq!(bridge.evaluations(), 10);
    }
}
