//! Timing and outcome of a single run.

use super::Solution;

/// Created when run mode is entered, discarded on any reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRecord {
    /// Milliseconds since the session epoch at which the solver was built
    pub start_time_ms: u64,
    /// Milliseconds since the session epoch at which the search finished
    pub end_time_ms: Option<u64>,
    pub solution: Solution,
}

impl RunRecord {
    pub fn started(start_time_ms: u64) -> Self {
        Self {
            start_time_ms,
            end_time_ms: None,
            solution: Solution::Pending,
        }
    }

    /// Records the final answer and end time.
    pub fn finish(&mut self, solution: Solution, end_time_ms: u64) {
        self.solution = solution;
        self.end_time_ms = Some(end_time_ms.max(self.start_time_ms));
    }

    pub fn is_finished(&self) -> bool {
        self.end_time_ms.is_some()
    }

    /// Duration of the search, once finished.
    pub fn elapsed_ms(&self) -> Option<u64> {
        self.end_time_ms
            .map(|end| end.saturating_sub(self.start_time_ms))
    }
}
