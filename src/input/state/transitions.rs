//! Mode transitions and the grid edits that accompany them.

use crate::grid::Cell;
use crate::input::{Mode, PieceType};
use crate::solver::{RunRecord, Solution};
use log::{debug, info};

use super::Session;

impl Session {
    pub(super) fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            info!("Mode {} -> {}", self.mode.name(), mode.name());
            self.mode = mode;
        }
        self.needs_redraw = true;
    }

    /// Places the start (START mode) or goal (GOAL mode) at `cell`.
    ///
    /// START advances to GOAL, or straight to BARRIER when a goal is already
    /// set. GOAL advances to BARRIER. Placements onto a barrier or the other
    /// endpoint are ignored.
    pub fn place_endpoint(&mut self, cell: Cell) {
        match self.mode {
            Mode::Start => {
                if !self.grid.place_start(cell) {
                    debug!("Rejected start point at {cell}");
                    return;
                }
                let next = if self.grid.goal().is_some() {
                    Mode::Barrier
                } else {
                    Mode::Goal
                };
                self.set_mode(next);
            }
            Mode::Goal => {
                if !self.grid.place_goal(cell) {
                    debug!("Rejected goal at {cell}");
                    return;
                }
                self.set_mode(Mode::Barrier);
            }
            Mode::Barrier | Mode::Run | Mode::Solved | Mode::Failed => {
                debug!("Ignoring endpoint placement in {} mode", self.mode.name());
            }
        }
    }

    /// Enters RUN from BARRIER.
    ///
    /// With an endpoint missing the session steps back to the mode that
    /// places it instead.
    pub fn request_run(&mut self) {
        if self.mode != Mode::Barrier {
            debug!("Ignoring run request in {} mode", self.mode.name());
            return;
        }

        match (self.grid.start(), self.grid.goal()) {
            (Some(_), Some(_)) => {
                self.drag.disarm();
                self.discard_run();
                self.set_mode(Mode::Run);
            }
            (None, _) => {
                debug!("Run requested without a start point");
                self.set_mode(Mode::Start);
            }
            (Some(_), None) => {
                debug!("Run requested without a goal");
                self.set_mode(Mode::Goal);
            }
        }
    }

    /// Clears the endpoint under `cell` (secondary click).
    ///
    /// Clearing the start returns to START; clearing the goal returns to GOAL,
    /// or START if no start is set. Any finished run is discarded. Returns
    /// false if `cell` holds no endpoint or a run is in progress.
    pub fn clear_endpoint_at(&mut self, cell: Cell) -> bool {
        if self.mode.is_running() {
            return false;
        }

        let next = if self.grid.start() == Some(cell) {
            self.grid.clear_start();
            Mode::Start
        } else if self.grid.goal() == Some(cell) {
            self.grid.clear_goal();
            if self.grid.start().is_some() {
                Mode::Goal
            } else {
                Mode::Start
            }
        } else {
            return false;
        };

        self.discard_run();
        self.drag.disarm();
        self.set_mode(next);
        true
    }

    /// Returns to the initial state: border-only barriers, no endpoints, START.
    ///
    /// Works from any mode. Key and hot-zone input only reach it once a run
    /// has finished.
    pub fn reset_full(&mut self) {
        self.grid.reset_full();
        self.discard_run();
        self.drag.disarm();
        self.set_mode(Mode::Start);
    }

    /// Drops the run and returns to barrier editing on a border-only grid
    /// with both endpoints cleared. Only available once a run has finished.
    pub fn reset_partial(&mut self) {
        if !self.mode.is_finished() {
            debug!("Ignoring partial reset in {} mode", self.mode.name());
            return;
        }
        self.grid.reset_full();
        self.discard_run();
        self.drag.disarm();
        self.set_mode(Mode::Barrier);
    }

    /// Switches the movement piece. Ignored while a run is in progress.
    pub fn select_piece(&mut self, piece: PieceType) {
        if self.mode.is_running() {
            debug!("Ignoring piece change during a run");
            return;
        }
        if self.piece != piece {
            info!("Move type: {}", piece.label());
        }
        self.piece = piece;
        self.needs_redraw = true;
    }

    pub fn cycle_piece(&mut self) {
        self.select_piece(self.piece.next());
    }

    pub fn toggle_animate(&mut self) {
        if self.mode.is_running() {
            debug!("Ignoring animation toggle during a run");
            return;
        }
        self.animate = !self.animate;
        info!("Animation {}", if self.animate { "on" } else { "off" });
        self.needs_redraw = true;
    }

    /// Stores the solver's answer and leaves RUN.
    pub(super) fn finish_run(&mut self, solution: Solution) {
        let now = self.now_ms();
        let next = match &solution {
            Solution::Path(path) => {
                info!("Solved in {} steps", path.len().saturating_sub(1));
                Mode::Solved
            }
            Solution::NoPath | Solution::Pending => {
                info!("No solution");
                Mode::Failed
            }
        };

        let record = self.run.get_or_insert_with(|| RunRecord::started(now));
        record.finish(solution, now);
        if let Some(elapsed) = record.elapsed_ms() {
            debug!("Run took {elapsed} ms");
        }
        self.set_mode(next);
    }

    /// Drops the solver and run record, if any.
    pub(super) fn discard_run(&mut self) {
        if self.bridge.take().is_some() {
            debug!("Discarded solver");
        }
        self.run = None;
    }
}
