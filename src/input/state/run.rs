//! Per-frame work: continuous drag painting and solver driving.

use crate::grid::{self, Cell};
use crate::input::drag::DragAction;
use crate::input::Mode;
use crate::solver::{RunRecord, SolverBridge, SolverInput};
use log::{info, trace, warn};

use super::Session;

impl Session {
    /// Advances the session by one frame.
    ///
    /// Applies any armed drag to the hovered cell, then, in RUN mode, drives
    /// the solver: one evaluation when animating, the whole search otherwise.
    pub fn update(&mut self) {
        self.apply_drag();

        if self.mode.is_running() {
            self.drive_solver();
        }
    }

    fn apply_drag(&mut self) {
        if self.mode != Mode::Barrier {
            return;
        }
        let Some(action) = self.drag.action() else {
            return;
        };
        let Some((x, y)) = self.pointer else {
            return;
        };
        if !grid::in_grid_area(x, y) {
            return;
        }

        let cell = Cell::from_pixel(x, y);
        if !self.drag.enter_cell(cell) {
            return;
        }

        let changed = match action {
            DragAction::Paint => self.grid.add_barrier(cell),
            DragAction::Erase => self.grid.remove_barrier(cell),
        };
        if changed {
            trace!("{:?} barrier at {cell}", action);
            self.needs_redraw = true;
        }
    }

    fn drive_solver(&mut self) {
        if self.bridge.is_none() {
            let (Some(start), Some(goal)) = (self.grid.start(), self.grid.goal()) else {
                warn!("Run mode without both endpoints; returning to barrier editing");
                self.discard_run();
                self.set_mode(Mode::Barrier);
                return;
            };

            info!(
                "Solving from {start} to {goal} with {}",
                self.piece.label()
            );
            self.run = Some(RunRecord::started(self.now_ms()));
            let solver = self.factory.build(SolverInput {
                start,
                goal,
                piece: self.piece,
                barriers: self.grid.barriers().clone(),
            });
            self.bridge = Some(SolverBridge::new(solver, self.max_evaluations()));
        }

        let animate = self.animate;
        let outcome = self.bridge.as_mut().and_then(|bridge| bridge.drive(animate));

        match outcome {
            Some(solution) => self.finish_run(solution),
            None => self.needs_redraw = true,
        }
    }
}
