use crate::grid::{Cell, GridModel};
use crate::input::{Mode, PieceType};
use crate::solver::RunRecord;
use std::collections::HashSet;

use super::Session;

/// Read-only snapshot handed to a renderer once per frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub mode: Mode,
    pub grid: &'a GridModel,
    pub piece: PieceType,
    pub animate: bool,
    /// Present from the first RUN update until a reset
    pub run: Option<&'a RunRecord>,
    /// Cells expanded by the live solver, if one exists
    pub closed_set: Option<&'a HashSet<Cell>>,
}

impl FrameView<'_> {
    /// Status prompt for the current mode; RUN has none.
    pub fn prompt(&self) -> Option<&'static str> {
        self.mode.prompt()
    }

    /// Confirmed path, once the run has solved.
    pub fn path(&self) -> Option<&[Cell]> {
        self.run.and_then(|run| run.solution.path())
    }
}

impl Session {
    /// Snapshot of everything a renderer needs for this frame.
    pub fn frame_view(&self) -> FrameView<'_> {
        FrameView {
            mode: self.mode,
            grid: &self.grid,
            piece: self.piece,
            animate: self.animate,
            run: self.run.as_ref(),
            closed_set: self.bridge.as_ref().map(|bridge| bridge.closed_set()),
        }
    }
}
