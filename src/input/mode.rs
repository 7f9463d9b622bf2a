//! Interaction modes.

/// Interaction stage. The sole driver of which input actions are accepted.
///
/// Transitions are executed by the session (see `input::state`); this type
/// only answers questions about a single mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Waiting for the start cell (initial mode)
    #[default]
    Start,
    /// Waiting for the goal cell
    Goal,
    /// Painting/erasing barriers; the run can be triggered
    Barrier,
    /// Solver is being driven; all editing is locked
    Run,
    /// Search found a path
    Solved,
    /// Search exhausted without a path
    Failed,
}

impl Mode {
    /// Returns true while the solver owns the session.
    pub fn is_running(self) -> bool {
        matches!(self, Mode::Run)
    }

    /// Returns true for the terminal modes that only accept resets.
    pub fn is_finished(self) -> bool {
        matches!(self, Mode::Solved | Mode::Failed)
    }

    /// Instruction shown in the top-left corner, if this mode has one.
    ///
    /// The prompt doubles as a control: in `Barrier` it starts the run, in
    /// `Solved`/`Failed` it performs a full reset.
    pub fn prompt(self) -> Option<&'static str> {
        match self {
            Mode::Start => Some("Place your start point:"),
            Mode::Goal => Some("Place your goal:"),
            Mode::Barrier => Some("Draw your walls or press spacebar to solve:"),
            Mode::Run => None,
            Mode::Solved | Mode::Failed => Some("Press 'Enter' to restart."),
        }
    }

    /// Short uppercase name used in logs and the text renderer.
    pub fn name(self) -> &'static str {
        match self {
            Mode::Start => "START",
            Mode::Goal => "GOAL",
            Mode::Barrier => "BARRIER",
            Mode::Run => "RUN",
            Mode::Solved => "SOLVED",
            Mode::Failed => "FAILED",
        }
    }
}
