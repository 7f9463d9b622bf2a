//! Session state: grid, mode, piece selection and the live run.

use crate::config::{Action, Config, KeyBinding};
use crate::grid::GridModel;
use crate::input::{DragState, InputEvent, Mode, Modifiers, PieceType};
use crate::solver::{AStarFactory, RunRecord, SolverBridge, SolverFactory};
use std::collections::HashMap;
use std::time::Instant;

/// Complete interaction state of one editing session.
///
/// All input flows through [`Session::dispatch`] (or [`Session::apply`]); the
/// frame loop then calls [`Session::update`] once per frame before rendering.
/// Every handler validates the action against the current mode, so invalid
/// input is a silent no-op.
pub struct Session {
    /// Obstacles, start and goal
    pub(super) grid: GridModel,
    /// Current interaction stage
    pub(super) mode: Mode,
    /// Movement piece handed to the solver when a run starts
    pub(super) piece: PieceType,
    /// Whether the solver advances one evaluation per frame
    pub(super) animate: bool,
    /// Continuous paint/erase flags
    pub(super) drag: DragState,
    /// Last known pointer position in surface pixels
    pub(super) pointer: Option<(i32, i32)>,
    /// Current modifier key state
    pub modifiers: Modifiers,
    /// Timing and outcome of the current (or last finished) run
    pub(super) run: Option<RunRecord>,
    /// Live solver, present from the first RUN update until a reset
    pub(super) bridge: Option<SolverBridge>,
    /// Builds the solver when a run starts
    pub(super) factory: Box<dyn SolverFactory>,
    /// Evaluation bound handed to each bridge
    max_evaluations: usize,
    /// Keybinding action map for efficient lookup
    action_map: HashMap<KeyBinding, Action>,
    /// Reference point for run timestamps
    epoch: Instant,
    /// Set by every visible change; the frame loop clears it after drawing
    pub needs_redraw: bool,
}

impl Session {
    /// Creates a session at full reset: border-only barriers, no endpoints,
    /// mode START. Runs use the bundled A* solver.
    ///
    /// # Arguments
    /// * `piece` - Initially selected movement piece
    /// * `animate` - Whether runs start animated
    /// * `max_evaluations` - Bound on solver evaluations per run
    /// * `action_map` - Keybinding action map
    pub fn with_defaults(
        piece: PieceType,
        animate: bool,
        max_evaluations: usize,
        action_map: HashMap<KeyBinding, Action>,
    ) -> Self {
        Self {
            grid: GridModel::new(),
            mode: Mode::Start,
            piece,
            animate,
            drag: DragState::new(),
            pointer: None,
            modifiers: Modifiers::new(),
            run: None,
            bridge: None,
            factory: Box::new(AStarFactory),
            max_evaluations,
            action_map,
            epoch: Instant::now(),
            needs_redraw: true,
        }
    }

    /// Creates a session from loaded configuration.
    ///
    /// Fails with a message naming the offending binding if the keybinding
    /// table is invalid.
    pub fn from_config(config: &Config) -> Result<Self, String> {
        let action_map = config.keybindings.build_action_map()?;
        Ok(Self::with_defaults(
            config.session.default_piece,
            config.session.animate,
            config.session.max_evaluations,
            action_map,
        ))
    }

    /// Replaces the solver used for subsequent runs.
    pub fn with_solver_factory<F>(mut self, factory: F) -> Self
    where
        F: SolverFactory + 'static,
    {
        self.factory = Box::new(factory);
        self
    }

    pub fn grid(&self) -> &GridModel {
        &self.grid
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn piece(&self) -> PieceType {
        self.piece
    }

    pub fn animate(&self) -> bool {
        self.animate
    }

    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    pub fn pointer(&self) -> Option<(i32, i32)> {
        self.pointer
    }

    pub fn run(&self) -> Option<&RunRecord> {
        self.run.as_ref()
    }

    /// Solver evaluations performed in the current run, if a solver exists.
    pub fn evaluations(&self) -> Option<usize> {
        self.bridge.as_ref().map(SolverBridge::evaluations)
    }

    pub fn max_evaluations(&self) -> usize {
        self.max_evaluations
    }

    /// Routes one input event to its handler.
    pub fn dispatch(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMoved { x, y } => self.on_mouse_motion(x, y),
            InputEvent::ButtonPressed { button, x, y } => self.on_mouse_press(button, x, y),
            InputEvent::ButtonReleased { button, x, y } => self.on_mouse_release(button, x, y),
            InputEvent::KeyPressed(key) => self.on_key_press(key),
            InputEvent::KeyReleased(key) => self.on_key_release(key),
        }
    }

    /// Consumes the session and returns it with `event` applied.
    pub fn apply(mut self, event: InputEvent) -> Self {
        self.dispatch(event);
        self
    }

    /// Whether the caller should draw this frame.
    ///
    /// False while a blocking (non-animated) run is in progress, since the
    /// whole search completes inside the next update.
    pub fn should_render(&self) -> bool {
        !(self.mode.is_running() && !self.animate)
    }

    /// Looks up the action bound to `key_str` under the current modifiers.
    pub(super) fn find_action(&self, key_str: &str) -> Option<Action> {
        for (binding, action) in &self.action_map {
            if binding.matches(
                key_str,
                self.modifiers.ctrl,
                self.modifiers.shift,
                self.modifiers.alt,
            ) {
                return Some(*action);
            }
        }
        None
    }

    /// Milliseconds since the session was created.
    pub(super) fn now_ms(&self) -> u64 {
        u64::try_from(self.epoch.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}
