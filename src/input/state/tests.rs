use super::*;
use crate::config::{KeybindingsConfig, keybindings::Action};
use crate::grid::{CELL_SIZE_PX, Cell, GridModel, model::border_cells};
use crate::input::{HotZone, InputEvent, Key, Mode, MouseButton, PieceType};
use crate::solver::{AStarFactory, Solution, Solver, SolverFactory, SolverInput, moves};
use std::collections::HashSet;

fn create_test_session() -> Session {
    let action_map = KeybindingsConfig::default().build_action_map().unwrap();
    Session::with_defaults(PieceType::Rook, false, 100_000, action_map)
}

fn center(col: i32, row: i32) -> (i32, i32) {
    (
        col * CELL_SIZE_PX + CELL_SIZE_PX / 2,
        row * CELL_SIZE_PX + CELL_SIZE_PX / 2,
    )
}

fn click_px(session: &mut Session, button: MouseButton, x: i32, y: i32) {
    session.on_mouse_press(button, x, y);
    session.on_mouse_release(button, x, y);
}

fn click(session: &mut Session, button: MouseButton, col: i32, row: i32) {
    let (x, y) = center(col, row);
    click_px(session, button, x, y);
}

fn paint(session: &mut Session, col: i32, row: i32) {
    let (x, y) = center(col, row);
    session.on_mouse_press(MouseButton::Left, x, y);
    session.update();
    session.on_mouse_release(MouseButton::Left, x, y);
}

fn press_key(session: &mut Session, key: Key) {
    session.on_key_press(key);
    session.on_key_release(key);
}

fn session_with_endpoints(start: (i32, i32), goal: (i32, i32)) -> Session {
    let mut session = create_test_session();
    click(&mut session, MouseButton::Left, start.0, start.1);
    click(&mut session, MouseButton::Left, goal.0, goal.1);
    assert_eq!(session.mode(), Mode::Barrier);
    session
}

fn solved_session() -> Session {
    let mut session = session_with_endpoints((5, 5), (10, 10));
    press_key(&mut session, Key::Space);
    session.update();
    assert_eq!(session.mode(), Mode::Solved);
    session
}

fn assert_grid_invariants(grid: &GridModel) {
    for cell in border_cells() {
        assert!(grid.is_barrier(cell), "border cell {cell} missing");
    }
    if let (Some(start), Some(goal)) = (grid.start(), grid.goal()) {
        assert_ne!(start, goal);
    }
    for endpoint in [grid.start(), grid.goal()].into_iter().flatten() {
        assert!(!grid.is_barrier(endpoint));
    }
}

/// Never finishes on its own.
#[derive(Default)]
struct Stalling {
    closed: HashSet<Cell>,
    solution: Solution,
}

impl Solver for Stalling {
    fn evaluate(&mut self) {}

    fn solution(&self) -> &Solution {
        &self.solution
    }

    fn closed_set(&self) -> &HashSet<Cell> {
        &self.closed
    }
}

#[test]
fn test_new_session_is_at_full_reset() {
    let session = create_test_session();
    assert_eq!(session.mode(), Mode::Start);
    assert_eq!(session.piece(), PieceType::Rook);
    assert!(!session.animate());
    assert_eq!(session.grid(), &GridModel::new());
    assert_eq!(session.grid().barriers().len(), border_cells().count());
    assert!(session.run().is_none());
    assert!(session.needs_redraw);
}

#[test]
fn test_placing_endpoints_advances_modes() {
    let mut session = create_test_session();

    click(&mut session, MouseButton::Left, 3, 4);
    assert_eq!(session.grid().start(), Some(Cell::new(3, 4)));
    assert_eq!(session.mode(), Mode::Goal);

    click(&mut session, MouseButton::Left, 12, 8);
    assert_eq!(session.grid().goal(), Some(Cell::new(12, 8)));
    assert_eq!(session.mode(), Mode::Barrier);
}

#[test]
fn test_goal_cannot_overlap_start() {
    let mut session = create_test_session();
    click(&mut session, MouseButton::Left, 3, 4);
    click(&mut session, MouseButton::Left, 3, 4);

    assert_eq!(session.mode(), Mode::Goal);
    assert_eq!(session.grid().goal(), None);
}

#[test]
fn test_start_cannot_be_placed_on_barrier_or_goal() {
    let mut session = session_with_endpoints((2, 2), (8, 8));
    paint(&mut session, 6, 6);
    assert!(session.grid().is_barrier(Cell::new(6, 6)));

    click(&mut session, MouseButton::Right, 2, 2);
    assert_eq!(session.mode(), Mode::Start);

    click(&mut session, MouseButton::Left, 6, 6);
    click(&mut session, MouseButton::Left, 8, 8);
    assert_eq!(session.mode(), Mode::Start);
    assert_eq!(session.grid().start(), None);

    click(&mut session, MouseButton::Left, 7, 7);
    assert_eq!(session.grid().start(), Some(Cell::new(7, 7)));
    assert_eq!(session.mode(), Mode::Barrier);
}

#[test]
fn test_clicks_outside_grid_area_do_nothing() {
    let mut session = create_test_session();
    click_px(&mut session, MouseButton::Left, 5, 100);
    click_px(&mut session, MouseButton::Left, 430, 100);
    click_px(&mut session, MouseButton::Left, 200, 265);

    assert_eq!(session.mode(), Mode::Start);
    assert_eq!(session.grid().start(), None);
}

#[test]
fn test_drag_paints_each_entered_cell() {
    let mut session = session_with_endpoints((1, 1), (20, 12));

    let (x, y) = center(4, 4);
    session.on_mouse_press(MouseButton::Left, x, y);
    assert!(session.drag().painting);
    session.update();
    session.on_mouse_motion(x + CELL_SIZE_PX, y);
    session.update();
    session.update();
    session.on_mouse_release(MouseButton::Left, x + CELL_SIZE_PX, y);
    assert!(!session.drag().painting);

    let (x, y) = center(6, 4);
    session.on_mouse_motion(x, y);
    session.update();

    let painted: HashSet<Cell> = session.grid().interior_barriers().collect();
    assert_eq!(painted, HashSet::from([Cell::new(4, 4), Cell::new(5, 4)]));
}

#[test]
fn test_drag_skips_endpoints() {
    let mut session = session_with_endpoints((4, 4), (5, 4));

    let (x, y) = center(3, 4);
    session.on_mouse_press(MouseButton::Left, x, y);
    for col in 3..=6 {
        let (x, y) = center(col, 4);
        session.on_mouse_motion(x, y);
        session.update();
    }

    assert!(session.grid().is_barrier(Cell::new(3, 4)));
    assert!(session.grid().is_barrier(Cell::new(6, 4)));
    assert!(!session.grid().is_barrier(Cell::new(4, 4)));
    assert!(!session.grid().is_barrier(Cell::new(5, 4)));
    assert_grid_invariants(session.grid());
}

#[test]
fn test_secondary_drag_erases_barriers() {
    let mut session = session_with_endpoints((1, 1), (20, 12));
    paint(&mut session, 7, 3);
    paint(&mut session, 8, 3);

    let (x, y) = center(7, 3);
    session.on_mouse_press(MouseButton::Right, x, y);
    assert!(session.drag().erasing);
    session.update();
    session.on_mouse_motion(x + CELL_SIZE_PX, y);
    session.update();
    session.on_mouse_release(MouseButton::Right, x + CELL_SIZE_PX, y);

    assert_eq!(session.grid().interior_barriers().count(), 0);
    assert_grid_invariants(session.grid());
}

#[test]
fn test_drag_only_applies_in_barrier_mode() {
    let mut session = create_test_session();
    let (x, y) = center(9, 9);
    session.on_mouse_press(MouseButton::Right, x, y);
    session.update();

    assert!(!session.drag().erasing);
    assert_eq!(session.grid().interior_barriers().count(), 0);
}

#[test]
fn test_secondary_click_on_start_returns_to_start_mode() {
    let mut session = session_with_endpoints((5, 5), (10, 10));

    click(&mut session, MouseButton::Right, 5, 5);

    assert_eq!(session.grid().start(), None);
    assert_eq!(session.grid().goal(), Some(Cell::new(10, 10)));
    assert_eq!(session.mode(), Mode::Start);
    assert!(!session.drag().erasing);
}

#[test]
fn test_secondary_click_on_goal_depends_on_start() {
    let mut session = session_with_endpoints((5, 5), (10, 10));
    click(&mut session, MouseButton::Right, 10, 10);
    assert_eq!(session.mode(), Mode::Goal);

    let mut session = session_with_endpoints((5, 5), (10, 10));
    click(&mut session, MouseButton::Right, 5, 5);
    click(&mut session, MouseButton::Right, 10, 10);
    assert_eq!(session.mode(), Mode::Start);
    assert_eq!(session.grid().goal(), None);
}

#[test]
fn test_blocking_run_solves_in_one_update() {
    let mut session = session_with_endpoints((5, 5), (10, 10));

    press_key(&mut session, Key::Space);
    assert_eq!(session.mode(), Mode::Run);
    assert!(!session.should_render());

    session.update();
    assert_eq!(session.mode(), Mode::Solved);
    assert!(session.should_render());

    let run = session.run().unwrap();
    assert!(run.is_finished());
    let path = run.solution.path().unwrap();
    assert_eq!(path.first(), Some(&Cell::new(5, 5)));
    assert_eq!(path.last(), Some(&Cell::new(10, 10)));
    for pair in path.windows(2) {
        assert!(moves::neighbors(pair[0], PieceType::Rook).any(|next| next == pair[1]));
    }
    assert_eq!(run.solution.steps(), Some(10));
}

#[test]
fn test_enclosed_goal_fails() {
    let mut session = session_with_endpoints((3, 3), (10, 6));
    for (dc, dr) in [
        (-1, -1),
        (0, -1),
        (1, -1),
        (-1, 0),
        (1, 0),
        (-1, 1),
        (0, 1),
        (1, 1),
    ] {
        paint(&mut session, 10 + dc, 6 + dr);
    }
    press_key(&mut session, Key::Char('2'));
    assert_eq!(session.piece(), PieceType::Queen);

    press_key(&mut session, Key::Space);
    session.update();

    assert_eq!(session.mode(), Mode::Failed);
    assert_eq!(session.run().unwrap().solution, Solution::NoPath);
    assert!(session.frame_view().path().is_none());
}

#[test]
fn test_animated_run_evaluates_once_per_update() {
    let mut session = session_with_endpoints((2, 2), (15, 9));
    press_key(&mut session, Key::Char('d'));
    assert!(session.animate());

    press_key(&mut session, Key::Space);
    assert!(session.should_render());
    assert_eq!(session.evaluations(), None);

    session.update();
    assert_eq!(session.evaluations(), Some(1));
    assert_eq!(session.mode(), Mode::Run);
    assert!(session.run().is_some_and(|run| !run.is_finished()));

    session.update();
    assert_eq!(session.evaluations(), Some(2));
    assert_eq!(session.frame_view().closed_set.map(HashSet::len), Some(2));

    let mut frames = 2;
    while session.mode() == Mode::Run {
        session.update();
        frames += 1;
        assert!(frames < 10_000);
    }
    assert_eq!(session.mode(), Mode::Solved);
    assert_eq!(session.evaluations(), Some(frames));
}

#[test]
fn test_input_is_gated_while_running() {
    let mut session = session_with_endpoints((2, 2), (15, 9));
    press_key(&mut session, Key::Char('d'));
    press_key(&mut session, Key::Space);
    session.update();

    click(&mut session, MouseButton::Right, 2, 2);
    click(&mut session, MouseButton::Left, 6, 6);
    press_key(&mut session, Key::Char('3'));
    press_key(&mut session, Key::Char('d'));
    press_key(&mut session, Key::Return);
    press_key(&mut session, Key::Char('i'));

    assert_eq!(session.mode(), Mode::Run);
    assert_eq!(session.grid().start(), Some(Cell::new(2, 2)));
    assert!(!session.grid().is_barrier(Cell::new(6, 6)));
    assert_eq!(session.piece(), PieceType::Rook);
    assert!(session.animate());
}

#[test]
fn test_direct_calls_are_gated_while_running() {
    let mut session = session_with_endpoints((2, 2), (15, 9));
    press_key(&mut session, Key::Char('d'));
    press_key(&mut session, Key::Space);
    session.update();
    assert_eq!(session.mode(), Mode::Run);

    session.toggle_animate();
    assert!(session.animate());

    session.select_piece(PieceType::Knight);
    assert_eq!(session.piece(), PieceType::Rook);

    session.cycle_piece();
    assert_eq!(session.piece(), PieceType::Rook);

    session.reset_partial();
    assert_eq!(session.mode(), Mode::Run);
    assert_eq!(session.grid().start(), Some(Cell::new(2, 2)));
    assert_eq!(session.evaluations(), Some(1));

    session.update();
    assert_eq!(session.evaluations(), Some(2));
}

#[test]
fn test_partial_reset_requires_finished_run() {
    let mut session = create_test_session();
    session.reset_partial();
    assert_eq!(session.mode(), Mode::Start);

    let mut session = session_with_endpoints((5, 5), (10, 10));
    session.reset_partial();
    assert_eq!(session.mode(), Mode::Barrier);
    assert_eq!(session.grid().start(), Some(Cell::new(5, 5)));

    let mut session = solved_session();
    session.reset_partial();
    assert_eq!(session.mode(), Mode::Barrier);
    assert_eq!(session.grid().start(), None);
}

#[test]
fn test_evaluation_bound_fails_stuck_solver() {
    let action_map = KeybindingsConfig::default().build_action_map().unwrap();
    let mut session = Session::with_defaults(PieceType::Rook, false, 50, action_map)
        .with_solver_factory(|_input: SolverInput| -> Box<dyn Solver> {
            Box::new(Stalling::default())
        });
    click(&mut session, MouseButton::Left, 1, 1);
    click(&mut session, MouseButton::Left, 2, 1);

    press_key(&mut session, Key::Space);
    session.update();

    assert_eq!(session.mode(), Mode::Failed);
    assert_eq!(session.evaluations(), Some(50));
}

#[test]
fn test_solver_receives_session_state() {
    let action_map = KeybindingsConfig::default().build_action_map().unwrap();
    let mut session = Session::with_defaults(PieceType::Knight, false, 10, action_map)
        .with_solver_factory(|input: SolverInput| -> Box<dyn Solver> {
            assert_eq!(input.start, Cell::new(1, 1));
            assert_eq!(input.goal, Cell::new(4, 2));
            assert_eq!(input.piece, PieceType::Knight);
            assert!(input.barriers.contains(&Cell::new(3, 3)));
            Box::new(Stalling::default())
        });
    click(&mut session, MouseButton::Left, 1, 1);
    click(&mut session, MouseButton::Left, 4, 2);
    paint(&mut session, 3, 3);

    press_key(&mut session, Key::Space);
    session.update();
    assert_eq!(session.mode(), Mode::Failed);
}

#[test]
fn test_run_timing_includes_solver_construction() {
    let action_map = KeybindingsConfig::default().build_action_map().unwrap();
    let mut session = Session::with_defaults(PieceType::Rook, false, 100_000, action_map)
        .with_solver_factory(|input: SolverInput| -> Box<dyn Solver> {
            std::thread::sleep(std::time::Duration::from_millis(25));
            AStarFactory.build(input)
        });
    click(&mut session, MouseButton::Left, 1, 1);
    click(&mut session, MouseButton::Left, 2, 1);

    press_key(&mut session, Key::Space);
    session.update();

    assert_eq!(session.mode(), Mode::Solved);
    let elapsed = session.run().and_then(|run| run.elapsed_ms());
    assert!(elapsed.is_some_and(|ms| ms >= 25), "elapsed {elapsed:?}");
}

#[test]
fn test_partial_reset_clears_grid_and_returns_to_barrier() {
    let mut session = session_with_endpoints((5, 5), (10, 10));
    paint(&mut session, 7, 2);
    press_key(&mut session, Key::Space);
    session.update();
    assert_eq!(session.mode(), Mode::Solved);

    press_key(&mut session, Key::Char('i'));

    assert_eq!(session.mode(), Mode::Barrier);
    assert_eq!(session.grid(), &GridModel::new());
    assert!(session.run().is_none());
    assert_eq!(session.evaluations(), None);
    assert!(session.frame_view().closed_set.is_none());
}

#[test]
fn test_run_after_partial_reset_asks_for_missing_endpoint() {
    let mut session = solved_session();
    press_key(&mut session, Key::Char('i'));

    press_key(&mut session, Key::Space);
    assert_eq!(session.mode(), Mode::Start);

    click(&mut session, MouseButton::Left, 2, 2);
    click(&mut session, MouseButton::Left, 4, 2);
    assert_eq!(session.mode(), Mode::Barrier);

    press_key(&mut session, Key::Space);
    session.update();
    assert_eq!(session.mode(), Mode::Solved);
    assert_eq!(session.run().unwrap().solution.steps(), Some(2));
}

#[test]
fn test_run_without_goal_returns_to_goal_mode() {
    let mut session = session_with_endpoints((5, 5), (10, 10));
    session.grid.clear_goal();

    session.handle_action(Action::Run);
    assert_eq!(session.mode(), Mode::Goal);
}

#[test]
fn test_full_reset_matches_fresh_session() {
    let mut session = session_with_endpoints((5, 5), (10, 10));
    paint(&mut session, 7, 2);
    press_key(&mut session, Key::Space);
    session.update();

    press_key(&mut session, Key::Return);

    assert_eq!(session.mode(), Mode::Start);
    assert_eq!(session.grid(), &GridModel::new());
    assert!(session.run().is_none());
}

#[test]
fn test_reset_keys_ignored_before_run_finishes() {
    let mut session = session_with_endpoints((5, 5), (10, 10));
    press_key(&mut session, Key::Return);
    press_key(&mut session, Key::Char('i'));

    assert_eq!(session.mode(), Mode::Barrier);
    assert_eq!(session.grid().start(), Some(Cell::new(5, 5)));
}

#[test]
fn test_full_reset_from_any_mode() {
    let mut session = create_test_session();
    click(&mut session, MouseButton::Left, 3, 3);
    assert_eq!(session.mode(), Mode::Goal);
    session.reset_full();
    assert_eq!(session.mode(), Mode::Start);
    assert_eq!(session.grid(), &GridModel::new());

    let mut session = session_with_endpoints((2, 2), (15, 9));
    press_key(&mut session, Key::Char('d'));
    press_key(&mut session, Key::Space);
    session.update();
    assert_eq!(session.mode(), Mode::Run);
    session.reset_full();
    assert_eq!(session.mode(), Mode::Start);
    assert_eq!(session.evaluations(), None);
}

#[test]
fn test_secondary_click_after_solve_discards_run() {
    let mut session = solved_session();

    click(&mut session, MouseButton::Right, 10, 10);

    assert_eq!(session.mode(), Mode::Goal);
    assert!(session.run().is_none());
    assert_eq!(session.evaluations(), None);

    click(&mut session, MouseButton::Left, 12, 10);
    press_key(&mut session, Key::Space);
    session.update();
    assert_eq!(session.mode(), Mode::Solved);
    assert_eq!(session.run().unwrap().solution.steps(), Some(12));
}

#[test]
fn test_number_keys_select_piece_directly() {
    let mut session = create_test_session();

    press_key(&mut session, Key::Char('3'));
    assert_eq!(session.piece(), PieceType::Knight);
    press_key(&mut session, Key::Char('1'));
    assert_eq!(session.piece(), PieceType::Rook);
    press_key(&mut session, Key::Char('1'));
    assert_eq!(session.piece(), PieceType::Rook);
    press_key(&mut session, Key::Char('2'));
    assert_eq!(session.piece(), PieceType::Queen);
}

#[test]
fn test_modifiers_change_binding_lookup() {
    let mut session = create_test_session();

    session.on_key_press(Key::Ctrl);
    session.on_key_press(Key::Char('3'));
    assert_eq!(session.piece(), PieceType::Rook);

    session.on_key_release(Key::Ctrl);
    session.on_key_press(Key::Char('3'));
    assert_eq!(session.piece(), PieceType::Knight);
}

#[test]
fn test_cycle_piece_wraps() {
    let mut session = create_test_session();
    for _ in 0..PieceType::ALL.len() {
        session.handle_action(Action::CyclePiece);
    }
    assert_eq!(session.piece(), PieceType::Rook);
    session.handle_action(Action::CyclePiece);
    assert_eq!(session.piece(), PieceType::Queen);
}

#[test]
fn test_piece_selector_hot_zone_cycles() {
    let mut session = create_test_session();

    click_px(&mut session, MouseButton::Left, 325, 270);
    assert_eq!(session.piece(), PieceType::Queen);
    click_px(&mut session, MouseButton::Left, 325, 270);
    assert_eq!(session.piece(), PieceType::Knight);
    assert_eq!(session.mode(), Mode::Start);
}

#[test]
fn test_animate_hot_zone_toggles() {
    let mut session = create_test_session();
    click_px(&mut session, MouseButton::Left, 345, 5);
    assert!(session.animate());
    click_px(&mut session, MouseButton::Left, 345, 5);
    assert!(!session.animate());
}

#[test]
fn test_run_control_only_active_in_barrier_mode() {
    let mut session = create_test_session();
    assert_eq!(session.hot_zone_at(12, 5), None);

    let mut session_b = session_with_endpoints((5, 5), (10, 10));
    assert_eq!(session_b.hot_zone_at(12, 5), Some(HotZone::RunControl));
    click_px(&mut session_b, MouseButton::Left, 12, 5);
    assert_eq!(session_b.mode(), Mode::Run);

    click_px(&mut session, MouseButton::Left, 12, 5);
    assert_eq!(session.mode(), Mode::Start);
}

#[test]
fn test_reset_hot_zones_after_run() {
    let mut session = solved_session();
    assert_eq!(session.hot_zone_at(155, 5), Some(HotZone::FullReset));
    assert_eq!(session.hot_zone_at(200, 5), Some(HotZone::PartialReset));

    click_px(&mut session, MouseButton::Left, 200, 5);
    assert_eq!(session.mode(), Mode::Barrier);

    let mut session = solved_session();
    click_px(&mut session, MouseButton::Left, 20, 5);
    assert_eq!(session.mode(), Mode::Start);
}

#[test]
fn test_apply_threads_session_through_events() {
    let (sx, sy) = center(5, 5);
    let (gx, gy) = center(6, 5);
    let session = create_test_session()
        .apply(InputEvent::ButtonPressed {
            button: MouseButton::Left,
            x: sx,
            y: sy,
        })
        .apply(InputEvent::ButtonReleased {
            button: MouseButton::Left,
            x: sx,
            y: sy,
        })
        .apply(InputEvent::PointerMoved { x: gx, y: gy })
        .apply(InputEvent::ButtonPressed {
            button: MouseButton::Left,
            x: gx,
            y: gy,
        })
        .apply(InputEvent::KeyPressed(Key::Space));

    assert_eq!(session.mode(), Mode::Run);
    assert_eq!(session.pointer(), Some((gx, gy)));
}

#[test]
fn test_knight_path_stays_on_interior() {
    let mut session = session_with_endpoints((1, 1), (2, 2));
    press_key(&mut session, Key::Char('3'));
    press_key(&mut session, Key::Space);
    session.update();

    let view = session.frame_view();
    assert_eq!(view.mode, Mode::Solved);
    let path = view.path().unwrap();
    assert!(path.iter().all(Cell::is_interior));
    for pair in path.windows(2) {
        assert!(moves::neighbors(pair[0], PieceType::Knight).any(|next| next == pair[1]));
    }
}

#[test]
fn test_frame_view_reflects_session() {
    let mut session = session_with_endpoints((5, 5), (10, 10));
    let view = session.frame_view();
    assert_eq!(view.mode, Mode::Barrier);
    assert_eq!(view.prompt(), Some("Draw your walls or press spacebar to solve:"));
    assert!(view.run.is_none());
    assert!(view.closed_set.is_none());

    press_key(&mut session, Key::Space);
    assert_eq!(session.frame_view().prompt(), None);
}
