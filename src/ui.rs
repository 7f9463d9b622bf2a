//! UI rendering: the renderer contract and a text frame renderer.
use crate::grid::{BORDER_THICKNESS, Cell, LATTICE_COLUMNS, LATTICE_ROWS};
use crate::input::FrameView;
use crate::input::hotzone::{PARTIAL_RESET_LABEL, animate_label, piece_label};
use log::warn;
use std::collections::HashSet;
use std::io::Write;

// ============================================================================
// Glyphs (not configurable)
// ============================================================================

const GLYPH_EMPTY: char = '.';
const GLYPH_BARRIER: char = '#';
const GLYPH_START: char = 'S';
const GLYPH_GOAL: char = 'G';
const GLYPH_PATH: char = '*';
const GLYPH_CLOSED: char = '~';

/// Consumes one frame per call. Implementations must not mutate the session.
pub trait Renderer {
    fn render(&mut self, view: &FrameView<'_>);
}

/// Render a frame as text: status line, the full cell lattice, result line.
pub fn render_text(view: &FrameView<'_>) -> String {
    let mut out = String::new();

    let mut status = vec![view.prompt().unwrap_or_default().to_string()];
    if view.mode.is_finished() {
        status.push(PARTIAL_RESET_LABEL.to_string());
    }
    status.push(animate_label(view.animate));
    out.push_str(status.join("  ").trim_start());
    out.push('\n');

    let path: HashSet<Cell> = view.path().unwrap_or_default().iter().copied().collect();
    let first = 1 - BORDER_THICKNESS;
    for row in first..=LATTICE_ROWS {
        for col in first..=LATTICE_COLUMNS {
            out.push(glyph(view, &path, Cell::new(col, row)));
        }
        out.push('\n');
    }

    let mut result = Vec::new();
    if let Some(run) = view.run.filter(|run| run.is_finished()) {
        match run.solution.steps() {
            Some(steps) => result.push(format!("Steps: {steps}")),
            None => result.push("No solution.".to_string()),
        }
        if let Some(elapsed) = run.elapsed_ms() {
            result.push(format!("Time (ms): {elapsed}"));
        }
    }
    result.push(piece_label(view.piece));
    out.push_str(&result.join("  "));
    out.push('\n');

    out
}

fn glyph(view: &FrameView<'_>, path: &HashSet<Cell>, cell: Cell) -> char {
    if view.grid.start() == Some(cell) {
        GLYPH_START
    } else if view.grid.goal() == Some(cell) {
        GLYPH_GOAL
    } else if view.grid.is_barrier(cell) {
        GLYPH_BARRIER
    } else if path.contains(&cell) {
        GLYPH_PATH
    } else if view.closed_set.is_some_and(|closed| closed.contains(&cell)) {
        GLYPH_CLOSED
    } else {
        GLYPH_EMPTY
    }
}

/// Writes text frames to any `Write` sink, separated by a blank line.
pub struct TextRenderer<W: Write> {
    out: W,
    frames: usize,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, frames: 0 }
    }

    /// Number of frames rendered so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, view: &FrameView<'_>) {
        let text = render_text(view);
        let separator = if self.frames == 0 { "" } else { "\n" };
        if let Err(err) = write!(self.out, "{separator}{text}") {
            warn!("Failed to write frame: {}", err);
            return;
        }
        self.frames += 1;
    }
}
