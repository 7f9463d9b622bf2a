//! Scripted event replay.
//!
//! A script is a TOML list of pointer, key and tick events. The player feeds
//! them to a [`Session`] through the regular frame loop (dispatch events,
//! update, render), so a script exercises exactly what a backend would.
//!
//! ```toml
//! [[events]]
//! kind = "press"
//! button = "left"
//! x = 110
//! y = 110
//!
//! [[events]]
//! kind = "key"
//! key = "Space"
//!
//! [[events]]
//! kind = "tick"
//! count = 3
//! ```

use crate::input::{InputEvent, Key, MouseButton, Session};
use crate::ui::Renderer;
use log::{debug, trace, warn};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read script {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse script: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Event {index}: unknown key '{key}'")]
    UnknownKey { index: usize, key: String },
}

/// One entry of the `events` list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScriptEvent {
    Press { button: MouseButton, x: i32, y: i32 },
    Release { button: MouseButton, x: i32, y: i32 },
    Motion { x: i32, y: i32 },
    Key { key: String },
    KeyRelease { key: String },
    Tick {
        #[serde(default = "default_tick_count")]
        count: usize,
    },
}

fn default_tick_count() -> usize {
    1
}

/// Event script as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

/// A resolved script entry, ready to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStep {
    Input(InputEvent),
    Tick(usize),
}

impl Script {
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let text = fs::read_to_string(path).map_err(|source| ScriptError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self, ScriptError> {
        Ok(toml::from_str(text)?)
    }

    /// Converts the events into playable steps, resolving key names.
    pub fn resolve(&self) -> Result<Vec<ScriptStep>, ScriptError> {
        self.events
            .iter()
            .enumerate()
            .map(|(index, event)| {
                let key = |name: &str| {
                    Key::from_name(name).ok_or_else(|| ScriptError::UnknownKey {
                        index,
                        key: name.to_string(),
                    })
                };

                Ok(match event {
                    ScriptEvent::Press { button, x, y } => {
                        ScriptStep::Input(InputEvent::ButtonPressed {
                            button: *button,
                            x: *x,
                            y: *y,
                        })
                    }
                    ScriptEvent::Release { button, x, y } => {
                        ScriptStep::Input(InputEvent::ButtonReleased {
                            button: *button,
                            x: *x,
                            y: *y,
                        })
                    }
                    ScriptEvent::Motion { x, y } => {
                        ScriptStep::Input(InputEvent::PointerMoved { x: *x, y: *y })
                    }
                    ScriptEvent::Key { key: name } => {
                        ScriptStep::Input(InputEvent::KeyPressed(key(name.as_str())?))
                    }
                    ScriptEvent::KeyRelease { key: name } => {
                        ScriptStep::Input(InputEvent::KeyReleased(key(name.as_str())?))
                    }
                    ScriptEvent::Tick { count } => ScriptStep::Tick(*count),
                })
            })
            .collect()
    }
}

/// Plays `steps` against `session`, rendering through `renderer`.
///
/// Each tick runs one frame: `update()` followed by a render when
/// `every_frame` is set, the session wants one and something changed since the
/// last render. After the last step the player keeps ticking while a run is in
/// progress (bounded by the session's evaluation limit), then renders the
/// final frame if the session still needs a redraw.
///
/// Returns the number of frames updated.
pub fn play<R: Renderer>(
    session: &mut Session,
    steps: &[ScriptStep],
    renderer: &mut R,
    every_frame: bool,
) -> usize {
    let mut frames = 0;

    for step in steps {
        match *step {
            ScriptStep::Input(event) => session.dispatch(event),
            ScriptStep::Tick(count) => {
                for _ in 0..count {
                    frame(session, renderer, every_frame);
                    frames += 1;
                }
            }
        }
    }

    let limit = session.max_evaluations();
    let mut drained = 0;
    while session.mode().is_running() {
        if drained >= limit {
            warn!("Run still in progress after {} extra frames", drained);
            break;
        }
        frame(session, renderer, every_frame);
        frames += 1;
        drained += 1;
    }
    if drained > 0 {
        debug!("Ran {} extra frames to finish the run", drained);
    }

    if session.needs_redraw {
        draw(session, renderer);
    }
    frames
}

fn frame<R: Renderer>(session: &mut Session, renderer: &mut R, every_frame: bool) {
    session.update();
    if every_frame && session.needs_redraw && session.should_render() {
        draw(session, renderer);
    } else if every_frame {
        trace!("Skipping clean frame");
    }
}

fn draw<R: Renderer>(session: &mut Session, renderer: &mut R) {
    renderer.render(&session.frame_view());
    session.needs_redraw = false;
}
