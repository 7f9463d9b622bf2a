//! Input handling and the interaction state machine.
//!
//! This module translates backend pointer and keyboard events into grid edits
//! and mode transitions. It owns the session state (grid, mode, piece, drag
//! flags, run record) and drives the solver while a run is in progress.

pub mod drag;
pub mod events;
pub mod hotzone;
pub mod mode;
pub mod modifiers;
pub mod piece;
pub mod state;

// Re-export commonly used types at module level
pub use drag::DragState;
pub use events::{InputEvent, Key, MouseButton};
pub use hotzone::HotZone;
pub use mode::Mode;
pub use modifiers::Modifiers;
pub use piece::PieceType;
pub use state::{FrameView, Session};
