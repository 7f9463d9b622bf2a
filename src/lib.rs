//! Library exports for the findaway grid editor.
//!
//! Exposes the session state machine, the grid model, the solver contract and
//! configuration structures so that front-ends (a windowed backend, the script
//! player, tests) drive the same interaction logic.

pub mod config;
pub mod grid;
pub mod input;
pub mod script;
pub mod solver;
pub mod ui;
pub mod util;

pub use config::Config;
pub use input::Session;
