mod actions;
mod core;
mod mouse;
mod run;
mod transitions;
mod view;
#[cfg(test)]
mod tests;

pub use core::Session;
pub use view::FrameView;
