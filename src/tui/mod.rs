//! TUI module for psr.
//!
//! Provides the terminal picker for interactive script selection.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::handle_event;
pub use ui::{run_picker, TerminalGuard};
