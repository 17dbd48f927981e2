//! Terminal output module
//!
//! Pure line rendering plus the writer that puts lines on the terminal.

pub mod render;
pub mod terminal;

pub use render::{render, render_line};
pub use terminal::{RawModeGuard, Terminal};
