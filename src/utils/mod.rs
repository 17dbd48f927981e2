//! Input source module
//!
//! This module contains the producers feeding the event loop: OS signals
//! and terminal key presses.

pub mod keyboard;
pub mod signals;

// Re-export main types
pub use keyboard::{map_key, Command, KeyboardSource};
pub use signals::SignalSource;
