//! Event loop module
//!
//! This module contains the loop that owns the countdown and arbitrates
//! between clock ticks, key presses and shutdown signals.

pub mod event_loop;

// Re-export main types
pub use event_loop::{Event, EventLoop, Flow};
