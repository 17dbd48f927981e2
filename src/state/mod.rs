//! State management module
//!
//! This module contains the preset catalog and the countdown state machine
//! driven by the event loop.

pub mod catalog;
pub mod timer_state;

// Re-export main types
pub use catalog::{CompletionSound, TimerDescriptor};
pub use timer_state::{Phase, Tick, TimerState, TICK};
