//! Pomodore - A terminal Pomodoro timer
//!
//! This library provides the countdown state machine, the event loop that
//! multiplexes clock ticks, key presses and OS signals into it, and the
//! rendering and sound side effects driven by that loop.

pub mod config;
pub mod state;
pub mod display;
pub mod services;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::{TimerDescriptor, TimerState};
pub use tasks::EventLoop;
pub use utils::signals::SignalSource;
