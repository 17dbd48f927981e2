//! Countdown state owned by the event loop

use std::time::Duration;

use super::TimerDescriptor;

/// Amount of time consumed by one clock tick
pub const TICK: Duration = Duration::from_secs(1);

/// Logical state of the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Paused,
}

/// What a single tick did to the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// No timer active, nothing changed
    Idle,
    /// Timer paused, remaining time untouched
    Frozen,
    /// One second elapsed, time still left
    Counted,
    /// Remaining time hit zero; the state is already back to idle
    Finished(TimerDescriptor),
}

/// The current countdown.
///
/// `active` is `None` exactly when `remaining` is zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    active: Option<TimerDescriptor>,
    remaining: Duration,
    paused: bool,
}

impl TimerState {
    /// Create an idle timer state
    pub fn new() -> Self {
        Self {
            active: None,
            remaining: Duration::ZERO,
            paused: false,
        }
    }

    /// Preset currently counting down, if any
    pub fn active(&self) -> Option<&TimerDescriptor> {
        self.active.as_ref()
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn phase(&self) -> Phase {
        match (self.active, self.paused) {
            (None, _) => Phase::Idle,
            (Some(_), false) => Phase::Running,
            (Some(_), true) => Phase::Paused,
        }
    }

    /// Start counting down `descriptor`.
    ///
    /// Only accepted while idle: a running or paused timer is never
    /// replaced. Returns whether the preset was started.
    pub fn start(&mut self, descriptor: TimerDescriptor) -> bool {
        if !self.remaining.is_zero() || descriptor.duration.is_zero() {
            return false;
        }
        self.active = Some(descriptor);
        self.remaining = descriptor.duration;
        self.paused = false;
        true
    }

    /// Flip the pause flag. Has no visible effect while idle.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Advance the countdown by one tick
    pub fn tick(&mut self) -> Tick {
        let Some(descriptor) = self.active else {
            return Tick::Idle;
        };
        if self.paused {
            return Tick::Frozen;
        }

        self.remaining = self.remaining.saturating_sub(TICK);
        if self.remaining.is_zero() {
            self.active = None;
            Tick::Finished(descriptor)
        } else {
            Tick::Counted
        }
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}
