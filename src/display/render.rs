//! Progress line rendering

use std::time::Duration;

use crate::state::{TimerDescriptor, TimerState};

/// Number of segments in the progress bar
pub const BAR_WIDTH: usize = 40;

const FILLED: char = '█';
const EMPTY: char = '░';

/// Render the status line for the current state, or nothing when idle
pub fn render(state: &TimerState) -> Option<String> {
    state
        .active()
        .map(|descriptor| render_line(descriptor, state.is_paused(), state.remaining()))
}

/// Render one status line: label, progress bar, pause marker and `MM:SS`
pub fn render_line(descriptor: &TimerDescriptor, paused: bool, remaining: Duration) -> String {
    let filled = filled_segments(descriptor.duration, remaining);
    let mut bar = String::with_capacity(BAR_WIDTH * FILLED.len_utf8());
    bar.extend(std::iter::repeat(FILLED).take(filled));
    bar.extend(std::iter::repeat(EMPTY).take(BAR_WIDTH - filled));

    if paused {
        format!("{} [{}] [paused] {}", descriptor.label, bar, format_remaining(remaining))
    } else {
        format!("{} [{}] {}", descriptor.label, bar, format_remaining(remaining))
    }
}

/// `floor(BAR_WIDTH * elapsed / duration)`, clamped to the bar width
pub fn filled_segments(duration: Duration, remaining: Duration) -> usize {
    if duration.is_zero() {
        return BAR_WIDTH;
    }
    let elapsed = duration.saturating_sub(remaining);
    let filled = BAR_WIDTH as u128 * elapsed.as_millis() / duration.as_millis();
    filled.min(BAR_WIDTH as u128) as usize
}

/// Format remaining time as zero-padded `MM:SS`
pub fn format_remaining(remaining: Duration) -> String {
    let seconds = remaining.as_secs();
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
