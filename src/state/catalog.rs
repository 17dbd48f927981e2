//! Fixed timer presets selectable from the keyboard

use std::time::Duration;

use crossterm::style::Color;

/// Audio cue played when a timer runs out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompletionSound {
    Work,
    Break,
}

impl CompletionSound {
    pub const ALL: [CompletionSound; 2] = [CompletionSound::Work, CompletionSound::Break];

    /// Asset file name, resolved against the sounds directory
    pub fn file_name(self) -> &'static str {
        match self {
            CompletionSound::Work => "timer-end.wav",
            CompletionSound::Break => "break-end.wav",
        }
    }
}

/// Immutable description of one preset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerDescriptor {
    /// Key that starts this preset
    pub key: char,
    pub label: &'static str,
    /// Always non-zero
    pub duration: Duration,
    pub sound: CompletionSound,
    pub color: Color,
}

pub static WORK: TimerDescriptor = TimerDescriptor {
    key: 'w',
    label: "Work",
    duration: Duration::from_secs(25 * 60),
    sound: CompletionSound::Work,
    color: Color::Magenta,
};

pub static BREAK: TimerDescriptor = TimerDescriptor {
    key: 'b',
    label: "Break",
    duration: Duration::from_secs(60),
    sound: CompletionSound::Break,
    color: Color::Green,
};

pub static LONG_BREAK: TimerDescriptor = TimerDescriptor {
    key: 'l',
    label: "Long break",
    duration: Duration::from_secs(15 * 60),
    sound: CompletionSound::Break,
    color: Color::Blue,
};

/// Every preset, in the order shown in the key help
pub static PRESETS: [&TimerDescriptor; 3] = [&WORK, &BREAK, &LONG_BREAK];

/// Look up the preset bound to a key
pub fn by_key(key: char) -> Option<&'static TimerDescriptor> {
    PRESETS.iter().copied().find(|preset| preset.key == key)
}
