//! Configuration and CLI argument handling

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::state::{catalog, TimerDescriptor};

/// Preset that can be started straight from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PresetArg {
    Work,
    Break,
    #[value(name = "lbreak")]
    LongBreak,
}

impl PresetArg {
    /// Catalog entry this argument refers to
    pub fn descriptor(self) -> &'static TimerDescriptor {
        match self {
            PresetArg::Work => &catalog::WORK,
            PresetArg::Break => &catalog::BREAK,
            PresetArg::LongBreak => &catalog::LONG_BREAK,
        }
    }
}

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "pomo")]
#[command(about = "A terminal Pomodoro timer")]
#[command(after_help = "Keys: w = work, b = break, l = long break, p = pause/resume, Ctrl+C = quit")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Start this timer immediately instead of waiting for a key
    #[arg(value_enum)]
    pub preset: Option<PresetArg>,

    /// Directory holding timer-end.wav and break-end.wav
    #[arg(long, default_value = "sounds")]
    pub sounds_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}
