//! External service module
//!
//! This module contains the audio playback used for completion cues.

pub mod sound;

// Re-export main types
pub use sound::{RodioPlayer, SoundPlayer};
