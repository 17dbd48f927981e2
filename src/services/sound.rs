//! Completion cue playback

use std::{
    fs::File,
    io::BufReader,
    path::PathBuf,
};

use anyhow::{bail, Context};
use rodio::{Decoder, OutputStream, Sink};
use tracing::{debug, info};

use crate::state::CompletionSound;

/// Plays a completion cue to the end before returning
pub trait SoundPlayer {
    fn play(&mut self, sound: CompletionSound) -> anyhow::Result<()>;
}

/// Plays WAV assets from a directory through the default output device
#[derive(Debug, Clone)]
pub struct RodioPlayer {
    sounds_dir: PathBuf,
}

impl RodioPlayer {
    /// Create a player, failing if any cue asset is missing from `sounds_dir`
    pub fn new(sounds_dir: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let player = Self {
            sounds_dir: sounds_dir.into(),
        };

        for sound in CompletionSound::ALL {
            let path = player.path_for(sound);
            if !path.is_file() {
                bail!("Sound asset not found: {}", path.display());
            }
        }

        info!("Using sound assets from {}", player.sounds_dir.display());
        Ok(player)
    }

    /// Location of the asset for `sound`
    pub fn path_for(&self, sound: CompletionSound) -> PathBuf {
        self.sounds_dir.join(sound.file_name())
    }
}

impl SoundPlayer for RodioPlayer {
    /// Blocks the calling thread until playback has finished
    fn play(&mut self, sound: CompletionSound) -> anyhow::Result<()> {
        let path = self.path_for(sound);
        debug!("Playing {}", path.display());

        let file = File::open(&path)
            .with_context(|| format!("Failed to open sound asset {}", path.display()))?;
        let source = Decoder::new(BufReader::new(file))
            .with_context(|| format!("Failed to decode sound asset {}", path.display()))?;

        let (_stream, stream_handle) =
            OutputStream::try_default().context("No audio output device available")?;
        let sink = Sink::try_new(&stream_handle).context("Failed to open audio sink")?;

        sink.append(source);
        sink.sleep_until_end();

        debug!("Finished playing {}", path.display());
        Ok(())
    }
}
