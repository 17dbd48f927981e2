//! Pomodore - A terminal Pomodoro timer
//!
//! This is the main entry point for the pomo binary.

use std::io;

use tracing::info;

use pomodore::{
    config::Config,
    display::RawModeGuard,
    services::RodioPlayer,
    tasks::{Event, EventLoop},
    utils::{Command, KeyboardSource, SignalSource},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("pomodore={}", config.log_level()))
        .with_writer(io::stderr)
        .init();

    info!("Starting pomodore v1.0.0");
    info!("Configuration: preset={:?}, sounds_dir={}",
          config.preset, config.sounds_dir.display());

    run(config).await
}

/// Acquire every input source, run the loop, and release them in reverse
/// order whether the loop ends normally or with an error.
async fn run(config: Config) -> anyhow::Result<()> {
    let player = RodioPlayer::new(&config.sounds_dir)?;
    let signals = SignalSource::register()?;
    let _raw_mode = RawModeGuard::enable()?;
    let keys = KeyboardSource::spawn();

    let mut event_loop = EventLoop::new(player, io::stdout());
    event_loop.greet()?;

    if let Some(preset) = config.preset {
        event_loop.dispatch(Event::Key(Command::Start(*preset.descriptor())))?;
    }

    event_loop.run(keys, signals).await
}
