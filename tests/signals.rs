//! Runs the real loop against its clock and SIGTERM.
//!
//! Raised signals reach every registered `SignalSource` in the process, so
//! these tests take a lock and live in their own test binary.

use std::{
    io,
    sync::{Mutex, MutexGuard},
    time::Duration,
};

use crossterm::event::{Event as TermEvent, KeyCode, KeyEvent, KeyModifiers};
use futures::{stream, StreamExt};
use signal_hook::{consts::SIGTERM, low_level::raise};

use pomodore::{
    services::SoundPlayer,
    state::{
        catalog::{BREAK, WORK},
        CompletionSound, Phase,
    },
    tasks::{event_loop::FAREWELL, Event, EventLoop},
    utils::{Command, KeyboardSource, SignalSource},
};

static SIGNAL_LOCK: Mutex<()> = Mutex::new(());

fn signal_lock() -> MutexGuard<'static, ()> {
    SIGNAL_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

#[derive(Debug, Default)]
struct RecordingPlayer {
    played: Vec<CompletionSound>,
}

impl SoundPlayer for RecordingPlayer {
    fn play(&mut self, sound: CompletionSound) -> anyhow::Result<()> {
        self.played.push(sound);
        Ok(())
    }
}

/// Receives SIGTERM while the cue is still "playing"
#[derive(Debug, Default)]
struct InterruptedPlayer {
    played: Vec<CompletionSound>,
}

impl SoundPlayer for InterruptedPlayer {
    fn play(&mut self, sound: CompletionSound) -> anyhow::Result<()> {
        self.played.push(sound);
        raise(SIGTERM)?;
        Ok(())
    }
}

fn idle_keys() -> KeyboardSource {
    KeyboardSource::from_stream(stream::pending())
}

fn output<P: SoundPlayer>(event_loop: &EventLoop<P, Vec<u8>>) -> String {
    String::from_utf8_lossy(event_loop.output()).into_owned()
}

#[tokio::test(start_paused = true)]
async fn sigterm_stops_the_loop() {
    let _guard = signal_lock();
    let signals = SignalSource::register().unwrap();

    let mut event_loop = EventLoop::new(RecordingPlayer::default(), Vec::new());
    event_loop.dispatch(Event::Key(Command::Start(WORK))).unwrap();
    let before = event_loop.state().clone();

    raise(SIGTERM).unwrap();
    event_loop.run(idle_keys(), signals).await.unwrap();

    assert_eq!(event_loop.state(), &before);
    assert!(output(&event_loop).ends_with(&format!("{}\r\n", FAREWELL)));
}

#[tokio::test(start_paused = true)]
async fn clock_ticks_count_down_until_interrupted() {
    let _guard = signal_lock();
    let signals = SignalSource::register().unwrap();

    let mut event_loop = EventLoop::new(RecordingPlayer::default(), Vec::new());
    event_loop.dispatch(Event::Key(Command::Start(WORK))).unwrap();

    tokio::spawn(async {
        tokio::time::sleep(Duration::from_millis(3500)).await;
        raise(SIGTERM).unwrap();
    });
    event_loop.run(idle_keys(), signals).await.unwrap();

    assert_eq!(event_loop.state().phase(), Phase::Running);
    assert_eq!(event_loop.state().remaining(), WORK.duration - Duration::from_secs(3));
    let out = output(&event_loop);
    assert!(out.contains("24:57"));
    assert!(out.ends_with(&format!("{}\r\n", FAREWELL)));
}

#[tokio::test(start_paused = true)]
async fn interrupt_during_playback_exits_on_the_next_iteration() {
    let _guard = signal_lock();
    let signals = SignalSource::register().unwrap();

    let mut event_loop = EventLoop::new(InterruptedPlayer::default(), Vec::new());
    event_loop.dispatch(Event::Key(Command::Start(BREAK))).unwrap();
    event_loop.run(idle_keys(), signals).await.unwrap();

    assert_eq!(event_loop.player().played, vec![CompletionSound::Break]);
    assert_eq!(event_loop.state().phase(), Phase::Idle);
    assert_eq!(event_loop.state().remaining(), Duration::ZERO);

    // nothing is drawn between the completion banner and the farewell
    let out = output(&event_loop);
    assert!(out.ends_with(&format!(
        "Break finished!\x1b[0m\r\n\x1b[1G\x1b[2K{}\r\n",
        FAREWELL
    )));
}

fn press(c: char) -> io::Result<TermEvent> {
    Ok(TermEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)))
}

#[tokio::test]
async fn ticks_still_arrive_during_a_key_storm() {
    let _guard = signal_lock();
    let signals = SignalSource::register().unwrap();

    // preset keys are ignored while a timer runs, so only ticks change state
    let storm = stream::repeat_with(|| press('w')).then(|key| async {
        tokio::task::yield_now().await;
        key
    });
    let keys = KeyboardSource::from_stream(Box::pin(storm));

    let mut event_loop = EventLoop::new(RecordingPlayer::default(), Vec::new());
    event_loop.dispatch(Event::Key(Command::Start(WORK))).unwrap();

    tokio::spawn(async {
        tokio::time::sleep(Duration::from_millis(2500)).await;
        raise(SIGTERM).unwrap();
    });
    event_loop.run(keys, signals).await.unwrap();

    assert_eq!(event_loop.state().active(), Some(&WORK));
    assert!(event_loop.state().remaining() < WORK.duration);
}
