//! Keyboard input: key mapping and the reader task feeding the event loop

use std::io;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::{Stream, StreamExt};
use tokio::{
    sync::mpsc::{self, error::TrySendError},
    task::JoinHandle,
};
use tracing::{debug, warn};

use crate::state::{catalog, TimerDescriptor};

/// Pending key commands buffered between the reader task and the loop
pub const KEY_BUFFER: usize = 10;

/// What a key press asks the event loop to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start a preset (only honoured while idle)
    Start(TimerDescriptor),
    TogglePause,
    /// Hard interrupt, same as SIGINT
    Quit,
}

/// Map a crossterm key event to a command.
///
/// Returns None for keys without a binding.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Raw mode swallows SIGINT, so Ctrl+C arrives here as a key
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c' | 'C') => Some(Command::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('p') => Some(Command::TogglePause),
        KeyCode::Char(c) => catalog::by_key(c).map(|preset| Command::Start(*preset)),
        _ => None,
    }
}

/// Reader task forwarding key commands into a bounded channel.
///
/// The task is aborted when the source is dropped.
pub struct KeyboardSource {
    rx: mpsc::Receiver<io::Result<Command>>,
    task: JoinHandle<()>,
}

impl KeyboardSource {
    /// Read keys from the terminal. Requires raw mode to be enabled.
    pub fn spawn() -> Self {
        Self::from_stream(EventStream::new())
    }

    /// Read keys from any crossterm-style event stream
    pub fn from_stream<S>(stream: S) -> Self
    where
        S: Stream<Item = io::Result<Event>> + Send + Unpin + 'static,
    {
        let (tx, rx) = mpsc::channel(KEY_BUFFER);
        let task = tokio::spawn(forward_keys(stream, tx));
        Self { rx, task }
    }

    /// Next command, a fatal read error, or `None` once the reader has stopped
    pub async fn next(&mut self) -> Option<io::Result<Command>> {
        self.rx.recv().await
    }
}

impl Drop for KeyboardSource {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn forward_keys<S>(mut stream: S, tx: mpsc::Sender<io::Result<Command>>)
where
    S: Stream<Item = io::Result<Event>> + Unpin,
{
    while let Some(event) = stream.next().await {
        match event {
            Ok(Event::Key(key)) => {
                let Some(command) = map_key(key) else {
                    continue;
                };
                match tx.try_send(Ok(command)) {
                    Ok(()) => {}
                    Err(TrySendError::Full(_)) => {
                        debug!("Key buffer full, dropping {:?}", command);
                    }
                    Err(TrySendError::Closed(_)) => break,
                }
            }
            Ok(_) => {}
            Err(e) => {
                warn!("Keyboard input failed: {}", e);
                let _ = tx.send(Err(e)).await;
                break;
            }
        }
    }
    debug!("Keyboard reader stopped");
}
