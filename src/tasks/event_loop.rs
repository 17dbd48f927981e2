//! The countdown event loop
//!
//! One loop iteration consumes exactly one event from the clock, the
//! keyboard or the signal source, applies it to the [`TimerState`] and
//! performs the resulting rendering and sound side effects. The loop is the
//! only writer of the timer state and of the terminal.

use std::io::Write;

use anyhow::{bail, Context};
use tokio::time::{interval, Interval, MissedTickBehavior};
use tracing::{debug, info};

use crate::{
    display::{render, render_line, Terminal},
    services::SoundPlayer,
    state::{catalog, Tick, TimerDescriptor, TimerState, TICK},
    utils::{Command, KeyboardSource, SignalSource},
};

/// Printed when the user ends the program
pub const FAREWELL: &str = "Timer cancelled";

/// One input to the loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// One second of wall-clock time elapsed
    Tick,
    Key(Command),
    /// SIGINT or SIGTERM
    Interrupt,
}

/// Whether the loop keeps going after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Next key command or clock tick, whichever is ready first
async fn next_input(keys: &mut KeyboardSource, clock: &mut Interval) -> anyhow::Result<Event> {
    tokio::select! {
        key = keys.next() => match key {
            Some(Ok(command)) => Ok(Event::Key(command)),
            Some(Err(e)) => Err(e).context("Keyboard input failed"),
            None => bail!("Keyboard input closed unexpectedly"),
        },
        _ = clock.tick() => Ok(Event::Tick),
    }
}

/// Owns the countdown and drives every side effect it causes
#[derive(Debug)]
pub struct EventLoop<P, W: Write> {
    state: TimerState,
    player: P,
    terminal: Terminal<W>,
}

impl<P: SoundPlayer, W: Write> EventLoop<P, W> {
    pub fn new(player: P, out: W) -> Self {
        Self {
            state: TimerState::new(),
            player,
            terminal: Terminal::new(out),
        }
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn output(&self) -> &W {
        self.terminal.get_ref()
    }

    /// Print the key bindings
    pub fn greet(&mut self) -> anyhow::Result<()> {
        let presets: Vec<String> = catalog::PRESETS
            .iter()
            .map(|preset| format!("{}: {}", preset.key, preset.label.to_lowercase()))
            .collect();
        let help = format!("{}  p: pause  ctrl+c: quit", presets.join("  "));
        self.terminal.line(&help).context("Failed to write to terminal")
    }

    /// Wait for events until the user quits or an input fails.
    ///
    /// Sound playback inside [`EventLoop::dispatch`] blocks this loop; no
    /// keys, ticks or signals are handled until the cue has finished.
    /// A pending signal always wins; keys and ticks are picked at random
    /// when both are ready so a key storm cannot hold back the clock.
    pub async fn run(
        &mut self,
        mut keys: KeyboardSource,
        mut signals: SignalSource,
    ) -> anyhow::Result<()> {
        let mut clock = interval(TICK);
        clock.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // the first tick completes immediately
        clock.tick().await;

        info!("Event loop started");
        loop {
            let event = tokio::select! {
                biased;
                _ = signals.next() => Event::Interrupt,
                input = next_input(&mut keys, &mut clock) => input?,
            };

            if self.dispatch(event)? == Flow::Exit {
                info!("Event loop stopped");
                return Ok(());
            }
        }
    }

    /// Apply a single event to the timer state
    pub fn dispatch(&mut self, event: Event) -> anyhow::Result<Flow> {
        match event {
            Event::Tick => self.on_tick()?,
            Event::Key(Command::Start(descriptor)) => self.on_start(descriptor)?,
            Event::Key(Command::TogglePause) => self.on_toggle_pause()?,
            Event::Key(Command::Quit) | Event::Interrupt => {
                info!("Shutting down on {:?}", event);
                self.terminal
                    .line(FAREWELL)
                    .context("Failed to write to terminal")?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    fn on_tick(&mut self) -> anyhow::Result<()> {
        match self.state.tick() {
            Tick::Idle => Ok(()),
            Tick::Frozen | Tick::Counted => self.redraw(),
            Tick::Finished(descriptor) => self.complete(descriptor),
        }
    }

    fn on_start(&mut self, descriptor: TimerDescriptor) -> anyhow::Result<()> {
        if !self.state.start(descriptor) {
            debug!("Ignoring {} while a timer is active", descriptor.label);
            return Ok(());
        }
        info!("Started {} timer for {:?}", descriptor.label, descriptor.duration);
        self.redraw()
    }

    fn on_toggle_pause(&mut self) -> anyhow::Result<()> {
        self.state.toggle_pause();
        debug!("Pause toggled, paused={}", self.state.is_paused());
        self.redraw()
    }

    fn redraw(&mut self) -> anyhow::Result<()> {
        let (Some(descriptor), Some(line)) = (self.state.active(), render(&self.state)) else {
            return Ok(());
        };
        self.terminal
            .overwrite(&line, descriptor.color)
            .context("Failed to write to terminal")
    }

    fn complete(&mut self, descriptor: TimerDescriptor) -> anyhow::Result<()> {
        let line = render_line(&descriptor, false, self.state.remaining());
        self.terminal
            .overwrite(&line, descriptor.color)
            .context("Failed to write to terminal")?;

        info!("{} timer finished", descriptor.label);
        self.player
            .play(descriptor.sound)
            .with_context(|| format!("Failed to play {:?} completion sound", descriptor.sound))?;

        self.terminal
            .banner(&format!("{} finished!", descriptor.label), descriptor.color)
            .context("Failed to write to terminal")
    }
}
