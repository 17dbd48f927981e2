//! Signal handling for user-initiated shutdown

use anyhow::Context;
use futures::stream::StreamExt;
use signal_hook_tokio::{Handle, Signals};
use tracing::{debug, info};

/// SIGINT/SIGTERM subscription, unregistered when dropped
pub struct SignalSource {
    signals: Signals,
    handle: Handle,
}

impl SignalSource {
    /// Register for shutdown signals (SIGTERM, SIGINT)
    pub fn register() -> anyhow::Result<Self> {
        let signals = Signals::new([
            signal_hook::consts::SIGTERM,
            signal_hook::consts::SIGINT,
        ])
        .context("Failed to register signal handlers")?;
        let handle = signals.handle();

        debug!("Signal handlers registered");
        Ok(Self { signals, handle })
    }

    /// Wait for the next shutdown signal.
    ///
    /// Returns `None` once the subscription is closed.
    pub async fn next(&mut self) -> Option<i32> {
        let signal = self.signals.next().await;
        if let Some(signal) = signal {
            info!("Received signal: {}", signal);
        }
        signal
    }
}

impl Drop for SignalSource {
    fn drop(&mut self) {
        self.handle.close();
        debug!("Signal handlers closed");
    }
}
