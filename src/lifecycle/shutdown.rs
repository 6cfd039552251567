//! Graceful shutdown coordination.
//!
//! The HTTP server holds one receiver and stops accepting when it fires;
//! in-flight requests drain before `run` returns.

use tokio::sync::broadcast;

use crate::lifecycle::signals;

pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Fire the signal. A no-op when nobody is listening.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }

    /// Fire on the first SIGINT/SIGTERM, from a background task.
    pub fn trigger_on_termination(self) {
        tokio::spawn(async move {
            signals::wait_for_termination().await;
            self.trigger();
        });
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
