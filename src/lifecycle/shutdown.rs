//! Shutdown coordination.

use tokio::sync::broadcast;

/// Fan-out of a single "stop now" event to background tasks and the server.
#[derive(Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Receiver resolved by the next `trigger`.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Notify every subscriber. Triggering with no subscribers is fine.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }

    /// Future resolving once `trigger` is called; suitable for graceful shutdown hooks.
    pub fn wait(&self) -> impl std::future::Future<Output = ()> + Send + 'static {
        let mut rx = self.subscribe();
        async move {
            let _ = rx.recv().await;
        }
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
