//! Idle session sweeper.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;

use crate::config::SessionConfig;
use crate::observability::metrics;
use crate::session::SessionStore;

/// Periodically drops sessions idle longer than the configured timeout.
pub struct SessionSweeper {
    store: Arc<dyn SessionStore>,
    interval: Duration,
    max_idle: Duration,
}

impl SessionSweeper {
    pub fn new(store: Arc<dyn SessionStore>, config: &SessionConfig) -> Self {
        Self {
            store,
            interval: Duration::from_secs(config.sweep_interval_secs),
            max_idle: Duration::from_secs(config.idle_timeout_secs),
        }
    }

    /// One pass; returns how many sessions were dropped.
    pub fn sweep(&self) -> usize {
        let purged = self.store.purge_idle(self.max_idle);
        let remaining = self.store.len();
        metrics::record_active_sessions(remaining);
        if purged > 0 {
            tracing::debug!(purged, remaining, "Idle sessions purged");
        }
        purged
    }

    /// Sweep on every tick until shutdown is signalled.
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.tick().await;
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.sweep();
                }
                _ = shutdown.recv() => {
                    tracing::debug!("Session sweeper stopping");
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::Shutdown;
    use crate::session::MemorySessionStore;

    #[test]
    fn test_sweep_respects_idle_timeout() {
        let store: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
        store.create();
        let sweeper = SessionSweeper::new(store.clone(), &SessionConfig::default());
        assert_eq!(sweeper.sweep(), 0);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_run_stops_on_shutdown() {
        let store: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
        let config = SessionConfig {
            sweep_interval_secs: 1,
            ..SessionConfig::default()
        };
        let shutdown = Shutdown::new();
        let handle = tokio::spawn(SessionSweeper::new(store, &config).run(shutdown.subscribe()));
        shutdown.trigger();
        tokio::time::timeout(Duration::from_secs(2), handle)
            .await
            .expect("sweeper did not stop")
            .unwrap();
    }
}
