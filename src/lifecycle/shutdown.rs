//! Stop signal shared by the signal watcher and the HTTP server.
//!
//! `main` holds the `Shutdown`, hands a receiver to `HttpServer::run`, and
//! fires it once SIGINT/SIGTERM arrives. Integration tests fire it directly
//! to stop a server bound to an ephemeral port.

use tokio::sync::broadcast;

/// One-shot stop signal fanned out to every subscribed task.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// A receiver that resolves once `trigger` is called.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Ask every subscriber to stop. Safe to call with no subscribers.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }

    /// Subscribers that have not yet dropped their receiver.
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_trigger_reaches_every_subscriber() {
        let shutdown = Shutdown::new();
        let mut a = shutdown.subscribe();
        let mut b = shutdown.subscribe();
        assert_eq!(shutdown.receiver_count(), 2);

        shutdown.trigger();
        assert!(a.recv().await.is_ok());
        assert!(b.recv().await.is_ok());

        drop(a);
        assert_eq!(shutdown.receiver_count(), 1);
    }

    #[test]
    fn test_trigger_without_subscribers_is_harmless() {
        Shutdown::default().trigger();
    }
}
