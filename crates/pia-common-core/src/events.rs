//! Output events from controllers to their host.

use std::sync::Arc;
use tokio::sync::{broadcast, watch};

const DEFAULT_CAPACITY: usize = 16;

/// Broadcasts events to any number of listeners.
///
/// Emitting with no subscriber is not an error; the event is dropped.
#[derive(Debug, Clone)]
pub struct EventEmitter<T: Clone> {
    sender: broadcast::Sender<T>,
}

impl<T: Clone> EventEmitter<T> {
    /// Create an emitter with the default buffer.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an emitter buffering up to `capacity` unread events per listener.
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Get a receiver for future events.
    pub fn subscribe(&self) -> broadcast::Receiver<T> {
        self.sender.subscribe()
    }

    /// Send an event to all current listeners. Returns how many received it.
    pub fn emit(&self, event: T) -> usize {
        self.sender.send(event).unwrap_or(0)
    }

    /// Number of live listeners.
    pub fn listener_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl<T: Clone> Default for EventEmitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Teardown signal shared between a controller and its background loops.
///
/// Unlike a broadcast, the signal is sticky: waiting after `shutdown` returns
/// immediately.
#[derive(Debug, Clone)]
pub struct ShutdownHandle {
    sender: Arc<watch::Sender<bool>>,
}

impl ShutdownHandle {
    /// Create a handle that is not shut down.
    pub fn new() -> Self {
        let (sender, _) = watch::channel(false);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Signal shutdown to every clone.
    pub fn shutdown(&self) {
        self.sender.send_replace(true);
    }

    /// Whether shutdown was signalled.
    pub fn is_shutdown(&self) -> bool {
        *self.sender.borrow()
    }

    /// Resolve once shutdown is signalled.
    pub async fn wait(&self) {
        let mut rx = self.sender.subscribe();
        // The sender lives in `self`, so the channel cannot close here.
        let _ = rx.wait_for(|down| *down).await;
    }
}

impl Default for ShutdownHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_emit_reaches_subscribers() {
        let emitter = EventEmitter::new();
        let mut rx1 = emitter.subscribe();
        let mut rx2 = emitter.subscribe();

        assert_eq!(emitter.emit("changed"), 2);
        assert_eq!(rx1.recv().await.unwrap(), "changed");
        assert_eq!(rx2.recv().await.unwrap(), "changed");
    }

    #[test]
    fn test_emit_without_listeners_is_dropped() {
        let emitter: EventEmitter<u32> = EventEmitter::default();
        assert_eq!(emitter.listener_count(), 0);
        assert_eq!(emitter.emit(1), 0);
    }

    #[test]
    fn test_subscribe_only_sees_later_events() {
        let emitter = EventEmitter::new();
        emitter.emit(1);
        let mut rx = emitter.subscribe();
        emitter.emit(2);
        assert_eq!(rx.try_recv().unwrap(), 2);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_shutdown_handle_is_sticky() {
        let handle = ShutdownHandle::new();
        assert!(!handle.is_shutdown());

        let waiter = tokio::spawn({
            let handle = handle.clone();
            async move { handle.wait().await }
        });
        handle.shutdown();
        waiter.await.unwrap();

        assert!(handle.is_shutdown());
        handle.wait().await;
    }
}
