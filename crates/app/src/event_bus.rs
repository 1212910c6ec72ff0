//! In-process event bus backed by a tokio broadcast channel.

use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;

use itemhub_domain::event::ItemStateChanged;

use crate::config::EventBusConfig;
use crate::ports::{ChangeNotifier, NotifyError};

/// Hands item change events to asynchronous subscribers.
///
/// Registered on items as a [`ChangeNotifier`], the bus only enqueues the
/// event, so delivery to the item's other notifiers is never held up by
/// subscribers. Publishing succeeds even when there are no active
/// subscribers (the event is simply dropped).
#[derive(Debug, Clone)]
pub struct InProcessEventBus {
    sender: broadcast::Sender<ItemStateChanged>,
}

impl InProcessEventBus {
    /// Create a new event bus with the given channel capacity.
    ///
    /// A capacity of zero is raised to one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    #[must_use]
    pub fn from_config(config: &EventBusConfig) -> Self {
        Self::new(config.capacity)
    }

    /// Subscribe to events on this bus.
    ///
    /// Returns a receiver that will get all events published *after*
    /// the subscription is created.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ItemStateChanged> {
        self.sender.subscribe()
    }

    /// Same as [`subscribe`](Self::subscribe), as a [`Stream`](tokio_stream::Stream).
    #[must_use]
    pub fn stream(&self) -> BroadcastStream<ItemStateChanged> {
        BroadcastStream::new(self.subscribe())
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl ChangeNotifier for InProcessEventBus {
    fn notify(&self, event: &ItemStateChanged) -> Result<(), NotifyError> {
        // send fails only when there are zero receivers, which is fine.
        let _ = self.sender.send(event.clone());
        Ok(())
    }
}
