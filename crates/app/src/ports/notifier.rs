//! Notifier port: receives item change events.

use itemhub_domain::event::ItemStateChanged;

/// Failure reported by a [`ChangeNotifier`].
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// The downstream queue or channel is gone.
    #[error("notification channel closed")]
    Closed,

    /// The consumer refused the event.
    #[error("notification rejected: {0}")]
    Rejected(String),
}

/// Receives [`ItemStateChanged`] events from items.
///
/// `notify` runs after the item's lock is released, one event at a time in
/// transition order. A slow notifier delays the delivery of later events
/// of that item, so long work belongs behind a queue such as
/// [`InProcessEventBus`](crate::event_bus::InProcessEventBus).
pub trait ChangeNotifier: Send + Sync {
    /// Accept a change event.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError`] when the event could not be handed off. The
    /// item logs the failure and keeps notifying the others.
    fn notify(&self, event: &ItemStateChanged) -> Result<(), NotifyError>;
}

impl<F> ChangeNotifier for F
where
    F: Fn(&ItemStateChanged) -> Result<(), NotifyError> + Send + Sync,
{
    fn notify(&self, event: &ItemStateChanged) -> Result<(), NotifyError> {
        self(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itemhub_domain::name::ItemName;
    use itemhub_domain::time::now;
    use itemhub_domain::value::ItemValue;
    use std::sync::Mutex;

    fn event() -> ItemStateChanged {
        ItemStateChanged::new(
            ItemName::new("Hall_Light").unwrap(),
            None,
            ItemValue::Bool(true),
            now(),
        )
    }

    #[test]
    fn should_forward_events_to_closure() {
        let seen = Mutex::new(Vec::new());
        let notifier = |event: &ItemStateChanged| -> Result<(), NotifyError> {
            seen.lock().unwrap().push(event.name.to_string());
            Ok(())
        };
        notifier.notify(&event()).unwrap();
        assert_eq!(seen.into_inner().unwrap(), vec!["Hall_Light".to_string()]);
    }

    #[test]
    fn should_propagate_closure_error() {
        let notifier = |_: &ItemStateChanged| -> Result<(), NotifyError> { Err(NotifyError::Closed) };
        assert!(matches!(notifier.notify(&event()), Err(NotifyError::Closed)));
    }

    #[test]
    fn should_display_rejection_reason() {
        let err = NotifyError::Rejected("queue full".to_string());
        assert_eq!(err.to_string(), "notification rejected: queue full");
    }
}
