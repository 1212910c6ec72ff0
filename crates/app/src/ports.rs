//! Port definitions: traits the outside world implements.
//!
//! Ports are the boundaries between the item layer and the rule/listener
//! framework consuming change notifications.

pub mod notifier;

pub use notifier::{ChangeNotifier, NotifyError};
