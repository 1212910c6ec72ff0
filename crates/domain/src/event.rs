//! Change notification payload.
//!
//! An [`ItemStateChanged`] is produced exactly once per assignment that
//! actually changes an item's state, and handed to the rule/listener side.

use serde::{Deserialize, Serialize};

use crate::id::EventId;
use crate::name::ItemName;
use crate::time::Timestamp;
use crate::value::ItemValue;

/// An item moved from `previous` to `value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemStateChanged {
    pub id: EventId,
    pub name: ItemName,
    /// `None` when the item had no value before this change.
    pub previous: Option<ItemValue>,
    pub value: ItemValue,
    pub timestamp: Timestamp,
}

impl ItemStateChanged {
    /// Create a change record with a fresh id.
    #[must_use]
    pub fn new(
        name: ItemName,
        previous: Option<ItemValue>,
        value: ItemValue,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            id: EventId::new(),
            name,
            previous,
            value,
            timestamp,
        }
    }

    /// Whether this is the first value the item ever received.
    #[must_use]
    pub fn is_initial(&self) -> bool {
        self.previous.is_none()
    }
}
