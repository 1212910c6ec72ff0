//! Type-erased access to items of any kind.

use std::sync::Arc;

use itemhub_domain::error::ItemError;
use itemhub_domain::kind::ItemKind;
use itemhub_domain::name::ItemName;
use itemhub_domain::value::ItemValue;

use crate::item::{Item, NotifierHandle};
use crate::ports::ChangeNotifier;

/// Object-safe view of an [`Item`], for the hub-facing layer that routes
/// values by item name without knowing each item's kind.
pub trait AnyItem: Send + Sync {
    fn name(&self) -> &ItemName;

    /// Hub type name of the item (`Number`, `Switch`, …).
    fn kind_name(&self) -> &'static str;

    /// See [`Item::set_value`].
    ///
    /// # Errors
    ///
    /// Returns [`ItemError::Value`] when the item's kind rejects `value`.
    fn set_value(&self, value: ItemValue) -> Result<bool, ItemError>;

    fn value(&self) -> Option<ItemValue>;

    fn register_notifier(&self, notifier: Arc<dyn ChangeNotifier>) -> NotifierHandle;

    fn unregister_notifier(&self, handle: NotifierHandle) -> bool;
}

impl<K: ItemKind> AnyItem for Item<K> {
    fn name(&self) -> &ItemName {
        Item::name(self)
    }

    fn kind_name(&self) -> &'static str {
        self.kind().name()
    }

    fn set_value(&self, value: ItemValue) -> Result<bool, ItemError> {
        Item::set_value(self, value)
    }

    fn value(&self) -> Option<ItemValue> {
        self.state_value()
    }

    fn register_notifier(&self, notifier: Arc<dyn ChangeNotifier>) -> NotifierHandle {
        Item::register_notifier(self, notifier)
    }

    fn unregister_notifier(&self, handle: NotifierHandle) -> bool {
        Item::unregister_notifier(self, handle)
    }
}
