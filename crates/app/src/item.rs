//! Items: named, typed state mirrored from the hub.
//!
//! An [`Item`] pairs an [`ItemKind`] (which normalizes incoming values) with
//! a lock-guarded state slot. Under that lock an assignment compares with
//! the kind's equality rule, stores, and queues one [`ItemStateChanged`].
//! The queue is drained after the lock is released, in transition order,
//! by whichever caller found it idle.

mod dyn_item;

pub use dyn_item::AnyItem;

use std::collections::VecDeque;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use itemhub_domain::error::ItemError;
use itemhub_domain::event::ItemStateChanged;
use itemhub_domain::kind::{
    ContactKind, DateTimeKind, DimmerKind, ItemKind, NumberKind, StringKind, SwitchKind,
};
use itemhub_domain::name::ItemName;
use itemhub_domain::time::{Timestamp, now};
use itemhub_domain::value::ItemValue;

use crate::ports::ChangeNotifier;

/// Numeric item, optionally bound to a unit.
pub type NumberItem = Item<NumberKind>;
/// Text item.
pub type StringItem = Item<StringKind>;
/// On/off item.
pub type SwitchItem = Item<SwitchKind>;
/// Open/closed item.
pub type ContactItem = Item<ContactKind>;
/// Brightness item in percent.
pub type DimmerItem = Item<DimmerKind>;
/// Point-in-time item.
pub type DateTimeItem = Item<DateTimeKind>;

/// Token returned by [`Item::register_notifier`], used to unregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotifierHandle(u64);

impl fmt::Display for NotifierHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "notifier-{}", self.0)
    }
}

struct Slot<S> {
    value: Option<S>,
    last_change: Option<Timestamp>,
    /// Changes not yet handed to the notifiers, oldest first.
    pending: VecDeque<ItemStateChanged>,
    /// Set while some caller is draining `pending`.
    draining: bool,
}

#[derive(Clone)]
struct Registration {
    handle: NotifierHandle,
    notifier: Arc<dyn ChangeNotifier>,
}

/// A named data point holding the canonical state of kind `K`.
///
/// Items are meant to be shared (`Arc<Item<K>>`) between the hub-facing
/// layer and automation logic; all methods take `&self`.
pub struct Item<K: ItemKind> {
    name: ItemName,
    kind: K,
    slot: Mutex<Slot<K::State>>,
    notifiers: RwLock<Vec<Registration>>,
    next_handle: AtomicU64,
}

impl<K: ItemKind> Item<K> {
    /// Create an item without a value.
    ///
    /// # Errors
    ///
    /// Returns [`ItemError::Validation`] when `name` is not a valid item name.
    pub fn new(name: impl Into<String>, kind: K) -> Result<Self, ItemError> {
        Ok(Self::from_parts(ItemName::new(name)?, kind, None))
    }

    /// Create an item seeded with `initial`. No notification is sent.
    ///
    /// # Errors
    ///
    /// Returns [`ItemError::Validation`] for an invalid name and
    /// [`ItemError::Value`] when `initial` is not accepted by `kind`.
    pub fn with_value(
        name: impl Into<String>,
        kind: K,
        initial: impl Into<ItemValue>,
    ) -> Result<Self, ItemError> {
        let name = ItemName::new(name)?;
        let state = kind
            .normalize(initial.into())
            .map_err(|source| ItemError::Value {
                name: name.clone(),
                source,
            })?;
        Ok(Self::from_parts(name, kind, Some(state)))
    }

    fn from_parts(name: ItemName, kind: K, value: Option<K::State>) -> Self {
        Self {
            name,
            kind,
            slot: Mutex::new(Slot {
                value,
                last_change: None,
                pending: VecDeque::new(),
                draining: false,
            }),
            notifiers: RwLock::new(Vec::new()),
            next_handle: AtomicU64::new(0),
        }
    }

    /// Immutable identity of the item.
    #[must_use]
    pub fn name(&self) -> &ItemName {
        &self.name
    }

    /// Normalizer deciding which values the item accepts.
    #[must_use]
    pub fn kind(&self) -> &K {
        &self.kind
    }

    /// Current canonical state, `None` until the first assignment.
    #[must_use]
    pub fn value(&self) -> Option<K::State> {
        self.lock_slot().value.clone()
    }

    /// Current state as an [`ItemValue`].
    #[must_use]
    pub fn state_value(&self) -> Option<ItemValue> {
        self.value().map(Into::into)
    }

    /// When the state last changed through [`assign`](Self::assign).
    #[must_use]
    pub fn last_change(&self) -> Option<Timestamp> {
        self.lock_slot().last_change
    }

    /// Accept a bare or wrapped value from the hub.
    ///
    /// The value is normalized by the item's kind and then assigned. Returns
    /// `true` when the stored state changed.
    ///
    /// # Errors
    ///
    /// Returns [`ItemError::Value`] when the kind rejects the value. A
    /// rejected value leaves the item untouched and notifies nobody.
    pub fn set_value(&self, value: impl Into<ItemValue>) -> Result<bool, ItemError> {
        let value = value.into();
        let got = value.value_type();
        let state = self.kind.normalize(value).map_err(|source| {
            tracing::debug!(
                item = %self.name,
                kind = self.kind.name(),
                %got,
                error = %source,
                "rejected item value"
            );
            ItemError::Value {
                name: self.name.clone(),
                source,
            }
        })?;
        Ok(self.assign(state))
    }

    /// Store an already canonical state.
    ///
    /// Returns `false` without side effects when `state` equals the current
    /// one. Otherwise the state is stored and one event is queued for the
    /// notifiers. Notifiers run without the item lock held, so they may read
    /// or assign this item. If another caller is already delivering, the
    /// event is delivered by that caller and this call returns at once.
    pub fn assign(&self, state: K::State) -> bool {
        let mut slot = self.lock_slot();
        if slot
            .value
            .as_ref()
            .is_some_and(|current| self.kind.is_same(current, &state))
        {
            return false;
        }

        let timestamp = now();
        let previous = slot.value.replace(state.clone());
        slot.last_change = Some(timestamp);

        let event = ItemStateChanged::new(
            self.name.clone(),
            previous.map(Into::into),
            state.into(),
            timestamp,
        );
        tracing::debug!(
            item = %self.name,
            previous = ?event.previous,
            value = %event.value,
            "item state changed"
        );
        slot.pending.push_back(event);
        let drain = !std::mem::replace(&mut slot.draining, true);
        drop(slot);

        if drain {
            self.drain_pending();
        }
        true
    }

    fn drain_pending(&self) {
        loop {
            let event = {
                let mut slot = self.lock_slot();
                match slot.pending.pop_front() {
                    Some(event) => event,
                    None => {
                        slot.draining = false;
                        return;
                    }
                }
            };
            self.dispatch(&event);
        }
    }

    /// Register a notifier receiving every future change of this item.
    pub fn register_notifier(&self, notifier: Arc<dyn ChangeNotifier>) -> NotifierHandle {
        let handle = NotifierHandle(self.next_handle.fetch_add(1, Ordering::Relaxed));
        self.notifiers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Registration { handle, notifier });
        handle
    }

    /// Remove a notifier. Returns `false` if the handle was unknown.
    pub fn unregister_notifier(&self, handle: NotifierHandle) -> bool {
        let mut notifiers = self
            .notifiers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = notifiers.len();
        notifiers.retain(|registration| registration.handle != handle);
        notifiers.len() != before
    }

    /// Number of registered notifiers.
    #[must_use]
    pub fn notifier_count(&self) -> usize {
        self.notifiers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    // One failing or panicking notifier never keeps the others from running.
    fn dispatch(&self, event: &ItemStateChanged) {
        let notifiers = self
            .notifiers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for registration in &notifiers {
            match panic::catch_unwind(AssertUnwindSafe(|| registration.notifier.notify(event))) {
                Ok(Ok(())) => {}
                Ok(Err(err)) => tracing::warn!(
                    item = %self.name,
                    notifier = %registration.handle,
                    error = %err,
                    "change notifier failed"
                ),
                Err(_) => tracing::error!(
                    item = %self.name,
                    notifier = %registration.handle,
                    "change notifier panicked"
                ),
            }
        }
    }

    fn lock_slot(&self) -> MutexGuard<'_, Slot<K::State>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<K: ItemKind + fmt::Debug> fmt::Debug for Item<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Item")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("value", &self.value())
            .finish_non_exhaustive()
    }
}
