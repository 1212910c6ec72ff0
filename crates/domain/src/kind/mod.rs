//! Item kinds: one normalizer per item type.
//!
//! A kind decides which [`ItemValue`] encodings an item accepts and turns
//! them into its canonical state. Adding an item type means adding a kind;
//! the shared assignment logic never changes.

mod contact;
mod date_time;
mod dimmer;
mod number;
mod string;
mod switch;

pub use contact::ContactKind;
pub use date_time::DateTimeKind;
pub use dimmer::DimmerKind;
pub use number::NumberKind;
pub use string::StringKind;
pub use switch::SwitchKind;

use std::fmt;

use crate::error::ValueError;
use crate::value::ItemValue;

/// Capability shared by every item type: accept and normalize its encodings.
pub trait ItemKind: Send + Sync + 'static {
    /// Canonical representation stored by the item.
    type State: Clone + PartialEq + fmt::Debug + Send + Into<ItemValue>;

    /// Hub name of the item type (`Number`, `Switch`, …).
    fn name(&self) -> &'static str;

    /// Unwrap or convert `value` into the canonical state.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::TypeMismatch`] for encodings the kind does not
    /// accept, or a more specific [`ValueError`] when an accepted encoding
    /// carries an unusable payload.
    fn normalize(&self, value: ItemValue) -> Result<Self::State, ValueError>;

    /// Equality rule used for change detection.
    fn is_same(&self, current: &Self::State, incoming: &Self::State) -> bool {
        current == incoming
    }
}

fn type_mismatch(kind: &'static str, value: &ItemValue) -> ValueError {
    ValueError::TypeMismatch {
        kind,
        got: value.value_type(),
    }
}
