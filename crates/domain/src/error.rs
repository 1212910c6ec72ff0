//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts via `#[from]`.

use crate::name::ItemName;
use crate::value::ValueType;

/// Top-level error returned by item operations.
#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    /// An incoming value could not be normalized for the item.
    #[error("rejected value for item {name}")]
    Value {
        name: ItemName,
        #[source]
        source: ValueError,
    },

    #[error("validation error")]
    Validation(#[from] ValidationError),
}

impl ItemError {
    /// The normalization failure, if this error carries one.
    #[must_use]
    pub fn value_error(&self) -> Option<&ValueError> {
        match self {
            Self::Value { source, .. } => Some(source),
            Self::Validation(_) => None,
        }
    }

    /// Whether the assignment failed because the value kind was not accepted.
    #[must_use]
    pub fn is_type_mismatch(&self) -> bool {
        self.value_error().is_some_and(ValueError::is_type_mismatch)
    }
}

/// Failure to turn an incoming value into an item's canonical state.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValueError {
    #[error("{kind} items do not accept {got} values")]
    TypeMismatch { kind: &'static str, got: ValueType },

    #[error("cannot convert a quantity in {from} to {to}")]
    IncompatibleUnit { from: String, to: String },

    #[error("{value} is outside of {min}..={max}")]
    OutOfRange { value: f64, min: f64, max: f64 },
}

impl ValueError {
    /// Unit errors count as a type mismatch: the wrapped value cannot be
    /// interpreted in the item's unit.
    #[must_use]
    pub fn is_type_mismatch(&self) -> bool {
        matches!(
            self,
            Self::TypeMismatch { .. } | Self::IncompatibleUnit { .. }
        )
    }
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("invalid item name {0:?}")]
    InvalidName(String),
}
