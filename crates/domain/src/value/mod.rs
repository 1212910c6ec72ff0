//! Values: every encoding an item may receive.
//!
//! The hub reports some values bare (a number, a string) and others wrapped
//! in a carrier with extra meaning (a number with its unit, an `ON`/`OFF`
//! word). [`ItemValue`] is the single input type of item assignment; each
//! [`ItemKind`](crate::kind::ItemKind) decides which variants it accepts.

mod percent;
mod quantity;
mod state;
pub mod unit;

pub use percent::PercentValue;
pub use quantity::QuantityValue;
pub use state::{OnOffValue, OpenClosedValue, ParseStateError};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::time::Timestamp;

/// A bare or wrapped value delivered to an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ItemValue {
    Number(f64),
    String(String),
    Bool(bool),
    DateTime(Timestamp),
    Quantity(QuantityValue),
    OnOff(OnOffValue),
    OpenClosed(OpenClosedValue),
    Percent(PercentValue),
}

impl ItemValue {
    /// Discriminant of this value, used to report mismatches.
    #[must_use]
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Number(_) => ValueType::Number,
            Self::String(_) => ValueType::String,
            Self::Bool(_) => ValueType::Bool,
            Self::DateTime(_) => ValueType::DateTime,
            Self::Quantity(_) => ValueType::Quantity,
            Self::OnOff(_) => ValueType::OnOff,
            Self::OpenClosed(_) => ValueType::OpenClosed,
            Self::Percent(_) => ValueType::Percent,
        }
    }
}

impl fmt::Display for ItemValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => fmt::Display::fmt(v, f),
            Self::String(v) => f.write_str(v),
            Self::Bool(v) => fmt::Display::fmt(v, f),
            Self::DateTime(v) => f.write_str(&v.to_rfc3339()),
            Self::Quantity(v) => fmt::Display::fmt(v, f),
            Self::OnOff(v) => fmt::Display::fmt(v, f),
            Self::OpenClosed(v) => fmt::Display::fmt(v, f),
            Self::Percent(v) => fmt::Display::fmt(v, f),
        }
    }
}

/// Kind of an [`ItemValue`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    Number,
    String,
    Bool,
    DateTime,
    Quantity,
    OnOff,
    OpenClosed,
    Percent,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Number => "number",
            Self::String => "string",
            Self::Bool => "bool",
            Self::DateTime => "date_time",
            Self::Quantity => "quantity",
            Self::OnOff => "on_off",
            Self::OpenClosed => "open_closed",
            Self::Percent => "percent",
        })
    }
}

impl From<f64> for ItemValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for ItemValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<String> for ItemValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for ItemValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<bool> for ItemValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Timestamp> for ItemValue {
    fn from(value: Timestamp) -> Self {
        Self::DateTime(value)
    }
}

impl From<QuantityValue> for ItemValue {
    fn from(value: QuantityValue) -> Self {
        Self::Quantity(value)
    }
}

impl From<OnOffValue> for ItemValue {
    fn from(value: OnOffValue) -> Self {
        Self::OnOff(value)
    }
}

impl From<OpenClosedValue> for ItemValue {
    fn from(value: OpenClosedValue) -> Self {
        Self::OpenClosed(value)
    }
}

impl From<PercentValue> for ItemValue {
    fn from(value: PercentValue) -> Self {
        Self::Percent(value)
    }
}
