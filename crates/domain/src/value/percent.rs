//! Percent: a checked `0..=100` carrier used by dimmers and rollershutters.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// A percentage guaranteed to lie in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct PercentValue(f64);

impl PercentValue {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 100.0;

    /// `0%`, what the hub means by `OFF`.
    pub const ZERO: Self = Self(Self::MIN);
    /// `100%`, what the hub means by `ON`.
    pub const FULL: Self = Self(Self::MAX);

    /// # Errors
    ///
    /// Returns [`ValueError::OutOfRange`] when `value` is outside `0..=100`
    /// (`NaN` included).
    pub fn new(value: f64) -> Result<Self, ValueError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValueError::OutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for PercentValue {
    type Error = ValueError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PercentValue> for f64 {
    fn from(value: PercentValue) -> Self {
        value.0
    }
}

impl fmt::Display for PercentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
