//! Quantity: a number reported together with its unit.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;
use crate::value::unit;

/// Immutable carrier pairing a bare number with a unit symbol (`°C`, `kWh`, …).
///
/// Quantities only exist for the duration of one assignment: the item
/// unwraps them into its canonical number and drops the unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantityValue {
    value: f64,
    unit: String,
}

impl QuantityValue {
    #[must_use]
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Express the quantity in `target`, returning the bare number.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::IncompatibleUnit`] when either symbol is unknown
    /// or the two units measure different things.
    pub fn to_unit(&self, target: &str) -> Result<f64, ValueError> {
        unit::convert(self.value, &self.unit, target)
    }
}

impl fmt::Display for QuantityValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_expose_value_and_unit() {
        let q = QuantityValue::new(230.0, "V");
        assert_eq!(q.value(), 230.0);
        assert_eq!(q.unit(), "V");
    }

    #[test]
    fn should_keep_value_when_target_unit_matches() {
        let q = QuantityValue::new(230.0, "V");
        assert_eq!(q.to_unit("V").unwrap(), 230.0);
    }

    #[test]
    fn should_convert_to_compatible_unit() {
        let q = QuantityValue::new(2.0, "km");
        assert_eq!(q.to_unit("m").unwrap(), 2000.0);
    }

    #[test]
    fn should_fail_for_incompatible_unit() {
        let q = QuantityValue::new(2.0, "km");
        assert!(matches!(
            q.to_unit("W"),
            Err(ValueError::IncompatibleUnit { .. })
        ));
    }

    #[test]
    fn should_display_value_then_unit() {
        assert_eq!(QuantityValue::new(21.5, "°C").to_string(), "21.5 °C");
    }
}
