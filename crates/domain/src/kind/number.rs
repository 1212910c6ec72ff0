//! Number items, optionally bound to a unit.

use crate::error::ValueError;
use crate::kind::{ItemKind, type_mismatch};
use crate::value::ItemValue;

/// Numeric item. Accepts bare numbers and quantities.
///
/// Without a declared unit a quantity is unwrapped as-is. With a declared
/// unit the quantity is first converted into it, so the stored number is
/// always expressed in the item's unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberKind {
    unit: Option<String>,
}

impl NumberKind {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_unit(unit: impl Into<String>) -> Self {
        Self {
            unit: Some(unit.into()),
        }
    }

    #[must_use]
    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }
}

impl ItemKind for NumberKind {
    type State = f64;

    fn name(&self) -> &'static str {
        "Number"
    }

    fn normalize(&self, value: ItemValue) -> Result<f64, ValueError> {
        match value {
            ItemValue::Number(number) => Ok(number),
            ItemValue::Quantity(quantity) => match self.unit.as_deref() {
                Some(unit) => quantity.to_unit(unit),
                None => Ok(quantity.value()),
            },
            other => Err(type_mismatch(self.name(), &other)),
        }
    }

    // NaN never equals itself; a repeated NaN is still no change.
    #[allow(clippy::float_cmp)]
    fn is_same(&self, current: &f64, incoming: &f64) -> bool {
        current == incoming || (current.is_nan() && incoming.is_nan())
    }
}
