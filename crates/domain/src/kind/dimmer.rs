//! Dimmer items: a brightness level in percent.

use crate::error::ValueError;
use crate::kind::{ItemKind, type_mismatch};
use crate::value::{ItemValue, OnOffValue, PercentValue};

/// Dimmer stored as a checked [`PercentValue`].
///
/// Accepts percents, bare numbers in range, and `ON`/`OFF`, which the hub
/// uses as full on and full off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DimmerKind;

impl ItemKind for DimmerKind {
    type State = PercentValue;

    fn name(&self) -> &'static str {
        "Dimmer"
    }

    fn normalize(&self, value: ItemValue) -> Result<PercentValue, ValueError> {
        match value {
            ItemValue::Percent(percent) => Ok(percent),
            ItemValue::Number(number) => PercentValue::new(number),
            ItemValue::OnOff(OnOffValue::On) => Ok(PercentValue::FULL),
            ItemValue::OnOff(OnOffValue::Off) => Ok(PercentValue::ZERO),
            other => Err(type_mismatch(self.name(), &other)),
        }
    }
}
