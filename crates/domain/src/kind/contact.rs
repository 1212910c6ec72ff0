//! Contact items (doors, windows).

use crate::error::ValueError;
use crate::kind::{ItemKind, type_mismatch};
use crate::value::{ItemValue, OpenClosedValue};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactKind;

impl ItemKind for ContactKind {
    type State = OpenClosedValue;

    fn name(&self) -> &'static str {
        "Contact"
    }

    fn normalize(&self, value: ItemValue) -> Result<OpenClosedValue, ValueError> {
        match value {
            ItemValue::OpenClosed(state) => Ok(state),
            other => Err(type_mismatch(self.name(), &other)),
        }
    }
}
