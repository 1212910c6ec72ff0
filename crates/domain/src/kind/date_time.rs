//! Date-time items.

use crate::error::ValueError;
use crate::kind::{ItemKind, type_mismatch};
use crate::time::Timestamp;
use crate::value::ItemValue;

/// Point-in-time item. Strings are not parsed; the boundary layer decodes them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateTimeKind;

impl ItemKind for DateTimeKind {
    type State = Timestamp;

    fn name(&self) -> &'static str {
        "DateTime"
    }

    fn normalize(&self, value: ItemValue) -> Result<Timestamp, ValueError> {
        match value {
            ItemValue::DateTime(ts) => Ok(ts),
            other => Err(type_mismatch(self.name(), &other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::now;

    #[test]
    fn should_accept_timestamp() {
        let ts = now();
        assert_eq!(DateTimeKind.normalize(ts.into()), Ok(ts));
    }

    #[test]
    fn should_not_parse_strings() {
        let err = DateTimeKind
            .normalize("2024-01-01T00:00:00Z".into())
            .unwrap_err();
        assert!(err.is_type_mismatch());
    }
}
