//! Switch items.

use crate::error::ValueError;
use crate::kind::{ItemKind, type_mismatch};
use crate::value::ItemValue;

/// On/off item stored as a `bool`; accepts bare booleans and `ON`/`OFF`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwitchKind;

impl ItemKind for SwitchKind {
    type State = bool;

    fn name(&self) -> &'static str {
        "Switch"
    }

    fn normalize(&self, value: ItemValue) -> Result<bool, ValueError> {
        match value {
            ItemValue::Bool(on) => Ok(on),
            ItemValue::OnOff(word) => Ok(word.is_on()),
            other => Err(type_mismatch(self.name(), &other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{OnOffValue, OpenClosedValue};

    #[test]
    fn should_unwrap_on_off_words() {
        assert_eq!(SwitchKind.normalize(OnOffValue::On.into()), Ok(true));
        assert_eq!(SwitchKind.normalize(OnOffValue::Off.into()), Ok(false));
    }

    #[test]
    fn should_accept_bare_bool() {
        assert_eq!(SwitchKind.normalize(true.into()), Ok(true));
    }

    #[test]
    fn should_reject_contact_word() {
        let err = SwitchKind
            .normalize(OpenClosedValue::Open.into())
            .unwrap_err();
        assert!(err.is_type_mismatch());
    }

    #[test]
    fn should_reject_number() {
        assert!(SwitchKind.normalize(ItemValue::Number(1.0)).is_err());
    }
}
