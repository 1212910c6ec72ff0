//! String items.

use crate::error::ValueError;
use crate::kind::{ItemKind, type_mismatch};
use crate::value::ItemValue;

/// Text item. Only bare strings are accepted; nothing is stringified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringKind;

impl ItemKind for StringKind {
    type State = String;

    fn name(&self) -> &'static str {
        "String"
    }

    fn normalize(&self, value: ItemValue) -> Result<String, ValueError> {
        match value {
            ItemValue::String(text) => Ok(text),
            other => Err(type_mismatch(self.name(), &other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_string() {
        assert_eq!(StringKind.normalize("hello".into()), Ok("hello".to_string()));
    }

    #[test]
    fn should_not_stringify_numbers() {
        assert!(StringKind.normalize(ItemValue::Number(1.0)).is_err());
    }
}
