//! The item service domain: a bare to-do entry.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;
use crate::record::Record;

#[cfg(feature = "http")]
pub mod http;

/// A to-do entry. Both fields are optional in the input payload; `text`
/// defaults to absent and `is_done` to false. Items carry no identifier
/// and live only in memory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub is_done: bool,
}

impl Record for Item {
    const ENTITY: &'static str = "Item";

    fn validate(input: &Value) -> Result<Self, ValidationError> {
        let mut err = ValidationError::new(Self::ENTITY);

        let text = match input.get("text") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                err.reject("text", "must be a string");
                None
            }
        };

        let is_done = match input.get("is_done") {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(_) => {
                err.reject("is_done", "must be a boolean");
                false
            }
        };

        err.ok(Item { text, is_done })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_payload_uses_defaults() {
        let item = Item::validate(&json!({})).unwrap();
        assert_eq!(item.text, None);
        assert!(!item.is_done);
    }

    #[test]
    fn explicit_fields_are_kept() {
        let item = Item::validate(&json!({ "text": "apple", "is_done": true })).unwrap();
        assert_eq!(item.text.as_deref(), Some("apple"));
        assert!(item.is_done);
    }

    #[test]
    fn non_string_text_is_rejected() {
        let err = Item::validate(&json!({ "text": 5 })).unwrap_err();
        assert_eq!(err.violations[0].field, "text");
    }

    #[test]
    fn non_bool_is_done_is_rejected() {
        let err = Item::validate(&json!({ "is_done": "yes" })).unwrap_err();
        assert_eq!(err.violations[0].field, "is_done");
    }

    #[test]
    fn null_fields_fall_back_to_defaults() {
        let item = Item::validate(&json!({ "text": null, "is_done": null })).unwrap();
        assert_eq!(item.text, None);
        assert!(!item.is_done);
    }
}
