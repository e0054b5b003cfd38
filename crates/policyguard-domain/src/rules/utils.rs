use crate::error::PolicyError;
use crate::model::{value_kind, Properties};
use serde_json::Value;

/// Read an optional string property. Absent and `null` both yield `None`;
/// any other non-string value is malformed input.
pub fn optional_str<'a>(
    properties: &'a Properties,
    key: &str,
    rule: &str,
) -> Result<Option<&'a str>, PolicyError> {
    match properties.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(other) => Err(PolicyError::MalformedInput {
            rule: rule.to_string(),
            property: key.to_string(),
            expected: "a string",
            found: value_kind(other),
        }),
    }
}
