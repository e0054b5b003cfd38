//! Shared test utilities for the policyguard workspace.
//!
//! Used by the app unit tests and the CLI integration tests, which live in
//! different crates and so cannot share a `#[cfg(test)]` module.

use serde_json::Value;

const TIMESTAMP_KEYS: [&str; 2] = ["started_at", "finished_at"];

/// Normalize non-deterministic JSON fields for golden comparison.
///
/// Two concerns are handled separately:
///
/// 1. **Root-only**: `tool.version` is replaced with `"__VERSION__"` only
///    when the *root* object looks like a report envelope (has `schema`,
///    `tool`, `verdict`, `findings`, and `data`).
///
/// 2. **Recursive**: `started_at` and `finished_at` are replaced with
///    `"__TIMESTAMP__"` at any depth.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope = ["schema", "tool", "verdict", "findings", "data"]
            .iter()
            .all(|k| obj.contains_key(*k));
        if is_envelope
            && let Some(tool_obj) = obj.get_mut("tool").and_then(Value::as_object_mut)
            && tool_obj.contains_key("version")
        {
            tool_obj.insert(
                "version".to_string(),
                Value::String("__VERSION__".to_string()),
            );
        }
    }
    normalize_timestamps_recursive(&mut value);
    value
}

fn normalize_timestamps_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in TIMESTAMP_KEYS {
                if map.contains_key(key) {
                    map.insert(key.to_string(), Value::String("__TIMESTAMP__".to_string()));
                }
            }
            for val in map.values_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        _ => {}
    }
}
