//! Helpers for the free-form part of stored documents.
//!
//! Well-known fields live in typed columns; everything else a caller sends is kept
//! in a JSON object column and flattened back into the rendered document.

use serde_json::{Map, Value};

/// Removes keys the server owns and wraps the remainder as a JSON object.
///
/// # Arguments
/// - `fields` - Caller-supplied fields not captured by typed columns
/// - `reserved` - Keys that must never be taken from caller input
pub fn into_details(mut fields: Map<String, Value>, reserved: &[&str]) -> Value {
    for key in reserved {
        fields.remove(*key);
    }

    Value::Object(fields)
}

/// Unwraps a stored JSON column into its fields; anything but an object is empty.
pub fn details_map(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(fields) => fields,
        _ => Map::new(),
    }
}

/// Merges `patch` into `base` key by key, overwriting existing keys.
pub fn merge_details(base: Value, patch: Map<String, Value>) -> Value {
    let mut fields = details_map(base);
    fields.extend(patch);
    Value::Object(fields)
}
