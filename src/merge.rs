//! Deep merge over JSON mappings.
//!
//! Overlapping object values merge key-by-key; any other collision is
//! resolved by taking the override side wholesale. The merge is total:
//! mismatched types at a key are replaced, never an error.

use serde_json::Value;

/// JSON object mapping, the shape defaults and request overlays share.
pub type JsonMap = serde_json::Map<String, Value>;

/// Deep merge two mappings. Values from `overlay` take precedence.
///
/// The result contains every key of `base` and every key of `overlay`.
/// A key present in both sides with object values on both sides is merged
/// recursively; any other collision (scalar, array, null, or a type
/// mismatch in either direction) takes `overlay`'s value wholesale. Keys
/// present on one side only are copied as-is. Neither input is mutated;
/// recursion depth is bounded by the nesting depth of the inputs.
pub fn deep_merge(base: &JsonMap, overlay: &JsonMap) -> JsonMap {
    let mut result = base.clone();

    for (key, overlay_value) in overlay {
        let merged = match (result.get(key), overlay_value) {
            (Some(Value::Object(base_obj)), Value::Object(overlay_obj)) => {
                Value::Object(deep_merge(base_obj, overlay_obj))
            }
            _ => overlay_value.clone(),
        };
        result.insert(key.clone(), merged);
    }

    result
}

/// Name of a JSON value's type, for error messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
