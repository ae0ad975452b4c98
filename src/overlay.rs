//! Request overlays: explicit-subset extraction, merge with defaults, and
//! validation of the merged mapping back into the structured type.
//!
//! Explicit-set tracking is encoded in the request type itself rather than
//! recovered by introspection: optional fields are `Option<T>` annotated
//! `#[serde(default, skip_serializing_if = "Option::is_none")]`. A field
//! left unset serializes to absent and is excluded from the overlay; a
//! field set to any value, including one equal to its declared default, is
//! present and overrides the stored default. Nested granularity follows
//! the type: a nested struct of `Option` fields overlays per leaf, while
//! an `Option<Struct>` with plain fields overlays all-or-nothing.

use crate::error::ConfigError;
use crate::merge::{deep_merge, json_type_name, JsonMap};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Extract the explicitly-set fields of `request` as a mapping.
///
/// Fields the caller never touched are absent from the result, even when
/// their value would have equalled the field's declared default.
pub fn explicit_fields<T: Serialize>(request: &T) -> Result<JsonMap, ConfigError> {
    match serde_json::to_value(request).map_err(ConfigError::Serialize)? {
        Value::Object(map) => Ok(map),
        other => Err(ConfigError::NotAnObject {
            found: json_type_name(&other),
        }),
    }
}

/// Validate a merged mapping into a new structured config instance.
///
/// Fields absent from the mapping fall back to the type's own serde
/// defaults; a value incompatible with its field's declared type fails
/// with [`ConfigError::Validation`] and no partial instance is returned.
pub fn validate_into<T: DeserializeOwned>(merged: JsonMap) -> Result<T, ConfigError> {
    serde_json::from_value(Value::Object(merged)).map_err(ConfigError::Validation)
}

/// Merge the explicitly-set fields of `request` over `defaults` and
/// validate the result into a new instance.
///
/// Defaults form the base; explicit request fields override. Fields set in
/// neither place take the request type's own defaults.
pub fn merge_with_defaults<T>(defaults: &JsonMap, request: &T) -> Result<T, ConfigError>
where
    T: Serialize + DeserializeOwned,
{
    let explicit = explicit_fields(request)?;

    debug!(
        default_keys = defaults.len(),
        overrides = ?explicit.keys().collect::<Vec<_>>(),
        "Merging request config over defaults"
    );

    let merged = deep_merge(defaults, &explicit);
    validate_into(merged)
}
