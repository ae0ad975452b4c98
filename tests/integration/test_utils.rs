//! Shared fixtures for integration tests.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strata::merge::JsonMap;

/// Request-side configuration with per-field presence tracking.
///
/// Fields left at `None` were never touched by the caller and are excluded
/// from the explicit overlay.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detector: Option<DetectorConfig>,
}

/// Nested section with per-leaf presence tracking.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DetectorConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detection_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_threshold: Option<f64>,
}

/// Unwrap a `json!` fixture into the mapping type the store expects.
pub fn as_map(value: Value) -> JsonMap {
    match value {
        Value::Object(map) => map,
        other => panic!("fixture is not an object: {other}"),
    }
}
