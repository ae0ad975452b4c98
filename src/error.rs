//! Error types for the strata configuration library.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading default configuration or merging a request
/// configuration over it.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Expected a JSON object, got {found}")]
    NotAnObject { found: &'static str },

    #[error("Failed to serialize request config: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Merged config failed validation: {0}")]
    Validation(#[source] serde_json::Error),
}
