//! Default-configuration store.
//!
//! An explicitly owned, injectable holder for the optional process-wide
//! default configuration. Construct one at startup and pass it by
//! reference (or inside an `Arc`) to whatever handles requests. Reloads
//! swap an `Arc` under a reader-writer lock, so a reader concurrent with a
//! reload observes either the old or the new mapping, never a torn one.

use crate::error::ConfigError;
use crate::merge::{json_type_name, JsonMap};
use crate::overlay;
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Holder for the optional default-configuration mapping.
pub struct DefaultStore {
    defaults: RwLock<Option<Arc<JsonMap>>>,
}

impl DefaultStore {
    /// Create an empty store with no defaults loaded.
    pub fn new() -> Self {
        Self {
            defaults: RwLock::new(None),
        }
    }

    /// Load defaults from a UTF-8 JSON file, replacing any previous value.
    ///
    /// The document's top level must be a JSON object. On any failure the
    /// previously stored defaults are left untouched.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let value: Value =
            serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let mapping = match value {
            Value::Object(map) => map,
            other => {
                return Err(ConfigError::NotAnObject {
                    found: json_type_name(&other),
                })
            }
        };

        info!(path = %path.display(), keys = mapping.len(), "Loaded default config");
        *self.defaults.write() = Some(Arc::new(mapping));
        Ok(())
    }

    /// Store an already-parsed mapping, replacing any previous value.
    /// Passing `None` clears the store.
    pub fn load_value(&self, source: Option<JsonMap>) {
        *self.defaults.write() = source.map(Arc::new);
    }

    /// Drop the stored defaults, if any.
    pub fn clear(&self) {
        *self.defaults.write() = None;
    }

    /// Snapshot of the current defaults.
    ///
    /// The returned `Arc` stays valid and unchanged across concurrent
    /// reloads.
    pub fn get(&self) -> Option<Arc<JsonMap>> {
        self.defaults.read().clone()
    }

    /// Whether any defaults are currently loaded.
    pub fn is_loaded(&self) -> bool {
        self.defaults.read().is_some()
    }

    /// Merge the explicitly-set fields of `request` over the stored
    /// defaults, returning a new validated instance.
    ///
    /// With no defaults loaded the request passes through unchanged. The
    /// merge runs against a snapshot taken up front, so a reload landing
    /// mid-merge cannot mix old and new defaults in one result.
    pub fn merge_request<T>(&self, request: &T) -> Result<T, ConfigError>
    where
        T: Serialize + DeserializeOwned + Clone,
    {
        match self.get() {
            Some(defaults) => overlay::merge_with_defaults(&defaults, request),
            None => {
                debug!("No default config loaded, request config passes through");
                Ok(request.clone())
            }
        }
    }
}

impl Default for DefaultStore {
    fn default() -> Self {
        Self::new()
    }
}
