//! Strata: Layered Default Configuration
//!
//! Holds an optional process-wide default configuration loaded from a JSON
//! document and deep-merges the explicitly-set fields of per-request
//! configuration objects over it, with request fields taking precedence.

pub mod error;
pub mod merge;
pub mod overlay;
pub mod store;
