//! Error types for catalog operations.

use osidb_core::EntityKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur in catalog operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Positional access past the end of a list.
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The list length at the time of the call.
        len: usize,
    },

    /// A record with this identifier is already present in the list.
    #[error("duplicate {kind} record in list: {id}")]
    DuplicateEntity {
        /// The kind of the offending record.
        kind: EntityKind,
        /// The identifier already present.
        id: String,
    },

    /// A malformed association call.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Core validation failed.
    #[error("core error: {0}")]
    Core(#[from] osidb_core::CoreError),
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Outcome of a failed bulk load, recorded on the catalog.
///
/// The catalog does not interpret the failure; it carries the loader's
/// opaque code/message pair so callers gating on readiness can surface it.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
#[error("load failed (code {code}): {message}")]
pub struct LoadError {
    /// Loader-defined failure code.
    pub code: i32,
    /// Human-readable description from the loader.
    pub message: String,
}

impl LoadError {
    /// Create a new load error.
    #[must_use]
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }
}
