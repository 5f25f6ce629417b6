//! Error types for the core crate.

use thiserror::Error;

/// Errors that can occur in the core crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A record was constructed with an empty identifier.
    #[error("entity identifier must not be empty")]
    EmptyId,
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
