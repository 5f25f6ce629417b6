//! Error types for the top-level crate.

use thiserror::Error;

/// Errors that can occur when using `osidb`.
#[derive(Debug, Error)]
pub enum Error {
    /// A core validation error occurred.
    #[error("core error: {0}")]
    Core(#[from] osidb_core::CoreError),

    /// A catalog operation failed.
    #[error("catalog error: {0}")]
    Catalog(#[from] osidb_catalog::CatalogError),

    /// The external bulk load did not complete.
    #[error("load error: {0}")]
    Load(#[from] osidb_catalog::LoadError),
}

/// Result type for top-level operations.
pub type Result<T> = std::result::Result<T, Error>;
