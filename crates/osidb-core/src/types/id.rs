//! Unique identifiers for catalog records.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a catalog record.
///
/// Identifiers are caller-assigned strings: the upstream data formats use
/// URIs and short names rather than numeric handles. An identifier is unique
/// within one table of the catalog; the same identifier may appear in
/// different tables without conflict.
///
/// # Example
///
/// ```
/// use osidb_core::EntityId;
///
/// let id = EntityId::new("fedora16");
/// assert_eq!(id.as_str(), "fedora16");
///
/// // Also works via From trait
/// let id: EntityId = "rhel6".into();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Create a new identifier.
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the identifier is the empty string.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    #[inline]
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for EntityId {
    #[inline]
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

// Lets ordered maps keyed by `EntityId` be probed with a plain `&str`.
impl Borrow<str> for EntityId {
    #[inline]
    fn borrow(&self) -> &str {
        &self.0
    }
}
