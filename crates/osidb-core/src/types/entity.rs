//! The catalog record base type: identity plus named multi-valued parameters.
//!
//! This module provides [`Entity`], the base every catalog record kind is
//! built from. An entity pairs an immutable identifier with an open-ended
//! set of named parameters, where each parameter holds an ordered list of
//! string values.
//!
//! # Example
//!
//! ```
//! use osidb_core::{Entity, CoreError};
//!
//! let os = Entity::new("fedora16")?
//!     .with_param("vendor", "Fedora")
//!     .with_param("arch", "x86")
//!     .with_param("arch", "x86_64");
//!
//! // Single-valued read convention: first value wins
//! assert_eq!(os.get_param("arch"), Some("x86"));
//! // Full value list, in insertion order
//! assert_eq!(os.get_param_values("arch"), ["x86", "x86_64"]);
//! # Ok::<(), CoreError>(())
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

use super::EntityId;

/// A uniquely identified record with named, multi-valued string parameters.
///
/// The parameter vocabulary is data-driven, so parameter names are open
/// strings rather than a fixed enum. A single parameter may legitimately
/// hold several values (for example, every architecture an OS supports);
/// values are kept in insertion order and never deduplicated. Parameter
/// names enumerate in sorted order, which keeps every derived listing
/// deterministic.
///
/// Entities are append-only: parameters can be added but not removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    id: EntityId,
    params: BTreeMap<String, Vec<String>>,
}

impl Entity {
    /// Create a new entity with the given identifier.
    ///
    /// The identifier is set exactly once, here, and is immutable for the
    /// entity's lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyId`] if the identifier is empty.
    pub fn new(id: impl Into<EntityId>) -> CoreResult<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(CoreError::EmptyId);
        }
        Ok(Self { id, params: BTreeMap::new() })
    }

    /// Append a parameter value, builder style.
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_param(name, value);
        self
    }

    /// The entity's unique identifier.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &EntityId {
        &self.id
    }

    /// Append `value` to the ordered value list for `name`, creating the
    /// list if the parameter was previously unset.
    ///
    /// Repeated identical values are preserved; callers needing uniqueness
    /// must dedupe before calling.
    pub fn set_param(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.params.entry(name.into()).or_default().push(value.into());
    }

    /// The first value recorded for `name`, or `None` if unset.
    ///
    /// This is the single-valued read convention: parameters that are
    /// multi-valued in storage are read first-write-wins by callers that
    /// expect one value.
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&str> {
        self.params.get(name).and_then(|values| values.first()).map(String::as_str)
    }

    /// The full ordered value list for `name`, empty if unset.
    #[must_use]
    pub fn get_param_values(&self, name: &str) -> &[String] {
        self.params.get(name).map_or(&[], Vec::as_slice)
    }

    /// Returns `true` if at least one value is recorded for `name`.
    #[must_use]
    pub fn has_param(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    /// The parameter names currently set, in sorted order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.params.keys().map(String::as_str)
    }
}
