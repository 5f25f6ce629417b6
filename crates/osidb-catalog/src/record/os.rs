//! Operating-system records and their directed relationships.
//!
//! # Example
//!
//! ```
//! use osidb_catalog::{CatalogEntity, Os, Relationship};
//!
//! let mut fedora16 = Os::new("fedora16")?.with_param("vendor", "Fedora");
//! fedora16.add_relation(Relationship::Upgrades, "fedora15");
//!
//! let targets: Vec<_> = fedora16.related(Relationship::Upgrades).collect();
//! assert_eq!(targets.len(), 1);
//! assert!(!fedora16.has_relation(Relationship::Clones));
//! # Ok::<(), osidb_catalog::CatalogError>(())
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use osidb_core::{Entity, EntityId, EntityKind};

use crate::error::CatalogResult;

use super::CatalogEntity;

/// The kind of a directed relationship between two operating systems.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Relationship {
    /// The subject OS upgrades the target OS.
    Upgrades,
    /// The subject OS is a clone of the target OS.
    Clones,
    /// The subject OS derives from the target OS.
    DerivesFrom,
}

impl Relationship {
    /// Get a string representation of the relationship kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Relationship::Upgrades => "upgrades",
            Relationship::Clones => "clones",
            Relationship::DerivesFrom => "derives-from",
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An operating-system record.
///
/// Besides its entity parameters, an OS carries a relationship index: a
/// mapping from relationship kind to the set of related OS identifiers.
/// Relationships are directed, recorded on the subject pointing at its
/// objects; the inverse direction is never populated automatically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Os {
    entity: Entity,
    relations: BTreeMap<Relationship, BTreeSet<EntityId>>,
}

impl Os {
    /// Create a new operating-system record.
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is empty.
    pub fn new(id: impl Into<EntityId>) -> CatalogResult<Self> {
        Ok(Self { entity: Entity::new(id)?, relations: BTreeMap::new() })
    }

    /// Append a parameter value, builder style.
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.entity.set_param(name, value);
        self
    }

    /// Record a directed relation of `kind` pointing at `target`.
    ///
    /// Targets accumulate in a set: recording the same target twice is
    /// idempotent, not an error.
    pub fn add_relation(&mut self, kind: Relationship, target: impl Into<EntityId>) {
        self.relations.entry(kind).or_default().insert(target.into());
    }

    /// The target identifiers recorded for `kind`, in sorted order.
    ///
    /// Empty if no relation of that kind was recorded. Only the subject
    /// side of a relation is visible here; querying the target OS for the
    /// same kind yields nothing unless explicitly recorded.
    pub fn related(&self, kind: Relationship) -> impl Iterator<Item = &EntityId> {
        self.relations.get(&kind).into_iter().flatten()
    }

    /// Returns `true` if at least one relation of `kind` is recorded.
    #[must_use]
    pub fn has_relation(&self, kind: Relationship) -> bool {
        self.relations.get(&kind).is_some_and(|targets| !targets.is_empty())
    }

    /// The relationship kinds with at least one recorded target.
    pub fn relationships(&self) -> impl Iterator<Item = Relationship> + '_ {
        self.relations.iter().filter(|(_, targets)| !targets.is_empty()).map(|(kind, _)| *kind)
    }
}

impl CatalogEntity for Os {
    const KIND: EntityKind = EntityKind::Os;

    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }
}
