//! Hardware device records.

use serde::{Deserialize, Serialize};

use osidb_core::{Entity, EntityId, EntityKind};

use crate::error::CatalogResult;

use super::CatalogEntity;

/// A hardware device record.
///
/// Devices carry no per-kind index of their own; they are referenced from
/// hypervisor device sections by identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    entity: Entity,
}

impl Device {
    /// Create a new device record.
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is empty.
    pub fn new(id: impl Into<EntityId>) -> CatalogResult<Self> {
        Ok(Self { entity: Entity::new(id)? })
    }

    /// Append a parameter value, builder style.
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.entity.set_param(name, value);
        self
    }
}

impl CatalogEntity for Device {
    const KIND: EntityKind = EntityKind::Device;

    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }
}
