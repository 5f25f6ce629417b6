//! Hypervisor records and their device sections.
//!
//! # Example
//!
//! ```
//! use osidb_catalog::{Db, Device, Hypervisor};
//! use osidb_core::Filter;
//!
//! let mut db = Db::new();
//! db.add_device(Device::new("devA")?);
//! db.add_device(Device::new("devB")?);
//!
//! let mut kvm = Hypervisor::new("kvm")?;
//! kvm.add_device_to_section("net", "devA", "e1000")?;
//! kvm.add_device_to_section("net", "devB", "virtio")?;
//!
//! let net = kvm.get_devices_in_section(&db, "net", &Filter::new());
//! assert_eq!(net.len(), 2);
//! # Ok::<(), osidb_catalog::CatalogError>(())
//! ```

use serde::{Deserialize, Serialize};

use osidb_core::{Entity, EntityId, EntityKind, Filter};

use crate::db::Db;
use crate::error::CatalogResult;
use crate::list::EntityList;
use crate::section::{DeviceLink, DeviceSections};

use super::{CatalogEntity, Device};

/// A hypervisor record.
///
/// Besides its entity parameters, a hypervisor carries a device-section
/// index: named categories (`"net"`, `"disk"`, ...) each holding an ordered
/// list of (device, driver) associations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hypervisor {
    entity: Entity,
    sections: DeviceSections,
}

impl Hypervisor {
    /// Create a new hypervisor record.
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is empty.
    pub fn new(id: impl Into<EntityId>) -> CatalogResult<Self> {
        Ok(Self { entity: Entity::new(id)?, sections: DeviceSections::new() })
    }

    /// Append a parameter value, builder style.
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.entity.set_param(name, value);
        self
    }

    /// Append a (device, driver) association to `section`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidArgument`](crate::CatalogError::InvalidArgument)
    /// if the section name, device identifier, or driver name is empty.
    pub fn add_device_to_section(
        &mut self,
        section: &str,
        device: impl Into<EntityId>,
        driver: &str,
    ) -> CatalogResult<()> {
        self.sections.add(section, device.into(), driver)
    }

    /// Remove `section` and all its associations. A no-op if absent.
    pub fn clear_section(&mut self, section: &str) {
        self.sections.clear(section);
    }

    /// The names of the populated device sections, in sorted order.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.names()
    }

    /// The raw associations in `section`, in insertion order.
    ///
    /// Empty if the section does not exist.
    #[must_use]
    pub fn section_links(&self, section: &str) -> &[DeviceLink] {
        self.sections.links(section)
    }

    /// The devices in `section` that pass `filter`, in association order.
    ///
    /// Each link's device identifier is resolved against `db`'s device
    /// table at query time; links whose device is not (yet) loaded are
    /// skipped, as are repeat occurrences of a device already in the result.
    /// An absent section yields an empty list, not an error.
    #[must_use]
    pub fn get_devices_in_section<'a>(
        &self,
        db: &'a Db,
        section: &str,
        filter: &Filter,
    ) -> EntityList<'a, Device> {
        let mut list = EntityList::new();
        for link in self.sections.links(section) {
            let Some(device) = db.get_device(link.device.as_str()) else {
                continue;
            };
            if filter.matches(device.entity()) {
                list.push_if_new(device);
            }
        }
        list
    }
}

impl CatalogEntity for Hypervisor {
    const KIND: EntityKind = EntityKind::Hypervisor;

    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }
}
