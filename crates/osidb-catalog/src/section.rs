//! Named device-association sections.
//!
//! A device section groups ordered (device, driver) associations under a
//! category name such as `"net"` or `"disk"`. [`DeviceSections`] is the
//! reusable index component: hypervisor records embed one, and any future
//! record kind carrying per-category device associations can do the same.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use osidb_core::EntityId;

use crate::error::{CatalogError, CatalogResult};

/// One (device, driver) association within a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceLink {
    /// Identifier of the associated device.
    pub device: EntityId,
    /// Name of the driver binding the device in this section.
    pub driver: String,
}

/// Ordered device associations grouped into named sections.
///
/// Within a section, associations keep insertion order and may repeat a
/// device identifier (a device listed twice with different drivers is
/// legitimate). Section names enumerate in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSections {
    sections: BTreeMap<String, Vec<DeviceLink>>,
}

impl DeviceSections {
    /// Create an empty section index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a (device, driver) association to `section`, creating the
    /// section if absent.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidArgument`] if the section name, the
    /// device identifier, or the driver name is empty.
    pub fn add(&mut self, section: &str, device: EntityId, driver: &str) -> CatalogResult<()> {
        if section.is_empty() {
            return Err(CatalogError::InvalidArgument("section name must not be empty".into()));
        }
        if device.is_empty() {
            return Err(CatalogError::InvalidArgument(
                "device identifier must not be empty".into(),
            ));
        }
        if driver.is_empty() {
            return Err(CatalogError::InvalidArgument("driver name must not be empty".into()));
        }
        self.sections
            .entry(section.to_owned())
            .or_default()
            .push(DeviceLink { device, driver: driver.to_owned() });
        Ok(())
    }

    /// Remove `section` entirely, associations included.
    ///
    /// A no-op if the section does not exist.
    pub fn clear(&mut self, section: &str) {
        self.sections.remove(section);
    }

    /// The names of the currently populated sections, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// The associations in `section`, in insertion order.
    ///
    /// Empty if the section does not exist.
    #[must_use]
    pub fn links(&self, section: &str) -> &[DeviceLink] {
        self.sections.get(section).map_or(&[], Vec::as_slice)
    }

    /// Returns `true` if no section is populated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_list_links() {
        let mut sections = DeviceSections::new();
        sections.add("net", EntityId::new("devA"), "e1000").unwrap();
        sections.add("net", EntityId::new("devB"), "virtio").unwrap();

        let links = sections.links("net");
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].driver, "e1000");
        assert_eq!(links[1].device.as_str(), "devB");
    }

    #[test]
    fn empty_arguments_rejected() {
        let mut sections = DeviceSections::new();
        assert!(matches!(
            sections.add("", EntityId::new("devA"), "e1000"),
            Err(CatalogError::InvalidArgument(_))
        ));
        assert!(matches!(
            sections.add("net", EntityId::new(""), "e1000"),
            Err(CatalogError::InvalidArgument(_))
        ));
        assert!(matches!(
            sections.add("net", EntityId::new("devA"), ""),
            Err(CatalogError::InvalidArgument(_))
        ));
        assert!(sections.is_empty());
    }

    #[test]
    fn same_device_twice_with_different_drivers() {
        let mut sections = DeviceSections::new();
        sections.add("net", EntityId::new("devA"), "e1000").unwrap();
        sections.add("net", EntityId::new("devA"), "rtl8139").unwrap();
        assert_eq!(sections.links("net").len(), 2);
    }

    #[test]
    fn clear_removes_section() {
        let mut sections = DeviceSections::new();
        sections.add("net", EntityId::new("devA"), "e1000").unwrap();
        sections.add("disk", EntityId::new("devC"), "ide").unwrap();

        sections.clear("net");
        assert!(sections.links("net").is_empty());
        assert_eq!(sections.names().collect::<Vec<_>>(), ["disk"]);

        // Clearing an absent section is a no-op
        sections.clear("net");
        assert_eq!(sections.names().count(), 1);
    }

    #[test]
    fn names_sorted() {
        let mut sections = DeviceSections::new();
        sections.add("net", EntityId::new("devA"), "e1000").unwrap();
        sections.add("audio", EntityId::new("devD"), "ac97").unwrap();
        sections.add("disk", EntityId::new("devC"), "ide").unwrap();
        assert_eq!(sections.names().collect::<Vec<_>>(), ["audio", "disk", "net"]);
    }
}
