//! The catalog: three identifier-keyed record tables plus readiness state.
//!
//! [`Db`] holds one table per record kind — operating systems, hypervisors,
//! devices — each keyed by the record's identifier. Tables are ordered maps,
//! so every enumeration (list building, unique-value collection,
//! relationship scans) walks records in sorted-identifier order and is
//! deterministic across repeated calls on an unmodified catalog.
//!
//! The catalog is built once by an external loader and read thereafter:
//! single writer, then many readers, with no internal locking.
//!
//! # Example
//!
//! ```
//! use osidb_catalog::{Db, Os};
//! use osidb_core::{EntityKind, Filter};
//!
//! let mut db = Db::new();
//! db.add_os(Os::new("fedora16")?.with_param("vendor", "Fedora"));
//! db.add_os(Os::new("rhel6")?.with_param("vendor", "Red Hat"));
//!
//! let vendors = db.unique_values_for_property(EntityKind::Os, "vendor");
//! assert_eq!(vendors.len(), 2);
//!
//! let all = db.get_os_list(&Filter::new());
//! assert_eq!(all.len(), 2);
//! # Ok::<(), osidb_catalog::CatalogError>(())
//! ```

use std::collections::{BTreeMap, BTreeSet};

use osidb_core::{EntityId, EntityKind, Filter};

use crate::error::LoadError;
use crate::list::EntityList;
use crate::record::{CatalogEntity, Device, Hypervisor, Os, Relationship};

/// Readiness of the catalog with respect to its external bulk load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum LoadState {
    /// No bulk load has completed yet.
    #[default]
    Pending,
    /// The bulk load completed without error.
    Ready,
    /// The bulk load failed; the recorded error is kept opaque.
    Failed(LoadError),
}

/// The in-memory metadata catalog.
///
/// Three independent tables keyed by unique identifier; the same identifier
/// may appear in different tables without conflict. The catalog owns every
/// record inserted into it — query results borrow from the catalog and
/// cannot outlive it.
///
/// Operations are well-defined before the catalog is marked ready; they
/// simply run over whatever has been inserted so far. Callers typically
/// gate usage on [`Db::is_ready`].
#[derive(Debug, Clone, Default)]
pub struct Db {
    oses: BTreeMap<EntityId, Os>,
    hypervisors: BTreeMap<EntityId, Hypervisor>,
    devices: BTreeMap<EntityId, Device>,
    state: LoadState,
}

impl Db {
    /// Create an empty, not-yet-ready catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an OS record, keyed by its identifier.
    ///
    /// An existing record under the same identifier is replaced and
    /// returned. Last-write-wins replacement is the documented contract:
    /// a loader re-processing its source merges by re-inserting.
    pub fn add_os(&mut self, os: Os) -> Option<Os> {
        let id = os.id().clone();
        self.oses.insert(id, os)
    }

    /// Insert a hypervisor record, keyed by its identifier.
    ///
    /// Replacement semantics as for [`Db::add_os`].
    pub fn add_hypervisor(&mut self, hypervisor: Hypervisor) -> Option<Hypervisor> {
        let id = hypervisor.id().clone();
        self.hypervisors.insert(id, hypervisor)
    }

    /// Insert a device record, keyed by its identifier.
    ///
    /// Replacement semantics as for [`Db::add_os`].
    pub fn add_device(&mut self, device: Device) -> Option<Device> {
        let id = device.id().clone();
        self.devices.insert(id, device)
    }

    /// Look up an OS by exact identifier.
    ///
    /// Misses are routine during incremental data assembly, so an absent
    /// identifier is `None`, not an error.
    #[must_use]
    pub fn get_os(&self, id: &str) -> Option<&Os> {
        self.oses.get(id)
    }

    /// Look up a hypervisor by exact identifier.
    #[must_use]
    pub fn get_hypervisor(&self, id: &str) -> Option<&Hypervisor> {
        self.hypervisors.get(id)
    }

    /// Look up a device by exact identifier.
    #[must_use]
    pub fn get_device(&self, id: &str) -> Option<&Device> {
        self.devices.get(id)
    }

    /// Mutable lookup of an OS by exact identifier.
    pub fn get_os_mut(&mut self, id: &str) -> Option<&mut Os> {
        self.oses.get_mut(id)
    }

    /// Mutable lookup of a hypervisor by exact identifier.
    pub fn get_hypervisor_mut(&mut self, id: &str) -> Option<&mut Hypervisor> {
        self.hypervisors.get_mut(id)
    }

    /// Mutable lookup of a device by exact identifier.
    pub fn get_device_mut(&mut self, id: &str) -> Option<&mut Device> {
        self.devices.get_mut(id)
    }

    /// A fresh list of every OS that passes `filter`, in sorted-identifier
    /// order. An empty filter yields the whole table.
    #[must_use]
    pub fn get_os_list(&self, filter: &Filter) -> EntityList<'_, Os> {
        Self::filtered_list(self.oses.values(), filter)
    }

    /// A fresh list of every hypervisor that passes `filter`.
    #[must_use]
    pub fn get_hypervisor_list(&self, filter: &Filter) -> EntityList<'_, Hypervisor> {
        Self::filtered_list(self.hypervisors.values(), filter)
    }

    /// A fresh list of every device that passes `filter`.
    #[must_use]
    pub fn get_device_list(&self, filter: &Filter) -> EntityList<'_, Device> {
        Self::filtered_list(self.devices.values(), filter)
    }

    /// Every distinct value of `property` across all records of `kind`.
    ///
    /// Deduplicated; how many records share a value is not observable in
    /// the result.
    #[must_use]
    pub fn unique_values_for_property(
        &self,
        kind: EntityKind,
        property: &str,
    ) -> BTreeSet<String> {
        match kind {
            EntityKind::Os => Self::collect_values(self.oses.values(), property),
            EntityKind::Hypervisor => Self::collect_values(self.hypervisors.values(), property),
            EntityKind::Device => Self::collect_values(self.devices.values(), property),
        }
    }

    /// Every OS with at least one recorded relation of `kind`, regardless
    /// of how many targets, in sorted-identifier order.
    #[must_use]
    pub fn get_oses_with_relationship(&self, kind: Relationship) -> EntityList<'_, Os> {
        let mut list = EntityList::new();
        for os in self.oses.values() {
            if os.has_relation(kind) {
                list.push_if_new(os);
            }
        }
        list
    }

    /// The number of OS records in the catalog.
    #[must_use]
    pub fn os_count(&self) -> usize {
        self.oses.len()
    }

    /// The number of hypervisor records in the catalog.
    #[must_use]
    pub fn hypervisor_count(&self) -> usize {
        self.hypervisors.len()
    }

    /// The number of device records in the catalog.
    #[must_use]
    pub fn device_count(&self) -> usize {
        self.devices.len()
    }

    /// Returns `true` once a bulk load has completed without error.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.state == LoadState::Ready
    }

    /// Mark the catalog ready after a successful bulk load.
    ///
    /// Clears any previously recorded load error.
    pub fn mark_ready(&mut self) {
        self.state = LoadState::Ready;
    }

    /// Record that the bulk load failed.
    ///
    /// The catalog stays usable over whatever was inserted before the
    /// failure; only the readiness signal changes.
    pub fn mark_load_failed(&mut self, error: LoadError) {
        self.state = LoadState::Failed(error);
    }

    /// The recorded load failure, if the last bulk load did not complete.
    #[must_use]
    pub fn load_error(&self) -> Option<&LoadError> {
        match &self.state {
            LoadState::Failed(error) => Some(error),
            LoadState::Pending | LoadState::Ready => None,
        }
    }

    fn filtered_list<'a, E: CatalogEntity>(
        records: impl Iterator<Item = &'a E>,
        filter: &Filter,
    ) -> EntityList<'a, E> {
        let mut list = EntityList::new();
        for record in records {
            if filter.matches(record.entity()) {
                list.push_if_new(record);
            }
        }
        list
    }

    fn collect_values<'a, E: CatalogEntity + 'a>(
        records: impl Iterator<Item = &'a E>,
        property: &str,
    ) -> BTreeSet<String> {
        let mut values = BTreeSet::new();
        for record in records {
            for value in record.get_param_values(property) {
                if !values.contains(value) {
                    values.insert(value.clone());
                }
            }
        }
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_db() -> Db {
        let mut db = Db::new();
        db.add_os(
            Os::new("fedora16")
                .unwrap()
                .with_param("vendor", "Fedora")
                .with_param("arch", "x86_64"),
        );
        db.add_os(Os::new("rhel6").unwrap().with_param("vendor", "Red Hat"));
        db.add_hypervisor(Hypervisor::new("kvm").unwrap().with_param("vendor", "Red Hat"));
        db.add_device(Device::new("devA").unwrap().with_param("bus", "pci"));
        db
    }

    #[test]
    fn point_lookup_and_miss() {
        let db = sample_db();
        assert!(db.get_os("fedora16").is_some());
        assert!(db.get_os("fedora99").is_none());
        // Tables are independent namespaces
        assert!(db.get_hypervisor("fedora16").is_none());
    }

    #[test]
    fn reinsert_replaces_and_returns_old() {
        let mut db = sample_db();
        let replaced = db.add_os(Os::new("fedora16").unwrap().with_param("vendor", "Updated"));
        assert_eq!(replaced.unwrap().get_param("vendor"), Some("Fedora"));
        assert_eq!(db.get_os("fedora16").unwrap().get_param("vendor"), Some("Updated"));
        assert_eq!(db.os_count(), 2);
    }

    #[test]
    fn list_is_sorted_by_identifier() {
        let mut db = Db::new();
        db.add_os(Os::new("rhel6").unwrap());
        db.add_os(Os::new("fedora16").unwrap());
        db.add_os(Os::new("centos6").unwrap());

        let ids: Vec<_> =
            db.get_os_list(&Filter::new()).iter().map(|os| os.id().to_string()).collect();
        assert_eq!(ids, ["centos6", "fedora16", "rhel6"]);
    }

    #[test]
    fn filtered_list() {
        let db = sample_db();
        let list = db.get_os_list(&Filter::new().with_constraint("vendor", "Fedora"));
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(0).unwrap().id().as_str(), "fedora16");
    }

    #[test]
    fn unique_values_deduplicated() {
        let mut db = sample_db();
        db.add_os(Os::new("fedora15").unwrap().with_param("vendor", "Fedora"));

        let vendors = db.unique_values_for_property(EntityKind::Os, "vendor");
        let vendors: Vec<_> = vendors.iter().map(String::as_str).collect();
        assert_eq!(vendors, ["Fedora", "Red Hat"]);

        let hv_vendors = db.unique_values_for_property(EntityKind::Hypervisor, "vendor");
        assert_eq!(hv_vendors.len(), 1);
    }

    #[test]
    fn relationship_aggregate() {
        let mut db = sample_db();
        db.get_os_mut("fedora16").unwrap().add_relation(Relationship::Upgrades, "fedora15");

        let upgraders = db.get_oses_with_relationship(Relationship::Upgrades);
        assert_eq!(upgraders.len(), 1);
        assert_eq!(upgraders.get(0).unwrap().id().as_str(), "fedora16");
        assert!(db.get_oses_with_relationship(Relationship::Clones).is_empty());
    }

    #[test]
    fn readiness_transitions() {
        let mut db = Db::new();
        assert!(!db.is_ready());
        assert!(db.load_error().is_none());

        db.mark_load_failed(LoadError::new(5, "bad record"));
        assert!(!db.is_ready());
        assert_eq!(db.load_error().unwrap().code, 5);

        db.mark_ready();
        assert!(db.is_ready());
        assert!(db.load_error().is_none());
    }

    #[test]
    fn queries_work_before_ready() {
        let db = sample_db();
        assert!(!db.is_ready());
        assert_eq!(db.get_device_list(&Filter::new()).len(), 1);
    }
}
