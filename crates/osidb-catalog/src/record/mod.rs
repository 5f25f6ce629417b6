//! Concrete catalog record kinds and the capability they share.
//!
//! Every record stored in the catalog is one of three kinds — [`Os`],
//! [`Hypervisor`], or [`Device`] — each wrapping an [`Entity`] (identity +
//! parameters) and adding whatever per-kind index it needs: OS records carry
//! directed relationships to other OSes, hypervisor records carry device
//! sections, device records carry nothing extra.
//!
//! [`CatalogEntity`] is the shared capability: it exposes the underlying
//! entity and is the bound the generic [`EntityList`](crate::EntityList) and
//! the [`Db`](crate::Db) table scans are written against.

mod device;
mod hypervisor;
mod os;

pub use device::Device;
pub use hypervisor::Hypervisor;
pub use os::{Os, Relationship};

use osidb_core::{Entity, EntityId, EntityKind};

/// The capability shared by every catalog record kind.
///
/// Provides access to the record's underlying [`Entity`] plus forwarding
/// accessors for the common identity/parameter operations. The associated
/// `KIND` constant ties each record type to its table, which is what makes
/// cross-kind list operations unrepresentable at the type level.
pub trait CatalogEntity {
    /// The table this record kind belongs to.
    const KIND: EntityKind;

    /// The underlying entity (identity + parameters).
    fn entity(&self) -> &Entity;

    /// Mutable access to the underlying entity.
    ///
    /// Mutating a record after insertion is permitted, but invalidates any
    /// previously computed value enumerations; callers must re-query.
    fn entity_mut(&mut self) -> &mut Entity;

    /// The record's unique identifier.
    fn id(&self) -> &EntityId {
        self.entity().id()
    }

    /// Append a parameter value.
    fn set_param(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entity_mut().set_param(name, value);
    }

    /// The first value recorded for `name`, or `None` if unset.
    fn get_param(&self, name: &str) -> Option<&str> {
        self.entity().get_param(name)
    }

    /// The full ordered value list for `name`, empty if unset.
    fn get_param_values(&self, name: &str) -> &[String] {
        self.entity().get_param_values(name)
    }
}
