//! `osidb`
//!
//! An in-memory metadata catalog for operating systems, hypervisors, and
//! devices. Records are loaded once by an external data source, then
//! queried by identifier, filtered by parameter constraints, and combined
//! through list set operations.
//!
//! # Overview
//!
//! - **Records**: [`Os`], [`Hypervisor`], [`Device`] — each an [`Entity`]
//!   (identifier + named multi-valued parameters) plus a per-kind index
//! - **Catalog**: [`Db`], three independent identifier-keyed tables with
//!   deterministic sorted-identifier enumeration
//! - **Queries**: [`Filter`] constraints and [`EntityList`] results with
//!   filter/intersect/union
//! - **Relationships**: directed [`Relationship`] links between OS records
//! - **Loading**: the [`CatalogSource`](source::CatalogSource) seam and
//!   [`load`](source::load), which flips the catalog's readiness flag
//!
//! # Example
//!
//! ```
//! use osidb::{Db, Filter, Os, Relationship};
//!
//! let mut db = Db::new();
//! db.add_os(Os::new("fedora15")?.with_param("vendor", "Fedora"));
//! let mut fedora16 = Os::new("fedora16")?.with_param("vendor", "Fedora");
//! fedora16.add_relation(Relationship::Upgrades, "fedora15");
//! db.add_os(fedora16);
//!
//! let fedora = db.get_os_list(&Filter::new().with_constraint("vendor", "Fedora"));
//! assert_eq!(fedora.len(), 2);
//!
//! let upgraders = db.get_oses_with_relationship(Relationship::Upgrades);
//! assert_eq!(upgraders.len(), 1);
//! # Ok::<(), osidb::Error>(())
//! ```

// Re-export core types
pub use osidb_core::{CoreError, Entity, EntityId, EntityKind, Filter};

// Re-export catalog types
pub use osidb_catalog::{
    CatalogEntity, CatalogError, Db, Device, DeviceLink, DeviceSections, EntityList, Hypervisor,
    LoadError, Os, Relationship,
};

pub mod error;
pub mod source;

pub use error::{Error, Result};
pub use source::{load, CatalogSource};
