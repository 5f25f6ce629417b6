//! `osidb` Catalog
//!
//! The catalog layer of osidb: concrete record kinds for operating systems,
//! hypervisors, and devices, the generic ordered list those records are
//! queried through, and the [`Db`] holding one identifier-keyed table per
//! kind.
//!
//! # Overview
//!
//! - **Records**: [`Os`], [`Hypervisor`], [`Device`], all sharing the
//!   [`CatalogEntity`] capability (identity + parameters)
//! - **Lists**: [`EntityList`], an ordered, duplicate-free-by-identifier
//!   sequence of records of one kind, with filter/intersect/union
//! - **Tables**: [`Db`], three independent tables plus the bulk-load
//!   readiness flag
//! - **Relationships**: directed, kind-tagged links between OS records
//!   ([`Relationship`])
//! - **Device sections**: named (device, driver) association groups on
//!   hypervisors ([`DeviceSections`])
//!
//! # Example
//!
//! ```
//! use osidb_catalog::{Db, Os};
//! use osidb_core::Filter;
//!
//! let mut db = Db::new();
//! db.add_os(Os::new("fedora16")?.with_param("vendor", "Fedora"));
//! db.add_os(Os::new("rhel6")?.with_param("vendor", "Red Hat"));
//!
//! let fedora = db.get_os_list(&Filter::new().with_constraint("vendor", "Fedora"));
//! assert_eq!(fedora.len(), 1);
//! # Ok::<(), osidb_catalog::CatalogError>(())
//! ```

pub mod db;
pub mod error;
pub mod list;
pub mod record;
pub mod section;

// Re-export commonly used types
pub use db::Db;
pub use error::{CatalogError, CatalogResult, LoadError};
pub use list::EntityList;
pub use record::{CatalogEntity, Device, Hypervisor, Os, Relationship};
pub use section::{DeviceLink, DeviceSections};
