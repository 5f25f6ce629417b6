//! `osidb` Core
//!
//! This crate provides the fundamental types of the osidb metadata catalog:
//! uniquely identified records with named, multi-valued string parameters,
//! and the constraint-based predicate used to query them.
//!
//! # Overview
//!
//! - **Identifiers**: [`EntityId`] for referencing catalog records
//! - **Records**: [`Entity`], the identity-plus-parameters base every
//!   catalog record kind is built from
//! - **Kinds**: [`EntityKind`] tags naming the catalog's three tables
//! - **Queries**: [`Filter`], a conjunctive/disjunctive predicate over
//!   entity parameters
//!
//! # Example
//!
//! ```
//! use osidb_core::{Entity, Filter};
//!
//! let os = Entity::new("fedora16")?
//!     .with_param("vendor", "Fedora")
//!     .with_param("arch", "x86")
//!     .with_param("arch", "x86_64");
//!
//! assert_eq!(os.get_param("vendor"), Some("Fedora"));
//! assert_eq!(os.get_param_values("arch"), ["x86", "x86_64"]);
//!
//! let filter = Filter::new().with_constraint("vendor", "Fedora");
//! assert!(filter.matches(&os));
//! # Ok::<(), osidb_core::CoreError>(())
//! ```

pub mod error;
pub mod filter;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, CoreResult};
pub use filter::Filter;
pub use types::{Entity, EntityId, EntityKind};
