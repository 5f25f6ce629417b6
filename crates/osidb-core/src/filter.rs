//! Constraint-based predicate over entity parameters.
//!
//! A [`Filter`] collects (parameter name, required value) constraints and
//! evaluates whether a given [`Entity`] satisfies them. Constraints on
//! distinct parameters are conjunctive; several constraints on the *same*
//! parameter form a disjunction within that parameter, which lets a caller
//! ask for "architecture is x86 or x86_64" by registering two constraints
//! under the same name.
//!
//! # Example
//!
//! ```
//! use osidb_core::{Entity, Filter};
//!
//! let os = Entity::new("fedora16")?
//!     .with_param("vendor", "Fedora")
//!     .with_param("arch", "x86_64");
//!
//! let filter = Filter::new()
//!     .with_constraint("vendor", "Fedora")
//!     .with_constraint("arch", "x86")
//!     .with_constraint("arch", "x86_64");
//!
//! assert!(filter.matches(&os));
//! # Ok::<(), osidb_core::CoreError>(())
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::Entity;

/// A conjunctive/disjunctive predicate over entity parameters.
///
/// An empty filter matches every entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    constraints: BTreeMap<String, Vec<String>>,
}

impl Filter {
    /// Create a filter with no constraints.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a constraint, builder style.
    #[must_use]
    pub fn with_constraint(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_constraint(property, value);
        self
    }

    /// Register one (parameter, required value) constraint.
    ///
    /// Repeated calls with the same parameter name accumulate as a
    /// disjunction for that parameter.
    pub fn add_constraint(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.constraints.entry(property.into()).or_default().push(value.into());
    }

    /// Returns `true` if no constraints are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// The number of distinct constrained parameter names.
    #[must_use]
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// Evaluate this filter against an entity.
    ///
    /// For every constrained parameter, at least one of that parameter's
    /// required values must appear in the entity's value list. An entity
    /// lacking a constrained parameter fails. Pure: neither the filter nor
    /// the entity is modified.
    #[must_use]
    pub fn matches(&self, entity: &Entity) -> bool {
        self.constraints.iter().all(|(name, required)| {
            let values = entity.get_param_values(name);
            required.iter().any(|wanted| values.contains(wanted))
        })
    }
}
