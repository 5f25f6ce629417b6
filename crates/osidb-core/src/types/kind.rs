//! Record kind tags naming the catalog's tables.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of a catalog record, naming which table holds it.
///
/// The three tables are independent namespaces: the same identifier may
/// appear under different kinds without conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// An operating system.
    Os,
    /// A hypervisor.
    Hypervisor,
    /// A hardware device.
    Device,
}

impl EntityKind {
    /// Get a string representation of the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Os => "os",
            EntityKind::Hypervisor => "hypervisor",
            EntityKind::Device => "device",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
