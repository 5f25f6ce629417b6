//! The loader seam: bulk-populating a catalog from an external source.
//!
//! The catalog core defines no record file format. Whatever parses the
//! serialized records implements [`CatalogSource`]; [`load`] drives one
//! bulk pass and records the outcome on the catalog's readiness flag.
//!
//! # Example
//!
//! ```
//! use osidb::source::{load, CatalogSource};
//! use osidb::{Db, LoadError, Os};
//!
//! struct StaticSource;
//!
//! impl CatalogSource for StaticSource {
//!     fn populate(&self, db: &mut Db) -> Result<(), LoadError> {
//!         let os = Os::new("fedora16")
//!             .map_err(|e| LoadError::new(1, e.to_string()))?;
//!         db.add_os(os.with_param("vendor", "Fedora"));
//!         Ok(())
//!     }
//! }
//!
//! let mut db = Db::new();
//! load(&mut db, &StaticSource)?;
//! assert!(db.is_ready());
//! # Ok::<(), osidb::Error>(())
//! ```

use tracing::{info, warn};

use osidb_catalog::{Db, LoadError};

use crate::error::Error;

/// An external source of catalog records.
///
/// Implementations construct records from their own serialized format and
/// insert them through the catalog's `add_*` operations. The catalog never
/// interprets a load failure; it carries the source's opaque code/message
/// pair.
pub trait CatalogSource {
    /// Insert every record this source provides into `db`.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] describing why the load could not complete.
    /// Records inserted before the failure remain in the catalog.
    fn populate(&self, db: &mut Db) -> Result<(), LoadError>;
}

/// Run one bulk load and record its outcome on the catalog.
///
/// On success the catalog is marked ready. On failure the error is
/// recorded on the catalog — which stays queryable over whatever was
/// inserted — and returned to the caller.
///
/// # Errors
///
/// Returns [`Error::Load`] when the source reports a failure.
pub fn load(db: &mut Db, source: &impl CatalogSource) -> Result<(), Error> {
    match source.populate(db) {
        Ok(()) => {
            db.mark_ready();
            info!(
                oses = db.os_count(),
                hypervisors = db.hypervisor_count(),
                devices = db.device_count(),
                "catalog load complete"
            );
            Ok(())
        }
        Err(error) => {
            warn!(code = error.code, message = %error.message, "catalog load failed");
            db.mark_load_failed(error.clone());
            Err(Error::Load(error))
        }
    }
}
