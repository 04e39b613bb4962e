//! Atomically replaceable catalog snapshots.

use std::{path::Path, sync::Arc};

use arc_swap::ArcSwap;
use tracing::info;

use crate::{Catalog, CatalogError, NormalizeReport, load_catalog_with_report};

/// Holds the current catalog.
///
/// Readers take a snapshot and keep it for the whole request; a concurrent
/// [`replace`](Self::replace) never changes a snapshot already taken.
#[derive(Debug)]
pub struct CatalogStore {
    /// Current catalog.
    current: ArcSwap<Catalog>,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new(Catalog::default())
    }
}

impl CatalogStore {
    /// Creates a store holding `catalog`.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            current: ArcSwap::from_pointee(catalog),
        }
    }

    /// Returns the current catalog.
    pub fn snapshot(&self) -> Arc<Catalog> {
        self.current.load_full()
    }

    /// Installs a new catalog and returns the previous one.
    pub fn replace(&self, catalog: Catalog) -> Arc<Catalog> {
        self.current.swap(Arc::new(catalog))
    }

    /// Loads `path` and installs it. On error the current catalog is kept.
    pub fn reload(&self, path: &Path) -> Result<NormalizeReport, CatalogError> {
        let (catalog, report) = load_catalog_with_report(path)?;
        info!(path = %path.display(), books = report.kept, "catalog reloaded");
        self.replace(catalog);
        Ok(report)
    }
}
