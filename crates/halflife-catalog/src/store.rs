//! Catalog plus its persistence collaborator.
//!
//! [`CatalogStore`] applies each mutation to the in-memory
//! [`IsotopeCatalog`], then hands the new snapshot to the injected
//! [`CatalogPersistence`]. A failed save never undoes or fails the mutation:
//! it comes back as [`SaveOutcome::Unsaved`] so the caller can show a warning
//! while the in-memory catalog stays usable.

use std::sync::Arc;

use halflife_core::error::{CatalogError, StorageError};
use halflife_core::traits::CatalogPersistence;
use halflife_core::types::{Isotope, IsotopeMap, TimeUnit};
use parking_lot::{Mutex, MutexGuard};
use tracing::{info, warn};

use crate::catalog::IsotopeCatalog;

/// Result of the persistence write that follows a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// The mutation succeeded in memory but could not be written.
    Unsaved(StorageError),
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved)
    }

    /// The storage failure to surface as a warning, if any.
    pub fn warning(&self) -> Option<&StorageError> {
        match self {
            Self::Saved => None,
            Self::Unsaved(e) => Some(e),
        }
    }
}

/// Isotope catalog with write-through persistence.
#[derive(Debug)]
pub struct CatalogStore<P: CatalogPersistence> {
    catalog: IsotopeCatalog,
    persistence: P,
}

impl<P: CatalogPersistence> CatalogStore<P> {
    /// Load the catalog from `persistence`.
    ///
    /// Falls back to the built-in defaults when nothing is stored, the stored
    /// data cannot be read or parsed, or it holds no isotopes. Never fails.
    pub fn open(persistence: P) -> Self {
        let catalog = match persistence.load() {
            Ok(Some(entries)) => IsotopeCatalog::from_entries(entries).unwrap_or_else(|| {
                warn!("stored catalog is empty, using defaults");
                IsotopeCatalog::with_defaults()
            }),
            Ok(None) => {
                info!("no stored catalog, using defaults");
                IsotopeCatalog::with_defaults()
            }
            Err(e) => {
                warn!(error = %e, "failed to load catalog, using defaults");
                IsotopeCatalog::with_defaults()
            }
        };

        Self {
            catalog,
            persistence,
        }
    }

    pub fn catalog(&self) -> &IsotopeCatalog {
        &self.catalog
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    pub fn get(&self, name: &str) -> Result<Isotope, CatalogError> {
        self.catalog.get(name)
    }

    /// Add or overwrite an isotope, then persist.
    pub fn add(
        &mut self,
        name: &str,
        atomic_weight: f64,
        half_life: f64,
        half_life_unit: TimeUnit,
    ) -> Result<SaveOutcome, CatalogError> {
        self.catalog
            .add(name, atomic_weight, half_life, half_life_unit)?;
        Ok(self.persist())
    }

    /// Remove an isotope (never the last one), then persist.
    pub fn remove(&mut self, name: &str) -> Result<SaveOutcome, CatalogError> {
        self.catalog.remove(name)?;
        Ok(self.persist())
    }

    /// Restore the built-in isotopes, then persist.
    pub fn reset_to_defaults(&mut self) -> SaveOutcome {
        self.catalog.reset_to_defaults();
        self.persist()
    }

    /// Share this store behind a lock.
    pub fn into_shared(self) -> SharedCatalogStore<P> {
        SharedCatalogStore {
            inner: Arc::new(Mutex::new(self)),
        }
    }

    fn persist(&mut self) -> SaveOutcome {
        match self.persistence.save(self.catalog.snapshot()) {
            Ok(()) => SaveOutcome::Saved,
            Err(e) => {
                warn!(error = %e, "catalog change kept in memory only");
                SaveOutcome::Unsaved(e)
            }
        }
    }
}

/// Cloneable handle serializing access to one [`CatalogStore`].
///
/// Each mutation and its persistence write run under the same lock, so
/// concurrent sessions never interleave a change with another's save.
pub struct SharedCatalogStore<P: CatalogPersistence> {
    inner: Arc<Mutex<CatalogStore<P>>>,
}

impl<P: CatalogPersistence> Clone for SharedCatalogStore<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P: CatalogPersistence> SharedCatalogStore<P> {
    /// Exclusive access for multi-step operations.
    pub fn lock(&self) -> MutexGuard<'_, CatalogStore<P>> {
        self.inner.lock()
    }

    pub fn get(&self, name: &str) -> Result<Isotope, CatalogError> {
        self.inner.lock().get(name)
    }

    pub fn add(
        &self,
        name: &str,
        atomic_weight: f64,
        half_life: f64,
        half_life_unit: TimeUnit,
    ) -> Result<SaveOutcome, CatalogError> {
        self.inner
            .lock()
            .add(name, atomic_weight, half_life, half_life_unit)
    }

    pub fn remove(&self, name: &str) -> Result<SaveOutcome, CatalogError> {
        self.inner.lock().remove(name)
    }

    pub fn reset_to_defaults(&self) -> SaveOutcome {
        self.inner.lock().reset_to_defaults()
    }

    /// Copy of the current catalog contents.
    pub fn snapshot(&self) -> IsotopeMap {
        self.inner.lock().catalog().snapshot().clone()
    }
}
