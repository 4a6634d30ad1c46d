//! Catalog persistence backends.
//!
//! [`JsonFileStore`] writes a UTF-8 JSON object keyed by isotope name with
//! four-space indentation, the same layout as catalog files produced by
//! earlier versions of the tool, so existing `isotopes.json` files load as-is.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use halflife_core::error::StorageError;
use halflife_core::traits::CatalogPersistence;
use halflife_core::types::IsotopeMap;
use serde::Serialize;
use tracing::{debug, warn};

/// Catalog stored as a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn encode(snapshot: &IsotopeMap) -> Result<Vec<u8>, StorageError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        snapshot
            .serialize(&mut ser)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        Ok(buf)
    }
}

impl CatalogPersistence for JsonFileStore {
    fn load(&self) -> Result<Option<IsotopeMap>, StorageError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::Io(e.to_string())),
        };

        let map: IsotopeMap = serde_json::from_slice(&bytes).map_err(|e| {
            warn!(
                path = %self.path.display(),
                error = %e,
                "catalog file unreadable, its entries will be replaced on the next save"
            );
            StorageError::Corrupted(format!("{}: {e}", self.path.display()))
        })?;
        debug!(path = %self.path.display(), count = map.len(), "catalog loaded");
        Ok(Some(map))
    }

    /// Write to a sibling temp file, then rename over the target.
    fn save(&mut self, snapshot: &IsotopeMap) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::Io(e.to_string()))?;
        }

        let data = Self::encode(snapshot)?;
        let tmp = self.path.with_extension("json.tmp");
        if let Err(e) = std::fs::write(&tmp, &data).and_then(|()| std::fs::rename(&tmp, &self.path)) {
            let _ = std::fs::remove_file(&tmp);
            return Err(StorageError::Io(e.to_string()));
        }

        debug!(path = %self.path.display(), count = snapshot.len(), "catalog saved");
        Ok(())
    }
}

/// In-process catalog storage.
///
/// Used when embedding the catalog without a filesystem and in tests. A
/// read-only store rejects every save, which exercises the warning path of
/// [`CatalogStore`](crate::CatalogStore).
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    saved: Option<IsotopeMap>,
    read_only: bool,
    save_count: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `entries`, as if saved earlier.
    pub fn with_entries(entries: IsotopeMap) -> Self {
        Self {
            saved: Some(entries),
            ..Self::default()
        }
    }

    /// Store whose saves always fail.
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    /// Last snapshot successfully saved (or pre-populated).
    pub fn saved(&self) -> Option<&IsotopeMap> {
        self.saved.as_ref()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl CatalogPersistence for MemoryStore {
    fn load(&self) -> Result<Option<IsotopeMap>, StorageError> {
        Ok(self.saved.clone())
    }

    fn save(&mut self, snapshot: &IsotopeMap) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::Io("store is read-only".into()));
        }
        self.saved = Some(snapshot.clone());
        self.save_count += 1;
        Ok(())
    }
}
