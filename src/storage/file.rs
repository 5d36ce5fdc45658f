//! FileStore - one JSON file per slot under a root directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StoreError;

use super::SlotStore;

/// Durable slot store: slot `customers` lives at `<root>/customers.json`.
///
/// The root directory is created lazily on first write. A missing file
/// reads as `None`, which `CollectionStore::load` heals by reseeding.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root`. The directory is not touched
    /// until the first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory this store writes under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.root.join(format!("{}.json", slot))
    }
}

impl SlotStore for FileStore {
    fn read(&self, slot: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.slot_path(slot)) {
            Ok(json) => Ok(Some(json)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::Storage(err.to_string())),
        }
    }

    fn write(&self, slot: &str, json: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root).map_err(|e| StoreError::Storage(e.to_string()))?;
        fs::write(self.slot_path(slot), json).map_err(|e| StoreError::Storage(e.to_string()))
    }
}
