//! MemoryStore - HashMap-backed slot store for testing and development.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::StoreError;

use super::SlotStore;

/// In-memory slot store backed by a HashMap. Clone-friendly via `Arc`,
/// so several stores can share one backing map in tests.
#[derive(Clone, Default)]
pub struct MemoryStore {
    slots: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots that have been written.
    pub fn len(&self) -> Result<usize, StoreError> {
        let slots = self
            .slots
            .read()
            .map_err(|_| StoreError::LockPoisoned("len"))?;
        Ok(slots.len())
    }

    /// True when no slot has been written.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

impl SlotStore for MemoryStore {
    fn read(&self, slot: &str) -> Result<Option<String>, StoreError> {
        let slots = self
            .slots
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;
        Ok(slots.get(slot).cloned())
    }

    fn write(&self, slot: &str, json: &str) -> Result<(), StoreError> {
        let mut slots = self
            .slots
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))?;
        slots.insert(slot.to_string(), json.to_string());
        Ok(())
    }
}
