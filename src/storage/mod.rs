//! Storage - the pluggable slot-backed persistence seam.
//!
//! Everything that persists goes through [`SlotStore`]: one JSON string
//! per named slot, read and written whole. Production code uses the
//! file-backed store; tests substitute the in-memory one.

mod file;
mod memory;

use crate::error::StoreError;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Abstract key-value storage: one serialized value per named slot.
///
/// Writes are whole-value overwrites with no transactional guarantee;
/// the store is assumed single-writer within one session. Concurrent
/// writers last-write-win silently - a known limitation, not mitigated.
pub trait SlotStore: Send + Sync {
    /// Read the named slot. Returns `None` when the slot has never been
    /// written.
    fn read(&self, slot: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite the named slot. A subsequent `read` in the same session
    /// observes the written value.
    fn write(&self, slot: &str, json: &str) -> Result<(), StoreError>;
}

impl<S: SlotStore + ?Sized> SlotStore for &S {
    fn read(&self, slot: &str) -> Result<Option<String>, StoreError> {
        (**self).read(slot)
    }

    fn write(&self, slot: &str, json: &str) -> Result<(), StoreError> {
        (**self).write(slot, json)
    }
}

impl<S: SlotStore + ?Sized> SlotStore for std::sync::Arc<S> {
    fn read(&self, slot: &str) -> Result<Option<String>, StoreError> {
        (**self).read(slot)
    }

    fn write(&self, slot: &str, json: &str) -> Result<(), StoreError> {
        (**self).write(slot, json)
    }
}
