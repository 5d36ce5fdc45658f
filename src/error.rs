use std::fmt;

/// Error type for store operations.
///
/// Absence or corruption of a persisted slot is not represented here —
/// `CollectionStore::load` heals both by reseeding. These variants cover
/// the failures that do reach callers: the backing store itself failing,
/// a value that cannot be serialized, or a poisoned lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Serialization/deserialization error.
    Serde(String),
    /// Storage-level error (I/O, backing store unavailable).
    Storage(String),
    /// A lock guarding shared state was poisoned.
    LockPoisoned(&'static str),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Serde(msg) => write!(f, "serialization error: {}", msg),
            StoreError::Storage(msg) => write!(f, "storage error: {}", msg),
            StoreError::LockPoisoned(operation) => {
                write!(f, "lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for StoreError {}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serde(err.to_string())
    }
}
