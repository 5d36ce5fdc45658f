//! Record - the trait every stored collection element implements.

use std::fmt;

use rand::Rng;
use serde::{de::DeserializeOwned, Serialize};

/// Trait for types stored as elements of a persisted collection.
///
/// Each record kind owns exactly one slot in the backing store
/// (e.g., `"customers"`, `"sales"`, `"notifications"`) and carries a
/// unique identifier that is assigned at creation time and never reused.
/// Identifiers are monotonically increasing: integers for most kinds,
/// prefixed sequence strings (`INV-0001`) for invoices.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// Identifier type for this record kind.
    type Id: Clone + PartialEq + Ord + fmt::Debug;

    /// The slot name this collection persists under.
    const SLOT: &'static str;

    /// Returns this record's identifier.
    fn id(&self) -> Self::Id;

    /// Overwrites this record's identifier. Called by `ops::add` when a
    /// candidate joins a collection.
    fn set_id(&mut self, id: Self::Id);

    /// The identifier assigned to the first record of an empty collection.
    fn first_id() -> Self::Id;

    /// The identifier following `max`, the largest one currently in use.
    fn next_id(max: &Self::Id) -> Self::Id;

    /// The largest identifier currently in use, or `None` when the
    /// collection is empty.
    ///
    /// The default scans by `Ord`, which is right for numeric ids.
    /// Kinds whose ids order differently from their sequence (prefixed
    /// strings whose numeric suffix outgrows its zero padding) override
    /// this to compare by sequence instead.
    fn max_id(collection: &[Self]) -> Option<Self::Id>
    where
        Self: Sized,
    {
        collection.iter().map(|r| r.id()).max()
    }
}

/// Trait for record kinds that can seed their own collection.
///
/// `CollectionStore::load` falls back to `seed` when the slot is absent
/// or unreadable. Generators are deterministic in shape (field set, value
/// ranges) but draw values from the supplied `Rng`, so tests pass a
/// seeded `StdRng` to make collections reproducible.
pub trait Seed: Record {
    /// Produce a freshly seeded collection.
    fn seed<G: Rng>(rng: &mut G) -> Vec<Self>
    where
        Self: Sized;
}
