//! Pure mutation operators over collections.
//!
//! None of these persist anything — they compute a new collection value
//! from the old one, and the caller decides when to write it back through
//! the store. Not-found on `update` and `remove` is a silent no-op.

use crate::record::Record;

/// Append `candidate` with the next free identifier.
///
/// The identifier is `next(max of existing ids)`, or the kind's first
/// identifier when the collection is empty. No validation beyond id
/// assignment is performed.
pub fn add<R: Record>(collection: &[R], mut candidate: R) -> Vec<R> {
    let id = R::max_id(collection)
        .map(|max| R::next_id(&max))
        .unwrap_or_else(R::first_id);
    candidate.set_id(id);

    let mut next = collection.to_vec();
    next.push(candidate);
    next
}

/// Replace the element whose id matches `record.id()`.
///
/// When no element matches, the returned collection equals the input.
pub fn update<R: Record>(collection: &[R], record: R) -> Vec<R> {
    collection
        .iter()
        .map(|r| {
            if r.id() == record.id() {
                record.clone()
            } else {
                r.clone()
            }
        })
        .collect()
}

/// Drop the element with the matching id, preserving order.
pub fn remove<R: Record>(collection: &[R], id: &R::Id) -> Vec<R> {
    collection
        .iter()
        .filter(|r| r.id() != *id)
        .cloned()
        .collect()
}
