//! Query engine - text search plus facet filters over a collection.
//!
//! Filtering is a pure, order-preserving linear scan. A record is
//! retained iff the text query (when active) is a case-insensitive
//! substring of any of the record's searchable fields, AND every active
//! facet matches the corresponding field exactly. A facet set to
//! [`Facet::All`] bypasses its check.
//!
//! Two text policies exist, for two different call sites:
//! - list pages ([`Query::list`]): an empty query matches everything;
//! - the global search modal ([`Query::global`]): a query shorter than
//!   [`GLOBAL_SEARCH_MIN_LEN`] yields an explicitly empty result.

use std::collections::BTreeMap;

use crate::record::Record;

/// Minimum query length before the global search modal returns anything.
pub const GLOBAL_SEARCH_MIN_LEN: usize = 2;

/// Maximum results per collection in the global search modal.
pub const GLOBAL_SEARCH_LIMIT: usize = 5;

/// Trait for record kinds that can be searched and facet-filtered.
pub trait Queryable: Record {
    /// The fixed whitelist of fields scanned by the text query.
    fn search_text(&self) -> Vec<&str>;

    /// The record's value for a named facet, if the kind has that facet.
    fn facet(&self, name: &str) -> Option<&str>;
}

/// A single facet filter: exact match on a discrete value, or bypassed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Facet {
    /// The "all" sentinel - this facet does not constrain results.
    All,
    /// Retain only records whose facet value equals this exactly.
    Is(String),
}

/// View-session query state: a text query plus named facet filters.
///
/// Never persisted; list pages construct a fresh one per session.
#[derive(Debug, Clone)]
pub struct Query {
    text: String,
    min_len: usize,
    facets: BTreeMap<String, Facet>,
}

impl Query {
    /// Query with list-page semantics: an empty text query matches all.
    pub fn list() -> Self {
        Self {
            text: String::new(),
            min_len: 0,
            facets: BTreeMap::new(),
        }
    }

    /// Query with global-search semantics: text below
    /// [`GLOBAL_SEARCH_MIN_LEN`] characters matches nothing.
    pub fn global() -> Self {
        Self {
            text: String::new(),
            min_len: GLOBAL_SEARCH_MIN_LEN,
            facets: BTreeMap::new(),
        }
    }

    /// Set the text query.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Builder-style variant of [`set_text`](Self::set_text).
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    /// Set a named facet filter.
    pub fn set_facet(&mut self, name: impl Into<String>, facet: Facet) {
        self.facets.insert(name.into(), facet);
    }

    /// Builder-style variant of [`set_facet`](Self::set_facet).
    pub fn with_facet(mut self, name: impl Into<String>, facet: Facet) -> Self {
        self.set_facet(name, facet);
        self
    }

    /// The current text query.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// True when the text query is active but below the minimum length,
    /// in which case the whole query matches nothing.
    fn below_min_len(&self) -> bool {
        self.min_len > 0 && self.text.chars().count() < self.min_len
    }

    /// Whether a single record satisfies this query.
    pub fn matches<R: Queryable>(&self, record: &R) -> bool {
        if self.below_min_len() {
            return false;
        }

        if !self.text.is_empty() {
            let needle = self.text.to_lowercase();
            let hit = record
                .search_text()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }

        self.facets.iter().all(|(name, facet)| match facet {
            Facet::All => true,
            Facet::Is(value) => record.facet(name) == Some(value.as_str()),
        })
    }
}

/// Derive the filtered view of a collection. Order-preserving and pure.
pub fn filter<'a, R: Queryable>(collection: &'a [R], query: &Query) -> Vec<&'a R> {
    if query.below_min_len() {
        return Vec::new();
    }
    collection.iter().filter(|r| query.matches(*r)).collect()
}

/// [`filter`] capped at `limit` results, for the global search modal.
pub fn filter_limited<'a, R: Queryable>(
    collection: &'a [R],
    query: &Query,
    limit: usize,
) -> Vec<&'a R> {
    if query.below_min_len() {
        return Vec::new();
    }
    collection
        .iter()
        .filter(|r| query.matches(*r))
        .take(limit)
        .collect()
}
