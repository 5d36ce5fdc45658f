//! Pagination window - a bounded slice of a filtered sequence.

use crate::query::{filter, Facet, Query, Queryable};

/// One page of a filtered sequence, with the recomputed page count and
/// the clamped 1-based page index that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow<'a, T> {
    /// The records on this page, in source order.
    pub items: &'a [T],
    /// The clamped 1-based page index, always in `[1, page_count]`.
    pub page: usize,
    /// `max(1, ceil(len / page_size))` - at least 1 even when empty.
    pub page_count: usize,
    /// Length of the whole filtered sequence.
    pub total: usize,
}

/// Compute the page window for `items` at `page` (1-based).
///
/// Pure function of its three inputs. The index is clamped into
/// `[1, page_count]`; the reset-to-page-1-on-filter-change policy is the
/// caller's job (see [`ListView`]). A zero `page_size` is treated as 1.
pub fn paginate<T>(items: &[T], page_size: usize, page: usize) -> PageWindow<'_, T> {
    let size = page_size.max(1);
    let total = items.len();
    let page_count = (total.div_ceil(size)).max(1);
    let page = page.clamp(1, page_count);

    let start = (page - 1) * size;
    let end = (start + size).min(total);
    let items = if start < total { &items[start..end] } else { &[] };

    PageWindow {
        items,
        page,
        page_count,
        total,
    }
}

/// One rendered page of a [`ListView`].
#[derive(Debug)]
pub struct ListPage<'a, R> {
    /// The records visible on the current page.
    pub items: Vec<&'a R>,
    /// Clamped 1-based page index.
    pub page: usize,
    /// Total pages for the current filtered view, at least 1.
    pub page_count: usize,
    /// Size of the filtered view ("Showing N of M").
    pub filtered: usize,
    /// Size of the whole collection.
    pub total: usize,
}

/// The list-page state machine shared by the customers, sales, and
/// notifications views: a collection, a query, and a 1-based page index.
///
/// Any change to the query state - text, facet, or the collection itself -
/// resets the page index to 1 before the next window is computed, which
/// is the policy `paginate` deliberately does not enforce.
#[derive(Debug, Clone)]
pub struct ListView<R: Queryable> {
    records: Vec<R>,
    query: Query,
    page: usize,
    page_size: usize,
}

impl<R: Queryable> ListView<R> {
    /// Create a view over `records` with a fixed page size.
    pub fn new(records: Vec<R>, page_size: usize) -> Self {
        Self {
            records,
            query: Query::list(),
            page: 1,
            page_size,
        }
    }

    /// Replace the underlying collection (after a mutation was persisted).
    /// Resets to page 1.
    pub fn set_records(&mut self, records: Vec<R>) {
        self.records = records;
        self.page = 1;
    }

    /// The underlying collection.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Set the text query. Resets to page 1.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.query.set_text(text);
        self.page = 1;
    }

    /// Set a facet filter. Resets to page 1.
    pub fn set_facet(&mut self, name: impl Into<String>, facet: Facet) {
        self.query.set_facet(name, facet);
        self.page = 1;
    }

    /// Jump to a page; the index is clamped into `[1, page_count]`.
    pub fn set_page(&mut self, page: usize) {
        let count = self.page_count();
        self.page = page.clamp(1, count);
    }

    /// Advance one page, saturating at the last page.
    pub fn next_page(&mut self) {
        self.set_page(self.page + 1);
    }

    /// Go back one page, saturating at page 1.
    pub fn prev_page(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    /// Total pages for the current filtered view.
    pub fn page_count(&self) -> usize {
        let filtered = filter(&self.records, &self.query).len();
        (filtered.div_ceil(self.page_size.max(1))).max(1)
    }

    /// Compute the current page.
    pub fn page(&self) -> ListPage<'_, R> {
        let filtered = filter(&self.records, &self.query);
        let window = paginate(&filtered, self.page_size, self.page);

        ListPage {
            items: window.items.to_vec(),
            page: window.page,
            page_count: window.page_count,
            filtered: window.total,
            total: self.records.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;
    use serde::{Deserialize, Serialize};

    #[test]
    fn twelve_records_page_size_ten() {
        let items: Vec<u32> = (0..12).collect();

        let first = paginate(&items, 10, 1);
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.page_count, 2);

        let second = paginate(&items, 10, 2);
        assert_eq!(second.items.len(), 2);
        assert_eq!(second.page, 2);
    }

    #[test]
    fn pages_reconstruct_the_sequence_exactly_once() {
        let items: Vec<u32> = (0..37).collect();
        let page_count = paginate(&items, 10, 1).page_count;

        let mut rebuilt = Vec::new();
        for page in 1..=page_count {
            rebuilt.extend_from_slice(paginate(&items, 10, page).items);
        }
        assert_eq!(rebuilt, items);
    }

    #[test]
    fn empty_sequence_still_has_one_page() {
        let items: Vec<u32> = Vec::new();
        let window = paginate(&items, 10, 1);

        assert_eq!(window.page_count, 1);
        assert_eq!(window.page, 1);
        assert!(window.items.is_empty());
    }

    #[test]
    fn page_index_is_clamped_both_ways() {
        let items: Vec<u32> = (0..25).collect();

        assert_eq!(paginate(&items, 10, 0).page, 1);
        assert_eq!(paginate(&items, 10, 99).page, 3);
        assert_eq!(paginate(&items, 10, 99).items.len(), 5);
    }

    #[test]
    fn exact_multiple_has_no_ragged_page() {
        let items: Vec<u32> = (0..30).collect();
        let window = paginate(&items, 10, 3);

        assert_eq!(window.page_count, 3);
        assert_eq!(window.items.len(), 10);
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Row {
        id: u64,
        tag: String,
    }

    impl Record for Row {
        type Id = u64;
        const SLOT: &'static str = "rows";

        fn id(&self) -> u64 {
            self.id
        }

        fn set_id(&mut self, id: u64) {
            self.id = id;
        }

        fn first_id() -> u64 {
            1
        }

        fn next_id(max: &u64) -> u64 {
            max + 1
        }
    }

    impl Queryable for Row {
        fn search_text(&self) -> Vec<&str> {
            vec![&self.tag]
        }

        fn facet(&self, name: &str) -> Option<&str> {
            (name == "tag").then_some(self.tag.as_str())
        }
    }

    fn rows(n: u64) -> Vec<Row> {
        (1..=n)
            .map(|id| Row {
                id,
                tag: if id % 2 == 0 { "even".into() } else { "odd".into() },
            })
            .collect()
    }

    #[test]
    fn query_change_resets_view_to_page_one() {
        let mut view = ListView::new(rows(40), 10);
        view.set_page(4);
        assert_eq!(view.page().page, 4);

        view.set_facet("tag", Facet::Is("even".into()));
        let page = view.page();
        assert_eq!(page.page, 1);
        assert_eq!(page.filtered, 20);
        assert_eq!(page.page_count, 2);
    }

    #[test]
    fn search_change_resets_view_to_page_one() {
        let mut view = ListView::new(rows(40), 10);
        view.next_page();
        assert_eq!(view.page().page, 2);

        view.set_search("odd");
        assert_eq!(view.page().page, 1);
    }

    #[test]
    fn next_and_prev_saturate() {
        let mut view = ListView::new(rows(15), 10);
        view.prev_page();
        assert_eq!(view.page().page, 1);

        view.next_page();
        view.next_page();
        view.next_page();
        assert_eq!(view.page().page, 2);
    }
}
