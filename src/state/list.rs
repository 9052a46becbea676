//! List-screen state: one query object per screen, race-safe fetches.
//!
//! DESIGN
//! ======
//! Search text, page, page size, ordering and the filter map collapse into a
//! single outbound query. Any mutation other than plain page navigation
//! resets the page to 1. Every mutation advances a sequence number and every
//! fetch is tagged with it, so a slow response for a superseded query can
//! never overwrite newer rows; it is simply discarded on arrival.
//!
//! Rows are deduplicated by id when a page is applied; backends paginating
//! over a moving dataset occasionally serve the same row twice.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

use std::collections::{BTreeMap, BTreeSet};

use crate::net::types::Page;

/// Default rows per page, matching the backend default.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Rows that can be deduplicated carry a numeric identifier.
pub trait HasId {
    fn id(&self) -> i64;
}

/// A single filter constraint. Absence from the map means "unconstrained",
/// never an excluded state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterValue {
    Text(String),
    Number(i64),
    Flag(bool),
}

impl FilterValue {
    /// Wire form of the value for a query string.
    #[must_use]
    pub fn as_param(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Number(number) => number.to_string(),
            Self::Flag(flag) => flag.to_string(),
        }
    }
}

/// Filter key → value map with stable iteration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterMap(BTreeMap<String, FilterValue>);

impl FilterMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: FilterValue) {
        self.0.insert(key.into(), value);
    }

    /// Remove a constraint; returns true when one was present.
    pub fn remove(&mut self, key: &str) -> bool {
        self.0.remove(key).is_some()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.0.get(key)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FilterValue)> {
        self.0.iter()
    }
}

/// Everything one list screen sends to its endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    pub search: String,
    /// 1-based.
    pub page: u32,
    pub page_size: u32,
    pub ordering: Option<String>,
    pub filters: FilterMap,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            ordering: None,
            filters: FilterMap::new(),
        }
    }
}

impl ListQuery {
    /// Flatten into query-string pairs. Empty search is omitted; page and
    /// page size always go out.
    #[must_use]
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if !self.search.is_empty() {
            params.push(("search".to_owned(), self.search.clone()));
        }
        params.push(("page".to_owned(), self.page.to_string()));
        params.push(("page_size".to_owned(), self.page_size.to_string()));
        if let Some(ordering) = &self.ordering {
            params.push(("ordering".to_owned(), ordering.clone()));
        }
        for (key, value) in self.filters.iter() {
            params.push((key.clone(), value.as_param()));
        }
        params
    }
}

/// State manager for one paginated, filterable list screen.
#[derive(Clone, Debug)]
pub struct ListState<T> {
    query: ListQuery,
    seq: u64,
    items: Vec<T>,
    total: u64,
    loading: bool,
    error: Option<String>,
}

impl<T: HasId> Default for ListState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: HasId> ListState<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            query: ListQuery::default(),
            seq: 0,
            items: Vec::new(),
            total: 0,
            loading: false,
            error: None,
        }
    }

    #[must_use]
    pub fn with_page_size(page_size: u32) -> Self {
        let mut state = Self::new();
        state.query.page_size = page_size.max(1);
        state
    }

    #[must_use]
    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Replace the search text. Back to page 1; in-flight fetches are
    /// superseded.
    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        if self.query.search == search {
            return;
        }
        self.query.search = search;
        self.supersede_and_rewind();
    }

    /// Navigate to `page` (clamped to 1). Search and filters are untouched.
    pub fn set_page(&mut self, page: u32) {
        let page = page.max(1);
        if self.query.page == page {
            return;
        }
        self.query.page = page;
        self.seq += 1;
    }

    pub fn set_page_size(&mut self, page_size: u32) {
        let page_size = page_size.max(1);
        if self.query.page_size == page_size {
            return;
        }
        self.query.page_size = page_size;
        self.supersede_and_rewind();
    }

    pub fn set_ordering(&mut self, ordering: Option<String>) {
        if self.query.ordering == ordering {
            return;
        }
        self.query.ordering = ordering;
        self.supersede_and_rewind();
    }

    pub fn set_filter(&mut self, key: impl Into<String>, value: FilterValue) {
        let key = key.into();
        if self.query.filters.get(&key) == Some(&value) {
            return;
        }
        self.query.filters.set(key, value);
        self.supersede_and_rewind();
    }

    pub fn clear_filter(&mut self, key: &str) {
        if self.query.filters.remove(key) {
            self.supersede_and_rewind();
        }
    }

    fn supersede_and_rewind(&mut self) {
        self.query.page = 1;
        self.seq += 1;
    }

    /// Start a fetch: supersedes anything in flight and returns the tag plus
    /// a snapshot of the query to send.
    pub fn begin_fetch(&mut self) -> (u64, ListQuery) {
        self.seq += 1;
        self.loading = true;
        (self.seq, self.query.clone())
    }

    /// Apply a response for the fetch tagged `seq`. Stale responses are
    /// discarded and leave the state untouched; returns whether it applied.
    pub fn apply_page(&mut self, seq: u64, page: Page<T>) -> bool {
        if seq != self.seq {
            tracing::debug!(stale = seq, current = self.seq, "discarding superseded list response");
            return false;
        }
        self.items = dedup_by_id(page.items);
        self.total = page.total;
        self.loading = false;
        self.error = None;
        true
    }

    /// Apply a failure for the fetch tagged `seq`; same staleness rule.
    pub fn apply_error(&mut self, seq: u64, message: impl Into<String>) -> bool {
        if seq != self.seq {
            return false;
        }
        self.loading = false;
        self.error = Some(message.into());
        true
    }

    #[must_use]
    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(u64::from(self.query.page_size))
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        u64::from(self.query.page) < self.total_pages()
    }

    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.query.page > 1
    }
}

/// Keep the first occurrence of each id, preserving order.
fn dedup_by_id<T: HasId>(items: Vec<T>) -> Vec<T> {
    let mut seen = BTreeSet::new();
    items.into_iter().filter(|item| seen.insert(item.id())).collect()
}
