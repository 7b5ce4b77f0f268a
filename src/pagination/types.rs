//! Pagination result types
//!
//! `Meta` describes where a computed page sits in the filtered and ordered
//! collection; `Paginated` pairs it with the page's items.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Metadata for one computed page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// Page that was requested (may lie beyond `total_pages_count`)
    pub current_page: usize,
    /// Page immediately before the current one, if it exists
    pub prev_page: Option<usize>,
    /// Page immediately after the current one, if it exists
    pub next_page: Option<usize>,
    /// Page size used for slicing
    pub per_page: usize,
    /// Number of pages; never below 1, even for an empty collection
    pub total_pages_count: usize,
    /// Number of items after filtering
    pub total_items_count: usize,
    /// Whether the current page is page 1
    pub is_first_page: bool,
    /// Whether the current page is the last page (always true when empty)
    pub is_last_page: bool,
}

impl Meta {
    /// Describe `current_page` of a collection holding `total_items_count` items.
    ///
    /// Both `current_page` and `per_page` are expected to be at least 1.
    pub fn compute(current_page: usize, per_page: usize, total_items_count: usize) -> Self {
        let per_page = per_page.max(1);
        let total_pages_count = if total_items_count == 0 {
            1
        } else {
            total_items_count.div_ceil(per_page)
        };

        let prev_page = current_page
            .checked_sub(1)
            .filter(|&prev| prev >= 1 && prev <= total_pages_count);
        // `next > 1` is always true for a valid page; kept so the bounds
        // mirror the previous-page check.
        let next_page = current_page
            .checked_add(1)
            .filter(|&next| next > 1 && next <= total_pages_count);

        Self {
            current_page,
            prev_page,
            next_page,
            per_page,
            total_pages_count,
            total_items_count,
            is_first_page: current_page == 1,
            is_last_page: current_page == total_pages_count || total_items_count == 0,
        }
    }

    /// Index range of the current page, clamped to the collection
    pub fn slice_range(&self) -> Range<usize> {
        let start = self
            .current_page
            .saturating_sub(1)
            .saturating_mul(self.per_page)
            .min(self.total_items_count);
        let end = start
            .saturating_add(self.per_page)
            .min(self.total_items_count);
        start..end
    }

    /// Check if a previous page exists
    pub fn has_prev(&self) -> bool {
        self.prev_page.is_some()
    }

    /// Check if a next page exists
    pub fn has_next(&self) -> bool {
        self.next_page.is_some()
    }

    /// Check if the requested page lies past the last page
    pub fn is_out_of_range(&self) -> bool {
        self.current_page > self.total_pages_count
    }
}

/// A computed page: its items and metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// Items on the current page, in filtered and ordered sequence
    pub items: Vec<T>,
    /// Page metadata
    pub meta: Meta,
}

impl<T> Paginated<T> {
    /// Create a page result
    pub fn new(items: Vec<T>, meta: Meta) -> Self {
        Self { items, meta }
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if this page holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Transform every item, keeping the metadata
    pub fn map<U, F>(self, f: F) -> Paginated<U>
    where
        F: FnMut(T) -> U,
    {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }

    /// Split into `(items, meta)`
    pub fn into_parts(self) -> (Vec<T>, Meta) {
        (self.items, self.meta)
    }
}
