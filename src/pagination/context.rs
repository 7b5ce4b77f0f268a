//! Stateful pagination context
//!
//! A `PaginationContext` owns a shared, read-only collection together with
//! the active paging state. Mutators take the write side of the lock for a
//! single field update; `paginate` holds the read side for the whole
//! computation, so every computation sees one consistent state.

use super::types::{Meta, Paginated};
use crate::config::{clamp_positive, PaginationConfig, ResolvedConfig};
use crate::types::{FilterFn, OrderFn};
use parking_lot::RwLock;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Object-safe view of the fluent pagination contract
///
/// Every setter mutates the shared state and hands back the same context so
/// calls can be chained through `&dyn Paginate<T>`.
pub trait Paginate<T>: Send + Sync {
    /// Set the current page (floored to 1)
    fn set_page(&self, page: i64) -> &dyn Paginate<T>;

    /// Set the page size (floored to 1, capped at the ceiling)
    fn set_per_page(&self, per_page: i64) -> &dyn Paginate<T>;

    /// Replace the active filter; `None` disables filtering
    fn set_filter(&self, filter: Option<FilterFn<T>>) -> &dyn Paginate<T>;

    /// Replace the active order transform; `None` keeps source order
    fn set_order(&self, order: Option<OrderFn<T>>) -> &dyn Paginate<T>;

    /// Compute the current page
    fn paginate(&self) -> Paginated<T>;
}

/// Mutable part of a context
struct ContextState<T> {
    page: usize,
    per_page: usize,
    filter: Option<FilterFn<T>>,
    order: Option<OrderFn<T>>,
}

impl<T> ContextState<T> {
    fn initial(
        config: &ResolvedConfig,
        filter: Option<FilterFn<T>>,
        order: Option<OrderFn<T>>,
    ) -> Self {
        Self {
            page: config.default_page,
            per_page: config.default_per_page,
            filter,
            order,
        }
    }
}

/// In-memory pagination over a shared collection
pub struct PaginationContext<T> {
    items: Arc<[T]>,
    config: ResolvedConfig,
    default_filter: Option<FilterFn<T>>,
    default_order: Option<OrderFn<T>>,
    state: RwLock<ContextState<T>>,
}

impl<T> PaginationContext<T> {
    /// Create a context over `items`, seeded from `config`
    ///
    /// Nothing is filtered, ordered or validated here; that happens on every
    /// call to [`paginate`](Self::paginate).
    pub fn new(items: impl Into<Arc<[T]>>, config: PaginationConfig<T>) -> Self {
        let resolved = config.resolve();
        let state = ContextState::initial(
            &resolved,
            config.default_filter.clone(),
            config.default_order.clone(),
        );

        Self {
            items: items.into(),
            config: resolved,
            default_filter: config.default_filter,
            default_order: config.default_order,
            state: RwLock::new(state),
        }
    }

    /// Create a context with built-in defaults (25 per page, page 1)
    pub fn with_defaults(items: impl Into<Arc<[T]>>) -> Self {
        Self::new(items, PaginationConfig::default())
    }

    /// Set the current page
    ///
    /// Values below 1 become 1. Pages past the end are allowed and produce
    /// an empty page.
    pub fn page(&self, page: i64) -> &Self {
        let page = clamp_positive(page);
        self.state.write().page = page;
        trace!("Page set to {}", page);
        self
    }

    /// Set the page size
    ///
    /// Values below 1 become 1; values above the configured ceiling become
    /// the ceiling.
    pub fn per_page(&self, per_page: i64) -> &Self {
        let capped = self.config.cap_per_page(per_page);
        if i64::try_from(capped).is_ok_and(|c| c < per_page) {
            debug!("Requested page size {} capped to {}", per_page, capped);
        }
        self.state.write().per_page = capped;
        trace!("Page size set to {}", capped);
        self
    }

    /// Keep only the items for which `filter` returns true
    ///
    /// The filter runs inside [`paginate`](Self::paginate) and must not call
    /// back into this context.
    pub fn filter_by<F>(&self, filter: F) -> &Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.replace_filter(Some(Arc::new(filter)))
    }

    /// Remove the active filter
    pub fn clear_filter(&self) -> &Self {
        self.replace_filter(None)
    }

    /// Reorder the filtered items with `order` before slicing
    ///
    /// The transform receives every filtered item and must return a
    /// permutation of them. Like a filter, it must not call back into this
    /// context.
    pub fn order_by<F>(&self, order: F) -> &Self
    where
        F: Fn(Vec<T>) -> Vec<T> + Send + Sync + 'static,
    {
        self.replace_order(Some(Arc::new(order)))
    }

    /// Remove the active order transform
    pub fn clear_order(&self) -> &Self {
        self.replace_order(None)
    }

    /// Restore page, page size, filter and order to the configured defaults
    pub fn reset(&self) -> &Self {
        let initial = ContextState::initial(
            &self.config,
            self.default_filter.clone(),
            self.default_order.clone(),
        );
        *self.state.write() = initial;
        trace!("Pagination state reset to defaults");
        self
    }

    fn replace_filter(&self, filter: Option<FilterFn<T>>) -> &Self {
        self.state.write().filter = filter;
        self
    }

    fn replace_order(&self, order: Option<OrderFn<T>>) -> &Self {
        self.state.write().order = order;
        self
    }

    /// Active page number
    pub fn current_page(&self) -> usize {
        self.state.read().page
    }

    /// Active page size
    pub fn current_per_page(&self) -> usize {
        self.state.read().per_page
    }

    /// Configuration resolved at construction
    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    /// Number of items in the source collection (before filtering)
    pub fn items_len(&self) -> usize {
        self.items.len()
    }
}

impl<T: Clone> PaginationContext<T> {
    /// Compute the current page
    ///
    /// Filters, orders, counts and slices in that order. Never fails: a page
    /// past the end yields no items with metadata that still describes the
    /// collection. Transforms run while the state is read-locked and must not
    /// call back into this context at all (setters, getters, `paginate` or
    /// `Debug`); a nested read can deadlock once a writer is waiting.
    pub fn paginate(&self) -> Paginated<T> {
        let state = self.state.read();

        let filtered: Cow<'_, [T]> = match &state.filter {
            Some(filter) => Cow::Owned(
                self.items
                    .iter()
                    .filter(|&item| filter(item))
                    .cloned()
                    .collect(),
            ),
            None => Cow::Borrowed(&self.items[..]),
        };

        let ordered = match &state.order {
            Some(order) => Cow::Owned(order(filtered.into_owned())),
            None => filtered,
        };

        let meta = Meta::compute(state.page, state.per_page, ordered.len());
        let items = match ordered {
            Cow::Owned(mut owned) => {
                let range = meta.slice_range();
                owned.truncate(range.end);
                owned.drain(..range.start);
                owned
            }
            Cow::Borrowed(slice) => slice[meta.slice_range()].to_vec(),
        };

        debug!(
            "Computed page {} of {} ({} of {} items, {} per page)",
            meta.current_page,
            meta.total_pages_count,
            items.len(),
            meta.total_items_count,
            meta.per_page
        );

        Paginated::new(items, meta)
    }
}

impl<T: Clone + Send + Sync> Paginate<T> for PaginationContext<T> {
    fn set_page(&self, page: i64) -> &dyn Paginate<T> {
        self.page(page)
    }

    fn set_per_page(&self, per_page: i64) -> &dyn Paginate<T> {
        self.per_page(per_page)
    }

    fn set_filter(&self, filter: Option<FilterFn<T>>) -> &dyn Paginate<T> {
        self.replace_filter(filter)
    }

    fn set_order(&self, order: Option<OrderFn<T>>) -> &dyn Paginate<T> {
        self.replace_order(order)
    }

    fn paginate(&self) -> Paginated<T> {
        PaginationContext::paginate(self)
    }
}

impl<T> fmt::Debug for PaginationContext<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("PaginationContext")
            .field("items", &self.items.len())
            .field("config", &self.config)
            .field("page", &state.page)
            .field("per_page", &state.per_page)
            .field("filter", &state.filter.is_some())
            .field("order", &state.order.is_some())
            .finish()
    }
}
