//! Pagination module
//!
//! Filter → order → count → clamp → slice → describe.
//!
//! # Overview
//!
//! A [`PaginationContext`] holds a collection and the active paging state.
//! Setters (`page`, `per_page`, `filter_by`, `order_by`) normalize their
//! input instead of rejecting it, and [`PaginationContext::paginate`] always
//! produces a well-formed [`Paginated`] result, possibly with no items.
//!
//! ```rust
//! use pageslice::pagination::PaginationContext;
//!
//! let ctx = PaginationContext::with_defaults((1..=10).collect::<Vec<i32>>());
//! let result = ctx.per_page(4).page(2).paginate();
//!
//! assert_eq!(result.items, vec![5, 6, 7, 8]);
//! assert_eq!(result.meta.total_pages_count, 3);
//! assert_eq!(result.meta.next_page, Some(3));
//! ```

mod context;
mod types;

pub use context::{Paginate, PaginationContext};
pub use types::{Meta, Paginated};
