// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::needless_pass_by_value)]

//! # pageslice
//!
//! A small, thread-safe, in-memory pagination engine.
//!
//! ## Features
//!
//! - **Fluent, shared context**: `page`, `per_page`, `filter_by` and `order_by`
//!   take `&self`, so one context can be shared across threads behind an `Arc`
//! - **Never fails**: sub-1 pages and sizes are floored, sizes are capped at a
//!   configured ceiling, and pages past the end come back empty
//! - **Rich metadata**: totals, neighbor pages and first/last flags
//! - **Settings files**: defaults and ceilings can be loaded from YAML or JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use pageslice::{PaginationConfig, PaginationContext};
//!
//! let config = PaginationConfig::new().with_default_per_page(3).with_max_per_page(5);
//! let ctx = PaginationContext::new((1..=10).collect::<Vec<i32>>(), config);
//!
//! let result = ctx.page(2).filter_by(|n| n % 2 == 0).paginate();
//! assert_eq!(result.items, vec![8, 10]);
//! assert_eq!(result.meta.total_items_count, 5);
//! assert_eq!(result.meta.prev_page, Some(1));
//! assert!(result.meta.is_last_page);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     PaginationContext<T>                     │
//! │   page() · per_page() · filter_by() · order_by() (write lock)│
//! │   paginate() → Paginated { items, meta }         (read lock) │
//! └──────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────┬──────────┬────────┴───┬──────────┬────────────────┐
//! │  Filter  │  Order   │   Count    │  Slice   │    Describe    │
//! ├──────────┼──────────┼────────────┼──────────┼────────────────┤
//! │ stable   │ caller   │ ≥ 1 page   │ clamped  │ prev/next,     │
//! │ predicate│ permutes │ always     │ to range │ first/last     │
//! └──────────┴──────────┴────────────┴──────────┴────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for pageslice
pub mod error;

/// Common types and type aliases
pub mod types;

/// Pagination settings and their resolution
pub mod config;

/// Pagination context and results
pub mod pagination;

/// YAML/JSON loader for pagination settings
pub mod loader;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use config::{PageSettings, PaginationConfig, ResolvedConfig, DEFAULT_PAGE, DEFAULT_PER_PAGE};
pub use loader::{load_settings, load_settings_from_str};
pub use pagination::{Meta, Paginate, Paginated, PaginationContext};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
