//! Configuration types for pagination contexts
//!
//! `PageSettings` is the plain, serializable part of a configuration (what a
//! YAML or JSON file can express). `PaginationConfig` adds the default filter
//! and order transforms on top of it. Both are resolved once, when a context
//! is constructed, into a `ResolvedConfig`.

use crate::types::{FilterFn, OrderFn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Page size used when no default is configured
pub const DEFAULT_PER_PAGE: usize = 25;

/// Page number used when no default is configured
pub const DEFAULT_PAGE: usize = 1;

// ============================================================================
// Page Settings
// ============================================================================

/// Numeric pagination settings, all optional
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageSettings {
    /// Initial page size when the caller never sets one
    #[serde(default)]
    pub default_per_page: Option<i64>,

    /// Initial page number when the caller never sets one
    #[serde(default)]
    pub default_page: Option<i64>,

    /// Hard ceiling on the page size (absent = unbounded)
    #[serde(default)]
    pub max_per_page: Option<i64>,
}

impl PageSettings {
    /// Create empty settings (built-in defaults everywhere)
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve into concrete values
    ///
    /// Sub-1 values are floored to 1 and the default page size is capped at
    /// the ceiling, so a freshly built context already satisfies the same
    /// invariants `per_page` enforces.
    pub fn resolve(&self) -> ResolvedConfig {
        let max_per_page = self.max_per_page.map(clamp_positive);
        let mut default_per_page = self
            .default_per_page
            .map_or(DEFAULT_PER_PAGE, clamp_positive);
        if let Some(max) = max_per_page {
            default_per_page = default_per_page.min(max);
        }

        ResolvedConfig {
            default_per_page,
            default_page: self.default_page.map_or(DEFAULT_PAGE, clamp_positive),
            max_per_page,
        }
    }
}

/// Floor a signed request to 1 and convert it to `usize`
pub(crate) fn clamp_positive(value: i64) -> usize {
    usize::try_from(value.max(1)).unwrap_or(usize::MAX)
}

// ============================================================================
// Resolved Config
// ============================================================================

/// Configuration after defaults have been applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedConfig {
    /// Page size a context starts with (and returns to on reset)
    pub default_per_page: usize,
    /// Page number a context starts with (and returns to on reset)
    pub default_page: usize,
    /// Ceiling applied to every page size request
    pub max_per_page: Option<usize>,
}

impl ResolvedConfig {
    /// Apply the floor and the ceiling to a requested page size
    pub fn cap_per_page(&self, requested: i64) -> usize {
        let per_page = clamp_positive(requested);
        match self.max_per_page {
            Some(max) if per_page > max => max,
            _ => per_page,
        }
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        PageSettings::default().resolve()
    }
}

// ============================================================================
// Pagination Config
// ============================================================================

/// Full configuration for a `PaginationContext`
pub struct PaginationConfig<T> {
    /// Numeric settings
    pub settings: PageSettings,
    /// Filter active until the caller sets another one
    pub default_filter: Option<FilterFn<T>>,
    /// Order transform active until the caller sets another one
    pub default_order: Option<OrderFn<T>>,
}

impl<T> PaginationConfig<T> {
    /// Create a config with built-in defaults
    pub fn new() -> Self {
        Self {
            settings: PageSettings::default(),
            default_filter: None,
            default_order: None,
        }
    }

    /// Set the default page size
    #[must_use]
    pub fn with_default_per_page(mut self, per_page: i64) -> Self {
        self.settings.default_per_page = Some(per_page);
        self
    }

    /// Set the default page number
    #[must_use]
    pub fn with_default_page(mut self, page: i64) -> Self {
        self.settings.default_page = Some(page);
        self
    }

    /// Set the page size ceiling
    #[must_use]
    pub fn with_max_per_page(mut self, max_per_page: i64) -> Self {
        self.settings.max_per_page = Some(max_per_page);
        self
    }

    /// Set the default filter
    #[must_use]
    pub fn with_default_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.default_filter = Some(Arc::new(filter));
        self
    }

    /// Set the default order transform
    #[must_use]
    pub fn with_default_order<F>(mut self, order: F) -> Self
    where
        F: Fn(Vec<T>) -> Vec<T> + Send + Sync + 'static,
    {
        self.default_order = Some(Arc::new(order));
        self
    }

    /// Resolve the numeric settings
    pub fn resolve(&self) -> ResolvedConfig {
        self.settings.resolve()
    }
}

impl<T> Default for PaginationConfig<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for PaginationConfig<T> {
    fn clone(&self) -> Self {
        Self {
            settings: self.settings,
            default_filter: self.default_filter.clone(),
            default_order: self.default_order.clone(),
        }
    }
}

impl<T> fmt::Debug for PaginationConfig<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaginationConfig")
            .field("settings", &self.settings)
            .field("default_filter", &self.default_filter.is_some())
            .field("default_order", &self.default_order.is_some())
            .finish()
    }
}

impl<T> From<PageSettings> for PaginationConfig<T> {
    fn from(settings: PageSettings) -> Self {
        Self {
            settings,
            ..Self::new()
        }
    }
}
