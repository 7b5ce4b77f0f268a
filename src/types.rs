//! Common types used throughout pageslice
//!
//! Shared type aliases for the transforms a pagination context applies,
//! plus small enums used by the command-line driver.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ============================================================================
// Transform Aliases
// ============================================================================

/// Predicate deciding whether an item is kept (`true`) before paging
pub type FilterFn<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Reordering applied to the filtered items before paging.
///
/// Must return a permutation of its input; the element count is not checked.
pub type OrderFn<T> = Arc<dyn Fn(Vec<T>) -> Vec<T> + Send + Sync>;

// ============================================================================
// Log Level
// ============================================================================

/// Log level for the command-line driver
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_to_tracing() {
        assert_eq!(tracing::Level::from(LogLevel::Trace), tracing::Level::TRACE);
        assert_eq!(tracing::Level::from(LogLevel::Info), tracing::Level::INFO);
        assert_eq!(tracing::Level::from(LogLevel::Error), tracing::Level::ERROR);
    }

    #[test]
    fn test_log_level_serde() {
        let level: LogLevel = serde_json::from_str("\"DEBUG\"").unwrap();
        assert_eq!(level, LogLevel::Debug);
        assert_eq!(serde_json::to_string(&LogLevel::Warn).unwrap(), "\"WARN\"");
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }

    #[test]
    fn test_transform_aliases() {
        let even: FilterFn<i32> = Arc::new(|n: &i32| n % 2 == 0);
        assert!(even(&4));
        assert!(!even(&3));

        let reverse: OrderFn<i32> = Arc::new(|mut items: Vec<i32>| {
            items.reverse();
            items
        });
        assert_eq!(reverse(vec![1, 2, 3]), vec![3, 2, 1]);
    }
}
