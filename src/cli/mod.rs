//! CLI module
//!
//! Command-line driver that walks through the pagination context on a
//! generated list of numbers.
//!
//! # Commands
//!
//! - `demo` - Run the walkthrough scenarios on one shared context
//! - `page` - Compute a single page with the given options
//! - `settings` - Show the resolved pagination settings

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
