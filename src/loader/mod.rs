//! Settings loader module
//!
//! Load pagination settings from YAML or JSON.
//!
//! # Overview
//!
//! The loader module provides:
//! - `load_settings` - Read `PageSettings` from a file (format chosen by extension)
//! - `load_settings_from_str` - Parse `PageSettings` from YAML text (JSON is accepted too)
//! - `load_settings_from_json` - Parse `PageSettings` from JSON text

mod parser;

pub use parser::{load_settings, load_settings_from_json, load_settings_from_str, SettingsFormat};

#[cfg(test)]
mod tests;
