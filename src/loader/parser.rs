//! Parser for pagination settings files
//!
//! Values are not range-checked here. Zero or negative numbers are accepted
//! and normalized when the settings are resolved, the same way the context
//! setters treat them.

use crate::config::PageSettings;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Serialization format of a settings file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsFormat {
    Yaml,
    Json,
}

impl SettingsFormat {
    /// Pick a format from the file extension
    ///
    /// `.json` selects JSON; any other extension, or none, selects YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Load pagination settings from a file
///
/// Files ending in `.json` are parsed as JSON, everything else as YAML.
///
/// # Examples
///
/// ```ignore
/// let settings = load_settings("./pages.yaml")?;
/// let ctx = PaginationContext::new(items, settings.into());
/// ```
pub fn load_settings(path: impl AsRef<Path>) -> Result<PageSettings> {
    let path = path.as_ref();
    let format = SettingsFormat::from_path(path);

    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::file_not_found(path.display().to_string())
        } else {
            Error::Io(e)
        }
    })?;

    let settings = match format {
        SettingsFormat::Yaml => load_settings_from_str(&content)?,
        SettingsFormat::Json => load_settings_from_json(&content)?,
    };
    tracing::debug!("Loaded pagination settings from {}", path.display());
    Ok(settings)
}

/// Load pagination settings from a YAML string
///
/// Empty input yields default settings.
pub fn load_settings_from_str(yaml: &str) -> Result<PageSettings> {
    if yaml.trim().is_empty() {
        return Ok(PageSettings::default());
    }
    Ok(serde_yaml::from_str(yaml)?)
}

/// Load pagination settings from a JSON string
pub fn load_settings_from_json(json: &str) -> Result<PageSettings> {
    Ok(serde_json::from_str(json)?)
}
