//! Theme settings document loading.
//!
//! Reads JSON, TOML, or YAML documents into [`ThemeSettings`]. Loading only
//! deserializes; callers run [`crate::validation::validate`] afterwards.

use crate::schema::ThemeSettings;
use std::path::Path;
use themeguard_common::ConfigError;
use tracing::info;

/// Supported settings document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsFormat {
    Json,
    Toml,
    Yaml,
}

impl SettingsFormat {
    /// Pick a format from a file extension (`json`, `toml`, `yaml`, `yml`).
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(ConfigError::UnsupportedFormat(format!(
                "{} (expected .json, .toml, .yaml or .yml)",
                path.display()
            ))),
        }
    }
}

/// Parse settings from in-memory text.
///
/// Blank input and a null document (`null`, `~`) yield settings with every
/// section absent.
pub fn parse_settings(text: &str, format: SettingsFormat) -> Result<ThemeSettings, ConfigError> {
    if text.trim().is_empty() {
        return Ok(ThemeSettings::default());
    }

    let settings: Option<ThemeSettings> = match format {
        SettingsFormat::Json => serde_json::from_str(text)
            .map_err(|e| ConfigError::ParseError(format!("failed to parse JSON: {e}")))?,
        SettingsFormat::Toml => toml::from_str::<ThemeSettings>(text)
            .map(Some)
            .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?,
        SettingsFormat::Yaml => serde_yaml::from_str(text)
            .map_err(|e| ConfigError::ParseError(format!("failed to parse YAML: {e}")))?,
    };

    Ok(settings.unwrap_or_default())
}

/// Load settings from a file, choosing the format by extension.
pub fn load_from_path(path: &Path) -> Result<ThemeSettings, ConfigError> {
    let format = SettingsFormat::from_path(path)?;

    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let settings = parse_settings(&content, format)?;
    info!("loaded theme settings from {}", path.display());
    Ok(settings)
}
