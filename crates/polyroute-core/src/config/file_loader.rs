//! File-based configuration loading

use std::fs;
use std::path::Path;

use super::model::DetectorConfig;
use crate::error::{PolyrouteError, PolyrouteResult};

/// Load configuration from a file
///
/// Supports JSON, TOML, and YAML formats based on file extension.
/// Returns default config if file doesn't exist.
pub fn load_from_file(path: &Path) -> PolyrouteResult<DetectorConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "config file not found, using defaults");
        return Ok(DetectorConfig::default());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        PolyrouteError::config_with_context(
            format!("Failed to read config file: {}", e),
            format!("Reading configuration from '{}'", path.display()),
        )
    })?;

    parse_config(&content, path)
}

fn parse_config(content: &str, path: &Path) -> PolyrouteResult<DetectorConfig> {
    let config = match path.extension().and_then(|s| s.to_str()) {
        Some("toml") => toml::from_str(content).map_err(|e| {
            PolyrouteError::config_with_context(
                format!("Failed to parse TOML config: {}", e),
                format!("Deserializing TOML configuration from '{}'", path.display()),
            )
        })?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(content).map_err(|e| {
            PolyrouteError::config_with_context(
                format!("Failed to parse YAML config: {}", e),
                format!("Deserializing YAML configuration from '{}'", path.display()),
            )
        })?,
        _ => serde_json::from_str(content).map_err(|e| {
            PolyrouteError::config_with_context(
                format!("Failed to parse JSON config: {}", e),
                format!("Deserializing JSON configuration from '{}'", path.display()),
            )
        })?,
    };

    Ok(config)
}

/// Serialize a config in the format implied by the path's extension
pub fn render_config(config: &DetectorConfig, path: &Path) -> PolyrouteResult<String> {
    let rendered = match path.extension().and_then(|s| s.to_str()) {
        Some("toml") => toml::to_string_pretty(config)
            .map_err(|e| PolyrouteError::config(format!("Failed to render TOML: {}", e)))?,
        Some("yaml") | Some("yml") => serde_yaml::to_string(config)?,
        _ => serde_json::to_string_pretty(config)?,
    };
    Ok(rendered)
}
