//! Default configuration loading functions

use std::path::{Path, PathBuf};

use super::env_loader::apply_env_overrides;
use super::file_loader::load_from_file;
use super::model::DetectorConfig;
use crate::error::PolyrouteResult;

/// Files probed in the working directory when no path is given
pub const DEFAULT_CONFIG_FILES: [&str; 3] = ["polyroute.toml", "polyroute.json", "polyroute.yaml"];

/// Load configuration with default sources
///
/// Loads configuration in this order:
/// 1. Default configuration
/// 2. The first of [`DEFAULT_CONFIG_FILES`] that exists
/// 3. Environment variables
pub fn load_config() -> PolyrouteResult<DetectorConfig> {
    load_config_with_file(None)
}

/// Load configuration from an explicit file, then apply environment overrides
pub fn load_config_from_file<P: AsRef<Path>>(path: P) -> PolyrouteResult<DetectorConfig> {
    load_config_with_file(Some(path.as_ref()))
}

/// Load configuration, falling back to the default file names when `config_file` is `None`
pub fn load_config_with_file(config_file: Option<&Path>) -> PolyrouteResult<DetectorConfig> {
    let path = match config_file {
        Some(path) => Some(path.to_path_buf()),
        None => find_default_file(),
    };

    let mut config = match &path {
        Some(path) => load_from_file(path)?,
        None => DetectorConfig::default(),
    };
    apply_env_overrides(&mut config)?;
    config.validate()?;

    tracing::debug!(
        file = ?path,
        threshold = config.specialist_threshold,
        strategies = config.enabled_strategies.len(),
        "configuration loaded"
    );
    Ok(config)
}

fn find_default_file() -> Option<PathBuf> {
    DEFAULT_CONFIG_FILES
        .into_iter()
        .map(PathBuf::from)
        .find(|candidate| candidate.exists())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_file_is_validated() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("polyroute.json");
        fs::write(&config_path, r#"{ "specialist_threshold": 3.0 }"#).unwrap();

        let err = load_config_from_file(&config_path).unwrap_err();
        assert_eq!(err.context(), Some("specialist_threshold"));
    }

    #[test]
    fn test_explicit_file_loaded() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("polyroute.yaml");
        fs::write(&config_path, "strategy_timeout_ms: 500\n").unwrap();

        let config = load_config_from_file(&config_path).unwrap();
        assert_eq!(config.strategy_timeout_ms, Some(500));
    }
}
