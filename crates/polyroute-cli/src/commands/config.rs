//! Configuration management commands

use std::path::Path;

use colored::*;
use polyroute_core::config::{DetectorConfig, load_config_with_file, render_config};
use polyroute_core::error::{PolyrouteError, PolyrouteResult};
use polyroute_core::PatternRegistry;

use crate::console::CliConsole;

/// Show the effective configuration
pub fn show(config_file: Option<&Path>, verbose: bool) -> PolyrouteResult<()> {
    let console = CliConsole::new(true);
    console.print_header("Configuration");

    match config_file {
        Some(path) if !path.exists() => {
            console.warn(&format!("Configuration file not found: {}", path.display()));
            console.info("Using default configuration");
        }
        Some(path) => console.success(&format!("Loaded configuration from: {}", path.display())),
        None => console.info("No configuration file given; defaults and environment apply"),
    }

    let config = load_config_with_file(config_file)?;
    print_config(&console, &config);

    if verbose {
        console.print_separator();
        println!("{}", serde_json::to_string_pretty(&config)?);
    }
    Ok(())
}

/// Validate configuration, including the registry it describes
pub fn validate(config_file: Option<&Path>) -> PolyrouteResult<()> {
    let console = CliConsole::new(true);
    console.print_header("Configuration Validation");

    if let Some(path) = config_file {
        if !path.exists() {
            return Err(PolyrouteError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
    }

    let config = match load_config_with_file(config_file) {
        Ok(config) => config,
        Err(e) => {
            console.error(&format!("Configuration validation failed: {e}"));
            return Err(e);
        }
    };
    console.success("Configuration is valid");

    match PatternRegistry::from_spec(config.registry_spec()) {
        Ok(registry) => {
            console.success(&format!(
                "Registry builds: {} languages, {} categories",
                registry.entries().len(),
                registry.categories().len()
            ));
            Ok(())
        }
        Err(e) => {
            console.error(&format!("Registry is invalid: {e}"));
            Err(e)
        }
    }
}

/// Write a default configuration file; the extension picks the format
pub async fn init(path: &Path, force: bool) -> PolyrouteResult<()> {
    let console = CliConsole::new(true);
    console.print_header("Configuration Initialization");

    if path.exists() && !force {
        console.error(&format!("Configuration file already exists: {}", path.display()));
        console.info("Use --force to overwrite");
        return Err(PolyrouteError::config("Configuration file already exists"));
    }

    let rendered = render_config(&DetectorConfig::default(), path)?;
    tokio::fs::write(path, rendered).await.map_err(|e| {
        PolyrouteError::io_with_path(
            format!("Failed to write configuration file: {e}"),
            path.display().to_string(),
        )
    })?;

    console.success(&format!("Created configuration file: {}", path.display()));
    Ok(())
}

fn print_config(console: &CliConsole, config: &DetectorConfig) {
    console.field(
        "Threshold",
        config.specialist_threshold.to_string().yellow(),
    );
    let strategies: Vec<String> = config.strategies().iter().map(|s| s.to_string()).collect();
    console.field("Strategies", strategies.join(", "));
    for kind in config.strategies() {
        console.field(kind.id(), config.method_weights.weight(kind));
    }
    match config.strategy_timeout_ms {
        Some(ms) => console.field("Timeout", format!("{} ms", ms)),
        None => console.field("Timeout", "none".dimmed()),
    }
    if let Some(registry) = &config.registry {
        console.field(
            "Registry",
            format!(
                "+{} languages, +{} extensions, +{} categories",
                registry.languages.len(),
                registry.extensions.len(),
                registry.categories.len()
            ),
        );
    }
    console.field(
        "Logging",
        format!("{} ({})", config.logging.level, config.logging.format),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_init_writes_loadable_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("polyroute.yaml");

        init(&path, false).await.unwrap();
        assert!(path.exists());
        assert!(validate(Some(&path)).is_ok());
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("polyroute.json");
        std::fs::write(&path, "{}").unwrap();

        assert!(init(&path, false).await.is_err());
        assert!(init(&path, true).await.is_ok());
    }

    #[test]
    fn test_validate_reports_bad_registry() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("polyroute.json");
        std::fs::write(
            &path,
            r#"{ "registry": { "extensions": [{ "extension": "rs", "language": "rust" }] } }"#,
        )
        .unwrap();

        let err = validate(Some(&path)).unwrap_err();
        assert_eq!(err.error_code(), "POLYROUTE_REGISTRY");
    }

    #[test]
    fn test_validate_missing_file() {
        assert!(validate(Some(Path::new("/no/such/polyroute.toml"))).is_err());
    }
}
