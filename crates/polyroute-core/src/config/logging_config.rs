//! Logging configuration

use serde::{Deserialize, Serialize};

use crate::error::{PolyrouteError, PolyrouteResult};

const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const FORMATS: [&str; 3] = ["pretty", "compact", "json"];

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log format (json, pretty, compact)
    pub format: String,
    /// Whether to colour console output
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "compact".to_string(),
            ansi: true,
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> PolyrouteResult<()> {
        if !LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(PolyrouteError::config_with_context(
                format!("unknown log level '{}'", self.level),
                "logging.level",
            ));
        }
        if !FORMATS.contains(&self.format.to_lowercase().as_str()) {
            return Err(PolyrouteError::config_with_context(
                format!("unknown log format '{}'", self.format),
                "logging.format",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_config_default() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "warn");
        assert_eq!(config.format, "compact");
        assert!(config.ansi);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_logging_config_validation() {
        let config = LoggingConfig {
            level: "loud".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
