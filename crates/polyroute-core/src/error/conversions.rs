//! From trait implementations for PolyrouteError conversions

use super::types::PolyrouteError;

impl From<std::io::Error> for PolyrouteError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<serde_json::Error> for PolyrouteError {
    fn from(error: serde_json::Error) -> Self {
        Self::config_with_context(error.to_string(), "JSON")
    }
}

impl From<toml::de::Error> for PolyrouteError {
    fn from(error: toml::de::Error) -> Self {
        Self::config_with_context(error.to_string(), "TOML")
    }
}

impl From<serde_yaml::Error> for PolyrouteError {
    fn from(error: serde_yaml::Error) -> Self {
        Self::config_with_context(error.to_string(), "YAML")
    }
}

impl From<regex::Error> for PolyrouteError {
    fn from(error: regex::Error) -> Self {
        Self::registry(format!("invalid regex: {}", error))
    }
}

impl From<fancy_regex::Error> for PolyrouteError {
    fn from(error: fancy_regex::Error) -> Self {
        Self::registry(format!("invalid pattern: {}", error))
    }
}
