//! Core error enum

use thiserror::Error;

/// Result type alias for polyroute operations
pub type PolyrouteResult<T> = Result<T, PolyrouteError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context<C: std::fmt::Display>(self, context: C) -> PolyrouteResult<T>;

    /// Add context lazily (only evaluated on error)
    fn with_context<C: std::fmt::Display, F: FnOnce() -> C>(self, f: F) -> PolyrouteResult<T>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn context<C: std::fmt::Display>(self, context: C) -> PolyrouteResult<T> {
        self.map_err(|e| PolyrouteError::other(format!("{}: {}", context, e)))
    }

    fn with_context<C: std::fmt::Display, F: FnOnce() -> C>(self, f: F) -> PolyrouteResult<T> {
        self.map_err(|e| PolyrouteError::other(format!("{}: {}", f(), e)))
    }
}

/// Render the optional entry and context of a registry error
fn locate(entry: &Option<String>, context: &Option<String>) -> String {
    let mut located = String::new();
    if let Some(entry) = entry {
        located.push_str(&format!(" (entry: {})", entry));
    }
    if let Some(context) = context {
        located.push_str(&format!(" [{}]", context));
    }
    located
}

/// Main error type for polyroute
#[derive(Error, Debug, Clone)]
pub enum PolyrouteError {
    /// Pattern registry could not be built (fatal at startup)
    #[error("Registry error: {message}{}", locate(.entry, .context))]
    Registry {
        message: String,
        entry: Option<String>,
        context: Option<String>,
    },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// A single detection strategy failed
    #[error("Strategy error: {strategy}: {message}")]
    Strategy {
        strategy: String,
        message: String,
        context: Option<String>,
    },

    /// Invalid input errors
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        field: Option<String>,
        context: Option<String>,
    },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
        context: Option<String>,
    },

    /// Strategy evaluation exceeded its time budget
    #[error("Timeout after {millis} ms")]
    Timeout {
        millis: u64,
        context: Option<String>,
    },

    /// Generic error with context
    #[error("Error: {message}")]
    Other {
        message: String,
        context: Option<String>,
    },
}

impl PolyrouteError {
    /// Stable code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Registry { .. } => "POLYROUTE_REGISTRY",
            Self::Config { .. } => "POLYROUTE_CONFIG",
            Self::Strategy { .. } => "POLYROUTE_STRATEGY",
            Self::InvalidInput { .. } => "POLYROUTE_INVALID_INPUT",
            Self::Io { .. } => "POLYROUTE_IO",
            Self::Timeout { .. } => "POLYROUTE_TIMEOUT",
            Self::Other { .. } => "POLYROUTE_OTHER",
        }
    }

    /// Optional context attached to the error
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::Registry { context, .. }
            | Self::Config { context, .. }
            | Self::Strategy { context, .. }
            | Self::InvalidInput { context, .. }
            | Self::Io { context, .. }
            | Self::Timeout { context, .. }
            | Self::Other { context, .. } => context.as_deref(),
        }
    }

    /// Whether the error prevents the detector from serving any call
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Registry { .. } | Self::Config { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            PolyrouteError::registry("bad").error_code(),
            "POLYROUTE_REGISTRY"
        );
        assert_eq!(
            PolyrouteError::strategy("keyword", "boom").error_code(),
            "POLYROUTE_STRATEGY"
        );
        assert_eq!(PolyrouteError::timeout(5).error_code(), "POLYROUTE_TIMEOUT");
    }

    #[test]
    fn test_fatal_classification() {
        assert!(PolyrouteError::registry("bad regex").is_fatal());
        assert!(PolyrouteError::config("missing").is_fatal());
        assert!(!PolyrouteError::strategy("code-pattern", "boom").is_fatal());
    }

    #[test]
    fn test_result_ext_context() {
        let result: Result<(), &str> = Err("underlying");
        let err = result.context("loading registry").unwrap_err();
        assert_eq!(err.to_string(), "Error: loading registry: underlying");
    }

    #[test]
    fn test_registry_display_names_entry_and_context() {
        let err = PolyrouteError::registry_entry("duplicate language id", "python");
        assert_eq!(
            err.to_string(),
            "Registry error: duplicate language id (entry: python)"
        );
        let err = err.with_context("language 'python'");
        assert_eq!(
            err.to_string(),
            "Registry error: duplicate language id (entry: python) [language 'python']"
        );
        assert_eq!(PolyrouteError::registry("bad").to_string(), "Registry error: bad");
    }

    #[test]
    fn test_display_includes_strategy_name() {
        let err = PolyrouteError::strategy("file-extension", "panicked");
        assert_eq!(err.to_string(), "Strategy error: file-extension: panicked");
    }
}
