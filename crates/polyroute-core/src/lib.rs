//! Polyroute Core Library
//!
//! Multi-signal programming-language detection with confidence-gated routing to
//! specialist handlers. Six independent strategies read a request (its text, an optional
//! code snippet, file paths and project markers), a weighted combiner picks a language,
//! and a resolver maps it to a category and specialist.

pub mod config;
pub mod detector;
pub mod error;
pub mod registry;
pub mod routing;

// Re-export commonly used types
pub use config::{DetectorConfig, LoggingConfig, load_config, load_config_from_file};
pub use detector::{
    DetectionContext, DetectionRequest, DetectionResponse, DetectionStrategy, EvidenceRecord,
    LanguageDetector, MethodWeights, StrategyKind,
};
pub use error::{PolyrouteError, PolyrouteResult, ResultExt};
pub use registry::{PatternRegistry, RegistrySpec};
pub use routing::{RoutingOutcome, SpecialistRouter, specialist_key};
