//! Language detection: strategies, evidence combination and specialist resolution

pub mod combiner;
pub mod resolver;
pub mod service;
pub mod strategies;
pub mod types;

pub use combiner::{EvidenceCombiner, MethodWeights};
pub use resolver::{DEFAULT_SPECIALIST_THRESHOLD, SpecialistResolver};
pub use service::LanguageDetector;
pub use strategies::{
    CodePatternStrategy, DetectionStrategy, ExplicitMentionStrategy, FileExtensionStrategy,
    KeywordStrategy, ProjectStructureStrategy, TechnicalTermStrategy, default_strategies,
    strategy_for,
};
pub use types::{
    CombinedResult, DetectionContext, DetectionRequest, DetectionResponse, EvidenceRecord,
    StrategyKind,
};
