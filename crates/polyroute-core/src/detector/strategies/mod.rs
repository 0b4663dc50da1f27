//! Detection strategies
//!
//! Each strategy reads one slice of a [`DetectionRequest`], consults the
//! [`PatternRegistry`] and returns at most one [`EvidenceRecord`]: the first rule that
//! matches wins. Returning `Ok(None)` is the normal "nothing here" outcome; `Err` is
//! reserved for genuine evaluation failures, which the detector contains.

mod code_pattern;
mod explicit_mention;
mod file_extension;
mod keyword;
mod project_structure;
mod technical_term;

use std::sync::Arc;

use async_trait::async_trait;

pub use code_pattern::CodePatternStrategy;
pub use explicit_mention::ExplicitMentionStrategy;
pub use file_extension::FileExtensionStrategy;
pub use keyword::KeywordStrategy;
pub use project_structure::ProjectStructureStrategy;
pub use technical_term::TechnicalTermStrategy;

use super::types::{DetectionRequest, EvidenceRecord, StrategyKind};
use crate::error::PolyrouteResult;
use crate::registry::{PatternRegistry, PhraseRule};

/// An independent evidence producer
#[async_trait]
pub trait DetectionStrategy: Send + Sync {
    /// Which strategy this is; selects the combiner weight
    fn kind(&self) -> StrategyKind;

    /// Evaluate the request against the registry
    async fn evaluate(
        &self,
        request: &DetectionRequest,
        registry: &PatternRegistry,
    ) -> PolyrouteResult<Option<EvidenceRecord>>;
}

/// Build the builtin strategy for a kind
pub fn strategy_for(kind: StrategyKind) -> Arc<dyn DetectionStrategy> {
    match kind {
        StrategyKind::ExplicitMention => Arc::new(ExplicitMentionStrategy),
        StrategyKind::CodePattern => Arc::new(CodePatternStrategy),
        StrategyKind::FileExtension => Arc::new(FileExtensionStrategy),
        StrategyKind::Keyword => Arc::new(KeywordStrategy),
        StrategyKind::ProjectStructure => Arc::new(ProjectStructureStrategy),
        StrategyKind::TechnicalTerm => Arc::new(TechnicalTermStrategy),
    }
}

/// All six builtin strategies in evaluation order
pub fn default_strategies() -> Vec<Arc<dyn DetectionStrategy>> {
    StrategyKind::ALL.into_iter().map(strategy_for).collect()
}

/// First phrase rule contained in `normalized_text`
pub(crate) fn first_phrase<'a>(rules: &'a [PhraseRule], normalized_text: &str) -> Option<&'a PhraseRule> {
    if normalized_text.is_empty() {
        return None;
    }
    rules.iter().find(|rule| normalized_text.contains(&rule.phrase))
}
