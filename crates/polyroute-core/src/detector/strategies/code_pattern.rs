//! Syntax shapes in a pasted code snippet

use async_trait::async_trait;

use super::DetectionStrategy;
use crate::detector::types::{DetectionRequest, EvidenceRecord, StrategyKind};
use crate::error::PolyrouteResult;
use crate::registry::PatternRegistry;

/// Matches the registry's syntax rules against the raw snippet
#[derive(Debug, Clone, Copy, Default)]
pub struct CodePatternStrategy;

#[async_trait]
impl DetectionStrategy for CodePatternStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::CodePattern
    }

    async fn evaluate(
        &self,
        request: &DetectionRequest,
        registry: &PatternRegistry,
    ) -> PolyrouteResult<Option<EvidenceRecord>> {
        let Some(code) = request.code() else {
            return Ok(None);
        };

        let record = registry
            .syntax_rules()
            .iter()
            .find(|rule| rule.matcher.is_match(code))
            .map(|rule| {
                EvidenceRecord::new(
                    self.kind(),
                    rule.language_id.clone(),
                    rule.confidence,
                    format!("Detected syntax pattern: \"{}\"", rule.source),
                )
            });

        Ok(record)
    }
}
