//! Language-idiomatic jargon ("goroutines", "ownership")

use async_trait::async_trait;

use super::{DetectionStrategy, first_phrase};
use crate::detector::types::{DetectionRequest, EvidenceRecord, StrategyKind};
use crate::error::PolyrouteResult;
use crate::registry::PatternRegistry;

#[derive(Debug, Clone, Copy, Default)]
pub struct TechnicalTermStrategy;

#[async_trait]
impl DetectionStrategy for TechnicalTermStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::TechnicalTerm
    }

    async fn evaluate(
        &self,
        request: &DetectionRequest,
        registry: &PatternRegistry,
    ) -> PolyrouteResult<Option<EvidenceRecord>> {
        let record =
            first_phrase(registry.technical_terms(), request.normalized_text()).map(|rule| {
                EvidenceRecord::new(
                    self.kind(),
                    rule.language_id.clone(),
                    rule.confidence,
                    format!("Technical term detected: \"{}\"", rule.phrase),
                )
            });

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::types::DetectionContext;

    async fn run(text: &str) -> Option<EvidenceRecord> {
        let registry = PatternRegistry::builtin().unwrap();
        let request = DetectionRequest::new(text, DetectionContext::new());
        TechnicalTermStrategy
            .evaluate(&request, &registry)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_goroutines() {
        let record = run("leaking Goroutines under load").await.unwrap();
        assert_eq!(record.language_id, "go");
        assert_eq!(record.raw_confidence, 0.9);
    }

    #[tokio::test]
    async fn test_first_declared_term_wins() {
        // "promises" is declared before "traits"
        let record = run("traits and promises").await.unwrap();
        assert_eq!(record.language_id, "javascript");
    }

    #[tokio::test]
    async fn test_no_term() {
        assert!(run("debug go goroutine deadlock").await.is_none());
    }
}
