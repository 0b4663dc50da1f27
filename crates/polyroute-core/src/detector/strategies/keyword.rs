//! Domain keyword phrases ("rest api", "smart contract")

use async_trait::async_trait;

use super::{DetectionStrategy, first_phrase};
use crate::detector::types::{DetectionRequest, EvidenceRecord, StrategyKind};
use crate::error::PolyrouteResult;
use crate::registry::PatternRegistry;

/// Plain substring containment; rows may point at a category instead of a language
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordStrategy;

#[async_trait]
impl DetectionStrategy for KeywordStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Keyword
    }

    async fn evaluate(
        &self,
        request: &DetectionRequest,
        registry: &PatternRegistry,
    ) -> PolyrouteResult<Option<EvidenceRecord>> {
        let record = first_phrase(registry.keywords(), request.normalized_text()).map(|rule| {
            EvidenceRecord::new(
                self.kind(),
                rule.language_id.clone(),
                rule.confidence,
                format!("Keyword detected: \"{}\"", rule.phrase),
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
        KeywordStrategy.evaluate(&request, &registry).await.unwrap()
    }

    #[tokio::test]
    async fn test_category_keyword() {
        let record = run("Design a REST API for orders").await.unwrap();
        assert_eq!(record.language_id, "backend");
        assert_eq!(record.raw_confidence, 0.6);
    }

    #[tokio::test]
    async fn test_language_keyword() {
        let record = run("write a smart contract").await.unwrap();
        assert_eq!(record.language_id, "solidity");
        assert_eq!(record.raw_confidence, 0.9);
    }

    #[tokio::test]
    async fn test_substring_not_word_bounded() {
        // containment, so "microservices" still hits "microservice"
        let record = run("split into microservices").await.unwrap();
        assert_eq!(record.evidence, "Keyword detected: \"microservice\"");
    }

    #[tokio::test]
    async fn test_no_keyword() {
        assert!(run("hello there").await.is_none());
        assert!(run("").await.is_none());
    }
}
