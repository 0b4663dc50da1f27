//! Explicit language mentions ("in Python", "using React")

use async_trait::async_trait;

use super::DetectionStrategy;
use crate::detector::types::{DetectionRequest, EvidenceRecord, StrategyKind};
use crate::error::PolyrouteResult;
use crate::registry::PatternRegistry;

/// Matches registry mention patterns against the lowercased request text
#[derive(Debug, Clone, Copy, Default)]
pub struct ExplicitMentionStrategy;

#[async_trait]
impl DetectionStrategy for ExplicitMentionStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::ExplicitMention
    }

    async fn evaluate(
        &self,
        request: &DetectionRequest,
        registry: &PatternRegistry,
    ) -> PolyrouteResult<Option<EvidenceRecord>> {
        let text = request.normalized_text();
        if text.trim().is_empty() {
            return Ok(None);
        }

        let Some((entry, pattern)) = registry.first_text_match(text)? else {
            return Ok(None);
        };

        Ok(Some(EvidenceRecord::new(
            self.kind(),
            entry.language_id(),
            entry.base_confidence(),
            format!("Detected explicit mention: \"{}\"", pattern.source()),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::types::DetectionContext;

    async fn run(text: &str) -> Option<EvidenceRecord> {
        let registry = PatternRegistry::builtin().unwrap();
        let request = DetectionRequest::new(text, DetectionContext::new());
        ExplicitMentionStrategy
            .evaluate(&request, &registry)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_detects_python_mention() {
        let record = run("create a REST API in Python with FastAPI").await.unwrap();
        assert_eq!(record.language_id, "python");
        assert_eq!(record.raw_confidence, 0.95);
        assert_eq!(record.strategy, StrategyKind::ExplicitMention);
        assert_eq!(record.evidence, "Detected explicit mention: \"python\"");
    }

    #[tokio::test]
    async fn test_first_declared_language_wins() {
        // both typescript and react are mentioned; typescript is declared first
        let record = run("setup TypeScript project with React").await.unwrap();
        assert_eq!(record.language_id, "typescript");
    }

    #[tokio::test]
    async fn test_word_boundaries_respected() {
        // "go" inside "good" and "algorithm" must not count
        assert!(run("a good algorithm").await.is_none());
        assert_eq!(run("debug go code").await.unwrap().language_id, "go");
    }

    #[tokio::test]
    async fn test_empty_text_yields_nothing() {
        assert!(run("").await.is_none());
        assert!(run("   ").await.is_none());
    }
}
