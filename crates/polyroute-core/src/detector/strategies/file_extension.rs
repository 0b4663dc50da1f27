//! File extensions of the paths a request refers to

use async_trait::async_trait;

use super::DetectionStrategy;
use crate::detector::types::{DetectionRequest, EvidenceRecord, StrategyKind};
use crate::error::PolyrouteResult;
use crate::registry::PatternRegistry;

/// Extensions are near-unambiguous, so every hit carries the same high confidence
pub const EXTENSION_CONFIDENCE: f64 = 0.95;

/// First path whose extension is in the registry wins
#[derive(Debug, Clone, Copy, Default)]
pub struct FileExtensionStrategy;

#[async_trait]
impl DetectionStrategy for FileExtensionStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::FileExtension
    }

    async fn evaluate(
        &self,
        request: &DetectionRequest,
        registry: &PatternRegistry,
    ) -> PolyrouteResult<Option<EvidenceRecord>> {
        let record = request.file_paths().iter().find_map(|path| {
            registry.lookup_by_path(path).map(|(extension, language)| {
                EvidenceRecord::new(
                    self.kind(),
                    language,
                    EXTENSION_CONFIDENCE,
                    format!("File extension: {}", extension),
                )
            })
        });

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::types::DetectionContext;

    async fn run(paths: &[&str]) -> Option<EvidenceRecord> {
        let registry = PatternRegistry::builtin().unwrap();
        let context = DetectionContext::new().with_file_paths(paths.iter().copied());
        let request = DetectionRequest::new("", context);
        FileExtensionStrategy.evaluate(&request, &registry).await.unwrap()
    }

    #[tokio::test]
    async fn test_typescript_extension() {
        let record = run(&["index.ts"]).await.unwrap();
        assert_eq!(record.language_id, "typescript");
        assert_eq!(record.raw_confidence, EXTENSION_CONFIDENCE);
        assert_eq!(record.evidence, "File extension: .ts");
    }

    #[tokio::test]
    async fn test_first_known_path_wins() {
        let record = run(&["README", "notes.txt", "main.GO", "lib.rs"]).await.unwrap();
        assert_eq!(record.language_id, "go");
    }

    #[tokio::test]
    async fn test_unknown_extensions() {
        assert!(run(&[]).await.is_none());
        assert!(run(&["Makefile", "data.bin"]).await.is_none());
    }
}
