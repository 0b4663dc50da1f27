//! Manifest files present in the project

use async_trait::async_trait;

use super::DetectionStrategy;
use crate::detector::types::{DetectionRequest, EvidenceRecord, StrategyKind};
use crate::error::PolyrouteResult;
use crate::registry::PatternRegistry;

/// Walks the registry's marker table in order and reports the first one present
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectStructureStrategy;

#[async_trait]
impl DetectionStrategy for ProjectStructureStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::ProjectStructure
    }

    async fn evaluate(
        &self,
        request: &DetectionRequest,
        registry: &PatternRegistry,
    ) -> PolyrouteResult<Option<EvidenceRecord>> {
        let structure = request.project_structure();
        if structure.is_empty() {
            return Ok(None);
        }

        let record = registry
            .project_markers()
            .iter()
            .find(|marker| structure.get(&marker.phrase).copied().unwrap_or(false))
            .map(|marker| {
                EvidenceRecord::new(
                    self.kind(),
                    marker.language_id.clone(),
                    marker.confidence,
                    format!("Project file detected: {}", marker.phrase),
                )
            });

        Ok(record)
    }
}
