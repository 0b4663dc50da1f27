//! Category and specialist resolution

use super::types::{CombinedResult, DetectionResponse};
use crate::registry::PatternRegistry;

/// Confidence below which a detection is never routed to a specific specialist
pub const DEFAULT_SPECIALIST_THRESHOLD: f64 = 0.3;

/// Turns a [`CombinedResult`] into the caller-facing [`DetectionResponse`]
#[derive(Debug, Clone, Copy)]
pub struct SpecialistResolver {
    threshold: f64,
}

impl Default for SpecialistResolver {
    fn default() -> Self {
        Self::new(DEFAULT_SPECIALIST_THRESHOLD)
    }
}

impl SpecialistResolver {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Resolve category, then gate the specialist on confidence
    pub fn resolve(&self, combined: CombinedResult, registry: &PatternRegistry) -> DetectionResponse {
        if combined.is_unknown() {
            return DetectionResponse::fallback(
                registry.fallback_category(),
                registry.fallback_specialist(),
                None,
            );
        }

        let category = registry.category_of(&combined.language_id).to_string();
        let specialist = if combined.confidence < self.threshold {
            tracing::debug!(
                language = %combined.language_id,
                confidence = combined.confidence,
                threshold = self.threshold,
                "confidence below threshold, routing to general specialist"
            );
            registry.fallback_specialist().to_string()
        } else {
            registry.specialist_of(&category).to_string()
        };

        DetectionResponse {
            language: combined.language_id,
            confidence: combined.confidence,
            category,
            specialist,
            evidence: combined.evidence_trail.join("; "),
            methods: combined.contributing_strategies,
            framework: None,
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::types::StrategyKind;

    fn combined(language: &str, confidence: f64) -> CombinedResult {
        CombinedResult {
            language_id: language.to_string(),
            confidence,
            contributing_strategies: vec![StrategyKind::Keyword],
            evidence_trail: vec!["first".to_string(), "second".to_string()],
        }
    }

    #[test]
    fn test_specialist_from_category() {
        let registry = PatternRegistry::builtin().unwrap();
        let response = SpecialistResolver::default().resolve(combined("rust", 0.9), &registry);
        assert_eq!(response.category, "backend");
        assert_eq!(response.specialist, "backend-specialist");
        assert_eq!(response.evidence, "first; second");
        assert_eq!(response.methods, vec![StrategyKind::Keyword]);
    }

    #[test]
    fn test_low_confidence_forces_general_specialist() {
        let registry = PatternRegistry::builtin().unwrap();
        let response = SpecialistResolver::default().resolve(combined("rust", 0.29), &registry);
        assert_eq!(response.category, "backend");
        assert_eq!(response.specialist, "general-specialist");
    }

    #[test]
    fn test_threshold_is_inclusive_lower_bound() {
        let registry = PatternRegistry::builtin().unwrap();
        let response = SpecialistResolver::default().resolve(combined("rust", 0.3), &registry);
        assert_eq!(response.specialist, "backend-specialist");
    }

    #[test]
    fn test_unmapped_language_is_general() {
        let registry = PatternRegistry::builtin().unwrap();
        let response = SpecialistResolver::default().resolve(combined("cobol", 0.9), &registry);
        assert_eq!(response.category, "general");
        assert_eq!(response.specialist, "general-specialist");
        assert_eq!(response.language, "cobol");
    }

    #[test]
    fn test_unknown_result() {
        let registry = PatternRegistry::builtin().unwrap();
        let response = SpecialistResolver::new(0.5).resolve(CombinedResult::unknown(), &registry);
        assert!(response.is_unknown());
        assert_eq!(response.specialist, "general-specialist");
        assert_eq!(response.evidence, DetectionResponse::NO_EVIDENCE);
    }
}
