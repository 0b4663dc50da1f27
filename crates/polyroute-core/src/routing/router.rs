//! Caller-scoped specialist routing

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::detector::service::timed_detect;
use crate::detector::{DetectionContext, DetectionResponse, LanguageDetector};

/// Outcome of routing one request for one caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingOutcome {
    pub caller_id: String,
    pub detection: DetectionResponse,
    /// `{caller_id}-{category}-specialist`
    pub specialist_key: String,
    /// False when detection degraded after an internal failure
    pub routing_success: bool,
    pub processing_time_ms: u64,
}

/// Key of the caller's specialist for a category
pub fn specialist_key(caller_id: &str, category: &str) -> String {
    format!("{}-{}-specialist", caller_id, category)
}

/// Routes requests to caller-specific specialists; stateless per call
#[derive(Debug, Clone)]
pub struct SpecialistRouter {
    detector: Arc<LanguageDetector>,
}

impl SpecialistRouter {
    pub fn new(detector: Arc<LanguageDetector>) -> Self {
        Self { detector }
    }

    pub fn detector(&self) -> &LanguageDetector {
        &self.detector
    }

    /// Detect the request's language and derive the caller's specialist key
    pub async fn route(
        &self,
        caller_id: &str,
        text: &str,
        context: &DetectionContext,
    ) -> RoutingOutcome {
        let (detection, elapsed) = timed_detect(&self.detector, text, context).await;
        let key = specialist_key(caller_id, &detection.category);
        let routing_success = !detection.is_degraded();

        tracing::info!(
            caller = caller_id,
            language = %detection.language,
            confidence = detection.confidence,
            specialist_key = %key,
            elapsed_ms = elapsed.as_millis() as u64,
            "request routed"
        );

        RoutingOutcome {
            caller_id: caller_id.to_string(),
            detection,
            specialist_key: key,
            routing_success,
            processing_time_ms: elapsed.as_millis() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> SpecialistRouter {
        SpecialistRouter::new(Arc::new(LanguageDetector::builtin().unwrap()))
    }

    #[test]
    fn test_specialist_key_format() {
        assert_eq!(specialist_key("nova", "backend"), "nova-backend-specialist");
    }

    #[tokio::test]
    async fn test_route_uses_detected_category() {
        let outcome = router()
            .route(
                "nova",
                "create a REST API in Python with FastAPI",
                &DetectionContext::new(),
            )
            .await;
        assert_eq!(outcome.caller_id, "nova");
        assert_eq!(outcome.detection.language, "python");
        assert_eq!(outcome.specialist_key, "nova-backend-specialist");
        assert!(outcome.routing_success);
    }

    #[tokio::test]
    async fn test_route_unknown_goes_general() {
        let outcome = router().route("atlas", "", &DetectionContext::new()).await;
        assert!(outcome.detection.is_unknown());
        assert_eq!(outcome.specialist_key, "atlas-general-specialist");
        assert!(outcome.routing_success);
    }

    #[tokio::test]
    async fn test_outcome_serializes() {
        let outcome = router()
            .route("nova", "", &DetectionContext::new().with_file_path("index.ts"))
            .await;
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["specialist_key"], "nova-frontend-specialist");
        assert_eq!(json["detection"]["specialist"], "frontend-specialist");
    }
}
