//! End-to-end detection tests over the builtin registry

use std::sync::Arc;

use async_trait::async_trait;
use polyroute_core::{
    DetectionContext, DetectionRequest, DetectionResponse, DetectionStrategy, DetectorConfig,
    EvidenceRecord, LanguageDetector, PatternRegistry, PolyrouteResult, StrategyKind,
};

const GO_SNIPPET: &str = "func main() {\n\tfmt.Println(\"hello\")\n}";

fn detector() -> LanguageDetector {
    LanguageDetector::builtin().expect("builtin registry must load")
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn assert_well_formed(response: &DetectionResponse) {
    assert!((0.0..=1.0).contains(&response.confidence));
    assert!(!response.language.is_empty());
    assert!(!response.category.is_empty());
    assert!(!response.specialist.is_empty());
}

#[tokio::test]
async fn test_python_rest_api_request() {
    let response = detector()
        .detect("create a REST API in Python with FastAPI", &DetectionContext::new())
        .await;
    assert_well_formed(&response);
    assert_eq!(response.language, "python");
    assert_eq!(response.category, "backend");
    assert_eq!(response.specialist, "backend-specialist");
    assert!(response.confidence >= 0.6);
    assert!(response.evidence.contains("explicit mention"));
}

#[tokio::test]
async fn test_go_snippet_detected_from_code() {
    let context = DetectionContext::new().with_code(GO_SNIPPET);
    let response = detector().detect("fix this bug", &context).await;
    assert_eq!(response.language, "go");
    assert_eq!(response.category, "backend");
    assert_eq!(response.methods, vec![StrategyKind::CodePattern]);
    assert!(approx(response.confidence, 0.72));
}

#[tokio::test]
async fn test_typescript_from_file_extension() {
    let context = DetectionContext::new().with_file_path("index.ts");
    let response = detector().detect("", &context).await;
    assert_eq!(response.language, "typescript");
    assert!(approx(response.confidence, 0.95 * 0.95));
    assert_eq!(response.category, "frontend");
    assert_eq!(response.specialist, "frontend-specialist");
    assert_eq!(response.evidence, "File extension: .ts");
}

#[tokio::test]
async fn test_explicit_mention_outweighs_extension() {
    let context = DetectionContext::new().with_file_path("app.rs");
    let response = detector().detect("write some Python", &context).await;
    // rust: 0.95 * 0.95 = 0.9025, python: 0.95 * 1.0
    assert_eq!(response.language, "python");
    assert!(approx(response.confidence, 0.95));
}

#[tokio::test]
async fn test_empty_request() {
    let response = detector().detect("", &DetectionContext::new()).await;
    assert_well_formed(&response);
    assert_eq!(response.language, "unknown");
    assert_eq!(response.confidence, 0.0);
    assert_eq!(response.category, "general");
    assert_eq!(response.specialist, "general-specialist");
    assert_eq!(response.evidence, DetectionResponse::NO_EVIDENCE);
}

#[tokio::test]
async fn test_repeated_calls_are_identical() {
    let detector = detector();
    let context = DetectionContext::new()
        .with_code(GO_SNIPPET)
        .with_file_path("main.go")
        .with_marker("go.mod", true);
    let first = detector.detect("goroutines leak here", &context).await;
    for _ in 0..5 {
        assert_eq!(detector.detect("goroutines leak here", &context).await, first);
    }
}

#[tokio::test]
async fn test_corroborating_signals_never_lower_confidence() {
    let detector = detector();
    let base = DetectionContext::new().with_file_path("app.rs");
    let alone = detector.detect("", &base).await;
    let corroborated = detector
        .detect("", &base.clone().with_marker("Cargo.toml", true))
        .await;
    assert_eq!(alone.language, "rust");
    assert_eq!(corroborated.language, "rust");
    assert!(corroborated.confidence >= alone.confidence);
    assert_eq!(corroborated.confidence, 1.0);
    assert_eq!(
        corroborated.methods,
        vec![StrategyKind::FileExtension, StrategyKind::ProjectStructure]
    );
}

#[tokio::test]
async fn test_absent_marker_is_ignored() {
    let context = DetectionContext::new().with_marker("Cargo.toml", false);
    let response = detector().detect("", &context).await;
    assert!(response.is_unknown());
}

#[tokio::test]
async fn test_low_confidence_routes_to_general() {
    // keyword only: 0.5 * 0.6 = 0.3 is kept, so use a stricter threshold
    let detector = detector().with_threshold(0.4);
    let response = detector
        .detect("the database is slow", &DetectionContext::new())
        .await;
    assert_eq!(response.language, "backend");
    assert_eq!(response.category, "backend");
    assert_eq!(response.specialist, "general-specialist");
}

#[tokio::test]
async fn test_framework_hint() {
    let context = DetectionContext::new().with_file_path("App.tsx");
    let response = detector()
        .detect("add a settings page to our react app", &context)
        .await;
    assert_eq!(response.framework.as_deref(), Some("react"));
}

#[tokio::test]
async fn test_registry_extension_from_config() {
    let config: DetectorConfig = serde_json::from_str(
        r#"{
            "registry": {
                "languages": [
                    { "id": "mojo", "patterns": ["mojo"], "confidence": 0.9, "category": "datascience" }
                ],
                "extensions": [{ "extension": ".mojo", "language": "mojo" }]
            }
        }"#,
    )
    .unwrap();
    let detector = LanguageDetector::from_config(&config).unwrap();

    let response = detector
        .detect("port this to Mojo", &DetectionContext::new())
        .await;
    assert_eq!(response.language, "mojo");
    assert_eq!(response.category, "datascience");
    assert_eq!(response.specialist, "data-specialist");

    let response = detector
        .detect("", &DetectionContext::new().with_file_path("model.mojo"))
        .await;
    assert_eq!(response.language, "mojo");
}

struct ShoutingStrategy;

#[async_trait]
impl DetectionStrategy for ShoutingStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::TechnicalTerm
    }

    async fn evaluate(
        &self,
        request: &DetectionRequest,
        _registry: &PatternRegistry,
    ) -> PolyrouteResult<Option<EvidenceRecord>> {
        if request.text().contains("COBOL") {
            return Ok(Some(EvidenceRecord::new(
                self.kind(),
                "cobol",
                1.0,
                "Shouted COBOL",
            )));
        }
        Ok(None)
    }
}

#[tokio::test]
async fn test_custom_strategy_joins_the_pipeline() {
    let detector = LanguageDetector::new(Arc::new(PatternRegistry::builtin().unwrap()))
        .with_strategies(vec![Arc::new(ShoutingStrategy)]);
    let response = detector
        .detect("MIGRATE THE COBOL", &DetectionContext::new())
        .await;
    assert_eq!(response.language, "cobol");
    assert!(approx(response.confidence, 0.7));
    assert_eq!(response.category, "general");
    assert_eq!(response.specialist, "general-specialist");
}

#[test]
fn test_blocking_matches_async() {
    let detector = detector();
    let context = DetectionContext::new().with_code(GO_SNIPPET);
    let blocking = detector.detect_blocking("fix this bug", &context);
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let asynchronous = runtime.block_on(detector.detect("fix this bug", &context));
    assert_eq!(blocking, asynchronous);
}
