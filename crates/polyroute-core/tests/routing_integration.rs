//! Routing tests through the public API

use std::sync::Arc;

use polyroute_core::{DetectionContext, LanguageDetector, SpecialistRouter};

fn router() -> SpecialistRouter {
    SpecialistRouter::new(Arc::new(LanguageDetector::builtin().unwrap()))
}

#[tokio::test]
async fn test_specialist_key_follows_category() {
    let router = router();
    let cases = [
        ("write a smart contract", "solidity", "nova-blockchain-specialist"),
        ("", "unknown", "nova-general-specialist"),
    ];
    for (text, language, key) in cases {
        let outcome = router.route("nova", text, &DetectionContext::new()).await;
        assert_eq!(outcome.detection.language, language);
        assert_eq!(outcome.specialist_key, key);
    }
}

#[tokio::test]
async fn test_key_uses_category_from_keyword_hit() {
    let outcome = router()
        .route("atlas", "the database is slow", &DetectionContext::new())
        .await;
    assert_eq!(outcome.detection.category, "backend");
    assert_eq!(outcome.specialist_key, "atlas-backend-specialist");
    assert!(outcome.routing_success);
}

#[tokio::test]
async fn test_concurrent_routes_are_independent() {
    let router = Arc::new(router());
    let handles: Vec<_> = ["main.go", "index.ts", "app.rs", "lib.py"]
        .into_iter()
        .map(|path| {
            let router = Arc::clone(&router);
            tokio::spawn(async move {
                let context = DetectionContext::new().with_file_path(path);
                router.route("swarm", "", &context).await
            })
        })
        .collect();

    let mut languages = Vec::new();
    for handle in handles {
        languages.push(handle.await.unwrap().detection.language);
    }
    assert_eq!(languages, vec!["go", "typescript", "rust", "python"]);
}
