//! Detector facade: scatter the request over every strategy, gather the evidence,
//! combine it and resolve a specialist.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::FutureExt;
use tokio::runtime::Handle;
use tokio::time::timeout;
use tracing::{debug, warn};

use super::combiner::{EvidenceCombiner, MethodWeights};
use super::resolver::SpecialistResolver;
use super::strategies::{DetectionStrategy, default_strategies, strategy_for};
use super::types::{
    DetectionContext, DetectionRequest, DetectionResponse, EvidenceRecord, StrategyKind,
};
use crate::config::DetectorConfig;
use crate::error::{PolyrouteError, PolyrouteResult};
use crate::registry::PatternRegistry;

/// Multi-signal language detector
///
/// Cheap to share: the registry sits behind an `Arc` and every call is independent.
/// `detect` never fails; internal errors degrade to the general fallback.
#[derive(Clone)]
pub struct LanguageDetector {
    registry: Arc<PatternRegistry>,
    strategies: Vec<Arc<dyn DetectionStrategy>>,
    combiner: EvidenceCombiner,
    resolver: SpecialistResolver,
    strategy_timeout: Option<Duration>,
}

impl std::fmt::Debug for LanguageDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageDetector")
            .field("strategies", &self.strategy_kinds())
            .field("weights", self.combiner.weights())
            .field("threshold", &self.resolver.threshold())
            .field("strategy_timeout", &self.strategy_timeout)
            .finish()
    }
}

impl LanguageDetector {
    /// All builtin strategies with default weights and threshold
    pub fn new(registry: Arc<PatternRegistry>) -> Self {
        Self {
            registry,
            strategies: default_strategies(),
            combiner: EvidenceCombiner::default(),
            resolver: SpecialistResolver::default(),
            strategy_timeout: None,
        }
    }

    /// Detector over the builtin registry
    pub fn builtin() -> PolyrouteResult<Self> {
        Ok(Self::new(Arc::new(PatternRegistry::builtin()?)))
    }

    /// Validate the config, build its registry and apply its tuning
    pub fn from_config(config: &DetectorConfig) -> PolyrouteResult<Self> {
        config.validate()?;
        let registry = PatternRegistry::from_spec(config.registry_spec())?;
        Ok(Self::new(Arc::new(registry))
            .with_strategies(config.strategies().into_iter().map(strategy_for).collect())
            .with_weights(config.method_weights)
            .with_threshold(config.specialist_threshold)
            .with_strategy_timeout(config.strategy_timeout_ms.map(Duration::from_millis)))
    }

    /// Replace the strategy set
    pub fn with_strategies(mut self, strategies: Vec<Arc<dyn DetectionStrategy>>) -> Self {
        self.strategies = strategies;
        self
    }

    /// Add one more strategy after the existing ones
    pub fn with_strategy(mut self, strategy: Arc<dyn DetectionStrategy>) -> Self {
        self.strategies.push(strategy);
        self
    }

    pub fn with_weights(mut self, weights: MethodWeights) -> Self {
        self.combiner = EvidenceCombiner::new(weights);
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.resolver = SpecialistResolver::new(threshold);
        self
    }

    /// Per-strategy time budget; only enforced when called inside a tokio runtime
    pub fn with_strategy_timeout(mut self, limit: Option<Duration>) -> Self {
        self.strategy_timeout = limit;
        self
    }

    pub fn registry(&self) -> &Arc<PatternRegistry> {
        &self.registry
    }

    pub fn strategy_kinds(&self) -> Vec<StrategyKind> {
        self.strategies.iter().map(|s| s.kind()).collect()
    }

    pub fn threshold(&self) -> f64 {
        self.resolver.threshold()
    }

    /// Detect the language of a request
    pub async fn detect(&self, text: &str, context: &DetectionContext) -> DetectionResponse {
        let request = DetectionRequest::new(text, context.clone());
        self.detect_request(&request).await
    }

    /// Detect from a prepared request
    pub async fn detect_request(&self, request: &DetectionRequest) -> DetectionResponse {
        let records = self.gather_evidence(request).await;
        self.conclude(request, &records)
    }

    /// Blocking variant for callers without an async runtime
    ///
    /// Strategy timeouts are not applied. Must not be called from inside an async task.
    pub fn detect_blocking(&self, text: &str, context: &DetectionContext) -> DetectionResponse {
        let request = DetectionRequest::new(text, context.clone());
        let records = futures::executor::block_on(self.gather_with(&request, None));
        self.conclude(&request, &records)
    }

    /// Evaluate every strategy concurrently; failures are logged and dropped
    ///
    /// Records come back in strategy order regardless of completion order.
    pub async fn gather_evidence(&self, request: &DetectionRequest) -> Vec<EvidenceRecord> {
        let limit = self
            .strategy_timeout
            .filter(|_| Handle::try_current().is_ok());
        self.gather_with(request, limit).await
    }

    async fn gather_with(
        &self,
        request: &DetectionRequest,
        limit: Option<Duration>,
    ) -> Vec<EvidenceRecord> {
        let evaluations = self
            .strategies
            .iter()
            .map(|strategy| self.run_strategy(strategy.as_ref(), request, limit));

        futures::future::join_all(evaluations)
            .await
            .into_iter()
            .flatten()
            .collect()
    }

    async fn run_strategy(
        &self,
        strategy: &dyn DetectionStrategy,
        request: &DetectionRequest,
        limit: Option<Duration>,
    ) -> Option<EvidenceRecord> {
        let kind = strategy.kind();
        let evaluation = AssertUnwindSafe(strategy.evaluate(request, &self.registry)).catch_unwind();

        let outcome = match limit {
            Some(limit) => match timeout(limit, evaluation).await {
                Ok(outcome) => outcome,
                Err(_) => {
                    let err = PolyrouteError::timeout(limit.as_millis() as u64)
                        .with_context(format!("strategy {}", kind));
                    warn!(strategy = %kind, error = %err, "strategy timed out");
                    return None;
                }
            },
            None => evaluation.await,
        };

        match outcome {
            Ok(Ok(Some(record))) => {
                debug!(
                    strategy = %kind,
                    language = %record.language_id,
                    confidence = record.raw_confidence,
                    "strategy matched"
                );
                Some(record)
            }
            Ok(Ok(None)) => None,
            Ok(Err(err)) => {
                warn!(strategy = %kind, error = %err, "strategy failed");
                None
            }
            Err(panic) => {
                let message = if let Some(s) = panic.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                warn!(strategy = %kind, panic = %message, "strategy panicked");
                None
            }
        }
    }

    fn conclude(&self, request: &DetectionRequest, records: &[EvidenceRecord]) -> DetectionResponse {
        let combined = match self.combiner.combine(records) {
            Ok(combined) => combined,
            Err(err) => {
                warn!(error = %err, "evidence combination failed, using general fallback");
                return DetectionResponse::fallback(
                    self.registry.fallback_category(),
                    self.registry.fallback_specialist(),
                    Some(err.to_string()),
                );
            }
        };

        let mut response = self.resolver.resolve(combined, &self.registry);
        if !response.is_unknown() {
            response.framework = self
                .registry
                .framework_mention(request.text(), &response.category)
                .map(str::to_string);
        }

        debug!(
            language = %response.language,
            confidence = response.confidence,
            specialist = %response.specialist,
            "detection complete"
        );
        response
    }
}

/// Time a detection; used by the router for its processing-time metadata
pub(crate) async fn timed_detect(
    detector: &LanguageDetector,
    text: &str,
    context: &DetectionContext,
) -> (DetectionResponse, Duration) {
    let started = Instant::now();
    let response = detector.detect(text, context).await;
    (response, started.elapsed())
}
