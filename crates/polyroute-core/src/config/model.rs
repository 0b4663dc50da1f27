//! Detector configuration model

use serde::{Deserialize, Serialize};

use super::logging_config::LoggingConfig;
use crate::detector::{DEFAULT_SPECIALIST_THRESHOLD, MethodWeights, StrategyKind};
use crate::error::{PolyrouteError, PolyrouteResult};
use crate::registry::RegistrySpec;

fn default_threshold() -> f64 {
    DEFAULT_SPECIALIST_THRESHOLD
}

fn default_strategies() -> Vec<StrategyKind> {
    StrategyKind::ALL.to_vec()
}

/// Everything needed to build a detector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Detections below this confidence go to the general specialist
    #[serde(default = "default_threshold")]
    pub specialist_threshold: f64,

    /// Strategies to run
    #[serde(default = "default_strategies")]
    pub enabled_strategies: Vec<StrategyKind>,

    /// Per-strategy time budget, only enforced inside a tokio runtime.
    /// A timeout can only fire at an await point; the builtin strategies never yield,
    /// so this bounds custom strategies that do async work.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy_timeout_ms: Option<u64>,

    /// Reliability weight per strategy
    #[serde(default)]
    pub method_weights: MethodWeights,

    /// Registry entries layered over the builtin registry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry: Option<RegistrySpec>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            specialist_threshold: default_threshold(),
            enabled_strategies: default_strategies(),
            strategy_timeout_ms: None,
            method_weights: MethodWeights::default(),
            registry: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl DetectorConfig {
    /// Check ranges and references; registry contents are checked when it is built
    pub fn validate(&self) -> PolyrouteResult<()> {
        let threshold = self.specialist_threshold;
        if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
            return Err(PolyrouteError::config_with_context(
                format!("threshold {} outside [0, 1]", threshold),
                "specialist_threshold",
            ));
        }

        self.method_weights.validate()?;

        if self.enabled_strategies.is_empty() {
            return Err(PolyrouteError::config_with_context(
                "at least one strategy must be enabled",
                "enabled_strategies",
            ));
        }

        if self.strategy_timeout_ms == Some(0) {
            return Err(PolyrouteError::config_with_context(
                "timeout must be greater than zero",
                "strategy_timeout_ms",
            ));
        }

        self.logging.validate()
    }

    /// The builtin registry with this config's additions applied
    pub fn registry_spec(&self) -> RegistrySpec {
        let mut spec = RegistrySpec::builtin();
        if let Some(extra) = &self.registry {
            spec.merge(extra.clone());
        }
        spec
    }

    /// Enabled strategies, deduplicated, in evaluation order
    pub fn strategies(&self) -> Vec<StrategyKind> {
        StrategyKind::ALL
            .into_iter()
            .filter(|kind| self.enabled_strategies.contains(kind))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = DetectorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.specialist_threshold, 0.3);
        assert_eq!(config.strategies().len(), 6);
    }

    #[test]
    fn test_threshold_range() {
        let config = DetectorConfig {
            specialist_threshold: 1.5,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.context(), Some("specialist_threshold"));
    }

    #[test]
    fn test_empty_strategy_list_rejected() {
        let config = DetectorConfig {
            enabled_strategies: Vec::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = DetectorConfig {
            strategy_timeout_ms: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_strategies_keep_evaluation_order() {
        let config = DetectorConfig {
            enabled_strategies: vec![
                StrategyKind::Keyword,
                StrategyKind::ExplicitMention,
                StrategyKind::Keyword,
            ],
            ..Default::default()
        };
        assert_eq!(
            config.strategies(),
            vec![StrategyKind::ExplicitMention, StrategyKind::Keyword]
        );
    }

    #[test]
    fn test_registry_spec_merges_additions() {
        let config: DetectorConfig = serde_json::from_str(
            r#"{
                "registry": {
                    "extensions": [{ "extension": ".mojo", "language": "mojo" }]
                }
            }"#,
        )
        .unwrap();
        let spec = config.registry_spec();
        assert_eq!(spec.extensions.last().unwrap().language, "mojo");
        assert_eq!(spec.languages.len(), RegistrySpec::builtin().languages.len());
    }
}
