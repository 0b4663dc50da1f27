//! Environment variable-based configuration overrides

use std::env;

use super::model::DetectorConfig;
use crate::detector::StrategyKind;
use crate::error::{PolyrouteError, PolyrouteResult};

pub const ENV_THRESHOLD: &str = "POLYROUTE_THRESHOLD";
pub const ENV_STRATEGY_TIMEOUT_MS: &str = "POLYROUTE_STRATEGY_TIMEOUT_MS";
pub const ENV_STRATEGIES: &str = "POLYROUTE_STRATEGIES";
pub const ENV_LOG_LEVEL: &str = "POLYROUTE_LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "POLYROUTE_LOG_FORMAT";

/// Apply POLYROUTE_* variables from the process environment
pub fn apply_env_overrides(config: &mut DetectorConfig) -> PolyrouteResult<()> {
    apply_overrides_from(config, |key| env::var(key).ok())
}

/// Apply overrides read through `lookup`; blank values are ignored
pub fn apply_overrides_from<F>(config: &mut DetectorConfig, lookup: F) -> PolyrouteResult<()>
where
    F: Fn(&str) -> Option<String>,
{
    let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(threshold) = read(ENV_THRESHOLD) {
        config.specialist_threshold = threshold.trim().parse().map_err(|_| {
            PolyrouteError::config_with_context(
                format!("Invalid {} value", ENV_THRESHOLD),
                format!("Parsing threshold value '{}'", threshold),
            )
        })?;
    }

    if let Some(timeout) = read(ENV_STRATEGY_TIMEOUT_MS) {
        config.strategy_timeout_ms = Some(timeout.trim().parse().map_err(|_| {
            PolyrouteError::config_with_context(
                format!("Invalid {} value", ENV_STRATEGY_TIMEOUT_MS),
                format!("Parsing timeout value '{}'", timeout),
            )
        })?);
    }

    if let Some(list) = read(ENV_STRATEGIES) {
        config.enabled_strategies = list
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(|name| -> PolyrouteResult<StrategyKind> {
                name.parse().map_err(|e: PolyrouteError| {
                    e.with_context(format!("Parsing {}", ENV_STRATEGIES))
                })
            })
            .collect::<PolyrouteResult<Vec<_>>>()?;
    }

    if let Some(level) = read(ENV_LOG_LEVEL) {
        config.logging.level = level.trim().to_lowercase();
    }

    if let Some(format) = read(ENV_LOG_FORMAT) {
        config.logging.format = format.trim().to_lowercase();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_no_variables_leaves_config_alone() {
        let mut config = DetectorConfig::default();
        apply_overrides_from(&mut config, lookup(&[])).unwrap();
        assert_eq!(config, DetectorConfig::default());
    }

    #[test]
    fn test_overrides_applied() {
        let mut config = DetectorConfig::default();
        apply_overrides_from(
            &mut config,
            lookup(&[
                (ENV_THRESHOLD, "0.45"),
                (ENV_STRATEGY_TIMEOUT_MS, "150"),
                (ENV_STRATEGIES, "explicit-mention, file_extension"),
                (ENV_LOG_LEVEL, "DEBUG"),
                (ENV_LOG_FORMAT, "json"),
            ]),
        )
        .unwrap();

        assert_eq!(config.specialist_threshold, 0.45);
        assert_eq!(config.strategy_timeout_ms, Some(150));
        assert_eq!(
            config.enabled_strategies,
            vec![StrategyKind::ExplicitMention, StrategyKind::FileExtension]
        );
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_blank_values_ignored() {
        let mut config = DetectorConfig::default();
        apply_overrides_from(&mut config, lookup(&[(ENV_THRESHOLD, "  ")])).unwrap();
        assert_eq!(config.specialist_threshold, 0.3);
    }

    #[test]
    fn test_invalid_threshold() {
        let mut config = DetectorConfig::default();
        let err = apply_overrides_from(&mut config, lookup(&[(ENV_THRESHOLD, "high")]))
            .unwrap_err();
        assert_eq!(err.error_code(), "POLYROUTE_CONFIG");
    }

    #[test]
    fn test_unknown_strategy_name() {
        let mut config = DetectorConfig::default();
        assert!(
            apply_overrides_from(&mut config, lookup(&[(ENV_STRATEGIES, "keyword,telepathy")]))
                .is_err()
        );
    }
}
