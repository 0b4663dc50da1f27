//! Weighted evidence combination
//!
//! Each record's raw confidence is scaled by its strategy's weight, scores are summed per
//! language, and the language with the strictly greatest sum wins. Groups live in a map
//! ordered by language id, so an exact tie goes to the lexicographically smallest id.
//! The winning sum is capped at 1.0.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::types::{CombinedResult, EvidenceRecord, StrategyKind};
use crate::error::{PolyrouteError, PolyrouteResult};

/// Reliability weight per strategy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MethodWeights {
    pub explicit_mention: f64,
    pub file_extension: f64,
    pub code_pattern: f64,
    pub project_structure: f64,
    pub technical_term: f64,
    pub keyword: f64,
}

impl Default for MethodWeights {
    fn default() -> Self {
        Self {
            explicit_mention: StrategyKind::ExplicitMention.default_weight(),
            file_extension: StrategyKind::FileExtension.default_weight(),
            code_pattern: StrategyKind::CodePattern.default_weight(),
            project_structure: StrategyKind::ProjectStructure.default_weight(),
            technical_term: StrategyKind::TechnicalTerm.default_weight(),
            keyword: StrategyKind::Keyword.default_weight(),
        }
    }
}

impl MethodWeights {
    pub fn weight(&self, kind: StrategyKind) -> f64 {
        match kind {
            StrategyKind::ExplicitMention => self.explicit_mention,
            StrategyKind::FileExtension => self.file_extension,
            StrategyKind::CodePattern => self.code_pattern,
            StrategyKind::ProjectStructure => self.project_structure,
            StrategyKind::TechnicalTerm => self.technical_term,
            StrategyKind::Keyword => self.keyword,
        }
    }

    pub fn set(&mut self, kind: StrategyKind, weight: f64) {
        match kind {
            StrategyKind::ExplicitMention => self.explicit_mention = weight,
            StrategyKind::FileExtension => self.file_extension = weight,
            StrategyKind::CodePattern => self.code_pattern = weight,
            StrategyKind::ProjectStructure => self.project_structure = weight,
            StrategyKind::TechnicalTerm => self.technical_term = weight,
            StrategyKind::Keyword => self.keyword = weight,
        }
    }

    /// Every weight must be a finite value in [0, 1]
    pub fn validate(&self) -> PolyrouteResult<()> {
        for kind in StrategyKind::ALL {
            let weight = self.weight(kind);
            if !weight.is_finite() || !(0.0..=1.0).contains(&weight) {
                return Err(PolyrouteError::config_with_context(
                    format!("weight {} outside [0, 1]", weight),
                    format!("method_weights.{}", kind.id().replace('-', "_")),
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
struct LanguageScore {
    total: f64,
    strategies: Vec<StrategyKind>,
    evidence: Vec<String>,
}

/// Folds strategy output into a single [`CombinedResult`]
#[derive(Debug, Clone, Default)]
pub struct EvidenceCombiner {
    weights: MethodWeights,
}

impl EvidenceCombiner {
    pub fn new(weights: MethodWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &MethodWeights {
        &self.weights
    }

    /// Combine records; the order of `records` fixes the order of the evidence trail
    pub fn combine(&self, records: &[EvidenceRecord]) -> PolyrouteResult<CombinedResult> {
        let mut groups: BTreeMap<&str, LanguageScore> = BTreeMap::new();

        for record in records {
            if record.language_id.trim().is_empty() {
                return Err(PolyrouteError::invalid_input_field(
                    format!("{} produced evidence without a language", record.strategy),
                    "language_id",
                ));
            }
            let raw = record.raw_confidence;
            if !raw.is_finite() || !(0.0..=1.0).contains(&raw) {
                return Err(PolyrouteError::invalid_input_field(
                    format!("{} reported confidence {}", record.strategy, raw),
                    "raw_confidence",
                ));
            }

            let score = raw * self.weights.weight(record.strategy);
            if score <= 0.0 {
                continue;
            }

            let group = groups.entry(record.language_id.as_str()).or_default();
            group.total += score;
            group.strategies.push(record.strategy);
            group.evidence.push(record.evidence.clone());
        }

        let mut winner: Option<(&str, &LanguageScore)> = None;
        for (language, score) in &groups {
            let better = match winner {
                Some((_, best)) => score.total > best.total,
                None => true,
            };
            if better {
                winner = Some((language, score));
            }
        }

        let Some((language, score)) = winner else {
            return Ok(CombinedResult::unknown());
        };

        tracing::debug!(
            language,
            score = score.total,
            candidates = groups.len(),
            "evidence combined"
        );

        Ok(CombinedResult {
            language_id: language.to_string(),
            confidence: score.total.min(1.0),
            contributing_strategies: score.strategies.clone(),
            evidence_trail: score.evidence.clone(),
        })
    }
}
