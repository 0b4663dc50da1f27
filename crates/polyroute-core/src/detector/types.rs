//! Detection inputs, evidence and results

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PolyrouteError;
use crate::registry::{GENERAL_CATEGORY, GENERAL_SPECIALIST, UNKNOWN_LANGUAGE};

/// The six independent detection strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    ExplicitMention,
    CodePattern,
    FileExtension,
    Keyword,
    ProjectStructure,
    TechnicalTerm,
}

impl StrategyKind {
    /// All strategies in evaluation order
    pub const ALL: [StrategyKind; 6] = [
        StrategyKind::ExplicitMention,
        StrategyKind::CodePattern,
        StrategyKind::FileExtension,
        StrategyKind::Keyword,
        StrategyKind::ProjectStructure,
        StrategyKind::TechnicalTerm,
    ];

    /// Stable strategy id
    pub fn id(&self) -> &'static str {
        match self {
            Self::ExplicitMention => "explicit-mention",
            Self::CodePattern => "code-pattern",
            Self::FileExtension => "file-extension",
            Self::Keyword => "keyword",
            Self::ProjectStructure => "project-structure",
            Self::TechnicalTerm => "technical-term",
        }
    }

    /// Reliability weight applied to this strategy's raw confidence
    pub fn default_weight(&self) -> f64 {
        match self {
            Self::ExplicitMention => 1.0,
            Self::FileExtension => 0.95,
            Self::CodePattern => 0.9,
            Self::ProjectStructure => 0.8,
            Self::TechnicalTerm => 0.7,
            Self::Keyword => 0.6,
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for StrategyKind {
    type Err = PolyrouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        StrategyKind::ALL
            .into_iter()
            .find(|kind| kind.id() == normalized)
            .ok_or_else(|| {
                PolyrouteError::invalid_input_field(format!("unknown strategy '{}'", s), "strategy")
            })
    }
}

/// Optional context accompanying a request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectionContext {
    /// Code snippet pasted with the request
    #[serde(default)]
    pub code: Option<String>,
    /// Paths of files the request is about
    #[serde(default)]
    pub file_paths: Vec<String>,
    /// Marker file name → whether it is present in the project
    #[serde(default)]
    pub project_structure: BTreeMap<String, bool>,
}

impl DetectionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_file_path(mut self, path: impl Into<String>) -> Self {
        self.file_paths.push(path.into());
        self
    }

    pub fn with_file_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.file_paths.extend(paths.into_iter().map(Into::into));
        self
    }

    pub fn with_marker(mut self, file_name: impl Into<String>, present: bool) -> Self {
        self.project_structure.insert(file_name.into(), present);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.code.as_deref().is_none_or(|c| c.trim().is_empty())
            && self.file_paths.is_empty()
            && self.project_structure.is_empty()
    }
}

/// Request text plus context, shared read-only by every strategy
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetectionRequest {
    text: String,
    normalized: String,
    context: DetectionContext,
}

impl DetectionRequest {
    pub fn new(text: impl Into<String>, context: DetectionContext) -> Self {
        let text = text.into();
        let normalized = text.to_lowercase();
        Self {
            text,
            normalized,
            context,
        }
    }

    /// Request text as given
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lowercased request text
    pub fn normalized_text(&self) -> &str {
        &self.normalized
    }

    /// Non-blank code snippet, if any
    pub fn code(&self) -> Option<&str> {
        self.context.code.as_deref().filter(|c| !c.trim().is_empty())
    }

    pub fn file_paths(&self) -> &[String] {
        &self.context.file_paths
    }

    pub fn project_structure(&self) -> &BTreeMap<String, bool> {
        &self.context.project_structure
    }

    pub fn context(&self) -> &DetectionContext {
        &self.context
    }
}

/// One strategy's claim about the request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceRecord {
    pub strategy: StrategyKind,
    pub language_id: String,
    pub raw_confidence: f64,
    pub evidence: String,
}

impl EvidenceRecord {
    pub fn new(
        strategy: StrategyKind,
        language_id: impl Into<String>,
        raw_confidence: f64,
        evidence: impl Into<String>,
    ) -> Self {
        Self {
            strategy,
            language_id: language_id.into(),
            raw_confidence,
            evidence: evidence.into(),
        }
    }
}

/// Winner of evidence combination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedResult {
    pub language_id: String,
    pub confidence: f64,
    pub contributing_strategies: Vec<StrategyKind>,
    pub evidence_trail: Vec<String>,
}

impl CombinedResult {
    /// Nothing detected
    pub fn unknown() -> Self {
        Self {
            language_id: UNKNOWN_LANGUAGE.to_string(),
            confidence: 0.0,
            contributing_strategies: Vec::new(),
            evidence_trail: Vec::new(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.language_id == UNKNOWN_LANGUAGE
    }
}

/// Result handed to every caller of the detector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResponse {
    pub language: String,
    pub confidence: f64,
    pub category: String,
    pub specialist: String,
    pub evidence: String,
    /// Strategies that contributed to the winning language
    #[serde(default)]
    pub methods: Vec<StrategyKind>,
    /// Framework named in the request, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framework: Option<String>,
    /// Set only when detection degraded after an internal failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DetectionResponse {
    /// Message used when no strategy produced evidence
    pub const NO_EVIDENCE: &'static str = "No language patterns detected";

    /// The unknown / general outcome, optionally carrying the failure that caused it
    pub fn fallback(
        category: impl Into<String>,
        specialist: impl Into<String>,
        error: Option<String>,
    ) -> Self {
        Self {
            language: UNKNOWN_LANGUAGE.to_string(),
            confidence: 0.0,
            category: category.into(),
            specialist: specialist.into(),
            evidence: Self::NO_EVIDENCE.to_string(),
            methods: Vec::new(),
            framework: None,
            error,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.language == UNKNOWN_LANGUAGE
    }

    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }
}

impl Default for DetectionResponse {
    fn default() -> Self {
        Self::fallback(GENERAL_CATEGORY, GENERAL_SPECIALIST, None)
    }
}
