//! Declarative registry data
//!
//! These types describe the registry as plain data so it can be written in Rust
//! ([`RegistrySpec::builtin`]) or loaded from a configuration file. Nothing here is
//! compiled or validated; that happens in [`PatternRegistry::from_spec`].
//!
//! [`PatternRegistry::from_spec`]: super::PatternRegistry::from_spec

use serde::{Deserialize, Serialize};

/// Reserved language id for "nothing detected"
pub const UNKNOWN_LANGUAGE: &str = "unknown";

/// Reserved category id used when a language has no category
pub const GENERAL_CATEGORY: &str = "general";

/// Specialist id of the reserved general category
pub const GENERAL_SPECIALIST: &str = "general-specialist";

/// One language with its mention patterns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageSpec {
    /// Unique language id (e.g. `python`)
    pub id: String,
    /// Regex fragments, tried in order, matched word-bounded against lowercased text
    pub patterns: Vec<String>,
    /// Base confidence in (0, 1]
    pub confidence: f64,
    /// Category named by this entry, used when no category lists the language
    pub category: String,
}

/// File extension mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionSpec {
    /// Extension including the leading dot
    pub extension: String,
    /// Language the extension maps to
    pub language: String,
}

/// Category and the specialist that handles it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySpec {
    pub id: String,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub frameworks: Vec<String>,
    pub specialist: String,
}

/// A fixed signal mapped straight to a language (or category) with a confidence.
///
/// The meaning of `signal` depends on the table holding the rule: a regex for syntax
/// shapes, a lowercase phrase for keywords and technical terms, a file name for
/// project markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalRule {
    pub signal: String,
    pub language: String,
    pub confidence: f64,
}

impl SignalRule {
    pub fn new(signal: impl Into<String>, language: impl Into<String>, confidence: f64) -> Self {
        Self {
            signal: signal.into(),
            language: language.into(),
            confidence,
        }
    }
}

/// Complete registry description
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrySpec {
    #[serde(default)]
    pub languages: Vec<LanguageSpec>,
    #[serde(default)]
    pub extensions: Vec<ExtensionSpec>,
    #[serde(default)]
    pub categories: Vec<CategorySpec>,
    #[serde(default)]
    pub syntax_patterns: Vec<SignalRule>,
    #[serde(default)]
    pub keywords: Vec<SignalRule>,
    #[serde(default)]
    pub project_markers: Vec<SignalRule>,
    #[serde(default)]
    pub technical_terms: Vec<SignalRule>,
}

impl RegistrySpec {
    /// Layer `other` on top of this spec.
    ///
    /// Languages and categories with an existing id are replaced in place so declaration
    /// order is kept; new ids are appended. Extensions and signal rules are appended, so a
    /// repeated extension resolves to the later mapping.
    pub fn merge(&mut self, other: RegistrySpec) {
        for language in other.languages {
            match self.languages.iter_mut().find(|l| l.id == language.id) {
                Some(existing) => *existing = language,
                None => self.languages.push(language),
            }
        }

        for category in other.categories {
            match self.categories.iter_mut().find(|c| c.id == category.id) {
                Some(existing) => *existing = category,
                None => self.categories.push(category),
            }
        }

        self.extensions.extend(other.extensions);
        self.syntax_patterns.extend(other.syntax_patterns);
        self.keywords.extend(other.keywords);
        self.project_markers.extend(other.project_markers);
        self.technical_terms.extend(other.technical_terms);
    }

    /// Whether the spec carries no data at all
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
            && self.extensions.is_empty()
            && self.categories.is_empty()
            && self.syntax_patterns.is_empty()
            && self.keywords.is_empty()
            && self.project_markers.is_empty()
            && self.technical_terms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn language(id: &str, confidence: f64) -> LanguageSpec {
        LanguageSpec {
            id: id.to_string(),
            patterns: vec![id.to_string()],
            confidence,
            category: "backend".to_string(),
        }
    }

    #[test]
    fn test_merge_replaces_language_in_place() {
        let mut base = RegistrySpec {
            languages: vec![language("python", 0.95), language("go", 0.9)],
            ..Default::default()
        };
        base.merge(RegistrySpec {
            languages: vec![language("python", 0.5), language("nim", 0.9)],
            ..Default::default()
        });

        let ids: Vec<_> = base.languages.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["python", "go", "nim"]);
        assert_eq!(base.languages[0].confidence, 0.5);
    }

    #[test]
    fn test_merge_appends_extensions() {
        let mut base = RegistrySpec {
            extensions: vec![ExtensionSpec {
                extension: ".m".to_string(),
                language: "objectivec".to_string(),
            }],
            ..Default::default()
        };
        base.merge(RegistrySpec {
            extensions: vec![ExtensionSpec {
                extension: ".m".to_string(),
                language: "matlab".to_string(),
            }],
            ..Default::default()
        });
        assert_eq!(base.extensions.len(), 2);
        assert_eq!(base.extensions[1].language, "matlab");
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let spec: RegistrySpec = toml::from_str(
            r#"
[[keywords]]
signal = "game engine"
language = "gaming"
confidence = 0.7
"#,
        )
        .unwrap();
        assert_eq!(spec.keywords.len(), 1);
        assert!(spec.languages.is_empty());
        assert!(!spec.is_empty());
        assert!(RegistrySpec::default().is_empty());
    }
}
