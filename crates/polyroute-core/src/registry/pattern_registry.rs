//! Compiled pattern registry
//!
//! Built once from a [`RegistrySpec`], then shared read-only (usually behind an `Arc`)
//! by every strategy and every concurrent detection call. All regexes are compiled and
//! every table is validated during construction, so a registry that exists is a
//! registry that can serve lookups.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::types::{
    CategorySpec, GENERAL_CATEGORY, GENERAL_SPECIALIST, LanguageSpec, RegistrySpec, SignalRule,
};
use crate::error::{PolyrouteError, PolyrouteResult};

/// A compiled mention pattern
#[derive(Debug, Clone)]
pub struct MentionPattern {
    source: String,
    matcher: fancy_regex::Regex,
}

impl MentionPattern {
    fn compile(source: &str) -> PolyrouteResult<Self> {
        // Lookahead guards such as `java\b(?!script)` need a backtracking engine.
        let matcher =
            fancy_regex::Regex::new(&format!(r"(?i)\b(?:{})\b", source)).map_err(|wrapped| {
                // Report positions against the pattern as declared when it fails on its own
                let reason = match fancy_regex::Regex::new(source) {
                    Err(e) => e.to_string(),
                    Ok(_) => wrapped.to_string(),
                };
                PolyrouteError::registry_entry(format!("invalid pattern: {}", reason), source)
            })?;
        Ok(Self {
            source: source.to_string(),
            matcher,
        })
    }

    /// Pattern as declared
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Word-bounded, case-insensitive match
    pub fn is_match(&self, text: &str) -> PolyrouteResult<bool> {
        self.matcher.is_match(text).map_err(|e| {
            PolyrouteError::strategy(
                "explicit-mention",
                format!("pattern '{}' failed: {}", self.source, e),
            )
        })
    }
}

/// One language and its compiled mention patterns
#[derive(Debug, Clone)]
pub struct PatternEntry {
    language_id: String,
    patterns: Vec<MentionPattern>,
    base_confidence: f64,
    category_id: String,
}

impl PatternEntry {
    pub fn language_id(&self) -> &str {
        &self.language_id
    }

    pub fn patterns(&self) -> &[MentionPattern] {
        &self.patterns
    }

    pub fn base_confidence(&self) -> f64 {
        self.base_confidence
    }

    pub fn category_id(&self) -> &str {
        &self.category_id
    }

    /// First pattern of this entry matching `text`, in declaration order
    pub fn first_match(&self, text: &str) -> PolyrouteResult<Option<&MentionPattern>> {
        for pattern in &self.patterns {
            if pattern.is_match(text)? {
                return Ok(Some(pattern));
            }
        }
        Ok(None)
    }
}

/// A category, its members and its specialist
#[derive(Debug, Clone)]
pub struct CategoryDefinition {
    category_id: String,
    member_language_ids: Vec<String>,
    frameworks: Vec<(String, regex::Regex)>,
    specialist_id: String,
}

impl CategoryDefinition {
    fn compile(spec: &CategorySpec) -> PolyrouteResult<Self> {
        let frameworks = spec
            .frameworks
            .iter()
            .map(|name| -> PolyrouteResult<(String, regex::Regex)> {
                let matcher = regex::Regex::new(&format!(r"(?i)\b{}\b", regex::escape(name)))?;
                Ok((name.clone(), matcher))
            })
            .collect::<PolyrouteResult<Vec<_>>>()?;

        Ok(Self {
            category_id: spec.id.clone(),
            member_language_ids: spec.languages.clone(),
            frameworks,
            specialist_id: spec.specialist.clone(),
        })
    }

    pub fn category_id(&self) -> &str {
        &self.category_id
    }

    pub fn member_language_ids(&self) -> &[String] {
        &self.member_language_ids
    }

    pub fn specialist_id(&self) -> &str {
        &self.specialist_id
    }

    pub fn framework_names(&self) -> impl Iterator<Item = &str> {
        self.frameworks.iter().map(|(name, _)| name.as_str())
    }

    fn framework_in(&self, text: &str) -> Option<&str> {
        self.frameworks
            .iter()
            .find(|(_, matcher)| matcher.is_match(text))
            .map(|(name, _)| name.as_str())
    }
}

/// Compiled code-snippet syntax rule
#[derive(Debug, Clone)]
pub struct SyntaxRule {
    pub source: String,
    pub matcher: regex::Regex,
    pub language_id: String,
    pub confidence: f64,
}

/// Phrase or file-name rule (keywords, technical terms, project markers)
#[derive(Debug, Clone, PartialEq)]
pub struct PhraseRule {
    pub phrase: String,
    pub language_id: String,
    pub confidence: f64,
}

/// Summary row for listings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageSummary {
    pub id: String,
    pub category: String,
    pub confidence: f64,
    pub patterns: usize,
    pub extensions: Vec<String>,
}

/// Immutable registry of everything the detection strategies consult
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    entries: Vec<PatternEntry>,
    extensions: HashMap<String, String>,
    categories: Vec<CategoryDefinition>,
    fallback: CategoryDefinition,
    category_index: HashMap<String, usize>,
    syntax_rules: Vec<SyntaxRule>,
    keywords: Vec<PhraseRule>,
    project_markers: Vec<PhraseRule>,
    technical_terms: Vec<PhraseRule>,
}

impl PatternRegistry {
    /// Registry built from the shipped data
    pub fn builtin() -> PolyrouteResult<Self> {
        Self::from_spec(RegistrySpec::builtin())
    }

    /// Validate and compile a registry description
    pub fn from_spec(spec: RegistrySpec) -> PolyrouteResult<Self> {
        let entries = compile_languages(&spec.languages)?;
        let extensions = compile_extensions(&spec)?;
        let (categories, fallback) = compile_categories(&spec.categories)?;
        let category_index = index_categories(&entries, &categories);

        let syntax_rules = spec
            .syntax_patterns
            .iter()
            .map(|rule| -> PolyrouteResult<SyntaxRule> {
                check_rule("syntax_patterns", rule)?;
                let matcher = regex::RegexBuilder::new(&rule.signal)
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| {
                        PolyrouteError::registry_entry(
                            format!("invalid syntax pattern: {}", e),
                            rule.signal.clone(),
                        )
                    })?;
                Ok(SyntaxRule {
                    source: rule.signal.clone(),
                    matcher,
                    language_id: rule.language.clone(),
                    confidence: rule.confidence,
                })
            })
            .collect::<PolyrouteResult<Vec<_>>>()?;

        let registry = Self {
            entries,
            extensions,
            categories,
            fallback,
            category_index,
            syntax_rules,
            keywords: compile_phrases("keywords", &spec.keywords, true)?,
            project_markers: compile_phrases("project_markers", &spec.project_markers, false)?,
            technical_terms: compile_phrases("technical_terms", &spec.technical_terms, true)?,
        };

        tracing::info!(
            languages = registry.entries.len(),
            extensions = registry.extensions.len(),
            categories = registry.categories.len(),
            "pattern registry ready"
        );

        Ok(registry)
    }

    /// Pattern entries in declaration order
    pub fn entries(&self) -> &[PatternEntry] {
        &self.entries
    }

    /// Entry for a language id
    pub fn entry(&self, language_id: &str) -> Option<&PatternEntry> {
        self.entries.iter().find(|e| e.language_id == language_id)
    }

    /// Every entry with at least one pattern matching `normalized_text`
    pub fn lookup_by_text(&self, normalized_text: &str) -> PolyrouteResult<Vec<&PatternEntry>> {
        let mut matched = Vec::new();
        for entry in &self.entries {
            if entry.first_match(normalized_text)?.is_some() {
                matched.push(entry);
            }
        }
        Ok(matched)
    }

    /// First entry and pattern matching `normalized_text`, in declaration order
    pub fn first_text_match(
        &self,
        normalized_text: &str,
    ) -> PolyrouteResult<Option<(&PatternEntry, &MentionPattern)>> {
        for entry in &self.entries {
            if let Some(pattern) = entry.first_match(normalized_text)? {
                return Ok(Some((entry, pattern)));
            }
        }
        Ok(None)
    }

    /// Language for an extension; case-insensitive, leading dot optional
    pub fn lookup_by_extension(&self, ext: &str) -> Option<&str> {
        let normalized = normalize_extension(ext)?;
        self.extensions.get(&normalized).map(String::as_str)
    }

    /// Language for a file path, by its final extension
    pub fn lookup_by_path(&self, path: &str) -> Option<(String, &str)> {
        let ext = Path::new(path).extension()?.to_str()?;
        let normalized = normalize_extension(ext)?;
        let language = self.extensions.get(&normalized)?;
        Some((normalized, language.as_str()))
    }

    /// Category of a language, or the reserved general category
    pub fn category_of(&self, language_id: &str) -> &str {
        match self.category_index.get(language_id) {
            Some(&index) => &self.categories[index].category_id,
            None => &self.fallback.category_id,
        }
    }

    /// Specialist of a category, or the general specialist
    pub fn specialist_of(&self, category_id: &str) -> &str {
        self.category(category_id)
            .map(|c| c.specialist_id.as_str())
            .unwrap_or(&self.fallback.specialist_id)
    }

    /// Category definition by id (never the reserved entry)
    pub fn category(&self, category_id: &str) -> Option<&CategoryDefinition> {
        self.categories.iter().find(|c| c.category_id == category_id)
    }

    /// Categories in declaration order, without the reserved entry
    pub fn categories(&self) -> &[CategoryDefinition] {
        &self.categories
    }

    /// Id of the reserved fallback category
    pub fn fallback_category(&self) -> &str {
        &self.fallback.category_id
    }

    /// Specialist of the reserved fallback category
    pub fn fallback_specialist(&self) -> &str {
        &self.fallback.specialist_id
    }

    /// First framework mentioned in `text`, preferring the given category's frameworks
    pub fn framework_mention(&self, text: &str, preferred_category: &str) -> Option<&str> {
        if let Some(found) = self
            .category(preferred_category)
            .and_then(|c| c.framework_in(text))
        {
            return Some(found);
        }
        self.categories.iter().find_map(|c| c.framework_in(text))
    }

    pub fn syntax_rules(&self) -> &[SyntaxRule] {
        &self.syntax_rules
    }

    pub fn keywords(&self) -> &[PhraseRule] {
        &self.keywords
    }

    pub fn project_markers(&self) -> &[PhraseRule] {
        &self.project_markers
    }

    pub fn technical_terms(&self) -> &[PhraseRule] {
        &self.technical_terms
    }

    /// One summary row per pattern entry, in declaration order
    pub fn languages(&self) -> Vec<LanguageSummary> {
        let mut by_language: HashMap<&str, Vec<String>> = HashMap::new();
        for (ext, language) in &self.extensions {
            by_language.entry(language.as_str()).or_default().push(ext.clone());
        }

        self.entries
            .iter()
            .map(|entry| {
                let mut extensions = by_language
                    .remove(entry.language_id.as_str())
                    .unwrap_or_default();
                extensions.sort();
                LanguageSummary {
                    id: entry.language_id.clone(),
                    category: self.category_of(&entry.language_id).to_string(),
                    confidence: entry.base_confidence,
                    patterns: entry.patterns.len(),
                    extensions,
                }
            })
            .collect()
    }
}

fn normalize_extension(ext: &str) -> Option<String> {
    let trimmed = ext.trim().trim_start_matches('.');
    if trimmed.is_empty() {
        return None;
    }
    Some(format!(".{}", trimmed.to_lowercase()))
}

fn check_confidence(value: f64, entry: &str) -> PolyrouteResult<()> {
    if !value.is_finite() || value <= 0.0 || value > 1.0 {
        return Err(PolyrouteError::registry_entry(
            format!("confidence {} outside (0, 1]", value),
            entry,
        ));
    }
    Ok(())
}

fn check_rule(table: &str, rule: &SignalRule) -> PolyrouteResult<()> {
    let entry = format!("{}: {}", table, rule.signal);
    if rule.signal.trim().is_empty() {
        return Err(PolyrouteError::registry_entry("empty signal", entry));
    }
    if rule.language.trim().is_empty() {
        return Err(PolyrouteError::registry_entry("empty language id", entry));
    }
    check_confidence(rule.confidence, &entry)
}

fn compile_languages(specs: &[LanguageSpec]) -> PolyrouteResult<Vec<PatternEntry>> {
    let mut seen = HashSet::new();
    let mut entries = Vec::with_capacity(specs.len());

    for spec in specs {
        if spec.id.trim().is_empty() {
            return Err(PolyrouteError::registry("language entry with empty id"));
        }
        if !seen.insert(spec.id.as_str()) {
            return Err(PolyrouteError::registry_entry(
                "duplicate language id",
                spec.id.clone(),
            ));
        }
        if spec.patterns.is_empty() {
            return Err(PolyrouteError::registry_entry(
                "language entry has no patterns",
                spec.id.clone(),
            ));
        }
        check_confidence(spec.confidence, &spec.id)?;

        let patterns = spec
            .patterns
            .iter()
            .map(|p| {
                MentionPattern::compile(p)
                    .map_err(|e| e.with_context(format!("language '{}'", spec.id)))
            })
            .collect::<PolyrouteResult<Vec<_>>>()?;

        entries.push(PatternEntry {
            language_id: spec.id.clone(),
            patterns,
            base_confidence: spec.confidence,
            category_id: spec.category.clone(),
        });
    }

    Ok(entries)
}

fn compile_extensions(spec: &RegistrySpec) -> PolyrouteResult<HashMap<String, String>> {
    let mut table = HashMap::with_capacity(spec.extensions.len());

    for row in &spec.extensions {
        if !row.extension.starts_with('.') {
            return Err(PolyrouteError::registry_entry(
                "extension must start with '.'",
                row.extension.clone(),
            ));
        }
        let normalized = normalize_extension(&row.extension).ok_or_else(|| {
            PolyrouteError::registry_entry("empty extension", row.extension.clone())
        })?;
        if row.language.trim().is_empty() {
            return Err(PolyrouteError::registry_entry(
                "extension mapped to empty language id",
                row.extension.clone(),
            ));
        }
        if let Some(previous) = table.insert(normalized.clone(), row.language.clone()) {
            tracing::debug!(
                extension = %normalized,
                previous = %previous,
                current = %row.language,
                "extension remapped, last mapping wins"
            );
        }
    }

    Ok(table)
}

fn compile_categories(
    specs: &[CategorySpec],
) -> PolyrouteResult<(Vec<CategoryDefinition>, CategoryDefinition)> {
    let mut seen = HashSet::new();
    let mut categories = Vec::with_capacity(specs.len());
    let mut fallback = None;

    for spec in specs {
        if spec.id.trim().is_empty() {
            return Err(PolyrouteError::registry("category with empty id"));
        }
        if !seen.insert(spec.id.as_str()) {
            return Err(PolyrouteError::registry_entry(
                "duplicate category id",
                spec.id.clone(),
            ));
        }
        if spec.specialist.trim().is_empty() {
            return Err(PolyrouteError::registry_entry(
                "category has no specialist",
                spec.id.clone(),
            ));
        }

        let definition = CategoryDefinition::compile(spec)?;
        if spec.id == GENERAL_CATEGORY {
            fallback = Some(definition);
        } else {
            categories.push(definition);
        }
    }

    let fallback = match fallback {
        Some(definition) => definition,
        None => CategoryDefinition::compile(&CategorySpec {
            id: GENERAL_CATEGORY.to_string(),
            languages: Vec::new(),
            frameworks: Vec::new(),
            specialist: GENERAL_SPECIALIST.to_string(),
        })?,
    };

    Ok((categories, fallback))
}

/// Language → category position. Membership lists win in declaration order, then a category
/// id resolves to itself, then the category named on the pattern entry if it is registered.
fn index_categories(
    entries: &[PatternEntry],
    categories: &[CategoryDefinition],
) -> HashMap<String, usize> {
    let mut index = HashMap::new();

    for (position, category) in categories.iter().enumerate() {
        for language in &category.member_language_ids {
            index.entry(language.clone()).or_insert(position);
        }
    }

    for (position, category) in categories.iter().enumerate() {
        index.entry(category.category_id.clone()).or_insert(position);
    }

    for entry in entries {
        if let Some(position) = categories
            .iter()
            .position(|c| c.category_id == entry.category_id)
        {
            index.entry(entry.language_id.clone()).or_insert(position);
        }
    }

    index
}

fn compile_phrases(
    table: &str,
    rules: &[SignalRule],
    lowercase: bool,
) -> PolyrouteResult<Vec<PhraseRule>> {
    rules
        .iter()
        .map(|rule| -> PolyrouteResult<PhraseRule> {
            check_rule(table, rule)?;
            let phrase = if lowercase {
                rule.signal.to_lowercase()
            } else {
                rule.signal.clone()
            };
            Ok(PhraseRule {
                phrase,
                language_id: rule.language.clone(),
                confidence: rule.confidence,
            })
        })
        .collect()
}
