//! Pattern registry
//!
//! Static configuration consulted by every detection strategy: language mention patterns,
//! the file extension table, categories with their specialists, and the per-strategy
//! signal tables.

mod builtin;
mod pattern_registry;
mod types;

pub use builtin::{
    builtin_categories, builtin_extensions, builtin_keywords, builtin_languages,
    builtin_project_markers, builtin_syntax_patterns, builtin_technical_terms,
};
pub use pattern_registry::{
    CategoryDefinition, LanguageSummary, MentionPattern, PatternEntry, PatternRegistry,
    PhraseRule, SyntaxRule,
};
pub use types::{
    CategorySpec, ExtensionSpec, GENERAL_CATEGORY, GENERAL_SPECIALIST, LanguageSpec,
    RegistrySpec, SignalRule, UNKNOWN_LANGUAGE,
};
