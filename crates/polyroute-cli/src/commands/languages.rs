//! `polyroute languages`

use colored::*;
use polyroute_core::error::{PolyrouteError, PolyrouteResult};
use polyroute_core::{DetectorConfig, PatternRegistry};

use crate::console::CliConsole;

/// List registered languages, optionally restricted to one category
pub fn execute(config: &DetectorConfig, category: Option<&str>) -> PolyrouteResult<()> {
    let registry = PatternRegistry::from_spec(config.registry_spec())?;
    let console = CliConsole::new(true);

    if let Some(category) = category {
        if registry.category(category).is_none() {
            return Err(PolyrouteError::invalid_input_field(
                format!("unknown category '{}'", category),
                "category",
            ));
        }
    }

    let rows: Vec<_> = registry
        .languages()
        .into_iter()
        .filter(|row| category.is_none_or(|c| row.category == c))
        .collect();

    console.print_header(&format!("Languages ({})", rows.len()));
    for row in &rows {
        let extensions = if row.extensions.is_empty() {
            "-".dimmed().to_string()
        } else {
            row.extensions.join(" ")
        };
        println!(
            "  {:<14} {:<12} {:>5.2}  {}",
            row.id.cyan(),
            row.category,
            row.confidence,
            extensions
        );
    }

    console.print_header("Categories");
    for definition in registry.categories() {
        if category.is_some_and(|c| c != definition.category_id()) {
            continue;
        }
        let frameworks: Vec<&str> = definition.framework_names().collect();
        println!(
            "  {:<14} {:<24} {}",
            definition.category_id().cyan(),
            definition.specialist_id().magenta(),
            frameworks.join(", ").dimmed()
        );
    }
    Ok(())
}
