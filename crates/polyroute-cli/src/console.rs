//! CLI console utilities

use colored::*;
use polyroute_core::{DetectionResponse, RoutingOutcome};

/// CLI console for formatted output
pub struct CliConsole {
    verbose: bool,
}

impl CliConsole {
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Print an info message (verbose only)
    pub fn info(&self, message: &str) {
        if self.verbose {
            println!("{} {}", "ℹ".blue().bold(), message);
        }
    }

    pub fn success(&self, message: &str) {
        println!("{} {}", "✓".green().bold(), message.green());
    }

    pub fn warn(&self, message: &str) {
        println!("{} {}", "⚠".yellow().bold(), message.yellow());
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red().bold(), message.red());
    }

    pub fn print_header(&self, title: &str) {
        println!();
        println!("{}", title.bold().underline());
        println!("{}", "=".repeat(title.len()).dimmed());
    }

    pub fn print_separator(&self) {
        println!("{}", "-".repeat(50).dimmed());
    }

    /// Print a labelled value
    pub fn field(&self, label: &str, value: impl std::fmt::Display) {
        println!("  {:<12} {}", format!("{}:", label).dimmed(), value);
    }

    pub fn print_detection(&self, response: &DetectionResponse) {
        self.field("Language", response.language.cyan().bold());
        self.field("Confidence", colored_confidence(response.confidence));
        self.field("Category", &response.category);
        self.field("Specialist", response.specialist.magenta());
        if let Some(framework) = &response.framework {
            self.field("Framework", framework);
        }
        if !response.methods.is_empty() {
            let methods: Vec<String> = response.methods.iter().map(|m| m.to_string()).collect();
            self.field("Methods", methods.join(", "));
        }
        self.field("Evidence", response.evidence.dimmed());
        if let Some(error) = &response.error {
            self.warn(&format!("Detection degraded: {}", error));
        }
    }

    pub fn print_routing(&self, outcome: &RoutingOutcome) {
        self.field("Caller", &outcome.caller_id);
        self.field("Route", outcome.specialist_key.green().bold());
        self.print_detection(&outcome.detection);
        self.info(&format!("Processed in {} ms", outcome.processing_time_ms));
    }
}

/// Confidence as a percentage, coloured by how it compares with the routing threshold
pub fn colored_confidence(confidence: f64) -> ColoredString {
    let text = format!("{:.1}%", confidence * 100.0);
    if confidence >= 0.8 {
        text.green()
    } else if confidence >= 0.3 {
        text.yellow()
    } else {
        text.red()
    }
}
