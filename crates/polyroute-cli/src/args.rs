//! CLI argument definitions using clap
//!
//! - polyroute detect "text"            # Detect language and specialist
//! - polyroute route <caller> "text"    # Route to the caller's specialist
//! - polyroute languages                # List registered languages
//! - polyroute demo                     # Run sample requests
//! - polyroute config show|validate|init

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use polyroute_core::error::{PolyrouteError, PolyrouteResult};
use polyroute_core::DetectionContext;

/// Configuration file written by `config init` when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "polyroute.toml";

#[derive(Parser)]
#[command(name = "polyroute")]
#[command(about = "Multi-signal programming language detection and specialist routing")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (JSON, TOML or YAML)
    #[arg(long, global = true, env = "POLYROUTE_CONFIG")]
    pub config_file: Option<PathBuf>,

    /// Enable verbose output and debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Detect the language of a request
    Detect {
        /// Request text
        text: String,

        #[command(flatten)]
        context: ContextArgs,

        /// Print the response as JSON
        #[arg(long)]
        json: bool,
    },

    /// Detect and derive a caller-specific specialist key
    Route {
        /// Caller identifier used as the key prefix
        caller: String,

        /// Request text
        text: String,

        #[command(flatten)]
        context: ContextArgs,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// List registered languages
    Languages {
        /// Only show languages in this category
        #[arg(long)]
        category: Option<String>,
    },

    /// Run a set of sample requests through the detector
    Demo,

    /// Manage configuration files
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

impl Commands {
    /// Subcommand name as typed on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Self::Detect { .. } => "detect",
            Self::Route { .. } => "route",
            Self::Languages { .. } => "languages",
            Self::Demo => "demo",
            Self::Config { action } => match action {
                ConfigAction::Show => "config show",
                ConfigAction::Validate => "config validate",
                ConfigAction::Init { .. } => "config init",
            },
        }
    }
}

#[derive(Subcommand, Clone)]
pub enum ConfigAction {
    /// Display the effective configuration
    Show,

    /// Validate configuration and build the registry it describes
    Validate,

    /// Create a new configuration file with defaults
    Init {
        /// Path for the new configuration file
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        path: PathBuf,

        /// Overwrite existing file
        #[arg(long)]
        force: bool,
    },
}

/// Optional context shared by `detect` and `route`
#[derive(Args, Debug, Clone, Default)]
pub struct ContextArgs {
    /// Code snippet to inspect
    #[arg(long, conflicts_with = "code_file")]
    pub code: Option<String>,

    /// Read the code snippet from a file
    #[arg(long)]
    pub code_file: Option<PathBuf>,

    /// File path the request is about (repeatable)
    #[arg(long = "file")]
    pub files: Vec<String>,

    /// Project marker file that is present, e.g. Cargo.toml (repeatable)
    #[arg(long = "marker")]
    pub markers: Vec<String>,
}

impl ContextArgs {
    /// Build the detection context, reading `--code-file` if given
    pub fn into_context(self) -> PolyrouteResult<DetectionContext> {
        let code = match (self.code, self.code_file) {
            (Some(code), _) => Some(code),
            (None, Some(path)) => Some(std::fs::read_to_string(&path).map_err(|e| {
                PolyrouteError::io_with_path(
                    format!("Failed to read code file: {}", e),
                    path.display().to_string(),
                )
            })?),
            (None, None) => None,
        };

        let mut context = DetectionContext::new().with_file_paths(self.files);
        if let Some(code) = code {
            context = context.with_code(code);
        }
        for marker in self.markers {
            context = context.with_marker(marker, true);
        }
        Ok(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::TempDir;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_detect_with_context() {
        let cli = Cli::try_parse_from([
            "polyroute",
            "detect",
            "fix this bug",
            "--file",
            "main.go",
            "--marker",
            "go.mod",
            "--json",
        ])
        .unwrap();

        match cli.command {
            Commands::Detect {
                text,
                context,
                json,
            } => {
                assert_eq!(text, "fix this bug");
                assert!(json);
                let context = context.into_context().unwrap();
                assert_eq!(context.file_paths, vec!["main.go"]);
                assert_eq!(context.project_structure.get("go.mod"), Some(&true));
            }
            _ => panic!("expected detect"),
        }
    }

    #[test]
    fn test_command_names() {
        let cli = Cli::try_parse_from(["polyroute", "route", "nova", "hi"]).unwrap();
        assert_eq!(cli.command.name(), "route");
        let cli = Cli::try_parse_from(["polyroute", "config", "init", "--force"]).unwrap();
        assert_eq!(cli.command.name(), "config init");
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["polyroute", "languages", "--verbose"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_code_file_is_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("main.go");
        std::fs::write(&path, "package main").unwrap();

        let args = ContextArgs {
            code_file: Some(path),
            ..Default::default()
        };
        let context = args.into_context().unwrap();
        assert_eq!(context.code.as_deref(), Some("package main"));
    }

    #[test]
    fn test_missing_code_file_is_an_error() {
        let args = ContextArgs {
            code_file: Some(PathBuf::from("/definitely/not/here.go")),
            ..Default::default()
        };
        let err = args.into_context().unwrap_err();
        assert_eq!(err.error_code(), "POLYROUTE_IO");
    }
}
