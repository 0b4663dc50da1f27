//! Command routing logic for CLI

use std::path::Path;

use polyroute_core::config::{DetectorConfig, LoggingConfig, load_config_with_file};
use polyroute_core::error::PolyrouteResult;

use crate::args::{Cli, Commands, ConfigAction};
use crate::commands;
use crate::logging::init_logging;

/// Route CLI commands to their respective handlers
pub async fn route(cli: Cli) -> PolyrouteResult<()> {
    let config_file = cli.config_file.as_deref();
    let verbose = cli.verbose;
    let command = cli.command.name();

    let result = match cli.command {
        Commands::Detect {
            text,
            context,
            json,
        } => {
            let config = prepare(config_file, verbose)?;
            commands::detect::execute(&config, &text, context, json, verbose).await
        }
        Commands::Route {
            caller,
            text,
            context,
            json,
        } => {
            let config = prepare(config_file, verbose)?;
            commands::route::execute(&config, &caller, &text, context, json, verbose).await
        }
        Commands::Languages { category } => {
            let config = prepare(config_file, verbose)?;
            commands::languages::execute(&config, category.as_deref())
        }
        Commands::Demo => {
            let config = prepare(config_file, verbose)?;
            commands::demo::execute(&config, verbose).await
        }
        Commands::Config { action } => {
            // Config commands report load failures themselves
            init_logging(&LoggingConfig::default(), verbose);
            route_config(action, config_file, verbose).await
        }
    };

    if let Err(e) = &result {
        tracing::debug!(command, error = %e, "command failed");
    }
    result
}

/// Load configuration and install logging from it
fn prepare(config_file: Option<&Path>, verbose: bool) -> PolyrouteResult<DetectorConfig> {
    let config = load_config_with_file(config_file)?;
    init_logging(&config.logging, verbose);
    tracing::debug!(
        config_file = ?config_file,
        threshold = config.specialist_threshold,
        "configuration ready"
    );
    Ok(config)
}

async fn route_config(
    action: ConfigAction,
    config_file: Option<&Path>,
    verbose: bool,
) -> PolyrouteResult<()> {
    match action {
        ConfigAction::Show => commands::config::show(config_file, verbose),
        ConfigAction::Validate => commands::config::validate(config_file),
        ConfigAction::Init { path, force } => commands::config::init(&path, force).await,
    }
}
