//! `polyroute detect`

use polyroute_core::error::PolyrouteResult;
use polyroute_core::{DetectorConfig, LanguageDetector};

use crate::args::ContextArgs;
use crate::console::CliConsole;

pub async fn execute(
    config: &DetectorConfig,
    text: &str,
    context: ContextArgs,
    json: bool,
    verbose: bool,
) -> PolyrouteResult<()> {
    let detector = LanguageDetector::from_config(config)?;
    let context = context.into_context()?;
    let response = detector.detect(text, &context).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    let console = CliConsole::new(verbose);
    console.print_header("Detection");
    console.print_detection(&response);
    Ok(())
}
