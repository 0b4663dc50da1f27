//! `polyroute route`

use std::sync::Arc;

use polyroute_core::error::PolyrouteResult;
use polyroute_core::{DetectorConfig, LanguageDetector, SpecialistRouter};

use crate::args::ContextArgs;
use crate::console::CliConsole;

pub async fn execute(
    config: &DetectorConfig,
    caller: &str,
    text: &str,
    context: ContextArgs,
    json: bool,
    verbose: bool,
) -> PolyrouteResult<()> {
    let router = SpecialistRouter::new(Arc::new(LanguageDetector::from_config(config)?));
    let context = context.into_context()?;
    let outcome = router.route(caller, text, &context).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    let console = CliConsole::new(verbose);
    console.print_header("Routing");
    console.print_routing(&outcome);
    Ok(())
}
