//! polyroute CLI application
//!
//! Detects the programming language of a request and reports the specialist it
//! should be routed to.
//!
//! # Installation
//!
//! ```bash
//! cargo install --path crates/polyroute-cli
//! ```
//!
//! # Commands
//!
//! - `polyroute detect "<request>"` runs detection and prints the response
//! - `polyroute route <caller> "<request>"` adds the caller's specialist key
//! - `polyroute languages` lists the registry
//! - `polyroute demo` runs a set of sample requests
//! - `polyroute config show|validate|init` manages configuration files
//!
//! Context flags (`--code`, `--code-file`, `--file`, `--marker`) feed the code,
//! file-extension and project-structure strategies.

mod args;
mod commands;
mod console;
mod logging;
mod router;

use clap::Parser;
use polyroute_core::error::PolyrouteResult;

pub use args::{Cli, Commands, ConfigAction, ContextArgs};

#[tokio::main]
async fn main() -> PolyrouteResult<()> {
    let cli = Cli::parse();
    router::route(cli).await
}
