//! `polyroute demo`: canned requests across every category

use colored::*;
use polyroute_core::error::PolyrouteResult;
use polyroute_core::{DetectionContext, DetectorConfig, LanguageDetector};

use crate::console::{CliConsole, colored_confidence};

struct Sample {
    text: &'static str,
    file: Option<&'static str>,
    code: Option<&'static str>,
}

const fn text(text: &'static str) -> Sample {
    Sample {
        text,
        file: None,
        code: None,
    }
}

const SAMPLES: &[Sample] = &[
    text("create a React component with TypeScript and styled-components"),
    text("build a Vue.js dashboard with Vuex state management"),
    text("create a Python REST API using FastAPI with async/await"),
    text("build Go HTTP server with goroutines for concurrency"),
    text("develop Rust web service with Actix-web framework"),
    text("create Flutter app with Dart for cross-platform mobile"),
    text("perform statistical analysis in R with ggplot2"),
    text("optimize C++ algorithm for real-time performance"),
    text("create Terraform configuration for AWS infrastructure"),
    text("implement pure functional algorithm in Haskell"),
    text("develop Ethereum smart contract in Solidity"),
    text("write Godot game logic in GDScript"),
    Sample {
        text: "fix this bug",
        file: None,
        code: Some("func main() {\n\tfmt.Println(\"hello\")\n}"),
    },
    Sample {
        text: "why does this fail to compile",
        file: Some("src/lib.rs"),
        code: None,
    },
    text("can you help me with this"),
];

pub async fn execute(config: &DetectorConfig, verbose: bool) -> PolyrouteResult<()> {
    let detector = LanguageDetector::from_config(config)?;
    let console = CliConsole::new(verbose);

    console.print_header("Detection demo");
    for sample in SAMPLES {
        let mut context = DetectionContext::new();
        if let Some(file) = sample.file {
            context = context.with_file_path(file);
        }
        if let Some(code) = sample.code {
            context = context.with_code(code);
        }

        let response = detector.detect(sample.text, &context).await;
        println!("{}", sample.text.bold());
        println!(
            "  {:<12} {:>7}  {}",
            response.language.cyan(),
            colored_confidence(response.confidence),
            response.specialist.magenta()
        );
        console.info(&response.evidence);
    }
    console.print_separator();
    console.success(&format!("{} sample requests", SAMPLES.len()));
    Ok(())
}
