//! storylens command-line analyzer.
//!
//! Reads text from a file argument (or stdin when no file is given), runs
//! the full analysis pipeline, and prints the result as pretty JSON.
//!
//! # Environment Variables
//!
//! - `RUST_LOG` — Log filter (default: "info")
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin analyze -- story.txt
//! cat story.txt | cargo run --bin analyze
//! cargo run --bin analyze -- --guidance narrative_fiction story.txt
//! cargo run --bin analyze -- --config analyzer.yaml story.txt
//! ```

use std::io::Read;

use anyhow::{bail, Context, Result};

use storylens::utilities::config::AnalyzerConfig;
use storylens::{AnalysisOrchestrator, UserGuidance};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut guidance: Option<UserGuidance> = None;
    let mut config = AnalyzerConfig::default();
    let mut input_path: Option<String> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--guidance" => {
                let value = args.next().context("--guidance requires a value")?;
                guidance = Some(parse_guidance(&value)?);
            }
            "--config" => {
                let path = args.next().context("--config requires a path")?;
                config = AnalyzerConfig::from_yaml_file(&path)
                    .with_context(|| format!("failed to load config from {}", path))?;
            }
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            other if other.starts_with('-') => bail!("unknown flag: {}", other),
            other => input_path = Some(other.to_string()),
        }
    }

    let text = match input_path {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };

    let orchestrator = AnalysisOrchestrator::with_config(config);
    let outcome = orchestrator.analyze_character_text(&text, guidance);

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}

fn parse_guidance(value: &str) -> Result<UserGuidance> {
    // Accept the wire names used in clarification options.
    serde_json::from_value(serde_json::Value::String(value.to_string())).with_context(|| {
        format!(
            "unknown guidance '{}'; expected one of character_description, narrative_fiction, \
             philosophical_conceptual, poetic_content, mixed_content",
            value
        )
    })
}

fn print_usage() {
    println!("usage: analyze [--guidance <kind>] [--config <yaml>] [file]");
    println!();
    println!("Reads text from <file> or stdin and prints the analysis as JSON.");
    println!("Guidance kinds: character_description, narrative_fiction,");
    println!("  philosophical_conceptual, poetic_content, mixed_content");
}
