//! Inspect command - show the fields extracted from one document.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use serde::Serialize;

use pdfren_core::{
    ExtractionResult, Field, FieldSetExtractor, NameSynthesizer, NamingPolicy, RuleBasedExtractor,
};

use super::config::load_config;
use super::PolicyArg;

/// Arguments for the inspect command.
#[derive(Args)]
pub struct InspectArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Naming policy used for the proposed name (default from configuration)
    #[arg(short, long, value_enum)]
    policy: Option<PolicyArg>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Show extraction confidence scores
    #[arg(long)]
    show_confidence: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

#[derive(Serialize)]
struct Report<'a> {
    file: String,
    policy: NamingPolicy,
    proposed_name: String,
    #[serde(flatten)]
    extraction: &'a ExtractionResult,
}

pub async fn run(args: InspectArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let policy = args
        .policy
        .map(NamingPolicy::from)
        .unwrap_or(config.naming.default_policy);

    let file = args
        .input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let data = fs::read(&args.input)?;

    let extractor = RuleBasedExtractor::from_config(&config.extraction);
    let result = extractor.extract(&data, &Field::ALL);
    let name = NameSynthesizer::from_config(&config.naming).synthesize(policy, &result.fields, &file);

    match args.format {
        OutputFormat::Json => {
            let mut report = serde_json::to_value(Report {
                file,
                policy,
                proposed_name: name.filename,
                extraction: &result,
            })?;
            if !args.show_confidence {
                if let Some(obj) = report.as_object_mut() {
                    obj.remove("confidence");
                    obj.remove("processing_time_ms");
                }
            }
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            println!("{}", style(&file).bold());
            for field in Field::ALL {
                let value = match result.fields.get(field) {
                    Some(v) => style(v.to_string()).green(),
                    None => style("-".to_string()).dim(),
                };
                match result.confidence.get(&field).filter(|_| args.show_confidence) {
                    Some(c) => println!("  {:<16} {} ({:.0}%)", field.label(), value, c * 100.0),
                    None => println!("  {:<16} {}", field.label(), value),
                }
            }
            println!();
            println!(
                "{} {} → {} ({})",
                style("ℹ").blue(),
                policy,
                name.filename,
                name.source.as_str()
            );
            for warning in &result.warnings {
                println!("{} {}", style("!").yellow(), warning);
            }
            if args.show_confidence {
                println!(
                    "{} Processing time: {}ms",
                    style("ℹ").blue(),
                    result.processing_time_ms
                );
            }
        }
    }

    Ok(())
}
