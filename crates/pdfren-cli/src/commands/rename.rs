//! Rename command - rename a batch of documents and package the result.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use pdfren_core::{
    Document, Field, NameSource, NamingPolicy, RenamedEntry, Renamer, ZipArchiver,
};

use super::config::load_config;
use super::PolicyArg;

/// Arguments for the rename command.
#[derive(Args)]
pub struct RenameArgs {
    /// Input files or glob patterns
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Naming policy (default from configuration)
    #[arg(short, long, value_enum)]
    policy: Option<PolicyArg>,

    /// Output archive (default from configuration)
    #[arg(short, long, conflicts_with = "output_dir")]
    output: Option<PathBuf>,

    /// Write renamed files into a directory instead of an archive
    #[arg(short = 'd', long)]
    output_dir: Option<PathBuf>,

    /// Also write a CSV summary of the renaming
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Print the new names without writing anything
    #[arg(long)]
    dry_run: bool,
}

pub async fn run(args: RenameArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let policy = args
        .policy
        .map(NamingPolicy::from)
        .unwrap_or(config.naming.default_policy);

    let files = expand_inputs(&args.inputs)?;
    if files.is_empty() {
        anyhow::bail!("No matching files found for: {}", args.inputs.join(", "));
    }

    info!("Renaming {} files by {}", files.len(), policy);

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("=>-"),
    );

    let mut documents = Vec::with_capacity(files.len());
    let mut skipped = Vec::new();
    for path in &files {
        pb.set_message(display_name(path));
        match fs::read(path) {
            Ok(content) => documents.push(Document::new(display_name(path), content)),
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                skipped.push((path.clone(), e.to_string()));
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let renamer = Renamer::new(&config);
    let entries = renamer.rename_batch(documents, policy);

    if args.dry_run {
        print_mapping(&entries);
    } else if let Some(dir) = &args.output_dir {
        write_directory(dir, &entries)?;
        println!(
            "{} Wrote {} files to {}",
            style("✓").green(),
            entries.len(),
            dir.display()
        );
    } else {
        let output = args
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.archive.file_name));
        ZipArchiver::from_config(&config.archive).write_file(&entries, &output)?;
        println!(
            "{} Archive written to {}",
            style("✓").green(),
            output.display()
        );
    }

    if let Some(summary_path) = args.summary.as_ref().filter(|_| !args.dry_run) {
        write_summary(summary_path, &entries)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let fallback = entries
        .iter()
        .filter(|e| e.source == NameSource::Fallback)
        .count();

    println!();
    println!(
        "{} Renamed {} files in {:?}",
        style("✓").green(),
        entries.len(),
        start.elapsed()
    );
    println!(
        "   {} named from fields, {} kept their name, {} skipped",
        style(entries.len() - fallback).green(),
        style(fallback).yellow(),
        style(skipped.len()).red()
    );

    if !skipped.is_empty() {
        println!();
        println!("{}", style("Skipped files:").red());
        for (path, error) in &skipped {
            println!("  - {}: {}", path.display(), error);
        }
    }

    Ok(())
}

/// Expand each input as a glob pattern, keeping literal paths that match
/// nothing so the read error is reported.
fn expand_inputs(inputs: &[String]) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        let matched: Vec<PathBuf> = glob(input)?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();

        if matched.is_empty() {
            debug!("No glob matches for {}", input);
            files.push(PathBuf::from(input));
        } else {
            files.extend(matched);
        }
    }
    Ok(files)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn print_mapping(entries: &[RenamedEntry]) {
    for entry in entries {
        let marker = match entry.source {
            NameSource::Fields => style("→").green(),
            NameSource::Fallback => style("=").yellow(),
        };
        println!("{} {} {}", entry.original_filename, marker, entry.filename);
    }
}

/// Write each entry into `dir`. Existing files are never replaced; the
/// command fails before writing anything if a name is already taken.
fn write_directory(dir: &Path, entries: &[RenamedEntry]) -> anyhow::Result<()> {
    fs::create_dir_all(dir)?;

    let taken: Vec<&str> = entries
        .iter()
        .map(|e| e.filename.as_str())
        .filter(|name| dir.join(name).exists())
        .collect();
    if !taken.is_empty() {
        anyhow::bail!(
            "Refusing to overwrite existing files in {}: {}",
            dir.display(),
            taken.join(", ")
        );
    }

    for entry in entries {
        let path = dir.join(&entry.filename);
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| anyhow::anyhow!("Failed to create {}: {}", path.display(), e))?;
        file.write_all(&entry.content)?;
        debug!("Wrote {}", path.display());
    }
    Ok(())
}

fn write_summary(path: &Path, entries: &[RenamedEntry]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    let mut header = vec!["original_filename", "filename", "source"];
    header.extend(Field::ALL.iter().map(|f| f.as_str()));
    wtr.write_record(&header)?;

    for entry in entries {
        let mut record = vec![
            entry.original_filename.as_str(),
            entry.filename.as_str(),
            entry.source.as_str(),
        ];
        record.extend(Field::ALL.iter().map(|&f| entry.fields.get(f).unwrap_or("")));
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}
