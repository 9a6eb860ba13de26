use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use citefold_core::{DedupOptions, Record, SortKey, deduplicate, postprocess, records_from_json};

// ─── CLI Definition ─────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "citefold",
    about = "Fold duplicate bibliographic records fetched from multiple providers",
    version,
    long_about = None
)]
struct Cli {
    /// JSON file containing an array of records; use '-' for stdin.
    input: String,

    /// Matching strategy: auto, doi_only, title_only, strict, loose.
    #[arg(long, default_value = "auto")]
    strategy: String,

    /// Primary title-similarity threshold in [0, 1].
    /// Ignored under strict/loose, which fix their own.
    #[arg(long)]
    threshold: Option<f64>,

    /// Representative selection: first, most_complete, prefer_doi.
    #[arg(long, default_value = "first")]
    keep: String,

    /// Back-fill empty fields on the kept record from its duplicates.
    #[arg(long)]
    merge: bool,

    /// Sort the output: title, year, source.
    #[arg(long)]
    sort: Option<String>,

    /// Select records by 1-based index after deduplication.
    #[arg(long, action = clap::ArgAction::Append)]
    pick: Vec<usize>,

    /// Include abstracts in the listing.
    #[arg(long)]
    abstracts: bool,

    /// Output in JSON format (for scripts).
    #[arg(long)]
    json: bool,
}

// ─── Main ────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let raw = read_input(&cli.input)?;
    let records = records_from_json(&raw).context("failed to parse input records")?;

    let options = DedupOptions::parse(&cli.strategy, cli.threshold, &cli.keep, cli.merge)?;
    let report = deduplicate(&records, &options)?;

    let mut output = report.records.clone();
    if let Some(sort) = cli.sort.as_deref() {
        let key: SortKey = sort.parse()?;
        postprocess::sort_records(&mut output, key);
    }
    if !cli.pick.is_empty() {
        output = postprocess::select_records(&output, &cli.pick);
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_listing(&output, cli.abstracts);
        println!("{}", report.summary());
    }

    Ok(())
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read records from stdin")?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"))
    }
}

fn print_listing(records: &[Record], abstracts: bool) {
    if records.is_empty() {
        println!("No records.");
        return;
    }

    for (i, record) in records.iter().enumerate() {
        let title = if record.title.trim().is_empty() {
            "No title"
        } else {
            record.title.as_str()
        };
        println!("[{}] {title}", i + 1);

        if let Some(doi) = record.doi.as_deref() {
            println!("    DOI: {doi}");
        }
        if !record.authors.is_empty() {
            println!("    Authors: {}", record.authors.join(", "));
        }
        if let Some(source) = record.source.as_deref() {
            println!("    Source: {source}");
        }
        if abstracts && let Some(abstract_text) = record.abstract_text.as_deref() {
            println!("    {abstract_text}");
        }
    }
}
