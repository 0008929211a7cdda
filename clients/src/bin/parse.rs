//! `owl-rdf-parse` — Reads a Turtle or N-Triples file and prints the OWL
//! axioms it encodes, plus any triples that could not be mapped.
//!
//! **Usage:**
//! ```text
//! owl-rdf-parse <FILE> [--format turtle|ntriples] [--strict] [--mode streaming|buffered]
//!               [--config <path>] [--json] [--verbose]
//! ```
//!
//! Exits non-zero if the file cannot be read or tokenized, or if a strict
//! parse leaves triples unresolved.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use owl_rdf_parser::{parse_str, ParseMode, ParseOutcome, ParserConfig, SourceFormat};
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse an RDF file into OWL axioms.
#[derive(Parser)]
#[command(name = "owl-rdf-parse", about = "Map an RDF graph to OWL axioms")]
struct Args {
    /// Input file (`.ttl` or `.nt`).
    file: PathBuf,

    /// Input syntax; guessed from the file extension when omitted.
    #[arg(long)]
    format: Option<SourceFormat>,

    /// Reject guesses and fail if any triple is left unresolved.
    #[arg(long)]
    strict: bool,

    /// Processing mode; overrides the configuration file.
    #[arg(long)]
    mode: Option<ParseMode>,

    /// TOML parser configuration.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the outcome as JSON.
    #[arg(long)]
    json: bool,

    /// Log resolution passes to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).without_time())
        .init();

    let mut config = match &args.config {
        Some(path) => ParserConfig::from_path(path)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        None => ParserConfig::default(),
    };
    if args.strict {
        config.strict = true;
    }
    if let Some(mode) = args.mode {
        config.mode = mode;
    }

    let text = fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let format = args
        .format
        .unwrap_or_else(|| SourceFormat::from_path(&args.file));
    tracing::info!(file = %args.file.display(), ?format, strict = config.strict, "parsing");

    let outcome = parse_str(&text, format, &config)
        .with_context(|| format!("Failed to parse {}", args.file.display()))?;

    if args.json {
        let value = to_json(&outcome);
        println!(
            "{}",
            serde_json::to_string_pretty(&value).context("Failed to serialize outcome")?
        );
    } else {
        print_text(&outcome);
    }

    outcome
        .ensure_resolved()
        .with_context(|| format!("Strict parse of {} is incomplete", args.file.display()))?;
    Ok(())
}

fn to_json(outcome: &ParseOutcome) -> serde_json::Value {
    json!({
        "ontology": outcome.document.ontology_iri.as_ref().map(ToString::to_string),
        "strict": outcome.strict,
        "passes": outcome.passes,
        "axioms": outcome
            .document
            .axioms
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>(),
        "residuals": outcome
            .residuals
            .iter()
            .map(|r| json!({
                "triple": r.triple.to_string(),
                "reason": r.reason.as_ref().map(ToString::to_string),
            }))
            .collect::<Vec<_>>(),
        "conflicts": outcome
            .conflicts
            .iter()
            .map(|c| json!({
                "node": c.node.to_string(),
                "kept": c.kept.to_string(),
                "rejected": c.rejected.to_string(),
            }))
            .collect::<Vec<_>>(),
        "dangling_annotations": outcome
            .dangling_annotations
            .iter()
            .map(|(target, annotation)| json!({
                "target": target.to_string(),
                "annotation": annotation.to_string(),
            }))
            .collect::<Vec<_>>(),
    })
}

fn print_text(outcome: &ParseOutcome) {
    if let Some(iri) = &outcome.document.ontology_iri {
        println!("Ontology({iri})");
    }
    for axiom in &outcome.document.axioms {
        println!("  {axiom}");
    }
    println!();
    println!(
        "{} axioms, {} residual triples, {} conflicts after {} passes ({})",
        outcome.document.axiom_count(),
        outcome.residuals.len(),
        outcome.conflicts.len(),
        outcome.passes,
        if outcome.strict { "strict" } else { "lenient" }
    );
    for residual in &outcome.residuals {
        match &residual.reason {
            Some(reason) => println!("  [residual] {}  # {reason}", residual.triple),
            None => println!("  [residual] {}", residual.triple),
        }
    }
    for conflict in &outcome.conflicts {
        println!(
            "  [conflict] {} declared {} and {}",
            conflict.node, conflict.kept, conflict.rejected
        );
    }
    for (target, annotation) in &outcome.dangling_annotations {
        println!("  [dangling] {annotation} on {target}");
    }
}
