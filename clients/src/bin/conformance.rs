//! `owl-rdf-conformance` — Runs the OWL RDF consumer conformance suite.
//!
//! Runs the built-in mapping fixtures in both modes, checks order
//! independence and the strict/lenient policy, and optionally parses every
//! RDF file under a corpus directory.
//!
//! **Usage:**
//! ```text
//! owl-rdf-conformance [--corpus <dir>] [--json]
//! ```
//!
//! Exits non-zero if any conformance check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use owl_rdf_conformance::{run_all, Severity};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Run the OWL RDF consumer conformance suite.
#[derive(Parser)]
#[command(
    name = "owl-rdf-conformance",
    about = "Validate the OWL RDF consumer against its mapping fixtures"
)]
struct Args {
    /// Directory of additional `.ttl` / `.nt` files to parse.
    #[arg(long)]
    corpus: Option<PathBuf>,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "error".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).without_time())
        .init();

    let report = run_all(args.corpus.as_deref())?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        );
    } else {
        println!("OWL RDF Consumer Conformance Report");
        println!("===================================");
        println!();
        for result in &report.results {
            println!("[{}] {} — {}", result.severity, result.validator, result.message);
            for detail in &result.details {
                println!("       {}", detail);
            }
        }
        println!();
        println!(
            "Summary: {} passed, {} warnings, {} failed",
            report.count(Severity::Pass),
            report.count(Severity::Warning),
            report.failure_count()
        );
    }

    let failed = report.failure_count();
    if failed > 0 {
        eprintln!("Conformance FAILED: {} check(s) did not pass.", failed);
        process::exit(1);
    }

    if !args.json {
        println!("Conformance PASSED.");
    }
    Ok(())
}
