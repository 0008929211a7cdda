//! Conformance suite for the OWL RDF consumer.
//!
//! Runs the parser over a fixed set of Turtle fixtures, each covering one
//! part of the RDF mapping, and checks the outcome against what a
//! conforming consumer must produce.
//!
//! # Conformance Scope
//!
//! | Validator | Checks |
//! |-----------|--------|
//! | `mapping` | axiom, annotation, and residual counts per fixture and mode |
//! | `order` | forward, reversed, streaming, and buffered runs agree |
//! | `policy` | strict mode rejects residuals; lenient mode only adds axioms |
//! | `corpus` | every `.ttl` / `.nt` file under a directory tokenizes and parses |
//!
//! # Entry Point
//!
//! ```no_run
//! use owl_rdf_conformance::run_all;
//!
//! let report = run_all(None).expect("Failed to run conformance");
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod report;
pub mod tests;
pub mod validators;

use std::path::Path;

pub use report::{ConformanceReport, Severity, TestResult};

/// Runs all validators and returns the aggregated report.
///
/// Validators run in this order:
/// 1. Mapping counts
/// 2. Order independence
/// 3. Strict/lenient policy
/// 4. The optional corpus directory
///
/// # Errors
///
/// Returns an error only if the corpus directory cannot be walked or read.
pub fn run_all(corpus: Option<&Path>) -> anyhow::Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    report.extend(validators::mapping::validate());
    report.extend(validators::order::validate());
    report.extend(validators::policy::validate());

    if let Some(root) = corpus {
        report.extend(validators::corpus::validate(root)?);
    }

    Ok(report)
}
