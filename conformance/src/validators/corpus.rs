//! Corpus validator.
//!
//! Parses every `.ttl` and `.nt` file under a directory in lenient mode.
//! A file that cannot be tokenized fails; a file with residual triples is a
//! warning listing them.

use std::path::Path;

use anyhow::{Context, Result};
use owl_rdf_parser::{parse_str, ParserConfig, SourceFormat};
use walkdir::WalkDir;

use super::residual_lines;
use crate::report::{ConformanceReport, TestResult};

/// Validates every RDF file found under `root`.
///
/// # Errors
///
/// Returns an error if the directory cannot be walked or a file cannot be
/// read.
pub fn validate(root: &Path) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();
    let config = ParserConfig::lenient();
    let mut seen = 0usize;

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk {}", root.display()))?;
        let path = entry.path();
        let is_rdf = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| matches!(e, "ttl" | "nt"));
        if !entry.file_type().is_file() || !is_rdf {
            continue;
        }
        seen += 1;

        let validator = format!("corpus/{}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let outcome = match parse_str(&text, SourceFormat::from_path(path), &config) {
            Ok(outcome) => outcome,
            Err(e) => {
                report.push(TestResult::fail(validator, e.to_string()));
                continue;
            }
        };

        let summary = format!(
            "{} axioms, {} residual, {} conflicts",
            outcome.document.axiom_count(),
            outcome.residuals.len(),
            outcome.conflicts.len()
        );
        if outcome.is_complete() {
            report.push(TestResult::pass(validator, summary));
        } else {
            report.push(TestResult::warn_with_details(
                validator,
                summary,
                residual_lines(&outcome),
            ));
        }
    }

    if seen == 0 {
        report.push(TestResult::warn(
            format!("corpus/{}", root.display()),
            "no .ttl or .nt files found",
        ));
    }
    Ok(report)
}
