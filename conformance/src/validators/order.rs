//! Order-independence validator.
//!
//! A fixture must produce the same document and the same residual set
//! whether its triples arrive forward or reversed, and whether they are
//! processed streaming or buffered.

use owl_rdf_parser::{ParseMode, ParseOutcome, ParserConfig};

use super::{mode_label, residual_lines, run_fixture};
use crate::report::{ConformanceReport, TestResult};
use crate::tests::fixtures::{self, Fixture};

/// Runs the order checks over all fixtures.
pub fn validate() -> ConformanceReport {
    let mut report = ConformanceReport::new();
    for fixture in fixtures::ALL {
        for base in [ParserConfig::strict(), ParserConfig::lenient()] {
            check(fixture, &base, &mut report);
        }
    }
    report
}

fn check(fixture: &Fixture, base: &ParserConfig, report: &mut ConformanceReport) {
    let reference_config = base.clone().with_mode(ParseMode::Buffered);
    let validator = format!("order/{}/{}", fixture.name, mode_label(&reference_config));
    let reference = match run_fixture(fixture, &reference_config, false) {
        Ok(outcome) => outcome,
        Err(msg) => {
            report.push(TestResult::fail(validator, msg));
            return;
        }
    };

    let mut mismatches = Vec::new();
    for mode in [ParseMode::Buffered, ParseMode::Streaming] {
        for reversed in [false, true] {
            let config = base.clone().with_mode(mode);
            let direction = if reversed { "reversed" } else { "forward" };
            match run_fixture(fixture, &config, reversed) {
                Ok(outcome) => {
                    if let Some(diff) = difference(&reference, &outcome) {
                        mismatches.push(format!("{mode} {direction}: {diff}"));
                    }
                }
                Err(msg) => mismatches.push(format!("{mode} {direction}: {msg}")),
            }
        }
    }

    if mismatches.is_empty() {
        report.push(TestResult::pass(
            validator,
            "forward, reversed, streaming, and buffered runs agree",
        ));
    } else {
        report.push(TestResult::fail_with_details(
            validator,
            "result depends on arrival order or mode",
            mismatches,
        ));
    }
}

fn difference(reference: &ParseOutcome, other: &ParseOutcome) -> Option<String> {
    if reference.document != other.document {
        let missing = reference.document.axioms.difference(&other.document.axioms).count();
        let extra = other.document.axioms.difference(&reference.document.axioms).count();
        return Some(format!("documents differ ({missing} missing, {extra} extra)"));
    }
    if residual_lines(reference) != residual_lines(other) {
        return Some("residual sets differ".to_string());
    }
    None
}
