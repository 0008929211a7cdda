//! Mapping validator.
//!
//! Parses every fixture in both modes and compares axiom, annotation, and
//! residual counts with the fixture's expectations.

use owl_rdf_parser::ParserConfig;

use super::{mode_label, residual_lines, run_fixture};
use crate::report::{ConformanceReport, TestResult};
use crate::tests::fixtures::{self, Expected, Fixture};

/// Runs the mapping checks over all fixtures.
pub fn validate() -> ConformanceReport {
    let mut report = ConformanceReport::new();
    for fixture in fixtures::ALL {
        check(fixture, &ParserConfig::strict(), fixture.strict, &mut report);
        check(fixture, &ParserConfig::lenient(), fixture.lenient, &mut report);
    }
    report
}

fn check(
    fixture: &Fixture,
    config: &ParserConfig,
    expected: Expected,
    report: &mut ConformanceReport,
) {
    let validator = format!("mapping/{}/{}", fixture.name, mode_label(config));
    let outcome = match run_fixture(fixture, config, false) {
        Ok(outcome) => outcome,
        Err(msg) => {
            report.push(TestResult::fail(validator, msg));
            return;
        }
    };
    let actual = Expected {
        axioms: outcome.document.axiom_count(),
        annotated: outcome
            .document
            .axioms
            .iter()
            .filter(|a| a.is_annotated())
            .count(),
        residuals: outcome.residuals.len(),
    };

    if actual == expected {
        report.push(TestResult::pass(
            validator,
            format!(
                "{} axioms ({} annotated), {} residual",
                actual.axioms, actual.annotated, actual.residuals
            ),
        ));
    } else {
        let mut details: Vec<String> = outcome
            .document
            .axioms
            .iter()
            .map(|a| format!("axiom: {a}"))
            .collect();
        details.extend(residual_lines(&outcome).into_iter().map(|l| format!("residual: {l}")));
        report.push(TestResult::fail_with_details(
            validator,
            format!("expected {expected:?}, got {actual:?}"),
            details,
        ));
    }
}
