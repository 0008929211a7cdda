//! Strict/lenient policy validator.
//!
//! For every fixture:
//! - strict mode turns residuals into an error and lenient mode never does;
//! - lenient mode keeps every axiom strict mode produces and leaves no more
//!   residuals.

use owl_rdf_parser::ParserConfig;

use super::run_fixture;
use crate::report::{ConformanceReport, TestResult};
use crate::tests::fixtures::{self, Fixture};

/// Runs the policy checks over all fixtures.
pub fn validate() -> ConformanceReport {
    let mut report = ConformanceReport::new();
    for fixture in fixtures::ALL {
        report.push(check(fixture));
    }
    report
}

fn check(fixture: &Fixture) -> TestResult {
    let validator = format!("policy/{}", fixture.name);
    let (strict, lenient) = match (
        run_fixture(fixture, &ParserConfig::strict(), false),
        run_fixture(fixture, &ParserConfig::lenient(), false),
    ) {
        (Ok(strict), Ok(lenient)) => (strict, lenient),
        (Err(msg), _) | (_, Err(msg)) => return TestResult::fail(validator, msg),
    };

    let mut problems = Vec::new();
    if strict.ensure_resolved().is_ok() != strict.is_complete() {
        problems.push("strict outcome does not reject its residuals".to_string());
    }
    if let Err(e) = lenient.ensure_resolved() {
        problems.push(format!("lenient outcome rejected: {e}"));
    }
    if lenient.residuals.len() > strict.residuals.len() {
        problems.push(format!(
            "lenient left {} residuals, strict {}",
            lenient.residuals.len(),
            strict.residuals.len()
        ));
    }
    let lenient_kinds = lenient.document.kinds();
    problems.extend(
        strict
            .document
            .kinds()
            .into_iter()
            .filter(|kind| !lenient_kinds.contains(kind))
            .map(|kind| format!("lenient mode lost {kind:?}")),
    );

    if problems.is_empty() {
        TestResult::pass(
            validator,
            format!(
                "strict: {} residual, lenient: {} residual",
                strict.residuals.len(),
                lenient.residuals.len()
            ),
        )
    } else {
        TestResult::fail_with_details(validator, "strict/lenient policy violated", problems)
    }
}
