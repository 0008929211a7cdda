//! Conformance validators.

pub mod corpus;
pub mod mapping;
pub mod order;
pub mod policy;

use owl_rdf_parser::{parse, read_triples, ParseOutcome, ParserConfig, SourceFormat};

use crate::tests::fixtures::Fixture;

/// Label for a configuration in report entries.
pub(crate) fn mode_label(config: &ParserConfig) -> String {
    let strictness = if config.strict { "strict" } else { "lenient" };
    format!("{strictness}/{}", config.mode)
}

/// Parses a fixture's Turtle, optionally in reverse arrival order.
pub(crate) fn run_fixture(
    fixture: &Fixture,
    config: &ParserConfig,
    reversed: bool,
) -> Result<ParseOutcome, String> {
    let mut triples = read_triples(fixture.turtle, SourceFormat::Turtle)
        .map_err(|e| format!("fixture does not parse as Turtle: {e}"))?;
    if reversed {
        triples.reverse();
    }
    Ok(parse(triples, config))
}

/// Residual triples as N-Triples lines, sorted.
pub(crate) fn residual_lines(outcome: &ParseOutcome) -> Vec<String> {
    let mut lines: Vec<String> = outcome
        .residuals
        .iter()
        .map(|r| match &r.reason {
            Some(reason) => format!("{}  # {reason}", r.triple),
            None => r.triple.to_string(),
        })
        .collect();
    lines.sort();
    lines
}
