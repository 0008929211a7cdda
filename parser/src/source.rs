//! Turtle and N-Triples input, via sophia.

use std::path::Path;

use owl_rdf_model::{Literal, Node, Triple};
use sophia_api::source::TripleSource;
use sophia_api::term::{Term, TermKind};
use sophia_api::triple::Triple as _;
use tracing::{debug, warn};

use crate::config::ParserConfig;
use crate::consumer::{ParseOutcome, RdfConsumer};
use crate::error::ParseError;

/// Concrete syntax of a triple source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceFormat {
    /// Turtle.
    #[default]
    Turtle,
    /// N-Triples.
    NTriples,
}

impl SourceFormat {
    /// Guesses the format from a file extension (`.nt` is N-Triples,
    /// everything else Turtle).
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("nt") => SourceFormat::NTriples,
            _ => SourceFormat::Turtle,
        }
    }
}

impl std::str::FromStr for SourceFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "turtle" | "ttl" => Ok(SourceFormat::Turtle),
            "ntriples" | "nt" | "n-triples" => Ok(SourceFormat::NTriples),
            other => Err(format!("unknown format `{other}` (expected `turtle` or `ntriples`)")),
        }
    }
}

fn convert<T: Term>(term: T) -> Option<Node> {
    match term.kind() {
        TermKind::Iri => term.iri().map(|iri| Node::iri(iri.as_str())),
        TermKind::BlankNode => term.bnode_id().map(|id| Node::blank(id.as_str())),
        TermKind::Literal => {
            let lexical = term.lexical_form()?;
            let literal = match term.language_tag() {
                Some(tag) => Literal::lang(&*lexical, tag.as_str()),
                None => Literal::typed(&*lexical, term.datatype()?.as_str()),
            };
            Some(Node::literal(literal))
        }
        _ => None,
    }
}

/// Tokenizes `text` into triples.
///
/// Triple terms and variables have no OWL reading and are skipped.
///
/// # Errors
///
/// [`ParseError::Source`] if `text` is not valid in `format`.
pub fn read_triples(text: &str, format: SourceFormat) -> Result<Vec<Triple>, ParseError> {
    let mut triples = Vec::new();
    let mut skipped = 0usize;
    let mut push = |t: [Option<Node>; 3]| match t {
        [Some(s), Some(p), Some(o)] => triples.push(Triple::new(s, p, o)),
        _ => skipped += 1,
    };
    match format {
        SourceFormat::Turtle => sophia_turtle::parser::turtle::parse_str(text)
            .for_each_triple(|t| push([convert(t.s()), convert(t.p()), convert(t.o())]))
            .map_err(|e| ParseError::Source(e.to_string()))?,
        SourceFormat::NTriples => sophia_turtle::parser::nt::parse_str(text)
            .for_each_triple(|t| push([convert(t.s()), convert(t.p()), convert(t.o())]))
            .map_err(|e| ParseError::Source(e.to_string()))?,
    }
    if skipped > 0 {
        warn!(skipped, "skipped triples with terms that have no OWL reading");
    }
    debug!(count = triples.len(), ?format, "read triples");
    Ok(triples)
}

/// Tokenizes `text` and runs a full parse over it.
///
/// # Errors
///
/// [`ParseError::Source`] if `text` cannot be tokenized. Residual triples
/// are not an error here; see [`ParseOutcome::ensure_resolved`].
pub fn parse_str(
    text: &str,
    format: SourceFormat,
    config: &ParserConfig,
) -> Result<ParseOutcome, ParseError> {
    let triples = read_triples(text, format)?;
    let mut consumer = RdfConsumer::new(config.clone());
    consumer.feed_all(triples);
    Ok(consumer.finish())
}
