//! Error and deferral types.
//!
//! Failures are local: a [`ChainError`] or [`Deferred`] only stops the one
//! axiom being built. Only [`ParseError::Unresolved`] concerns the whole
//! parse, and only in strict mode.

use owl_rdf_model::{Node, Triple};

use crate::classifier::Classification;

/// Why an RDF list could not be turned into an ordered sequence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainError {
    /// The walk ran out of `rdf:rest` links, or exceeded the hop bound, before
    /// reaching `rdf:nil`.
    #[error("list {head} does not terminate with rdf:nil (stopped after {hops} links)")]
    UnterminatedChain {
        /// Head of the list.
        head: Node,
        /// Links followed before giving up.
        hops: usize,
    },
    /// The walk came back to a cell it had already visited.
    #[error("list {head} revisits cell {node}")]
    CyclicChain {
        /// Head of the list.
        head: Node,
        /// The revisited cell.
        node: Node,
    },
    /// A list cell has no `rdf:first` element.
    #[error("list cell {node} of list {head} has no rdf:first element")]
    MissingElement {
        /// Head of the list.
        head: Node,
        /// The cell missing its element.
        node: Node,
    },
}

/// Why a handler left a triple pending.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Deferred {
    /// Operand classification does not determine a statement shape yet.
    #[error("cannot choose a statement shape: subject is {subject}, object is {object}")]
    Unclassified {
        /// Classification of the subject at the time of the attempt.
        subject: Classification,
        /// Classification of the object at the time of the attempt.
        object: Classification,
    },
    /// The predicate of a plain assertion is not a known property yet.
    #[error("cannot choose an assertion shape: predicate is {0}")]
    UnclassifiedPredicate(Classification),
    /// An embedded list could not be resolved.
    #[error(transparent)]
    Chain(#[from] ChainError),
    /// The triple is part of a larger construct and is consumed with it.
    #[error("structural triple; consumed only as part of a larger construct")]
    Structural,
    /// No handler is registered for the predicate.
    #[error("no handler is registered for this predicate")]
    Unmapped,
    /// The triple is well-formed RDF but encodes something outside the supported axiom family.
    #[error("unsupported construct: {0}")]
    Unsupported(&'static str),
    /// The triple cannot be part of any valid OWL mapping.
    #[error("malformed triple: {0}")]
    Malformed(&'static str),
}

/// Outcome of a single authoritative handler attempt.
pub type Resolution = Result<(), Deferred>;

/// Errors surfaced to the caller of a parse.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Strict mode reached the fixed point with triples still pending.
    #[error("{count} triple(s) left unresolved in strict mode; first: {first}")]
    Unresolved {
        /// Number of residual triples.
        count: usize,
        /// The first residual triple in arrival order.
        first: Box<Triple>,
    },
    /// The configuration file could not be parsed.
    #[error("invalid parser configuration: {0}")]
    Config(#[from] toml::de::Error),
    /// The triple source could not be tokenized.
    #[error("failed to read triples: {0}")]
    Source(String),
    /// A file could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
