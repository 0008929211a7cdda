//! RDF-to-OWL consumer.
//!
//! Turns an unordered stream of RDF triples into a typed
//! [`Document`](owl_rdf_model::Document). The triples that describe one
//! axiom, and the triples that say what kind of entity each node is, may
//! arrive in any order, so the consumer:
//!
//! - keeps unconsumed triples in a [`TripleStore`];
//! - tracks what each node is in a [`Classifier`], inferring kinds from
//!   co-occurrence as well as from declarations;
//! - dispatches each triple to one [`PredicateHandler`] through a
//!   [`HandlerRegistry`];
//! - resolves RDF lists with a [`ListResolver`];
//! - holds reified annotations in [`PendingAnnotations`] until their axiom
//!   is built;
//! - repeats resolution passes until nothing changes, then reports whatever
//!   is left as residual.
//!
//! # Entry Point
//!
//! ```
//! use owl_rdf_model::{vocab, Node, Triple};
//! use owl_rdf_parser::{parse, ParserConfig};
//!
//! let p = Node::iri("http://example.org/hasParent");
//! let q = Node::iri("http://example.org/hasAncestor");
//! let triples = vec![
//!     Triple::new(p.clone(), Node::iri(vocab::RDFS_SUB_PROPERTY_OF), q.clone()),
//!     Triple::new(q, Node::iri(vocab::RDF_TYPE), Node::iri(vocab::OWL_OBJECT_PROPERTY)),
//! ];
//! let outcome = parse(triples, &ParserConfig::strict());
//! assert!(outcome.is_complete());
//! assert_eq!(outcome.document.axioms_named("SubObjectPropertyOf").count(), 1);
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(missing_docs, clippy::missing_errors_doc)]

mod annotations;
pub mod classifier;
pub mod config;
mod consumer;
pub mod error;
mod handlers;
pub mod list;
#[cfg(feature = "turtle")]
pub mod source;
mod state;
pub mod store;
mod vocabulary;

pub use annotations::PendingAnnotations;
pub use classifier::{Classification, ClassificationConflict, Classifier};
pub use config::{ParseMode, ParserConfig};
pub use consumer::{ParseOutcome, RdfConsumer, ResidualTriple};
pub use error::{ChainError, Deferred, ParseError, Resolution};
pub use handlers::{HandlerRegistry, PredicateHandler};
pub use list::{ListResolver, ResolvedList};
#[cfg(feature = "turtle")]
pub use source::{parse_str, read_triples, SourceFormat};
pub use store::TripleStore;

use owl_rdf_model::Triple;

/// Parses a complete triple source with the given configuration.
///
/// Residual triples are reported in the outcome, never as an error; call
/// [`ParseOutcome::ensure_resolved`] to apply the strict-mode policy.
#[must_use]
pub fn parse(triples: impl IntoIterator<Item = Triple>, config: &ParserConfig) -> ParseOutcome {
    let mut consumer = RdfConsumer::new(config.clone());
    consumer.feed_all(triples);
    consumer.finish()
}
