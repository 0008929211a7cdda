//! Mutable state of one parse, shared by every handler invocation.

use owl_rdf_model::{Annotation, Axiom, DataFactory, Document, Triple};
use tracing::debug;

use crate::annotations::PendingAnnotations;
use crate::classifier::Classifier;
use crate::config::ParserConfig;
use crate::store::TripleStore;
use crate::vocabulary::Vocabulary;

/// Everything a handler may read or update. Scoped to a single parse.
#[derive(Debug)]
pub(crate) struct ParseState {
    pub(crate) config: ParserConfig,
    pub(crate) vocab: Vocabulary,
    pub(crate) store: TripleStore,
    pub(crate) classifier: Classifier,
    pub(crate) pending: PendingAnnotations,
    pub(crate) document: Document,
    pub(crate) factory: DataFactory,
    /// Set once classification has reached its fixed point and no further
    /// evidence can arrive; lenient guesses are only made then.
    pub(crate) settled: bool,
}

impl ParseState {
    pub(crate) fn new(config: ParserConfig) -> Self {
        Self {
            config,
            vocab: Vocabulary::default(),
            store: TripleStore::new(),
            classifier: Classifier::with_builtins(),
            pending: PendingAnnotations::new(),
            document: Document::new(),
            factory: DataFactory::new(),
            settled: false,
        }
    }

    /// True when lenient fallbacks may fire.
    pub(crate) fn may_guess(&self) -> bool {
        !self.config.strict && self.settled
    }

    /// Assembles the axiom for `triple`: drains the annotations pending for
    /// it, builds the axiom through the factory, adds it to the document and
    /// consumes the triple.
    pub(crate) fn assemble<F>(&mut self, triple: &Triple, build: F)
    where
        F: FnOnce(&DataFactory, Vec<Annotation>) -> Axiom,
    {
        let annotations = self
            .pending
            .drain_for(&triple.subject, &triple.predicate, &triple.object);
        let axiom = build(&self.factory, annotations.into_iter().collect());
        debug!(%axiom, "assembled axiom");
        self.document.add_axiom(axiom);
        self.store.consume(triple);
    }
}
