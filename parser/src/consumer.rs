//! The RDF consumer and its fixed-point driver.
//!
//! Triples are fed one at a time. In streaming mode each one is offered to
//! its handler's `try_streaming` on arrival; in buffered mode it is only
//! stored. [`RdfConsumer::finish`] then runs:
//!
//! 1. classification sweeps (`try_streaming` over everything pending) until
//!    no classification changes;
//! 2. resolution passes until a pass consumes nothing;
//! 3. one settled pass, the only place lenient guesses are made. If it
//!    consumed anything, go back to 1.
//!
//! Sweeps and passes visit pending triples sorted by handler priority and
//! then by the triple itself, never by arrival, so the result does not
//! depend on input order. Inferences made on arrival in streaming mode are
//! discarded before the first sweep and rebuilt in that order. Whatever is
//! still pending at the end is residual.

use std::collections::HashMap;

use owl_rdf_model::{Annotation, Document, Node, Triple};
use tracing::{debug, info_span, trace, warn};

use crate::annotations::PendingAnnotations;
use crate::classifier::{ClassificationConflict, Classifier};
use crate::config::{ParseMode, ParserConfig};
use crate::error::{Deferred, ParseError, Resolution};
use crate::handlers::HandlerRegistry;
use crate::list::ListResolver;
use crate::state::ParseState;
use crate::store::TripleStore;

/// A triple left unconsumed after the last pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResidualTriple {
    /// The triple as it was fed.
    pub triple: Triple,
    /// Why its handler last declined it; `None` if it was never dispatched.
    pub reason: Option<Deferred>,
}

/// Everything a finished parse produced.
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    /// The assembled document.
    pub document: Document,
    /// Unconsumed triples, in arrival order.
    pub residuals: Vec<ResidualTriple>,
    /// Contradictory declarations seen along the way.
    pub conflicts: Vec<ClassificationConflict>,
    /// Annotations whose target axiom was never assembled.
    pub dangling_annotations: Vec<(Node, Annotation)>,
    /// Resolution passes run.
    pub passes: usize,
    /// Whether the parse ran in strict mode.
    pub strict: bool,
}

impl ParseOutcome {
    /// True if every triple was consumed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.residuals.is_empty()
    }

    /// In strict mode, turns residual triples into an error. Lenient parses
    /// always succeed.
    ///
    /// # Errors
    ///
    /// [`ParseError::Unresolved`] if the parse was strict and left residuals.
    pub fn ensure_resolved(&self) -> Result<(), ParseError> {
        match self.residuals.first() {
            Some(first) if self.strict => Err(ParseError::Unresolved {
                count: self.residuals.len(),
                first: Box::new(first.triple.clone()),
            }),
            _ => Ok(()),
        }
    }
}

/// Consumes triples and assembles them into a [`Document`].
///
/// One consumer serves one parse. Concurrent parses each need their own.
#[derive(Debug)]
pub struct RdfConsumer {
    state: ParseState,
    registry: HandlerRegistry,
    reasons: HashMap<Triple, Deferred>,
    passes: usize,
}

impl RdfConsumer {
    /// Creates a consumer with the standard handlers.
    #[must_use]
    pub fn new(config: ParserConfig) -> Self {
        Self::with_registry(config, HandlerRegistry::standard())
    }

    /// Creates a consumer with a custom handler registry.
    #[must_use]
    pub fn with_registry(config: ParserConfig, registry: HandlerRegistry) -> Self {
        Self {
            state: ParseState::new(config),
            registry,
            reasons: HashMap::new(),
            passes: 0,
        }
    }

    /// The configuration this parse runs with.
    #[must_use]
    pub fn config(&self) -> &ParserConfig {
        &self.state.config
    }

    /// Adds one triple. Duplicates are ignored, including triples that were
    /// already consumed.
    pub fn feed(&mut self, triple: Triple) {
        if !self.state.store.insert(triple.clone()) {
            trace!(%triple, "duplicate triple ignored");
            return;
        }
        if self.state.config.mode == ParseMode::Streaming {
            self.stream(&triple);
        }
    }

    /// Adds every triple from `triples`, in order.
    pub fn feed_all(&mut self, triples: impl IntoIterator<Item = Triple>) {
        for triple in triples {
            self.feed(triple);
        }
    }

    /// Runs the authoritative handler for one pending triple. Dispatching a
    /// triple that is not pending (never fed, or already consumed) is a no-op.
    ///
    /// # Errors
    ///
    /// The [`Deferred`] reason when the handler leaves the triple pending.
    pub fn dispatch(&mut self, triple: &Triple) -> Resolution {
        if !self.state.store.contains(triple) {
            return Ok(());
        }
        let handler = self.registry.lookup(&triple.predicate)?;
        handler.resolve(&mut self.state, triple)
    }

    /// Current node classifications.
    #[must_use]
    pub fn classifier(&self) -> &Classifier {
        &self.state.classifier
    }

    /// Annotations waiting for their axiom.
    #[must_use]
    pub fn pending_annotations(&self) -> &PendingAnnotations {
        &self.state.pending
    }

    /// Mutable access to the annotation buffer, for collaborators that
    /// collect annotations outside the triple stream.
    pub fn pending_annotations_mut(&mut self) -> &mut PendingAnnotations {
        &mut self.state.pending
    }

    /// Pending triples.
    #[must_use]
    pub fn store(&self) -> &TripleStore {
        &self.state.store
    }

    /// The document assembled so far.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.state.document
    }

    /// A list resolver over the pending triples.
    #[must_use]
    pub fn lists(&self) -> ListResolver<'_> {
        ListResolver::new(&self.state.store, &self.state.vocab)
    }

    /// Runs classification and resolution to a fixed point and returns the
    /// result.
    #[must_use]
    pub fn finish(mut self) -> ParseOutcome {
        let span = info_span!(
            "finish",
            strict = self.state.config.strict,
            mode = %self.state.config.mode,
            pending = self.state.store.len()
        );
        let _guard = span.enter();
        let limit = self.state.config.max_passes.max(1);
        self.state.classifier.forget_inferred();

        'outer: loop {
            self.classify();
            loop {
                if self.passes >= limit {
                    warn!(passes = self.passes, "pass limit reached");
                    break 'outer;
                }
                if self.resolution_pass() == 0 {
                    break;
                }
            }
            if self.state.config.strict || self.passes >= limit {
                break;
            }
            self.state.settled = true;
            let consumed = self.resolution_pass();
            self.state.settled = false;
            if consumed == 0 {
                break;
            }
        }

        self.into_outcome()
    }

    fn stream(&mut self, triple: &Triple) {
        if let Ok(handler) = self.registry.lookup(&triple.predicate) {
            if handler.try_streaming(&mut self.state, triple) {
                self.state.store.consume(triple);
            }
        }
    }

    /// Pending triples in dispatch order.
    fn ordered(&self) -> Vec<Triple> {
        let mut pending: Vec<Triple> = self.state.store.iter().cloned().collect();
        pending.sort_by_cached_key(|t| (self.registry.priority(&t.predicate), t.clone()));
        pending
    }

    /// Classification sweeps until nothing changes. Terminates because a
    /// node's classification only moves forward and repeated conflicts are
    /// not counted as changes.
    fn classify(&mut self) {
        loop {
            let generation = self.state.classifier.generation();
            for triple in self.ordered() {
                if self.state.store.contains(&triple) {
                    self.stream(&triple);
                }
            }
            trace!(classified = self.state.classifier.len(), "classification sweep");
            if self.state.classifier.generation() == generation {
                break;
            }
        }
    }

    /// One pass of authoritative dispatch. Returns the number of triples consumed.
    fn resolution_pass(&mut self) -> usize {
        self.passes += 1;
        let before = self.state.store.len();
        for triple in self.ordered() {
            match self.dispatch(&triple) {
                Ok(()) => {
                    self.reasons.remove(&triple);
                }
                Err(reason) => {
                    trace!(%triple, %reason, "deferred");
                    self.reasons.insert(triple, reason);
                }
            }
        }
        let consumed = before - self.state.store.len();
        debug!(
            pass = self.passes,
            consumed,
            pending = self.state.store.len(),
            settled = self.state.settled,
            "resolution pass"
        );
        consumed
    }

    fn into_outcome(self) -> ParseOutcome {
        let Self {
            state,
            mut reasons,
            passes,
            ..
        } = self;

        let residuals: Vec<ResidualTriple> = state
            .store
            .iter()
            .map(|triple| ResidualTriple {
                reason: reasons.remove(triple),
                triple: triple.clone(),
            })
            .collect();
        if !residuals.is_empty() {
            warn!(count = residuals.len(), strict = state.config.strict, "unresolved triples");
        }
        let conflicts: Vec<_> = state.classifier.conflicts().cloned().collect();
        let dangling_annotations = state.pending.into_dangling();
        if !dangling_annotations.is_empty() {
            warn!(count = dangling_annotations.len(), "annotations without a target axiom");
        }
        debug!(
            axioms = state.document.axiom_count(),
            residuals = residuals.len(),
            passes,
            "parse finished"
        );

        ParseOutcome {
            document: state.document,
            residuals,
            conflicts,
            dangling_annotations,
            passes,
            strict: state.config.strict,
        }
    }
}
