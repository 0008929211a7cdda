//! Predicate handlers and the registry that dispatches to them.
//!
//! Every triple goes to exactly one [`PredicateHandler`], chosen by its
//! predicate. A handler has two entry points:
//!
//! - `try_streaming` only updates classification from the triple and reports
//!   whether it consumed it. It never emits axioms and never assumes the
//!   operands are classified already, so it is safe to call at any time.
//! - `resolve` is authoritative: it either emits the axiom(s) the triple
//!   encodes and consumes it, or returns a [`Deferred`] reason and leaves
//!   the triple pending.
//!
//! Adding a statement kind means adding a variant here plus a registry entry.

mod assertion;
mod chain;
mod domain_range;
mod equivalent;
mod reification;
mod sub_class;
mod sub_property;
mod types;

use std::collections::HashMap;

use owl_rdf_model::{vocab, Class, Node, Triple};

use crate::error::{Deferred, Resolution};
use crate::state::ParseState;
use crate::vocabulary::is_structural;

/// The closed set of triple handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PredicateHandler {
    /// `rdf:type`.
    Type,
    /// `rdfs:subPropertyOf`.
    SubPropertyOf,
    /// `owl:propertyChainAxiom`.
    PropertyChainAxiom,
    /// `owl:equivalentProperty`.
    EquivalentProperty,
    /// `owl:inverseOf`.
    InverseOf,
    /// `rdfs:domain`.
    Domain,
    /// `rdfs:range`.
    Range,
    /// `rdfs:subClassOf`.
    SubClassOf,
    /// `owl:annotatedSource` on a reified `owl:Axiom` node.
    AnnotatedSource,
    /// Annotation, object-property and data-property assertions.
    Assertion,
}

impl PredicateHandler {
    /// Dispatch priority within a pass; lower runs first. Reified annotations
    /// are buffered before anything they annotate is assembled, and
    /// declarations come before the statements that depend on them.
    #[must_use]
    pub fn priority(self) -> u8 {
        match self {
            PredicateHandler::AnnotatedSource => 0,
            PredicateHandler::Type => 1,
            _ => 2,
        }
    }

    /// Short name for logs.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            PredicateHandler::Type => "type",
            PredicateHandler::SubPropertyOf => "subPropertyOf",
            PredicateHandler::PropertyChainAxiom => "propertyChainAxiom",
            PredicateHandler::EquivalentProperty => "equivalentProperty",
            PredicateHandler::InverseOf => "inverseOf",
            PredicateHandler::Domain => "domain",
            PredicateHandler::Range => "range",
            PredicateHandler::SubClassOf => "subClassOf",
            PredicateHandler::AnnotatedSource => "annotatedSource",
            PredicateHandler::Assertion => "assertion",
        }
    }

    pub(crate) fn try_streaming(self, state: &mut ParseState, triple: &Triple) -> bool {
        match self {
            PredicateHandler::Type => types::try_streaming(state, triple),
            PredicateHandler::SubPropertyOf => sub_property::try_streaming(state, triple),
            PredicateHandler::PropertyChainAxiom => chain::try_streaming(state, triple),
            PredicateHandler::EquivalentProperty => {
                equivalent::try_streaming_equivalent(state, triple)
            }
            PredicateHandler::InverseOf => equivalent::try_streaming_inverse(state, triple),
            PredicateHandler::Domain => domain_range::try_streaming_domain(state, triple),
            PredicateHandler::Range => domain_range::try_streaming_range(state, triple),
            PredicateHandler::SubClassOf => sub_class::try_streaming(state, triple),
            PredicateHandler::AnnotatedSource | PredicateHandler::Assertion => false,
        }
    }

    pub(crate) fn resolve(self, state: &mut ParseState, triple: &Triple) -> Resolution {
        match self {
            PredicateHandler::Type => types::resolve(state, triple),
            PredicateHandler::SubPropertyOf => sub_property::resolve(state, triple),
            PredicateHandler::PropertyChainAxiom => chain::resolve(state, triple),
            PredicateHandler::EquivalentProperty => equivalent::resolve_equivalent(state, triple),
            PredicateHandler::InverseOf => equivalent::resolve_inverse(state, triple),
            PredicateHandler::Domain => domain_range::resolve_domain(state, triple),
            PredicateHandler::Range => domain_range::resolve_range(state, triple),
            PredicateHandler::SubClassOf => sub_class::resolve(state, triple),
            PredicateHandler::AnnotatedSource => reification::resolve(state, triple),
            PredicateHandler::Assertion => assertion::resolve(state, triple),
        }
    }
}

/// Maps predicates to handlers.
///
/// Predicates outside the reserved namespaces have no entry of their own;
/// they go to the fallback handler when one is set.
#[derive(Debug, Clone)]
pub struct HandlerRegistry {
    handlers: HashMap<Node, PredicateHandler>,
    fallback: Option<PredicateHandler>,
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl HandlerRegistry {
    /// Creates a registry with no handlers: every triple is unmapped.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            fallback: None,
        }
    }

    /// Creates the registry used by a default parse.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        let entries = [
            (vocab::RDF_TYPE, PredicateHandler::Type),
            (vocab::RDFS_SUB_PROPERTY_OF, PredicateHandler::SubPropertyOf),
            (vocab::OWL_PROPERTY_CHAIN_AXIOM, PredicateHandler::PropertyChainAxiom),
            (vocab::OWL_EQUIVALENT_PROPERTY, PredicateHandler::EquivalentProperty),
            (vocab::OWL_INVERSE_OF, PredicateHandler::InverseOf),
            (vocab::RDFS_DOMAIN, PredicateHandler::Domain),
            (vocab::RDFS_RANGE, PredicateHandler::Range),
            (vocab::RDFS_SUBCLASS_OF, PredicateHandler::SubClassOf),
            (vocab::OWL_ANNOTATED_SOURCE, PredicateHandler::AnnotatedSource),
        ];
        for (iri, handler) in entries {
            registry.register(Node::iri(iri), handler);
        }
        for iri in vocab::BUILTIN_ANNOTATION_PROPERTIES {
            registry.register(Node::iri(iri), PredicateHandler::Assertion);
        }
        registry.fallback = Some(PredicateHandler::Assertion);
        registry
    }

    /// Registers `handler` for `predicate`, returning the handler it replaced.
    pub fn register(
        &mut self,
        predicate: Node,
        handler: PredicateHandler,
    ) -> Option<PredicateHandler> {
        self.handlers.insert(predicate, handler)
    }

    /// Sets the handler for predicates outside the reserved namespaces.
    pub fn set_fallback(&mut self, handler: Option<PredicateHandler>) {
        self.fallback = handler;
    }

    /// Finds the handler for `predicate`.
    ///
    /// # Errors
    ///
    /// [`Deferred::Structural`] for list and reification links,
    /// [`Deferred::Unmapped`] for any other predicate without a handler, and
    /// [`Deferred::Malformed`] if the predicate is not an IRI.
    pub fn lookup(&self, predicate: &Node) -> Result<PredicateHandler, Deferred> {
        if let Some(handler) = self.handlers.get(predicate) {
            return Ok(*handler);
        }
        let Some(iri) = predicate.as_iri() else {
            return Err(Deferred::Malformed("predicate is not an IRI"));
        };
        if is_structural(predicate) {
            Err(Deferred::Structural)
        } else if vocab::is_reserved(iri) {
            Err(Deferred::Unmapped)
        } else {
            self.fallback.ok_or(Deferred::Unmapped)
        }
    }

    /// Dispatch priority of `predicate`; unhandled predicates sort last.
    #[must_use]
    pub fn priority(&self, predicate: &Node) -> u8 {
        self.lookup(predicate)
            .map_or(u8::MAX, PredicateHandler::priority)
    }

    /// Number of explicit registrations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// True if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

/// Fails if either end of `triple` is a literal.
fn ensure_resources(triple: &Triple, what: &'static str) -> Resolution {
    if triple.subject.is_literal() || triple.object.is_literal() {
        Err(Deferred::Malformed(what))
    } else {
        Ok(())
    }
}

/// Deferral reason carrying the current classification of both ends.
fn unclassified(state: &ParseState, triple: &Triple) -> Deferred {
    Deferred::Unclassified {
        subject: state.classifier.classify(&triple.subject),
        object: state.classifier.classify(&triple.object),
    }
}

/// A named class operand; anonymous class expressions are not supported.
fn named_class(node: &Node) -> Result<Class, Deferred> {
    if node.is_iri() {
        Ok(Class(node.clone()))
    } else {
        Err(Deferred::Unsupported("anonymous class expression"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_predicates_without_handlers_are_unmapped() {
        let registry = HandlerRegistry::standard();
        assert_eq!(
            registry.lookup(&Node::iri(vocab::RDF_FIRST)),
            Err(Deferred::Structural)
        );
        assert_eq!(
            registry.lookup(&Node::iri(format!("{}disjointWith", vocab::OWL))),
            Err(Deferred::Unmapped)
        );
    }

    #[test]
    fn user_predicates_fall_back_to_assertions() {
        let registry = HandlerRegistry::standard();
        assert_eq!(
            registry.lookup(&Node::iri("http://example.org/hasParent")),
            Ok(PredicateHandler::Assertion)
        );
        assert_eq!(
            registry.lookup(&Node::iri(vocab::RDFS_LABEL)),
            Ok(PredicateHandler::Assertion)
        );
    }

    #[test]
    fn empty_registry_maps_nothing() {
        let registry = HandlerRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(
            registry.lookup(&Node::iri("http://example.org/p")),
            Err(Deferred::Unmapped)
        );
    }

    #[test]
    fn reification_runs_before_declarations() {
        let registry = HandlerRegistry::standard();
        let source = registry.priority(&Node::iri(vocab::OWL_ANNOTATED_SOURCE));
        let ty = registry.priority(&Node::iri(vocab::RDF_TYPE));
        let sub = registry.priority(&Node::iri(vocab::RDFS_SUB_PROPERTY_OF));
        let link = registry.priority(&Node::iri(vocab::RDF_REST));
        assert!(source < ty && ty < sub && sub < link);
    }

    #[test]
    fn register_replaces_previous_handler() {
        let mut registry = HandlerRegistry::standard();
        let previous =
            registry.register(Node::iri(vocab::RDF_TYPE), PredicateHandler::Assertion);
        assert_eq!(previous, Some(PredicateHandler::Type));
    }
}
