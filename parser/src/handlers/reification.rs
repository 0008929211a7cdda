//! Reified axiom annotations.
//!
//! ```text
//! _:x rdf:type owl:Axiom ;
//!     owl:annotatedSource :s ;
//!     owl:annotatedProperty rdfs:subPropertyOf ;
//!     owl:annotatedTarget :o ;
//!     rdfs:comment "why" .
//! ```
//!
//! The annotations on `_:x` are buffered for the axiom assembled from
//! `:s rdfs:subPropertyOf :o`, and every triple about `_:x` that took part
//! is consumed.

use owl_rdf_model::{vocab, Node, Triple};
use tracing::debug;

use crate::classifier::Classification;
use crate::error::{Deferred, Resolution};
use crate::state::ParseState;

/// True if `predicate` on a reification node carries an annotation.
fn is_annotation(state: &ParseState, predicate: &Node) -> bool {
    match state.classifier.classify(predicate) {
        Classification::AnnotationProperty => true,
        Classification::Unclassified => {
            !state.config.strict && predicate.as_iri().is_some_and(|iri| !vocab::is_reserved(iri))
        }
        _ => false,
    }
}

pub(super) fn resolve(state: &mut ParseState, triple: &Triple) -> Resolution {
    let node = &triple.subject;
    let source = &triple.object;
    let v = &state.vocab;

    let typed = Triple::new(node.clone(), v.rdf_type.clone(), v.owl_axiom.clone());
    if !state.store.contains(&typed) {
        return Err(Deferred::Malformed("owl:annotatedSource on a node that is not an owl:Axiom"));
    }
    let Some(property) = state.store.object(node, &v.annotated_property).cloned() else {
        return Err(Deferred::Malformed("reified axiom without owl:annotatedProperty"));
    };
    let Some(target) = state.store.object(node, &v.annotated_target).cloned() else {
        return Err(Deferred::Malformed("reified axiom without owl:annotatedTarget"));
    };
    let links = [
        typed,
        Triple::new(node.clone(), v.annotated_property.clone(), property.clone()),
        Triple::new(node.clone(), v.annotated_target.clone(), target.clone()),
    ];

    let annotations: Vec<Triple> = state
        .store
        .with_subject(node)
        .filter(|t| is_annotation(state, &t.predicate))
        .cloned()
        .collect();
    debug!(%source, %property, %target, count = annotations.len(), "buffered reified annotations");
    for t in &annotations {
        let annotation = state.factory.annotation(t.predicate.clone(), t.object.clone());
        state
            .pending
            .add_pending_for(source.clone(), property.clone(), target.clone(), annotation);
        state.store.consume(t);
    }
    for link in &links {
        state.store.consume(link);
    }
    state.store.consume(triple);
    Ok(())
}
