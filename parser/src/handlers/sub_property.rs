//! `rdfs:subPropertyOf`.
//!
//! Resolution tries, in order:
//!
//! 1. lenient only: the subject has a legacy `owl:propertyChain` edge. Its
//!    target is read as a chain and the axiom is a chain inclusion into the
//!    object.
//! 2. lenient only: the subject is itself a raw list. Same, with the
//!    subject as the chain.
//! 3. Both ends are object properties.
//! 4. Both ends are data properties.
//! 5. lenient only: both ends are annotation properties; or, with
//!    classification settled, anything else is read as annotation
//!    properties, which need no declaration.
//! 6. Otherwise the triple stays pending. In strict mode that includes two
//!    declared annotation properties.

use owl_rdf_model::{AnnotationProperty, DataProperty, Node, ObjectProperty, Triple};

use super::chain::object_property_chain;
use super::{ensure_resources, unclassified};
use crate::classifier::Classification;
use crate::error::Resolution;
use crate::list::ListResolver;
use crate::state::ParseState;

/// Head of a legacy chain hanging off `sub`, plus the marker triple that
/// points at it when the chain is reached through `owl:propertyChain`.
fn legacy_chain(state: &ParseState, sub: &Node) -> Option<(Node, Option<Triple>)> {
    let marker = &state.vocab.legacy_property_chain;
    if let Some(head) = state.store.object(sub, marker) {
        let link = Triple::new(sub.clone(), marker.clone(), head.clone());
        return Some((head.clone(), Some(link)));
    }
    state
        .store
        .has_predicate(sub, &state.vocab.rdf_first)
        .then(|| (sub.clone(), None))
}

pub(super) fn try_streaming(state: &mut ParseState, triple: &Triple) -> bool {
    let (sub, sup) = (&triple.subject, &triple.object);
    if sub.is_literal() || sup.is_literal() {
        return false;
    }
    if !state.config.strict && legacy_chain(state, sub).is_some() {
        state.classifier.mark_object_property(sup, false);
        return false;
    }
    let classifier = &mut state.classifier;
    match (classifier.classify(sub), classifier.classify(sup)) {
        (
            _,
            kind @ (Classification::ObjectProperty
            | Classification::DataProperty
            | Classification::AnnotationProperty),
        ) => {
            classifier.mark(sub, kind, false);
        }
        (
            kind @ (Classification::ObjectProperty
            | Classification::DataProperty
            | Classification::AnnotationProperty),
            _,
        ) => {
            classifier.mark(sup, kind, false);
        }
        _ => {}
    }
    false
}

pub(super) fn resolve(state: &mut ParseState, triple: &Triple) -> Resolution {
    ensure_resources(triple, "literal operand of rdfs:subPropertyOf")?;
    let (sub, sup) = (&triple.subject, &triple.object);

    if !state.config.strict {
        if let Some((head, marker)) = legacy_chain(state, sub) {
            return resolve_chain(state, triple, &head, marker);
        }
    }

    match (state.classifier.classify(sub), state.classifier.classify(sup)) {
        (Classification::ObjectProperty, Classification::ObjectProperty) => {
            let (sub, sup) = (ObjectProperty(sub.clone()), ObjectProperty(sup.clone()));
            state.assemble(triple, |f, a| f.sub_object_property_of(sub, sup, a));
        }
        (Classification::DataProperty, Classification::DataProperty) => {
            let (sub, sup) = (DataProperty(sub.clone()), DataProperty(sup.clone()));
            state.assemble(triple, |f, a| f.sub_data_property_of(sub, sup, a));
        }
        (Classification::AnnotationProperty, Classification::AnnotationProperty)
            if !state.config.strict =>
        {
            assemble_annotation(state, triple);
        }
        _ if state.may_guess() => {
            state.classifier.mark_annotation_property(sub, false);
            state.classifier.mark_annotation_property(sup, false);
            assemble_annotation(state, triple);
        }
        _ => return Err(unclassified(state, triple)),
    }
    Ok(())
}

fn assemble_annotation(state: &mut ParseState, triple: &Triple) {
    let sub = AnnotationProperty(triple.subject.clone());
    let sup = AnnotationProperty(triple.object.clone());
    state.assemble(triple, |f, a| f.sub_annotation_property_of(sub, sup, a));
}

fn resolve_chain(
    state: &mut ParseState,
    triple: &Triple,
    head: &Node,
    marker: Option<Triple>,
) -> Resolution {
    let list = ListResolver::new(&state.store, &state.vocab).walk_legacy(head)?;
    let chain = object_property_chain(list.elements())?;
    list.consume(&mut state.store);
    if let Some(marker) = marker {
        state.store.consume(&marker);
    }
    state.classifier.mark_object_property(&triple.object, false);
    let sup = ObjectProperty(triple.object.clone());
    state.assemble(triple, |f, a| f.sub_property_chain_of(chain, sup, a));
    Ok(())
}
