//! `owl:equivalentProperty` and `owl:inverseOf`.

use owl_rdf_model::{AxiomKind, DataProperty, ObjectProperty, Triple};

use super::{ensure_resources, unclassified};
use crate::classifier::Classification;
use crate::error::{Deferred, Resolution};
use crate::state::ParseState;

/// Equivalent properties share a kind, so whichever end is known
/// classifies the other.
pub(super) fn try_streaming_equivalent(state: &mut ParseState, triple: &Triple) -> bool {
    let (a, b) = (&triple.subject, &triple.object);
    if b.is_literal() {
        return false;
    }
    let classifier = &mut state.classifier;
    match (classifier.classify(a), classifier.classify(b)) {
        (
            Classification::Unclassified,
            kind @ (Classification::ObjectProperty | Classification::DataProperty),
        ) => {
            classifier.mark(a, kind, false);
        }
        (
            kind @ (Classification::ObjectProperty | Classification::DataProperty),
            Classification::Unclassified,
        ) => {
            classifier.mark(b, kind, false);
        }
        _ => {}
    }
    false
}

pub(super) fn resolve_equivalent(state: &mut ParseState, triple: &Triple) -> Resolution {
    ensure_resources(triple, "literal operand of owl:equivalentProperty")?;
    let (a, b) = (&triple.subject, &triple.object);
    let kind = match (state.classifier.classify(a), state.classifier.classify(b)) {
        (Classification::ObjectProperty, Classification::ObjectProperty) => {
            AxiomKind::EquivalentObjectProperties(
                ObjectProperty(a.clone()),
                ObjectProperty(b.clone()),
            )
        }
        (Classification::DataProperty, Classification::DataProperty) => {
            AxiomKind::EquivalentDataProperties(DataProperty(a.clone()), DataProperty(b.clone()))
        }
        _ => return Err(unclassified(state, triple)),
    };
    state.assemble(triple, |f, annotations| f.axiom(kind, annotations));
    Ok(())
}

/// Only object properties have inverses.
pub(super) fn try_streaming_inverse(state: &mut ParseState, triple: &Triple) -> bool {
    for node in [&triple.subject, &triple.object] {
        if node.is_iri() {
            state.classifier.mark_object_property(node, false);
        }
    }
    false
}

pub(super) fn resolve_inverse(state: &mut ParseState, triple: &Triple) -> Resolution {
    ensure_resources(triple, "literal operand of owl:inverseOf")?;
    let (a, b) = (&triple.subject, &triple.object);
    if !a.is_iri() || !b.is_iri() {
        return Err(Deferred::Unsupported("anonymous inverse property expression"));
    }
    if !state.classifier.is_object_property(a) || !state.classifier.is_object_property(b) {
        return Err(unclassified(state, triple));
    }
    let kind =
        AxiomKind::InverseObjectProperties(ObjectProperty(a.clone()), ObjectProperty(b.clone()));
    state.assemble(triple, |f, annotations| f.axiom(kind, annotations));
    Ok(())
}
