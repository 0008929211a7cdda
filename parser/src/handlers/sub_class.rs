//! `rdfs:subClassOf` between named classes.

use owl_rdf_model::{AxiomKind, Triple};

use super::{ensure_resources, named_class, unclassified};
use crate::classifier::Classification;
use crate::error::Resolution;
use crate::state::ParseState;

pub(super) fn try_streaming(state: &mut ParseState, triple: &Triple) -> bool {
    for node in [&triple.subject, &triple.object] {
        if node.is_iri() {
            state.classifier.mark_class(node, false);
        }
    }
    false
}

pub(super) fn resolve(state: &mut ParseState, triple: &Triple) -> Resolution {
    ensure_resources(triple, "literal operand of rdfs:subClassOf")?;
    let sub = named_class(&triple.subject)?;
    let sup = named_class(&triple.object)?;
    let is_class =
        |c: Classification| matches!(c, Classification::Class | Classification::Unclassified);
    if !is_class(state.classifier.classify(&triple.subject))
        || !is_class(state.classifier.classify(&triple.object))
    {
        return Err(unclassified(state, triple));
    }
    state.assemble(triple, |f, annotations| {
        f.axiom(AxiomKind::SubClassOf { sub, sup }, annotations)
    });
    Ok(())
}
