//! `owl:propertyChainAxiom`, plus the chain conversion shared with the
//! legacy forms handled under `rdfs:subPropertyOf`.

use owl_rdf_model::{Node, ObjectProperty, Triple};

use super::ensure_resources;
use crate::classifier::Classification;
use crate::error::{Deferred, Resolution};
use crate::list::ListResolver;
use crate::state::ParseState;

/// Reads list elements as named object properties.
pub(super) fn object_property_chain(elements: &[Node]) -> Result<Vec<ObjectProperty>, Deferred> {
    elements
        .iter()
        .map(|element| match element {
            Node::Iri(_) => Ok(ObjectProperty(element.clone())),
            Node::Blank(_) => Err(Deferred::Unsupported(
                "anonymous property expression in a chain",
            )),
            Node::Literal(_) => Err(Deferred::Malformed("literal in a property chain")),
        })
        .collect()
}

pub(super) fn try_streaming(state: &mut ParseState, triple: &Triple) -> bool {
    let sup = &triple.subject;
    if sup.is_literal() {
        return false;
    }
    state.classifier.mark_object_property(sup, false);
    if let Ok(list) = ListResolver::new(&state.store, &state.vocab).walk(&triple.object) {
        for element in list.elements().iter().filter(|e| e.is_iri()) {
            state.classifier.mark_object_property(element, false);
        }
    }
    false
}

pub(super) fn resolve(state: &mut ParseState, triple: &Triple) -> Resolution {
    ensure_resources(triple, "literal operand of owl:propertyChainAxiom")?;
    let sup = &triple.subject;
    if !sup.is_iri() {
        return Err(Deferred::Unsupported("property chain on an anonymous property"));
    }
    match state.classifier.classify(sup) {
        Classification::ObjectProperty | Classification::Unclassified => {}
        _ => return Err(Deferred::Malformed("property chain on a non-object property")),
    }

    let list = ListResolver::new(&state.store, &state.vocab).walk(&triple.object)?;
    let chain = object_property_chain(list.elements())?;
    list.consume(&mut state.store);
    let sup = ObjectProperty(sup.clone());
    state.assemble(triple, |f, a| f.sub_property_chain_of(chain, sup, a));
    Ok(())
}
