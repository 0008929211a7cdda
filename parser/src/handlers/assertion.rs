//! Plain facts: `s p o` where `p` is a user property or a built-in
//! annotation property.

use owl_rdf_model::{
    AnnotationProperty, AxiomKind, DataProperty, Individual, ObjectProperty, Triple,
};

use crate::classifier::Classification;
use crate::error::{Deferred, Resolution};
use crate::state::ParseState;

pub(super) fn resolve(state: &mut ParseState, triple: &Triple) -> Resolution {
    let (subject, predicate, object) = (&triple.subject, &triple.predicate, &triple.object);
    if subject.is_literal() {
        return Err(Deferred::Malformed("literal subject"));
    }
    let annotation = || AxiomKind::AnnotationAssertion {
        property: AnnotationProperty(predicate.clone()),
        subject: subject.clone(),
        value: object.clone(),
    };
    let kind = match state.classifier.classify(predicate) {
        Classification::AnnotationProperty => annotation(),
        Classification::ObjectProperty => {
            if object.is_literal() {
                return Err(Deferred::Malformed("object property with a literal value"));
            }
            AxiomKind::ObjectPropertyAssertion {
                property: ObjectProperty(predicate.clone()),
                subject: Individual(subject.clone()),
                object: Individual(object.clone()),
            }
        }
        Classification::DataProperty => {
            let Some(value) = object.as_literal() else {
                return Err(Deferred::Malformed("data property with a non-literal value"));
            };
            AxiomKind::DataPropertyAssertion {
                property: DataProperty(predicate.clone()),
                subject: Individual(subject.clone()),
                value: value.clone(),
            }
        }
        _ if state.may_guess() => {
            state.classifier.mark_annotation_property(predicate, false);
            annotation()
        }
        other => return Err(Deferred::UnclassifiedPredicate(other)),
    };
    state.assemble(triple, |f, annotations| f.axiom(kind, annotations));
    Ok(())
}
