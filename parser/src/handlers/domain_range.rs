//! `rdfs:domain` and `rdfs:range`.
//!
//! The property's classification picks the axiom shape. A range gives
//! evidence in the other direction too: a datatype range makes an
//! unclassified property a data property, a class range an object property.
//! In lenient mode, once classification has settled, an unclassified
//! property is read as an annotation property.

use owl_rdf_model::{
    AnnotationProperty, AxiomKind, DataProperty, Datatype, ObjectProperty, Triple,
};

use super::{ensure_resources, named_class, unclassified};
use crate::classifier::Classification;
use crate::error::{Deferred, Resolution};
use crate::state::ParseState;

pub(super) fn try_streaming_domain(state: &mut ParseState, triple: &Triple) -> bool {
    let (property, domain) = (&triple.subject, &triple.object);
    if !domain.is_iri() {
        return false;
    }
    match state.classifier.classify(property) {
        Classification::ObjectProperty | Classification::DataProperty => {
            state.classifier.mark_class(domain, false);
        }
        _ => {}
    }
    false
}

pub(super) fn try_streaming_range(state: &mut ParseState, triple: &Triple) -> bool {
    let (property, range) = (&triple.subject, &triple.object);
    if !range.is_iri() {
        return false;
    }
    let classifier = &mut state.classifier;
    match (classifier.classify(property), classifier.classify(range)) {
        (Classification::Unclassified, Classification::Datatype) => {
            classifier.mark_data_property(property, false);
        }
        (Classification::Unclassified, Classification::Class) => {
            classifier.mark_object_property(property, false);
        }
        (Classification::ObjectProperty, Classification::Unclassified) => {
            classifier.mark_class(range, false);
        }
        (Classification::DataProperty, Classification::Unclassified) => {
            classifier.mark_datatype(range, false);
        }
        _ => {}
    }
    false
}

fn named_property(triple: &Triple, what: &'static str) -> Resolution {
    ensure_resources(triple, what)?;
    if triple.subject.is_iri() {
        Ok(())
    } else {
        Err(Deferred::Unsupported("anonymous property expression"))
    }
}

pub(super) fn resolve_domain(state: &mut ParseState, triple: &Triple) -> Resolution {
    named_property(triple, "literal operand of rdfs:domain")?;
    let (property, domain) = (&triple.subject, &triple.object);
    let kind = match state.classifier.classify(property) {
        Classification::ObjectProperty => AxiomKind::ObjectPropertyDomain {
            property: ObjectProperty(property.clone()),
            domain: named_class(domain)?,
        },
        Classification::DataProperty => AxiomKind::DataPropertyDomain {
            property: DataProperty(property.clone()),
            domain: named_class(domain)?,
        },
        Classification::AnnotationProperty => AxiomKind::AnnotationPropertyDomain {
            property: AnnotationProperty(property.clone()),
            domain: domain.clone(),
        },
        _ if state.may_guess() => {
            state.classifier.mark_annotation_property(property, false);
            AxiomKind::AnnotationPropertyDomain {
                property: AnnotationProperty(property.clone()),
                domain: domain.clone(),
            }
        }
        _ => return Err(unclassified(state, triple)),
    };
    state.assemble(triple, |f, annotations| f.axiom(kind, annotations));
    Ok(())
}

pub(super) fn resolve_range(state: &mut ParseState, triple: &Triple) -> Resolution {
    named_property(triple, "literal operand of rdfs:range")?;
    let (property, range) = (&triple.subject, &triple.object);
    let kind = match state.classifier.classify(property) {
        Classification::ObjectProperty => AxiomKind::ObjectPropertyRange {
            property: ObjectProperty(property.clone()),
            range: named_class(range)?,
        },
        Classification::DataProperty => {
            if !range.is_iri() {
                return Err(Deferred::Unsupported("data range expression"));
            }
            AxiomKind::DataPropertyRange {
                property: DataProperty(property.clone()),
                range: Datatype(range.clone()),
            }
        }
        Classification::AnnotationProperty => AxiomKind::AnnotationPropertyRange {
            property: AnnotationProperty(property.clone()),
            range: range.clone(),
        },
        _ if state.may_guess() => {
            state.classifier.mark_annotation_property(property, false);
            AxiomKind::AnnotationPropertyRange {
                property: AnnotationProperty(property.clone()),
                range: range.clone(),
            }
        }
        _ => return Err(unclassified(state, triple)),
    };
    state.assemble(triple, |f, annotations| f.axiom(kind, annotations));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParserConfig;
    use owl_rdf_model::{vocab, Node};

    fn n(name: &str) -> Node {
        Node::iri(format!("http://example.org/{name}"))
    }

    #[test]
    fn datatype_range_makes_a_data_property() {
        let mut state = ParseState::new(ParserConfig::strict());
        let triple = Triple::new(
            n("age"),
            Node::iri(vocab::RDFS_RANGE),
            Node::iri(vocab::XSD_INTEGER),
        );
        try_streaming_range(&mut state, &triple);
        assert!(state.classifier.is_data_property(&n("age")));
        state.store.insert(triple.clone());
        resolve_range(&mut state, &triple).expect("range should resolve");
        assert_eq!(state.document.axioms_named("DataPropertyRange").count(), 1);
    }

    #[test]
    fn annotation_property_domain_keeps_any_iri() {
        let mut state = ParseState::new(ParserConfig::strict());
        state.classifier.mark_annotation_property(&n("note"), true);
        let triple = Triple::new(n("note"), Node::iri(vocab::RDFS_DOMAIN), n("Thing"));
        state.store.insert(triple.clone());
        resolve_domain(&mut state, &triple).expect("domain should resolve");
        assert_eq!(state.document.axioms_named("AnnotationPropertyDomain").count(), 1);
    }

    #[test]
    fn object_property_domain_rejects_class_expressions() {
        let mut state = ParseState::new(ParserConfig::lenient());
        state.classifier.mark_object_property(&n("p"), true);
        let triple = Triple::new(n("p"), Node::iri(vocab::RDFS_DOMAIN), Node::blank("r"));
        state.store.insert(triple.clone());
        assert!(matches!(
            resolve_domain(&mut state, &triple),
            Err(Deferred::Unsupported(_))
        ));
        assert!(state.store.contains(&triple));
    }
}
