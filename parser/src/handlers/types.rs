//! `rdf:type`: declarations, property characteristics, the ontology header,
//! and class assertions.

use owl_rdf_model::{
    vocab, AxiomKind, Class, DataProperty, EntityKind, Individual, Node, ObjectProperty, Triple,
};
use tracing::debug;

use crate::classifier::Classification;
use crate::error::{Deferred, Resolution};
use crate::state::ParseState;

#[derive(Debug, Clone, Copy)]
enum TypeTarget {
    Declaration(EntityKind),
    Transitive,
    Symmetric,
    Functional,
    Ontology,
    /// `owl:Axiom` and `rdf:List` nodes are consumed with their construct.
    Structural,
    Reserved,
    Instance,
}

fn target(object: &Node) -> TypeTarget {
    let Some(iri) = object.as_iri() else {
        return TypeTarget::Instance;
    };
    match iri {
        vocab::OWL_CLASS | vocab::RDFS_CLASS => TypeTarget::Declaration(EntityKind::Class),
        vocab::OWL_OBJECT_PROPERTY => TypeTarget::Declaration(EntityKind::ObjectProperty),
        vocab::OWL_DATATYPE_PROPERTY => TypeTarget::Declaration(EntityKind::DataProperty),
        vocab::OWL_ANNOTATION_PROPERTY => TypeTarget::Declaration(EntityKind::AnnotationProperty),
        vocab::OWL_NAMED_INDIVIDUAL => TypeTarget::Declaration(EntityKind::NamedIndividual),
        vocab::RDFS_DATATYPE => TypeTarget::Declaration(EntityKind::Datatype),
        vocab::OWL_TRANSITIVE_PROPERTY => TypeTarget::Transitive,
        vocab::OWL_SYMMETRIC_PROPERTY => TypeTarget::Symmetric,
        vocab::OWL_FUNCTIONAL_PROPERTY => TypeTarget::Functional,
        vocab::OWL_ONTOLOGY => TypeTarget::Ontology,
        vocab::OWL_AXIOM | vocab::RDF_LIST => TypeTarget::Structural,
        _ if vocab::is_reserved(iri) => TypeTarget::Reserved,
        _ => TypeTarget::Instance,
    }
}

fn classification(kind: EntityKind) -> Classification {
    match kind {
        EntityKind::Class => Classification::Class,
        EntityKind::ObjectProperty => Classification::ObjectProperty,
        EntityKind::DataProperty => Classification::DataProperty,
        EntityKind::AnnotationProperty => Classification::AnnotationProperty,
        EntityKind::NamedIndividual => Classification::Individual,
        EntityKind::Datatype => Classification::Datatype,
    }
}

/// With several headers the smallest IRI wins, whatever order they came in.
fn record_ontology(state: &mut ParseState, subject: &Node) {
    if let Some(existing) = state.document.ontology_iri.as_ref() {
        if existing != subject {
            debug!(%existing, other = %subject, "second ontology header");
        }
        if existing <= subject {
            return;
        }
    }
    state.document.ontology_iri = Some(subject.clone());
}

/// `p rdf:type owl:TransitiveProperty` and friends declare `p` an object
/// property as a side effect.
fn characteristic(
    state: &mut ParseState,
    triple: &Triple,
    shape: fn(ObjectProperty) -> AxiomKind,
) {
    state.classifier.mark_object_property(&triple.subject, true);
    let kind = shape(ObjectProperty(triple.subject.clone()));
    state.assemble(triple, |f, annotations| f.axiom(kind, annotations));
}

pub(super) fn try_streaming(state: &mut ParseState, triple: &Triple) -> bool {
    let subject = &triple.subject;
    match target(&triple.object) {
        TypeTarget::Declaration(kind) => {
            state.classifier.mark(subject, classification(kind), true);
            false
        }
        TypeTarget::Transitive | TypeTarget::Symmetric => {
            state.classifier.mark_object_property(subject, true);
            false
        }
        TypeTarget::Ontology => {
            record_ontology(state, subject);
            true
        }
        TypeTarget::Instance => {
            if triple.object.is_iri() {
                state.classifier.mark_class(&triple.object, false);
            }
            false
        }
        TypeTarget::Functional | TypeTarget::Structural | TypeTarget::Reserved => false,
    }
}

pub(super) fn resolve(state: &mut ParseState, triple: &Triple) -> Resolution {
    let subject = &triple.subject;
    if subject.is_literal() {
        return Err(Deferred::Malformed("literal subject of rdf:type"));
    }
    match target(&triple.object) {
        TypeTarget::Declaration(kind) => {
            if !subject.is_iri() {
                return Err(Deferred::Unsupported("declaration of an anonymous node"));
            }
            state.classifier.mark(subject, classification(kind), true);
            let node = subject.clone();
            state.assemble(triple, |f, annotations| f.declaration(kind, node, annotations));
        }
        TypeTarget::Transitive => {
            characteristic(state, triple, AxiomKind::TransitiveObjectProperty);
        }
        TypeTarget::Symmetric => {
            characteristic(state, triple, AxiomKind::SymmetricObjectProperty);
        }
        TypeTarget::Functional => {
            let kind = match state.classifier.classify(subject) {
                Classification::ObjectProperty => {
                    AxiomKind::FunctionalObjectProperty(ObjectProperty(subject.clone()))
                }
                Classification::DataProperty => {
                    AxiomKind::FunctionalDataProperty(DataProperty(subject.clone()))
                }
                other => {
                    return Err(Deferred::Unclassified {
                        subject: other,
                        object: Classification::Unclassified,
                    })
                }
            };
            state.assemble(triple, |f, annotations| f.axiom(kind, annotations));
        }
        TypeTarget::Ontology => {
            record_ontology(state, subject);
            state.store.consume(triple);
        }
        TypeTarget::Structural => return Err(Deferred::Structural),
        TypeTarget::Reserved => return Err(Deferred::Unsupported("reserved vocabulary type")),
        TypeTarget::Instance => {
            if !triple.object.is_iri() {
                return Err(Deferred::Unsupported("anonymous class expression"));
            }
            match state.classifier.classify(&triple.object) {
                Classification::Class | Classification::Unclassified => {}
                _ => return Err(Deferred::Malformed("rdf:type object is not a class")),
            }
            let kind = AxiomKind::ClassAssertion {
                class: Class(triple.object.clone()),
                individual: Individual(subject.clone()),
            };
            state.assemble(triple, |f, annotations| f.axiom(kind, annotations));
        }
    }
    Ok(())
}
