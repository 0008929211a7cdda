//! Axioms: the fully-typed statements of an OWL document.
//!
//! An [`Axiom`] pairs a structural [`AxiomKind`] with the set of
//! [`Annotation`]s attached to it. Two axioms are equal when both the
//! statement and the annotations match, which gives documents set semantics.

use std::collections::BTreeSet;
use std::fmt;

use crate::entity::{
    AnnotationProperty, Class, DataProperty, Datatype, Entity, Individual, ObjectProperty,
};
use crate::term::{Literal, Node};

/// An annotation: an annotation property and its value (IRI, blank node, or literal).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Annotation {
    /// The annotation property.
    pub property: AnnotationProperty,
    /// The annotation value.
    pub value: Node,
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Annotation({} {})", self.property, self.value)
    }
}

/// The structural part of an axiom.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AxiomKind {
    /// `Declaration(Kind(e))`.
    Declaration(Entity),
    /// `SubClassOf(sub sup)` between named classes.
    SubClassOf {
        /// The subclass.
        sub: Class,
        /// The superclass.
        sup: Class,
    },
    /// `ClassAssertion(class individual)`.
    ClassAssertion {
        /// The asserted class.
        class: Class,
        /// The individual that is an instance of `class`.
        individual: Individual,
    },
    /// `SubObjectPropertyOf(ObjectPropertyChain(p1 .. pn) sup)`.
    SubPropertyChainOf {
        /// The chain, in order.
        chain: Vec<ObjectProperty>,
        /// The property implied by the chain.
        sup: ObjectProperty,
    },
    /// `SubObjectPropertyOf(sub sup)`.
    SubObjectPropertyOf {
        /// The sub-property.
        sub: ObjectProperty,
        /// The super-property.
        sup: ObjectProperty,
    },
    /// `SubDataPropertyOf(sub sup)`.
    SubDataPropertyOf {
        /// The sub-property.
        sub: DataProperty,
        /// The super-property.
        sup: DataProperty,
    },
    /// `SubAnnotationPropertyOf(sub sup)`.
    SubAnnotationPropertyOf {
        /// The sub-property.
        sub: AnnotationProperty,
        /// The super-property.
        sup: AnnotationProperty,
    },
    /// `EquivalentObjectProperties(p q)`.
    EquivalentObjectProperties(ObjectProperty, ObjectProperty),
    /// `EquivalentDataProperties(p q)`.
    EquivalentDataProperties(DataProperty, DataProperty),
    /// `InverseObjectProperties(p q)`.
    InverseObjectProperties(ObjectProperty, ObjectProperty),
    /// `ObjectPropertyDomain(p c)`.
    ObjectPropertyDomain {
        /// The property.
        property: ObjectProperty,
        /// The domain class.
        domain: Class,
    },
    /// `ObjectPropertyRange(p c)`.
    ObjectPropertyRange {
        /// The property.
        property: ObjectProperty,
        /// The range class.
        range: Class,
    },
    /// `DataPropertyDomain(p c)`.
    DataPropertyDomain {
        /// The property.
        property: DataProperty,
        /// The domain class.
        domain: Class,
    },
    /// `DataPropertyRange(p dt)`.
    DataPropertyRange {
        /// The property.
        property: DataProperty,
        /// The range datatype.
        range: Datatype,
    },
    /// `AnnotationPropertyDomain(p iri)`.
    AnnotationPropertyDomain {
        /// The property.
        property: AnnotationProperty,
        /// The domain IRI.
        domain: Node,
    },
    /// `AnnotationPropertyRange(p iri)`.
    AnnotationPropertyRange {
        /// The property.
        property: AnnotationProperty,
        /// The range IRI.
        range: Node,
    },
    /// `FunctionalObjectProperty(p)`.
    FunctionalObjectProperty(ObjectProperty),
    /// `FunctionalDataProperty(p)`.
    FunctionalDataProperty(DataProperty),
    /// `TransitiveObjectProperty(p)`.
    TransitiveObjectProperty(ObjectProperty),
    /// `SymmetricObjectProperty(p)`.
    SymmetricObjectProperty(ObjectProperty),
    /// `AnnotationAssertion(p subject value)`.
    AnnotationAssertion {
        /// The annotation property.
        property: AnnotationProperty,
        /// The annotated subject (IRI or blank node).
        subject: Node,
        /// The annotation value.
        value: Node,
    },
    /// `ObjectPropertyAssertion(p a b)`.
    ObjectPropertyAssertion {
        /// The property.
        property: ObjectProperty,
        /// The source individual.
        subject: Individual,
        /// The target individual.
        object: Individual,
    },
    /// `DataPropertyAssertion(p a v)`.
    DataPropertyAssertion {
        /// The property.
        property: DataProperty,
        /// The source individual.
        subject: Individual,
        /// The literal value.
        value: Literal,
    },
}

impl AxiomKind {
    /// Returns the functional-style syntax keyword for this axiom kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            AxiomKind::Declaration(_) => "Declaration",
            AxiomKind::SubClassOf { .. } => "SubClassOf",
            AxiomKind::ClassAssertion { .. } => "ClassAssertion",
            AxiomKind::SubPropertyChainOf { .. } | AxiomKind::SubObjectPropertyOf { .. } => {
                "SubObjectPropertyOf"
            }
            AxiomKind::SubDataPropertyOf { .. } => "SubDataPropertyOf",
            AxiomKind::SubAnnotationPropertyOf { .. } => "SubAnnotationPropertyOf",
            AxiomKind::EquivalentObjectProperties(..) => "EquivalentObjectProperties",
            AxiomKind::EquivalentDataProperties(..) => "EquivalentDataProperties",
            AxiomKind::InverseObjectProperties(..) => "InverseObjectProperties",
            AxiomKind::ObjectPropertyDomain { .. } => "ObjectPropertyDomain",
            AxiomKind::ObjectPropertyRange { .. } => "ObjectPropertyRange",
            AxiomKind::DataPropertyDomain { .. } => "DataPropertyDomain",
            AxiomKind::DataPropertyRange { .. } => "DataPropertyRange",
            AxiomKind::AnnotationPropertyDomain { .. } => "AnnotationPropertyDomain",
            AxiomKind::AnnotationPropertyRange { .. } => "AnnotationPropertyRange",
            AxiomKind::FunctionalObjectProperty(_) => "FunctionalObjectProperty",
            AxiomKind::FunctionalDataProperty(_) => "FunctionalDataProperty",
            AxiomKind::TransitiveObjectProperty(_) => "TransitiveObjectProperty",
            AxiomKind::SymmetricObjectProperty(_) => "SymmetricObjectProperty",
            AxiomKind::AnnotationAssertion { .. } => "AnnotationAssertion",
            AxiomKind::ObjectPropertyAssertion { .. } => "ObjectPropertyAssertion",
            AxiomKind::DataPropertyAssertion { .. } => "DataPropertyAssertion",
        }
    }

    /// Operands in functional-style order.
    fn operands(&self) -> Vec<String> {
        match self {
            AxiomKind::Declaration(entity) => vec![entity.to_string()],
            AxiomKind::SubClassOf { sub, sup } => vec![sub.to_string(), sup.to_string()],
            AxiomKind::ClassAssertion { class, individual } => {
                vec![class.to_string(), individual.to_string()]
            }
            AxiomKind::SubPropertyChainOf { chain, sup } => {
                let links: Vec<String> = chain.iter().map(ToString::to_string).collect();
                vec![
                    format!("ObjectPropertyChain({})", links.join(" ")),
                    sup.to_string(),
                ]
            }
            AxiomKind::SubObjectPropertyOf { sub, sup } => vec![sub.to_string(), sup.to_string()],
            AxiomKind::SubDataPropertyOf { sub, sup } => vec![sub.to_string(), sup.to_string()],
            AxiomKind::SubAnnotationPropertyOf { sub, sup } => {
                vec![sub.to_string(), sup.to_string()]
            }
            AxiomKind::EquivalentObjectProperties(a, b)
            | AxiomKind::InverseObjectProperties(a, b) => vec![a.to_string(), b.to_string()],
            AxiomKind::EquivalentDataProperties(a, b) => vec![a.to_string(), b.to_string()],
            AxiomKind::ObjectPropertyDomain { property, domain } => {
                vec![property.to_string(), domain.to_string()]
            }
            AxiomKind::ObjectPropertyRange { property, range } => {
                vec![property.to_string(), range.to_string()]
            }
            AxiomKind::DataPropertyDomain { property, domain } => {
                vec![property.to_string(), domain.to_string()]
            }
            AxiomKind::DataPropertyRange { property, range } => {
                vec![property.to_string(), range.to_string()]
            }
            AxiomKind::AnnotationPropertyDomain { property, domain } => {
                vec![property.to_string(), domain.to_string()]
            }
            AxiomKind::AnnotationPropertyRange { property, range } => {
                vec![property.to_string(), range.to_string()]
            }
            AxiomKind::FunctionalObjectProperty(p)
            | AxiomKind::TransitiveObjectProperty(p)
            | AxiomKind::SymmetricObjectProperty(p) => vec![p.to_string()],
            AxiomKind::FunctionalDataProperty(p) => vec![p.to_string()],
            AxiomKind::AnnotationAssertion {
                property,
                subject,
                value,
            } => vec![property.to_string(), subject.to_string(), value.to_string()],
            AxiomKind::ObjectPropertyAssertion {
                property,
                subject,
                object,
            } => vec![property.to_string(), subject.to_string(), object.to_string()],
            AxiomKind::DataPropertyAssertion {
                property,
                subject,
                value,
            } => vec![property.to_string(), subject.to_string(), value.to_string()],
        }
    }
}

/// A complete statement: structure plus attached annotations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Axiom {
    /// The statement.
    pub kind: AxiomKind,
    /// Annotations on the statement itself (not on the entities it mentions).
    pub annotations: BTreeSet<Annotation>,
}

impl Axiom {
    /// Creates an axiom with the given annotations.
    pub fn new(kind: AxiomKind, annotations: impl IntoIterator<Item = Annotation>) -> Self {
        Self {
            kind,
            annotations: annotations.into_iter().collect(),
        }
    }

    /// Creates an axiom without annotations.
    #[must_use]
    pub fn plain(kind: AxiomKind) -> Self {
        Self::new(kind, [])
    }

    /// True if any annotation is attached.
    #[must_use]
    pub fn is_annotated(&self) -> bool {
        !self.annotations.is_empty()
    }
}

impl fmt::Display for Axiom {
    /// Functional-style syntax, e.g. `SubObjectPropertyOf(<p> <q>)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = self.annotations.iter().map(ToString::to_string).collect();
        parts.extend(self.kind.operands());
        write!(f, "{}({})", self.kind.name(), parts.join(" "))
    }
}
