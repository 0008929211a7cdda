//! Data factory: the one place where axioms are constructed.
//!
//! The consumer never builds [`Axiom`] values directly; it hands resolved
//! operands and drained annotations to a [`DataFactory`]. Every method is
//! infallible for well-typed inputs.

use crate::axiom::{Annotation, Axiom, AxiomKind};
use crate::entity::{AnnotationProperty, DataProperty, Entity, EntityKind, ObjectProperty};
use crate::term::Node;

/// Builds entities and axioms.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataFactory;

impl DataFactory {
    /// Creates a factory.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// `SubObjectPropertyOf(ObjectPropertyChain(chain..) sup)`.
    pub fn sub_property_chain_of(
        &self,
        chain: Vec<ObjectProperty>,
        sup: ObjectProperty,
        annotations: impl IntoIterator<Item = Annotation>,
    ) -> Axiom {
        Axiom::new(AxiomKind::SubPropertyChainOf { chain, sup }, annotations)
    }

    /// `SubObjectPropertyOf(sub sup)`.
    pub fn sub_object_property_of(
        &self,
        sub: ObjectProperty,
        sup: ObjectProperty,
        annotations: impl IntoIterator<Item = Annotation>,
    ) -> Axiom {
        Axiom::new(AxiomKind::SubObjectPropertyOf { sub, sup }, annotations)
    }

    /// `SubDataPropertyOf(sub sup)`.
    pub fn sub_data_property_of(
        &self,
        sub: DataProperty,
        sup: DataProperty,
        annotations: impl IntoIterator<Item = Annotation>,
    ) -> Axiom {
        Axiom::new(AxiomKind::SubDataPropertyOf { sub, sup }, annotations)
    }

    /// `SubAnnotationPropertyOf(sub sup)`.
    pub fn sub_annotation_property_of(
        &self,
        sub: AnnotationProperty,
        sup: AnnotationProperty,
        annotations: impl IntoIterator<Item = Annotation>,
    ) -> Axiom {
        Axiom::new(AxiomKind::SubAnnotationPropertyOf { sub, sup }, annotations)
    }

    /// `Declaration(kind(node))`.
    pub fn declaration(
        &self,
        kind: EntityKind,
        node: Node,
        annotations: impl IntoIterator<Item = Annotation>,
    ) -> Axiom {
        Axiom::new(AxiomKind::Declaration(Entity { kind, node }), annotations)
    }

    /// Any other axiom shape.
    pub fn axiom(
        &self,
        kind: AxiomKind,
        annotations: impl IntoIterator<Item = Annotation>,
    ) -> Axiom {
        Axiom::new(kind, annotations)
    }

    /// An annotation with the given property and value.
    #[must_use]
    pub fn annotation(&self, property: Node, value: Node) -> Annotation {
        Annotation {
            property: AnnotationProperty(property),
            value,
        }
    }
}
