//! Typed OWL document model.
//!
//! The `owl-rdf-model` crate holds the types the RDF consumer produces:
//! RDF [`Node`]s and [`Triple`]s on the input side, typed entities and
//! [`Axiom`]s on the output side, the [`DataFactory`] that constructs
//! axioms, and the [`Document`] that owns them.
//!
//! # Entry Point
//!
//! ```
//! use owl_rdf_model::{DataFactory, Document, Node, ObjectProperty};
//!
//! let factory = DataFactory::new();
//! let mut doc = Document::new();
//! let p = ObjectProperty(Node::iri("http://example.org/hasParent"));
//! let q = ObjectProperty(Node::iri("http://example.org/hasAncestor"));
//! doc.add_axiom(factory.sub_object_property_of(p, q, []));
//! assert_eq!(doc.axiom_count(), 1);
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(missing_docs, clippy::missing_errors_doc)]

pub mod axiom;
pub mod document;
pub mod entity;
pub mod factory;
pub mod term;
pub mod vocab;

pub use axiom::{Annotation, Axiom, AxiomKind};
pub use document::Document;
pub use entity::{
    AnnotationProperty, Class, DataProperty, Datatype, Entity, EntityKind, Individual,
    ObjectProperty,
};
pub use factory::DataFactory;
pub use term::{Literal, Node, Triple};
