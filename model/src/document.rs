//! The output document: an optional ontology IRI plus a set of axioms.
//!
//! Once an axiom is added the document owns it; the consumer keeps no
//! reference.

use std::collections::BTreeSet;

use crate::axiom::{Axiom, AxiomKind};
use crate::term::Node;

/// An OWL document assembled from RDF triples.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Document {
    /// The IRI of the `owl:Ontology` node, if the source declared one.
    pub ontology_iri: Option<Node>,
    /// All axioms, deduplicated and in a stable order.
    pub axioms: BTreeSet<Axiom>,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an axiom. Returns false if an identical axiom was already present.
    pub fn add_axiom(&mut self, axiom: Axiom) -> bool {
        self.axioms.insert(axiom)
    }

    /// Returns the total number of axioms.
    #[must_use]
    pub fn axiom_count(&self) -> usize {
        self.axioms.len()
    }

    /// Returns the number of axioms that are not declarations.
    #[must_use]
    pub fn logical_axiom_count(&self) -> usize {
        self.axioms
            .iter()
            .filter(|a| !matches!(a.kind, AxiomKind::Declaration(_)))
            .count()
    }

    /// Iterates over axioms whose functional-style keyword is `name`
    /// (e.g. `"SubObjectPropertyOf"`).
    pub fn axioms_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Axiom> + 'a {
        self.axioms.iter().filter(move |a| a.kind.name() == name)
    }

    /// Returns true if the document contains `kind`, with any annotations.
    #[must_use]
    pub fn contains_kind(&self, kind: &AxiomKind) -> bool {
        self.axioms.iter().any(|a| &a.kind == kind)
    }

    /// Returns the axioms with annotations stripped, for comparing documents
    /// structurally.
    #[must_use]
    pub fn kinds(&self) -> BTreeSet<&AxiomKind> {
        self.axioms.iter().map(|a| &a.kind).collect()
    }
}
