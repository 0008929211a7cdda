//! Per-node type classification.
//!
//! Every IRI or blank node seen during a parse has at most one
//! [`Classification`]. Evidence comes in two strengths:
//!
//! - **explicit**: an `rdf:type` declaration or a built-in term. Explicit
//!   evidence always overwrites; when two explicit declarations disagree the
//!   last one processed wins and a single [`ClassificationConflict`] is
//!   recorded for the pair.
//! - **inferred**: co-occurrence with an already classified node. Inferred
//!   evidence only fills nodes that are still unclassified, so it can never
//!   downgrade a declaration. Disagreeing inferences are dropped silently.
//!   Inferences can be discarded wholesale with
//!   [`Classifier::forget_inferred`] and rebuilt in a fixed order.
//!
//! Conflicts are tolerated, never fatal.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use owl_rdf_model::{vocab, Node};
use tracing::{debug, trace, warn};

/// The best-known kind of a graph node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Classification {
    /// `owl:ObjectProperty`.
    ObjectProperty,
    /// `owl:DatatypeProperty`.
    DataProperty,
    /// `owl:AnnotationProperty`.
    AnnotationProperty,
    /// `owl:Class`.
    Class,
    /// `rdfs:Datatype`.
    Datatype,
    /// `owl:NamedIndividual`.
    Individual,
    /// Nothing is known yet.
    Unclassified,
}

impl Classification {
    /// Returns a short lower-case name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Classification::ObjectProperty => "object property",
            Classification::DataProperty => "data property",
            Classification::AnnotationProperty => "annotation property",
            Classification::Class => "class",
            Classification::Datatype => "datatype",
            Classification::Individual => "individual",
            Classification::Unclassified => "unclassified",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Two pieces of evidence that disagreed about a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassificationConflict {
    /// The node both pieces of evidence were about.
    pub node: Node,
    /// The classification the node ended up with.
    pub kept: Classification,
    /// The classification that lost.
    pub rejected: Classification,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    kind: Classification,
    explicit: bool,
}

/// Mutable classification state scoped to one parse.
#[derive(Debug, Default)]
pub struct Classifier {
    entries: HashMap<Node, Entry>,
    conflicts: BTreeMap<(Node, Classification, Classification), ClassificationConflict>,
    generation: u64,
}

impl Classifier {
    /// Creates an empty classifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a classifier that already knows the built-in OWL vocabulary:
    /// top/bottom properties, built-in annotation properties, `owl:Thing`,
    /// `owl:Nothing`, and `rdfs:Literal`. `xsd:` datatypes are recognised on
    /// lookup.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut classifier = Self::new();
        let builtins = [
            (vocab::OWL_TOP_OBJECT_PROPERTY, Classification::ObjectProperty),
            (vocab::OWL_BOTTOM_OBJECT_PROPERTY, Classification::ObjectProperty),
            (vocab::OWL_TOP_DATA_PROPERTY, Classification::DataProperty),
            (vocab::OWL_BOTTOM_DATA_PROPERTY, Classification::DataProperty),
            (vocab::OWL_THING, Classification::Class),
            (vocab::OWL_NOTHING, Classification::Class),
            (vocab::RDFS_LITERAL, Classification::Datatype),
        ];
        for (iri, kind) in builtins {
            classifier.mark(&Node::iri(iri), kind, true);
        }
        for iri in vocab::BUILTIN_ANNOTATION_PROPERTIES {
            classifier.mark(&Node::iri(iri), Classification::AnnotationProperty, true);
        }
        classifier.generation = 0;
        classifier
    }

    /// Returns the current classification of `node`; `Unclassified` if nothing is known.
    #[must_use]
    pub fn classify(&self, node: &Node) -> Classification {
        if let Some(entry) = self.entries.get(node) {
            return entry.kind;
        }
        match node.as_iri() {
            Some(iri) if vocab::is_builtin_datatype(iri) => Classification::Datatype,
            _ => Classification::Unclassified,
        }
    }

    /// True if the classification of `node` came from an explicit declaration.
    #[must_use]
    pub fn is_explicit(&self, node: &Node) -> bool {
        self.entries.get(node).is_some_and(|e| e.explicit)
    }

    /// Records evidence that `node` is of `kind`. Returns true if the stored
    /// classification changed. Literals are never classified.
    pub fn mark(&mut self, node: &Node, kind: Classification, explicit: bool) -> bool {
        if node.is_literal() || kind == Classification::Unclassified {
            return false;
        }
        let Some(entry) = self.entries.get_mut(node) else {
            debug!(%node, %kind, explicit, "classified");
            self.entries.insert(node.clone(), Entry { kind, explicit });
            self.generation += 1;
            return true;
        };

        if entry.kind == kind {
            entry.explicit |= explicit;
            return false;
        }

        if !explicit {
            trace!(%node, kept = %entry.kind, rejected = %kind, "ignored conflicting inference");
            return false;
        }

        let previous = *entry;
        entry.kind = kind;
        entry.explicit = true;
        if !previous.explicit {
            debug!(%node, %kind, inferred = %previous.kind, "declaration replaced inference");
            self.generation += 1;
            return true;
        }
        let conflict = ClassificationConflict {
            node: node.clone(),
            kept: kind,
            rejected: previous.kind,
        };
        // Re-applying the same pair of declarations must not count as progress,
        // otherwise two contradictory declarations would flip forever.
        let key = (node.clone(), kind.min(previous.kind), kind.max(previous.kind));
        match self.conflicts.insert(key, conflict) {
            Some(_) => false,
            None => {
                warn!(%node, kept = %kind, rejected = %previous.kind, "conflicting declarations");
                self.generation += 1;
                true
            }
        }
    }

    /// Drops every inferred classification, keeping declarations and
    /// built-ins. Returns the number of entries removed.
    pub fn forget_inferred(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.explicit);
        let removed = before - self.entries.len();
        if removed > 0 {
            debug!(removed, "inferred classifications discarded");
            self.generation += 1;
        }
        removed
    }

    /// Marks `node` as an object property.
    pub fn mark_object_property(&mut self, node: &Node, explicit: bool) -> bool {
        self.mark(node, Classification::ObjectProperty, explicit)
    }

    /// Marks `node` as a data property.
    pub fn mark_data_property(&mut self, node: &Node, explicit: bool) -> bool {
        self.mark(node, Classification::DataProperty, explicit)
    }

    /// Marks `node` as an annotation property.
    pub fn mark_annotation_property(&mut self, node: &Node, explicit: bool) -> bool {
        self.mark(node, Classification::AnnotationProperty, explicit)
    }

    /// Marks `node` as a class.
    pub fn mark_class(&mut self, node: &Node, explicit: bool) -> bool {
        self.mark(node, Classification::Class, explicit)
    }

    /// Marks `node` as a datatype.
    pub fn mark_datatype(&mut self, node: &Node, explicit: bool) -> bool {
        self.mark(node, Classification::Datatype, explicit)
    }

    /// True if `node` is currently an object property.
    #[must_use]
    pub fn is_object_property(&self, node: &Node) -> bool {
        self.classify(node) == Classification::ObjectProperty
    }

    /// True if `node` is currently a data property.
    #[must_use]
    pub fn is_data_property(&self, node: &Node) -> bool {
        self.classify(node) == Classification::DataProperty
    }

    /// True if `node` is currently an annotation property.
    #[must_use]
    pub fn is_annotation_property(&self, node: &Node) -> bool {
        self.classify(node) == Classification::AnnotationProperty
    }

    /// True if `node` is currently a class.
    #[must_use]
    pub fn is_class(&self, node: &Node) -> bool {
        self.classify(node) == Classification::Class
    }

    /// True if `node` is currently a datatype.
    #[must_use]
    pub fn is_datatype(&self, node: &Node) -> bool {
        self.classify(node) == Classification::Datatype
    }

    /// Monotonic counter bumped on every change; used to detect a fixed point.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Every conflicting pair seen so far, in a stable order. Each pair
    /// reports the declaration that was processed last.
    pub fn conflicts(&self) -> impl Iterator<Item = &ClassificationConflict> {
        self.conflicts.values()
    }

    /// Number of classified nodes, built-ins included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no node has been classified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(name: &str) -> Node {
        Node::iri(format!("http://example.org/{name}"))
    }

    #[test]
    fn unknown_nodes_are_unclassified() {
        let c = Classifier::new();
        assert_eq!(c.classify(&n("p")), Classification::Unclassified);
    }

    #[test]
    fn builtins_are_known() {
        let c = Classifier::with_builtins();
        assert!(c.is_annotation_property(&Node::iri(vocab::RDFS_LABEL)));
        assert!(c.is_object_property(&Node::iri(vocab::OWL_TOP_OBJECT_PROPERTY)));
        assert!(c.is_datatype(&Node::iri(vocab::XSD_INTEGER)));
        assert!(c.is_explicit(&Node::iri(vocab::OWL_THING)));
        assert_eq!(c.generation(), 0);
    }

    #[test]
    fn marking_is_idempotent() {
        let mut c = Classifier::new();
        assert!(c.mark_object_property(&n("p"), false));
        assert!(!c.mark_object_property(&n("p"), false));
        assert!(!c.mark_object_property(&n("p"), true));
        assert!(c.is_explicit(&n("p")));
        assert_eq!(c.generation(), 1);
    }

    #[test]
    fn inference_never_downgrades_a_declaration() {
        let mut c = Classifier::new();
        c.mark_data_property(&n("p"), true);
        assert!(!c.mark_object_property(&n("p"), false));
        assert!(c.is_data_property(&n("p")));
        assert_eq!(c.conflicts().count(), 0);
    }

    #[test]
    fn inference_does_not_overwrite_inference() {
        let mut c = Classifier::new();
        c.mark_data_property(&n("p"), false);
        assert!(!c.mark_object_property(&n("p"), false));
        assert!(c.is_data_property(&n("p")));
    }

    #[test]
    fn declaration_overrides_inference() {
        let mut c = Classifier::new();
        c.mark_data_property(&n("p"), false);
        assert!(c.mark_object_property(&n("p"), true));
        assert!(c.is_object_property(&n("p")));
    }

    #[test]
    fn contradictory_declarations_settle() {
        let mut c = Classifier::new();
        c.mark_object_property(&n("p"), true);
        assert!(c.mark_data_property(&n("p"), true));
        let generation = c.generation();
        // Replaying the same two declarations is not progress.
        assert!(!c.mark_object_property(&n("p"), true));
        c.mark_data_property(&n("p"), true);
        c.mark_object_property(&n("p"), true);
        assert_eq!(c.generation(), generation);
        assert!(c.is_object_property(&n("p")));
        let conflicts: Vec<_> = c.conflicts().collect();
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].kept, Classification::ObjectProperty);
        assert_eq!(conflicts[0].rejected, Classification::DataProperty);
    }

    #[test]
    fn forgetting_inferences_keeps_declarations() {
        let mut c = Classifier::with_builtins();
        c.mark_object_property(&n("declared"), true);
        c.mark_data_property(&n("guessed"), false);
        let generation = c.generation();
        assert_eq!(c.forget_inferred(), 1);
        assert!(c.generation() > generation);
        assert!(c.is_object_property(&n("declared")));
        assert_eq!(c.classify(&n("guessed")), Classification::Unclassified);
        assert!(c.is_annotation_property(&Node::iri(vocab::RDFS_LABEL)));
        // Now free to take a different inference.
        assert!(c.mark_object_property(&n("guessed"), false));
        assert_eq!(c.forget_inferred(), 1);
        assert_eq!(c.forget_inferred(), 0);
    }

    #[test]
    fn literals_are_never_classified() {
        let mut c = Classifier::new();
        let lit = Node::literal(owl_rdf_model::Literal::string("x"));
        assert!(!c.mark_class(&lit, true));
        assert!(c.is_empty());
    }
}
