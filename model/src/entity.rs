//! Typed OWL entities.
//!
//! Each entity wraps the [`Node`] that names it. Properties and classes are
//! normally IRIs; individuals may also be anonymous.

use std::fmt;

use crate::term::Node;

macro_rules! entity {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize))]
        pub struct $name(pub Node);

        impl $name {
            /// Returns the node naming this entity.
            #[must_use]
            pub fn node(&self) -> &Node {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

entity!(
    /// An OWL class (`owl:Class`).
    Class
);
entity!(
    /// An object property (`owl:ObjectProperty`): relates two individuals.
    ObjectProperty
);
entity!(
    /// A data property (`owl:DatatypeProperty`): relates an individual to a literal.
    DataProperty
);
entity!(
    /// An annotation property (`owl:AnnotationProperty`): carries non-logical documentation.
    AnnotationProperty
);
entity!(
    /// A named or anonymous individual.
    Individual
);
entity!(
    /// A datatype (`rdfs:Datatype`), e.g. `xsd:integer`.
    Datatype
);

/// The kind of a declared entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum EntityKind {
    /// `owl:Class`.
    Class,
    /// `owl:ObjectProperty`.
    ObjectProperty,
    /// `owl:DatatypeProperty`.
    DataProperty,
    /// `owl:AnnotationProperty`.
    AnnotationProperty,
    /// `owl:NamedIndividual`.
    NamedIndividual,
    /// `rdfs:Datatype`.
    Datatype,
}

impl EntityKind {
    /// Returns the keyword used in functional-style syntax.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Class => "Class",
            EntityKind::ObjectProperty => "ObjectProperty",
            EntityKind::DataProperty => "DataProperty",
            EntityKind::AnnotationProperty => "AnnotationProperty",
            EntityKind::NamedIndividual => "NamedIndividual",
            EntityKind::Datatype => "Datatype",
        }
    }
}

/// A declared entity: its kind plus the node naming it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Entity {
    /// What kind of entity is declared.
    pub kind: EntityKind,
    /// The declared node.
    pub node: Node,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind.as_str(), self.node)
    }
}
