//! RDF terms and triples.
//!
//! A [`Node`] is either an IRI, a blank node, or a literal. IRIs and blank
//! nodes can appear anywhere in a [`Triple`]; literals only in object
//! position. Nodes compare by value, so two nodes built from the same IRI
//! string are the same node.

use std::fmt;
use std::sync::Arc;

use crate::vocab;

/// An RDF literal: lexical form, datatype IRI, and optional language tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    /// The lexical form, unescaped.
    pub lexical: Arc<str>,
    /// Full IRI of the datatype (`rdf:langString` when a language tag is present).
    pub datatype: Arc<str>,
    /// Language tag, lower-cased, without the leading `@`.
    pub language: Option<Arc<str>>,
}

impl Literal {
    /// Creates an `xsd:string` literal.
    pub fn string(lexical: impl AsRef<str>) -> Self {
        Self::typed(lexical, vocab::XSD_STRING)
    }

    /// Creates a literal with an explicit datatype IRI.
    pub fn typed(lexical: impl AsRef<str>, datatype: impl AsRef<str>) -> Self {
        Self {
            lexical: Arc::from(lexical.as_ref()),
            datatype: Arc::from(datatype.as_ref()),
            language: None,
        }
    }

    /// Creates a language-tagged string literal.
    pub fn lang(lexical: impl AsRef<str>, language: impl AsRef<str>) -> Self {
        Self {
            lexical: Arc::from(lexical.as_ref()),
            datatype: Arc::from(vocab::RDF_LANG_STRING),
            language: Some(Arc::from(language.as_ref().to_ascii_lowercase())),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let escaped = self
            .lexical
            .replace('\\', "\\\\")
            .replace('"', "\\\"")
            .replace('\n', "\\n")
            .replace('\r', "\\r");
        match &self.language {
            Some(lang) => write!(f, "\"{escaped}\"@{lang}"),
            None => write!(f, "\"{escaped}\"^^<{}>", self.datatype),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Literal {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A graph node: named (IRI), anonymous (blank node), or a literal value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Node {
    /// A named node, holding its full IRI.
    Iri(Arc<str>),
    /// An anonymous node, holding its label without the `_:` prefix.
    Blank(Arc<str>),
    /// A literal value.
    Literal(Literal),
}

impl Node {
    /// Creates an IRI node.
    pub fn iri(iri: impl AsRef<str>) -> Self {
        Node::Iri(Arc::from(iri.as_ref()))
    }

    /// Creates a blank node. `label` must not include the `_:` prefix.
    pub fn blank(label: impl AsRef<str>) -> Self {
        Node::Blank(Arc::from(label.as_ref()))
    }

    /// Creates a literal node.
    pub fn literal(literal: Literal) -> Self {
        Node::Literal(literal)
    }

    /// Returns the IRI if this is a named node.
    #[must_use]
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Node::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Returns the literal if this node is one.
    #[must_use]
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Node::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// True for named nodes.
    #[must_use]
    pub fn is_iri(&self) -> bool {
        matches!(self, Node::Iri(_))
    }

    /// True for anonymous nodes.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Node::Blank(_))
    }

    /// True for literals.
    #[must_use]
    pub fn is_literal(&self) -> bool {
        matches!(self, Node::Literal(_))
    }

    /// True if this node is the named node `iri`.
    #[must_use]
    pub fn is(&self, iri: &str) -> bool {
        self.as_iri() == Some(iri)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Iri(iri) => write!(f, "<{iri}>"),
            Node::Blank(label) => write!(f, "_:{label}"),
            Node::Literal(lit) => fmt::Display::fmt(lit, f),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Node {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// An immutable subject–predicate–object fact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Triple {
    /// Subject: an IRI or blank node.
    pub subject: Node,
    /// Predicate: always an IRI.
    pub predicate: Node,
    /// Object: any node, including literals.
    pub object: Node,
}

impl Triple {
    /// Creates a triple.
    pub fn new(subject: Node, predicate: Node, object: Node) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}
