//! Pre-built nodes for the vocabulary terms the consumer looks up by key.

use owl_rdf_model::{vocab, Node};

/// Interned vocabulary nodes, built once per parse.
#[derive(Debug, Clone)]
pub(crate) struct Vocabulary {
    pub(crate) rdf_type: Node,
    pub(crate) rdf_first: Node,
    pub(crate) rdf_rest: Node,
    pub(crate) rdf_list: Node,
    pub(crate) owl_axiom: Node,
    pub(crate) annotated_property: Node,
    pub(crate) annotated_target: Node,
    pub(crate) legacy_property_chain: Node,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            rdf_type: Node::iri(vocab::RDF_TYPE),
            rdf_first: Node::iri(vocab::RDF_FIRST),
            rdf_rest: Node::iri(vocab::RDF_REST),
            rdf_list: Node::iri(vocab::RDF_LIST),
            owl_axiom: Node::iri(vocab::OWL_AXIOM),
            annotated_property: Node::iri(vocab::OWL_ANNOTATED_PROPERTY),
            annotated_target: Node::iri(vocab::OWL_ANNOTATED_TARGET),
            legacy_property_chain: Node::iri(vocab::deprecated::OWL_PROPERTY_CHAIN),
        }
    }
}

/// Predicates that only make sense as part of a larger construct (list
/// cells, reification nodes, legacy chains). They have no handler of their
/// own and are consumed together with the construct.
pub(crate) fn is_structural(predicate: &Node) -> bool {
    predicate.as_iri().is_some_and(|iri| {
        matches!(
            iri,
            vocab::RDF_FIRST
                | vocab::RDF_REST
                | vocab::OWL_ANNOTATED_PROPERTY
                | vocab::OWL_ANNOTATED_TARGET
                | vocab::deprecated::OWL_PROPERTY_CHAIN
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_links_are_structural() {
        let v = Vocabulary::default();
        assert!(is_structural(&v.rdf_first));
        assert!(is_structural(&v.legacy_property_chain));
        assert!(!is_structural(&v.rdf_type));
        assert!(!is_structural(&Node::iri(vocab::OWL_ANNOTATED_SOURCE)));
    }
}
