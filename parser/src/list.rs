//! RDF list resolution.
//!
//! Two encodings are understood:
//!
//! - the canonical `rdf:first` / `rdf:rest` chain ending in `rdf:nil`;
//! - the legacy form where one node carries several `rdf:first` edges, read
//!   as consecutive elements in arrival order.
//!
//! Walking is read-only. A successful walk returns a [`ResolvedList`] that
//! remembers every link triple it followed; the caller consumes those links
//! only once the whole axiom is known to be buildable, so a failure never
//! leaves a half-consumed list behind.

use std::collections::HashSet;

use owl_rdf_model::{vocab, Node, Triple};
use tracing::trace;

use crate::error::ChainError;
use crate::store::TripleStore;
use crate::vocabulary::Vocabulary;

/// The elements of a walked list plus the link triples that encode it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedList {
    elements: Vec<Node>,
    links: Vec<Triple>,
}

impl ResolvedList {
    /// The list elements, in order.
    #[must_use]
    pub fn elements(&self) -> &[Node] {
        &self.elements
    }

    /// Number of link triples the list is made of.
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Consumes the link triples from `store` and returns the elements.
    pub fn consume(self, store: &mut TripleStore) -> Vec<Node> {
        for link in &self.links {
            store.consume(link);
        }
        self.elements
    }
}

/// Walks lists encoded in the pending triples of a [`TripleStore`].
#[derive(Debug, Clone, Copy)]
pub struct ListResolver<'a> {
    store: &'a TripleStore,
    vocab: &'a Vocabulary,
}

impl<'a> ListResolver<'a> {
    pub(crate) fn new(store: &'a TripleStore, vocab: &'a Vocabulary) -> Self {
        Self { store, vocab }
    }

    /// Walks the canonical list starting at `head`.
    ///
    /// # Errors
    ///
    /// [`ChainError::CyclicChain`] if a cell is reached twice,
    /// [`ChainError::MissingElement`] if a cell has no `rdf:first`, and
    /// [`ChainError::UnterminatedChain`] if a cell has no `rdf:rest` or the
    /// walk takes more hops than there are pending triples.
    pub fn walk(&self, head: &Node) -> Result<ResolvedList, ChainError> {
        let bound = self.store.len();
        let mut visited = HashSet::new();
        let mut elements = Vec::new();
        let mut links = Vec::new();
        let mut cell = head.clone();
        let mut hops = 0;

        while !cell.is(vocab::RDF_NIL) {
            if !visited.insert(cell.clone()) {
                return Err(ChainError::CyclicChain {
                    head: head.clone(),
                    node: cell,
                });
            }
            if hops > bound {
                return Err(ChainError::UnterminatedChain {
                    head: head.clone(),
                    hops,
                });
            }
            let Some(first) = self.store.object(&cell, &self.vocab.rdf_first) else {
                return Err(ChainError::MissingElement {
                    head: head.clone(),
                    node: cell,
                });
            };
            let Some(rest) = self.store.object(&cell, &self.vocab.rdf_rest) else {
                return Err(ChainError::UnterminatedChain {
                    head: head.clone(),
                    hops,
                });
            };
            links.push(Triple::new(
                cell.clone(),
                self.vocab.rdf_first.clone(),
                first.clone(),
            ));
            links.push(Triple::new(
                cell.clone(),
                self.vocab.rdf_rest.clone(),
                rest.clone(),
            ));
            let typed = Triple::new(
                cell.clone(),
                self.vocab.rdf_type.clone(),
                self.vocab.rdf_list.clone(),
            );
            if self.store.contains(&typed) {
                links.push(typed);
            }
            elements.push(first.clone());
            cell = rest.clone();
            hops += 1;
        }

        trace!(%head, len = elements.len(), "walked list");
        Ok(ResolvedList { elements, links })
    }

    /// Walks a list that may use the legacy encoding. A `head` with an
    /// `rdf:rest` edge is read canonically; otherwise every `rdf:first` edge
    /// on `head` is an element.
    ///
    /// # Errors
    ///
    /// As [`ListResolver::walk`] for canonical lists;
    /// [`ChainError::MissingElement`] if a legacy head has no `rdf:first`.
    pub fn walk_legacy(&self, head: &Node) -> Result<ResolvedList, ChainError> {
        if self.store.has_predicate(head, &self.vocab.rdf_rest) {
            return self.walk(head);
        }
        let elements: Vec<Node> = self
            .store
            .objects(head, &self.vocab.rdf_first)
            .cloned()
            .collect();
        if elements.is_empty() {
            return Err(ChainError::MissingElement {
                head: head.clone(),
                node: head.clone(),
            });
        }
        let links = elements
            .iter()
            .map(|e| Triple::new(head.clone(), self.vocab.rdf_first.clone(), e.clone()))
            .collect();
        trace!(%head, len = elements.len(), "walked legacy list");
        Ok(ResolvedList { elements, links })
    }
}
