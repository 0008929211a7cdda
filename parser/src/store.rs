//! Buffer of triples that have not been consumed yet.
//!
//! Triples live in an arrival-ordered slot arena. Lookups by subject,
//! subject+predicate, and predicate go through index vectors of slot
//! numbers; consuming a triple empties its slot and leaves the index
//! entries to be skipped. A consumed triple is remembered, so feeding it
//! again is a no-op.

use std::collections::HashMap;

use owl_rdf_model::{Node, Triple};

/// Pending triples with indexed lookup.
#[derive(Debug, Default)]
pub struct TripleStore {
    slots: Vec<Option<Triple>>,
    index: HashMap<Triple, usize>,
    by_subject: HashMap<Node, Vec<usize>>,
    by_subject_predicate: HashMap<(Node, Node), Vec<usize>>,
    by_predicate: HashMap<Node, Vec<usize>>,
    live: usize,
}

impl TripleStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a triple. Returns false if the same triple was already added,
    /// whether it is still pending or was consumed since.
    pub fn insert(&mut self, triple: Triple) -> bool {
        if self.index.contains_key(&triple) {
            return false;
        }
        let slot = self.slots.len();
        self.by_subject
            .entry(triple.subject.clone())
            .or_default()
            .push(slot);
        self.by_subject_predicate
            .entry((triple.subject.clone(), triple.predicate.clone()))
            .or_default()
            .push(slot);
        self.by_predicate
            .entry(triple.predicate.clone())
            .or_default()
            .push(slot);
        self.index.insert(triple.clone(), slot);
        self.slots.push(Some(triple));
        self.live += 1;
        true
    }

    /// True if `triple` is pending.
    #[must_use]
    pub fn contains(&self, triple: &Triple) -> bool {
        self.index
            .get(triple)
            .is_some_and(|&slot| self.slots[slot].is_some())
    }

    /// Removes a pending triple. Returns false if it was not pending.
    pub fn consume(&mut self, triple: &Triple) -> bool {
        let Some(&slot) = self.index.get(triple) else {
            return false;
        };
        if self.slots[slot].take().is_some() {
            self.live -= 1;
            true
        } else {
            false
        }
    }

    /// Number of pending triples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live
    }

    /// True if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Pending triples in arrival order.
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.slots.iter().flatten()
    }

    fn resolve<'a>(&'a self, slots: Option<&'a Vec<usize>>) -> impl Iterator<Item = &'a Triple> {
        slots
            .into_iter()
            .flatten()
            .filter_map(|&slot| self.slots[slot].as_ref())
    }

    /// Pending triples with the given subject, in arrival order.
    pub fn with_subject<'a>(&'a self, subject: &Node) -> impl Iterator<Item = &'a Triple> {
        self.resolve(self.by_subject.get(subject))
    }

    /// Pending triples with the given predicate, in arrival order.
    pub fn with_predicate<'a>(&'a self, predicate: &Node) -> impl Iterator<Item = &'a Triple> {
        self.resolve(self.by_predicate.get(predicate))
    }

    /// Pending objects of `(subject, predicate, ?)`, in arrival order.
    pub fn objects<'a>(
        &'a self,
        subject: &Node,
        predicate: &Node,
    ) -> impl Iterator<Item = &'a Node> {
        self.resolve(
            self.by_subject_predicate
                .get(&(subject.clone(), predicate.clone())),
        )
        .map(|t| &t.object)
    }

    /// First pending object of `(subject, predicate, ?)`.
    #[must_use]
    pub fn object(&self, subject: &Node, predicate: &Node) -> Option<&Node> {
        self.objects(subject, predicate).next()
    }

    /// True if some `(subject, predicate, ?)` is pending.
    #[must_use]
    pub fn has_predicate(&self, subject: &Node, predicate: &Node) -> bool {
        self.object(subject, predicate).is_some()
    }
}
