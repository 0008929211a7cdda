//! Annotations waiting for the axiom they belong to.
//!
//! An entry is keyed by the subject of the axiom it targets. Entries that
//! came from a reified `owl:Axiom` node also remember the predicate and
//! object of the annotated triple, so two axioms about the same subject do
//! not pick up each other's annotations. Unscoped entries attach to the next
//! axiom assembled for their subject.

use std::collections::{BTreeSet, HashMap};

use owl_rdf_model::{Annotation, Node};

#[derive(Debug, Clone)]
struct PendingEntry {
    about: Option<(Node, Node)>,
    annotation: Annotation,
}

impl PendingEntry {
    fn matches(&self, predicate: &Node, object: &Node) -> bool {
        match &self.about {
            None => true,
            Some((p, o)) => p == predicate && o == object,
        }
    }
}

/// Buffer of annotations keyed by target subject.
#[derive(Debug, Default)]
pub struct PendingAnnotations {
    entries: HashMap<Node, Vec<PendingEntry>>,
}

impl PendingAnnotations {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffers `annotation` for the next axiom assembled about `target`.
    pub fn add_pending(&mut self, target: Node, annotation: Annotation) {
        self.entries.entry(target).or_default().push(PendingEntry {
            about: None,
            annotation,
        });
    }

    /// Buffers `annotation` for the axiom built from `(target, predicate, object)`.
    pub fn add_pending_for(
        &mut self,
        target: Node,
        predicate: Node,
        object: Node,
        annotation: Annotation,
    ) {
        self.entries.entry(target).or_default().push(PendingEntry {
            about: Some((predicate, object)),
            annotation,
        });
    }

    /// Removes and returns every annotation buffered for `target`.
    pub fn drain(&mut self, target: &Node) -> BTreeSet<Annotation> {
        self.entries
            .remove(target)
            .into_iter()
            .flatten()
            .map(|e| e.annotation)
            .collect()
    }

    /// Removes and returns the annotations that belong to the axiom built
    /// from `(target, predicate, object)`: entries scoped to that triple plus
    /// unscoped entries for `target`.
    pub fn drain_for(
        &mut self,
        target: &Node,
        predicate: &Node,
        object: &Node,
    ) -> BTreeSet<Annotation> {
        let Some(entries) = self.entries.get_mut(target) else {
            return BTreeSet::new();
        };
        let (taken, kept): (Vec<_>, Vec<_>) = std::mem::take(entries)
            .into_iter()
            .partition(|e| e.matches(predicate, object));
        if kept.is_empty() {
            self.entries.remove(target);
        } else {
            *entries = kept;
        }
        taken.into_iter().map(|e| e.annotation).collect()
    }

    /// True if anything is buffered for `target`.
    #[must_use]
    pub fn has_pending(&self, target: &Node) -> bool {
        self.entries.contains_key(target)
    }

    /// Number of buffered annotations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// True if nothing is buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Annotations that never found their axiom, sorted by target.
    #[must_use]
    pub fn into_dangling(self) -> Vec<(Node, Annotation)> {
        let mut dangling: Vec<_> = self
            .entries
            .into_iter()
            .flat_map(|(target, entries)| {
                entries
                    .into_iter()
                    .map(move |e| (target.clone(), e.annotation))
            })
            .collect();
        dangling.sort();
        dangling
    }
}
