//! Merged build output

use ahash::AHashSet;

use super::builder_kind::BuilderKind;
use super::stages::BuilderOutput;
use crate::shared::models::{Iri, Triple, TripleSet};

/// Union of every builder's triples for one build pass
#[derive(Debug, Clone, Default)]
pub struct Graph {
    triples: TripleSet,
    contributions: Vec<(BuilderKind, usize)>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set union with one builder's output
    pub fn merge(&mut self, output: BuilderOutput) {
        let before = self.triples.len();
        self.triples.extend(output.triples);
        self.contributions
            .push((output.kind, self.triples.len() - before));
    }

    pub fn triples(&self) -> &TripleSet {
        &self.triples
    }

    pub fn into_triples(self) -> TripleSet {
        self.triples
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    pub fn has_type(&self, subject: &Iri, class: &str) -> bool {
        self.triples.has_type(subject, class)
    }

    /// New triples each builder added, in merge order
    pub fn contributions(&self) -> &[(BuilderKind, usize)] {
        &self.contributions
    }

    pub fn to_set(&self) -> AHashSet<Triple> {
        self.triples.to_set()
    }
}
