//! Graph primitives: identifiers, literals and triples
//!
//! Everything a builder emits is a [`Triple`]. Builders collect them into a
//! [`TripleSet`], which keeps first-insertion order and drops duplicates so
//! the output of a single builder call is deterministic.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::vocab::{rdf, xsd};

/// Graph node identifier
///
/// Opaque to consumers. Built only by string composition in
/// [`crate::shared::utils::id_generator`], never randomly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Iri(String);

impl Iri {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Iri {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Iri {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for Iri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// XSD datatype of a literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Datatype {
    String,
    Integer,
    NonNegativeInteger,
    Double,
    Boolean,
    HexBinary,
}

impl Datatype {
    pub fn iri(&self) -> &'static str {
        match self {
            Datatype::String => xsd::STRING,
            Datatype::Integer => xsd::INTEGER,
            Datatype::NonNegativeInteger => xsd::NON_NEGATIVE_INTEGER,
            Datatype::Double => xsd::DOUBLE,
            Datatype::Boolean => xsd::BOOLEAN,
            Datatype::HexBinary => xsd::HEX_BINARY,
        }
    }
}

/// Typed scalar literal
///
/// Stored in lexical form so literals stay `Eq + Hash` (floats included).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Literal {
    pub lexical: String,
    pub datatype: Datatype,
}

impl Literal {
    pub fn string(value: impl Into<String>) -> Self {
        Self {
            lexical: value.into(),
            datatype: Datatype::String,
        }
    }

    pub fn integer(value: i64) -> Self {
        Self {
            lexical: value.to_string(),
            datatype: Datatype::Integer,
        }
    }

    pub fn count(value: usize) -> Self {
        Self {
            lexical: value.to_string(),
            datatype: Datatype::NonNegativeInteger,
        }
    }

    pub fn double(value: f64) -> Self {
        // `{:?}` keeps a trailing `.0` so 1.0 and 1 stay distinguishable
        Self {
            lexical: format!("{:?}", value),
            datatype: Datatype::Double,
        }
    }

    pub fn boolean(value: bool) -> Self {
        Self {
            lexical: value.to_string(),
            datatype: Datatype::Boolean,
        }
    }

    pub fn hex_binary(bytes: &[u8]) -> Self {
        let lexical = bytes.iter().map(|b| format!("{:02X}", b)).collect();
        Self {
            lexical,
            datatype: Datatype::HexBinary,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"^^<{}>", self.lexical, self.datatype.iri())
    }
}

/// Triple object: another node or a literal
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Term {
    Iri(Iri),
    Literal(Literal),
}

impl Term {
    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            Term::Iri(iri) => Some(iri),
            Term::Literal(_) => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Iri(_) => None,
            Term::Literal(lit) => Some(lit),
        }
    }
}

impl From<Iri> for Term {
    fn from(value: Iri) -> Self {
        Term::Iri(value)
    }
}

impl From<Literal> for Term {
    fn from(value: Literal) -> Self {
        Term::Literal(value)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "<{}>", iri),
            Term::Literal(lit) => lit.fmt(f),
        }
    }
}

/// (subject, predicate, object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    pub subject: Iri,
    pub predicate: Iri,
    pub object: Term,
}

impl Triple {
    pub fn new(subject: Iri, predicate: impl Into<Iri>, object: impl Into<Term>) -> Self {
        Self {
            subject,
            predicate: predicate.into(),
            object: object.into(),
        }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}> <{}> {} .", self.subject, self.predicate, self.object)
    }
}

/// Ordered, duplicate-free triple collection
#[derive(Debug, Clone, Default)]
pub struct TripleSet {
    triples: Vec<Triple>,
    seen: AHashSet<Triple>,
}

impl TripleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a triple; returns false if it was already present
    pub fn insert(&mut self, triple: Triple) -> bool {
        if self.seen.contains(&triple) {
            return false;
        }
        self.seen.insert(triple.clone());
        self.triples.push(triple);
        true
    }

    pub fn add(&mut self, subject: &Iri, predicate: &str, object: impl Into<Term>) {
        self.insert(Triple::new(subject.clone(), predicate, object));
    }

    /// `subject rdf:type class`
    pub fn add_type(&mut self, subject: &Iri, class: &str) {
        self.add(subject, rdf::TYPE, Iri::from(class));
    }

    pub fn add_iri(&mut self, subject: &Iri, predicate: &str, object: &Iri) {
        self.add(subject, predicate, object.clone());
    }

    pub fn add_literal(&mut self, subject: &Iri, predicate: &str, literal: Literal) {
        self.add(subject, predicate, literal);
    }

    /// Splice another set in, keeping this set's order first
    pub fn extend(&mut self, other: TripleSet) {
        for triple in other.triples {
            self.insert(triple);
        }
    }

    pub fn contains(&self, triple: &Triple) -> bool {
        self.seen.contains(triple)
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

    /// Objects of `(subject, predicate, ?)`
    pub fn objects<'a>(
        &'a self,
        subject: &'a Iri,
        predicate: &'a str,
    ) -> impl Iterator<Item = &'a Term> + 'a {
        self.triples
            .iter()
            .filter(move |t| &t.subject == subject && t.predicate.as_str() == predicate)
            .map(|t| &t.object)
    }

    /// Classes asserted for `subject`
    pub fn types_of<'a>(&'a self, subject: &'a Iri) -> impl Iterator<Item = &'a str> + 'a {
        self.objects(subject, rdf::TYPE)
            .filter_map(|term| term.as_iri().map(Iri::as_str))
    }

    pub fn has_type(&self, subject: &Iri, class: &str) -> bool {
        self.types_of(subject).any(|t| t == class)
    }

    pub fn into_vec(self) -> Vec<Triple> {
        self.triples
    }

    /// Unordered view, for set comparisons
    pub fn to_set(&self) -> AHashSet<Triple> {
        self.seen.clone()
    }
}

impl IntoIterator for TripleSet {
    type Item = Triple;
    type IntoIter = std::vec::IntoIter<Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.into_iter()
    }
}

impl FromIterator<Triple> for TripleSet {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        let mut set = TripleSet::new();
        for triple in iter {
            set.insert(triple);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triple_set_dedup_keeps_first_position() {
        let s = Iri::new("http://x/a");
        let mut set = TripleSet::new();
        set.add_literal(&s, "http://x/p", Literal::integer(1));
        set.add_literal(&s, "http://x/q", Literal::integer(2));
        set.add_literal(&s, "http://x/p", Literal::integer(1));

        assert_eq!(set.len(), 2);
        let preds: Vec<_> = set.iter().map(|t| t.predicate.as_str()).collect();
        assert_eq!(preds, vec!["http://x/p", "http://x/q"]);
    }

    #[test]
    fn test_double_literal_keeps_fraction() {
        assert_eq!(Literal::double(1.0).lexical, "1.0");
        assert_eq!(Literal::double(2.5).lexical, "2.5");
    }

    #[test]
    fn test_hex_binary() {
        assert_eq!(Literal::hex_binary(&[1, 255, 16]).lexical, "01FF10");
    }

    #[test]
    fn test_types_of() {
        let s = Iri::new("http://x/a");
        let mut set = TripleSet::new();
        set.add_type(&s, "http://x/A");
        set.add_type(&s, "http://x/B");
        assert!(set.has_type(&s, "http://x/B"));
        assert_eq!(set.types_of(&s).count(), 2);
    }
}
