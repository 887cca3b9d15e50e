//! Emission helpers shared by the structural builders

use crate::shared::models::{Docstring, Iri, Literal, SourceLocation, TripleSet};
use crate::shared::utils::id_generator::IriGenerator;
use crate::shared::vocab::{core, structure};

/// Attach a `SourceLocation` node to `owner`
///
/// Emitted only when both the location and the enclosing file are known.
pub fn add_source_location(
    triples: &mut TripleSet,
    owner: &Iri,
    location: Option<&SourceLocation>,
    file_path: Option<&str>,
) {
    let (Some(location), Some(file_path)) = (location, file_path) else {
        return;
    };
    let node = IriGenerator::location(owner);
    triples.add_iri(owner, core::HAS_SOURCE_LOCATION, &node);
    triples.add_type(&node, core::SOURCE_LOCATION);
    triples.add_literal(
        &node,
        core::START_LINE,
        Literal::count(location.start_line as usize),
    );
    if let Some(end_line) = location.end_line {
        triples.add_literal(&node, core::END_LINE, Literal::count(end_line as usize));
    }
    triples.add_literal(&node, core::IN_SOURCE_FILE, Literal::string(file_path));
}

/// Docstring literal, only for explicit, unsuppressed text
pub fn add_docstring(triples: &mut TripleSet, owner: &Iri, docstring: &Docstring) {
    if let Some(text) = docstring.text() {
        triples.add_literal(owner, structure::DOCSTRING, Literal::string(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_needs_file_path() {
        let owner = Iri::new("https://ex.org/code#M");
        let location = SourceLocation::new(3, Some(9));

        let mut without_file = TripleSet::new();
        add_source_location(&mut without_file, &owner, Some(&location), None);
        assert!(without_file.is_empty());

        let mut with_file = TripleSet::new();
        add_source_location(&mut with_file, &owner, Some(&location), Some("lib/m.ex"));
        let node = Iri::new("https://ex.org/code#M/location");
        assert!(with_file.has_type(&node, core::SOURCE_LOCATION));
        assert_eq!(with_file.objects(&node, core::END_LINE).count(), 1);
    }

    #[test]
    fn test_suppressed_docstring_not_emitted() {
        let owner = Iri::new("https://ex.org/code#M");
        let mut triples = TripleSet::new();
        add_docstring(&mut triples, &owner, &Docstring::Suppressed);
        add_docstring(&mut triples, &owner, &Docstring::Absent);
        assert!(triples.is_empty());
        add_docstring(&mut triples, &owner, &Docstring::Text("Users".into()));
        assert_eq!(triples.len(), 1);
    }
}
