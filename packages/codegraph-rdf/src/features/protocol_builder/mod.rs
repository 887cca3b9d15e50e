//! Protocol Builder - protocol definitions and implementations

use crate::features::context::Context;
use crate::shared::models::{ImplementationRecord, Iri, Literal, ProtocolRecord, TripleSet};
use crate::shared::utils::emit::add_docstring;
use crate::shared::utils::id_generator::{IriGenerator, MemberKind};
use crate::shared::vocab::structure;

#[derive(Debug, Default, Clone, Copy)]
pub struct ProtocolBuilder;

impl ProtocolBuilder {
    /// `defprotocol`
    pub fn build_protocol(record: &ProtocolRecord, ctx: &Context) -> (Iri, TripleSet) {
        let iri = IriGenerator::module(ctx.base_iri(), &record.name);
        let mut triples = TripleSet::new();

        triples.add_type(&iri, structure::PROTOCOL);
        triples.add_literal(
            &iri,
            structure::MODULE_NAME,
            Literal::string(record.name.as_str()),
        );
        triples.add_literal(
            &iri,
            structure::FALLBACK_TO_ANY,
            Literal::boolean(record.fallback_to_any),
        );
        add_docstring(&mut triples, &iri, &record.docstring);

        for function in &record.functions {
            let function_iri =
                IriGenerator::member(&iri, MemberKind::Function, &function.name, function.arity);
            triples.add_iri(&iri, structure::DEFINES_PROTOCOL_FUNCTION, &function_iri);
            triples.add_type(&function_iri, structure::PROTOCOL_FUNCTION);
            triples.add_literal(
                &function_iri,
                structure::FUNCTION_NAME,
                Literal::string(function.name.as_str()),
            );
            triples.add_literal(
                &function_iri,
                structure::ARITY,
                Literal::count(function.arity as usize),
            );
        }

        (iri, triples)
    }

    /// `defimpl Protocol, for: Type`, identified as the `Protocol.Type` module
    pub fn build_implementation(record: &ImplementationRecord, ctx: &Context) -> (Iri, TripleSet) {
        let base = ctx.base_iri();
        let iri = IriGenerator::module(base, &format!("{}.{}", record.protocol, record.for_type));
        let protocol = IriGenerator::module(base, &record.protocol);
        let mut triples = TripleSet::new();

        triples.add_type(&iri, structure::PROTOCOL_IMPLEMENTATION);
        triples.add_iri(&iri, structure::IMPLEMENTS_PROTOCOL, &protocol);
        triples.add_iri(&protocol, structure::HAS_IMPLEMENTATION, &iri);
        triples.add_literal(
            &iri,
            structure::FOR_DATA_TYPE,
            Literal::string(record.for_type.as_str()),
        );

        for function in &record.functions {
            let function_iri =
                IriGenerator::member(&iri, MemberKind::Function, &function.name, function.arity);
            triples.add_iri(&iri, structure::CONTAINS_FUNCTION, &function_iri);
        }

        (iri, triples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuildConfig;
    use crate::shared::models::MemberRef;
    use pretty_assertions::assert_eq;

    fn create_test_context() -> Context {
        Context::new(BuildConfig::new("https://ex.org/code#"))
    }

    #[test]
    fn test_protocol_functions() {
        let record = ProtocolRecord {
            name: "Size".into(),
            functions: vec![MemberRef::new("size", 1)],
            fallback_to_any: true,
            ..Default::default()
        };
        let (iri, triples) = ProtocolBuilder::build_protocol(&record, &create_test_context());
        assert!(triples.has_type(&iri, structure::PROTOCOL));
        let function = Iri::new("https://ex.org/code#Size/function/size/1");
        assert!(triples.has_type(&function, structure::PROTOCOL_FUNCTION));
    }

    #[test]
    fn test_implementation_links_protocol() {
        let record = ImplementationRecord {
            protocol: "Size".into(),
            for_type: "Map".into(),
            functions: vec![MemberRef::new("size", 1)],
        };
        let (iri, triples) = ProtocolBuilder::build_implementation(&record, &create_test_context());
        assert_eq!(iri.as_str(), "https://ex.org/code#Size.Map");
        let protocol = Iri::new("https://ex.org/code#Size");
        assert!(triples
            .objects(&protocol, structure::HAS_IMPLEMENTATION)
            .any(|o| o.as_iri() == Some(&iri)));
        assert!(triples
            .objects(&iri, structure::IMPLEMENTS_PROTOCOL)
            .any(|o| o.as_iri() == Some(&protocol)));
    }
}
