//! ModuleBuilder implementation

use crate::features::context::Context;
use crate::shared::models::{DirectiveKind, Iri, Literal, ModuleRecord, TripleSet};
use crate::shared::utils::emit::{add_docstring, add_source_location};
use crate::shared::utils::id_generator::{fresh_iri, IriGenerator, MemberKind};
use crate::shared::vocab::structure;

#[derive(Debug, Default, Clone, Copy)]
pub struct ModuleBuilder;

impl ModuleBuilder {
    pub fn build(record: &ModuleRecord, ctx: &Context) -> (Iri, TripleSet) {
        let base = ctx.base_iri();
        let iri = IriGenerator::module(base, &record.name);
        let mut triples = TripleSet::new();

        let class = if record.is_nested() {
            structure::NESTED_MODULE
        } else {
            structure::MODULE
        };
        triples.add_type(&iri, class);
        triples.add_literal(
            &iri,
            structure::MODULE_NAME,
            Literal::string(record.name.as_str()),
        );
        add_docstring(&mut triples, &iri, &record.docstring);
        add_source_location(
            &mut triples,
            &iri,
            record.location.as_ref(),
            ctx.file_path(),
        );

        if let Some(parent) = &record.parent {
            let parent_iri = IriGenerator::module(base, parent);
            triples.add_iri(&iri, structure::PARENT_MODULE, &parent_iri);
            triples.add_iri(&parent_iri, structure::HAS_NESTED_MODULE, &iri);
        }

        for (i, directive) in record.directives.iter().enumerate() {
            let target = IriGenerator::module(base, &directive.target);
            let (predicate, class) = match directive.kind {
                DirectiveKind::Alias => (structure::ALIASES_MODULE, structure::ALIAS_DIRECTIVE),
                DirectiveKind::Import => (structure::IMPORTS_MODULE, structure::IMPORT_DIRECTIVE),
                DirectiveKind::Require => {
                    (structure::REQUIRES_MODULE, structure::REQUIRE_DIRECTIVE)
                }
                DirectiveKind::Use => (structure::USES_MODULE, structure::USE_DIRECTIVE),
            };
            triples.add_iri(&iri, predicate, &target);

            // Per-directive details stay with the declaring module
            let node = fresh_iri(&iri, &format!("directive/{}", i));
            triples.add_iri(&iri, structure::HAS_DIRECTIVE, &node);
            triples.add_type(&node, class);
            triples.add_iri(&node, structure::DIRECTIVE_TARGET, &target);
            if let Some(alias) = &directive.alias_as {
                triples.add_literal(&node, structure::ALIAS_NAME, Literal::string(alias.as_str()));
            }
            if directive.kind == DirectiveKind::Use && directive.option_count > 0 {
                triples.add_literal(
                    &node,
                    structure::USE_OPTION_COUNT,
                    Literal::count(directive.option_count),
                );
            }
        }

        let members = [
            (&record.functions, MemberKind::Function, structure::CONTAINS_FUNCTION),
            (&record.macros, MemberKind::Macro, structure::CONTAINS_MACRO),
            (&record.types, MemberKind::Type, structure::CONTAINS_TYPE),
        ];
        for (refs, kind, predicate) in members {
            for member in refs {
                let member_iri = IriGenerator::member(&iri, kind, &member.name, member.arity);
                triples.add_iri(&iri, predicate, &member_iri);
            }
        }

        (iri, triples)
    }
}
