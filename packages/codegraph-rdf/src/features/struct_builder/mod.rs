//! Struct Builder - `defstruct` / `defexception` definitions
//!
//! The struct node lives at `{module}/struct`, its fields at
//! `{struct}/field/{name}`. Field defaults are built as expressions in the
//! field's namespace.

use crate::features::context::Context;
use crate::features::expression_builder::{ExprOpts, ExpressionBuilder};
use crate::shared::models::{Iri, Literal, StructRecord, TripleSet};
use crate::shared::utils::id_generator::{escape_segment, fresh_iri, IriGenerator};
use crate::shared::vocab::structure;

#[derive(Debug, Default, Clone, Copy)]
pub struct StructBuilder;

impl StructBuilder {
    pub fn build(record: &StructRecord, ctx: &Context) -> (Iri, TripleSet, Context) {
        let module = IriGenerator::module(ctx.base_iri(), &record.module);
        let iri = fresh_iri(&module, "struct");
        let mut triples = TripleSet::new();

        let class = if record.is_exception {
            structure::EXCEPTION
        } else {
            structure::STRUCT
        };
        triples.add_type(&iri, class);
        triples.add_iri(&module, structure::HAS_STRUCT, &iri);
        triples.add_iri(&iri, structure::BELONGS_TO, &module);

        let mut context = ctx.clone();
        for field in &record.fields {
            let field_iri = fresh_iri(&iri, &format!("field/{}", escape_segment(&field.name)));
            triples.add_iri(&iri, structure::HAS_FIELD, &field_iri);
            triples.add_type(&field_iri, structure::STRUCT_FIELD);
            triples.add_literal(
                &field_iri,
                structure::FIELD_NAME,
                Literal::string(field.name.as_str()),
            );
            let enforced = record.enforce_keys.contains(&field.name);
            triples.add_literal(&field_iri, structure::IS_ENFORCED, Literal::boolean(enforced));

            if let Some(default) = &field.default {
                let opts = ExprOpts::in_namespace(IriGenerator::namespace_of(&field_iri))
                    .with_suffix("default")
                    .with_current_module(record.module.as_str());
                context = ExpressionBuilder::build(default, &context, &opts).attach_to(
                    &field_iri,
                    structure::HAS_DEFAULT_VALUE,
                    &mut triples,
                    context,
                );
            }
        }

        for protocol in &record.derives {
            let protocol_iri = IriGenerator::module(ctx.base_iri(), protocol);
            triples.add_iri(&iri, structure::DERIVES_PROTOCOL, &protocol_iri);
        }

        (iri, triples, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BuildConfig, ExpressionDetail};
    use crate::shared::models::{Ast, StructFieldRecord, Term};
    use crate::shared::vocab::core;
    use pretty_assertions::assert_eq;

    fn create_test_context() -> Context {
        Context::new(
            BuildConfig::new("https://ex.org/code#").with_expressions(ExpressionDetail::Reduced),
        )
    }

    fn field(name: &str, default: Option<Ast>) -> StructFieldRecord {
        StructFieldRecord {
            name: name.into(),
            default,
        }
    }

    #[test]
    fn test_struct_fields() {
        let record = StructRecord {
            module: "User".into(),
            fields: vec![
                field("name", None),
                field("age", Some(Ast::int(0))),
                field("email", Some(Ast::atom("nil"))),
            ],
            enforce_keys: vec!["name".into()],
            derives: vec!["Jason.Encoder".into()],
            ..Default::default()
        };
        let (iri, triples, _) = StructBuilder::build(&record, &create_test_context());

        assert_eq!(iri.as_str(), "https://ex.org/code#User/struct");
        assert!(triples.has_type(&iri, structure::STRUCT));
        assert_eq!(triples.objects(&iri, structure::HAS_FIELD).count(), 3);

        let name = Iri::new("https://ex.org/code#User/struct/field/name");
        assert_eq!(
            triples.objects(&name, structure::IS_ENFORCED).collect::<Vec<_>>(),
            vec![&Term::from(Literal::boolean(true))]
        );

        let age_default = Iri::new("https://ex.org/code#User/struct/field/age/expr/default");
        assert!(triples.has_type(&age_default, core::INTEGER_LITERAL));

        // nil default is the absent sentinel under reduced detail
        let email = Iri::new("https://ex.org/code#User/struct/field/email");
        assert_eq!(triples.objects(&email, structure::HAS_DEFAULT_VALUE).count(), 0);

        assert_eq!(triples.objects(&iri, structure::DERIVES_PROTOCOL).count(), 1);
    }

    #[test]
    fn test_exception() {
        let record = StructRecord {
            module: "MyError".into(),
            fields: vec![field("message", Some(Ast::string("boom")))],
            is_exception: true,
            ..Default::default()
        };
        let (iri, triples, _) = StructBuilder::build(&record, &create_test_context());
        assert!(triples.has_type(&iri, structure::EXCEPTION));
        let module = Iri::new("https://ex.org/code#MyError");
        assert!(triples
            .objects(&module, structure::HAS_STRUCT)
            .any(|o| o.as_iri() == Some(&iri)));
    }
}
