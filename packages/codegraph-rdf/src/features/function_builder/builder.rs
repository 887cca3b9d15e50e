//! FunctionBuilder implementation

use crate::features::context::Context;
use crate::features::expression_builder::{ExprOpts, ExpressionBuilder};
use crate::shared::models::{
    Ast, ClauseRecord, Form, FunctionKind, FunctionRecord, Iri, Literal, TripleSet, Visibility,
};
use crate::shared::utils::emit::{add_docstring, add_source_location};
use crate::shared::utils::id_generator::{IriGenerator, MemberKind};
use crate::shared::vocab::{core, structure};

#[derive(Debug, Default, Clone, Copy)]
pub struct FunctionBuilder;

impl FunctionBuilder {
    pub fn build(record: &FunctionRecord, ctx: &Context) -> (Iri, TripleSet, Context) {
        let module = IriGenerator::module(ctx.base_iri(), &record.module);
        let (kind, class) = match (record.kind, record.visibility) {
            (FunctionKind::Function, Visibility::Public) => {
                (MemberKind::Function, structure::PUBLIC_FUNCTION)
            }
            (FunctionKind::Function, Visibility::Private) => {
                (MemberKind::Function, structure::PRIVATE_FUNCTION)
            }
            (FunctionKind::Macro, Visibility::Public) => (MemberKind::Macro, structure::PUBLIC_MACRO),
            (FunctionKind::Macro, Visibility::Private) => {
                (MemberKind::Macro, structure::PRIVATE_MACRO)
            }
        };
        let iri = IriGenerator::member(&module, kind, &record.name, record.arity);
        let mut triples = TripleSet::new();

        triples.add_type(&iri, class);
        triples.add_literal(
            &iri,
            structure::FUNCTION_NAME,
            Literal::string(record.name.as_str()),
        );
        triples.add_literal(&iri, structure::ARITY, Literal::count(record.arity as usize));
        if let Some(min_arity) = record.min_arity.filter(|min| *min < record.arity) {
            triples.add_literal(&iri, structure::MIN_ARITY, Literal::count(min_arity as usize));
        }
        triples.add_iri(&iri, structure::BELONGS_TO, &module);
        add_docstring(&mut triples, &iri, &record.docstring);
        add_source_location(&mut triples, &iri, record.location.as_ref(), ctx.file_path());

        let mut context = ctx.clone();
        for (i, clause) in record.clauses.iter().enumerate() {
            context = Self::build_clause(&iri, i, clause, &record.module, &mut triples, context);
        }

        (iri, triples, context)
    }

    fn build_clause(
        function: &Iri,
        index: usize,
        clause: &ClauseRecord,
        module_name: &str,
        triples: &mut TripleSet,
        mut context: Context,
    ) -> Context {
        let clause_iri = IriGenerator::clause(function, index);
        triples.add_iri(function, structure::HAS_CLAUSE, &clause_iri);
        triples.add_type(&clause_iri, structure::FUNCTION_CLAUSE);
        triples.add_literal(&clause_iri, structure::CLAUSE_ORDER, Literal::count(index));

        let opts = ExprOpts::in_namespace(IriGenerator::namespace_of(&clause_iri))
            .with_current_module(module_name);

        for (j, param) in clause.params.iter().enumerate() {
            let param_iri = IriGenerator::parameter(&clause_iri, j);
            triples.add_iri(&clause_iri, structure::HAS_PARAMETER, &param_iri);
            triples.add_type(&param_iri, structure::PARAMETER);
            triples.add_literal(&param_iri, structure::PARAMETER_POSITION, Literal::count(j));

            let (pattern, default) = split_default(param);
            if let Some(name) = pattern.as_variable() {
                triples.add_literal(&param_iri, core::NAME, Literal::string(name));
            }
            let pattern_opts = opts.clone().with_suffix(format!("param_{}", j));
            context = ExpressionBuilder::build_pattern(pattern, &context, &pattern_opts)
                .attach_to(&param_iri, structure::HAS_PATTERN, triples, context);

            if let Some(default) = default {
                let default_opts = opts.clone().with_suffix(format!("default_{}", j));
                context = ExpressionBuilder::build(default, &context, &default_opts).attach_to(
                    &param_iri,
                    structure::HAS_DEFAULT_VALUE,
                    triples,
                    context,
                );
            }
        }

        if let Some(guard) = &clause.guard {
            let guard_opts = opts.clone().with_suffix("guard");
            context = ExpressionBuilder::build(guard, &context, &guard_opts).attach_to(
                &clause_iri,
                structure::HAS_GUARD,
                triples,
                context,
            );
        }

        if let Some(body) = &clause.body {
            context = ExpressionBuilder::build(body, &context, &opts).attach_to(
                &clause_iri,
                structure::HAS_BODY,
                triples,
                context,
            );
        }

        context
    }
}

/// `pattern \\ default` → (pattern, Some(default))
fn split_default(param: &Ast) -> (&Ast, Option<&Ast>) {
    match param.as_form().filter(|f| f.is_named("\\\\")).map(Form::args) {
        Some([pattern, default]) => (pattern, Some(default)),
        _ => (param, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BuildConfig, ExpressionDetail};
    use pretty_assertions::assert_eq;

    const BASE: &str = "https://ex.org/code#";

    fn create_test_context() -> Context {
        Context::new(BuildConfig::new(BASE).with_expressions(ExpressionDetail::Reduced))
            .with_expression_counter()
    }

    fn create_test_function(name: &str, clauses: Vec<ClauseRecord>) -> FunctionRecord {
        FunctionRecord {
            module: "M".into(),
            name: name.into(),
            arity: clauses.first().map(|c| c.params.len() as u32).unwrap_or(0),
            clauses,
            ..Default::default()
        }
    }

    fn create_test_clause(params: Vec<Ast>, guard: Option<Ast>, body: Ast) -> ClauseRecord {
        ClauseRecord {
            params,
            guard,
            body: Some(body),
        }
    }

    #[test]
    fn test_public_function_node() {
        let record = create_test_function(
            "valid?",
            vec![create_test_clause(vec![Ast::var("x")], None, Ast::atom("true"))],
        );
        let (iri, triples, _) = FunctionBuilder::build(&record, &create_test_context());

        assert_eq!(iri.as_str(), "https://ex.org/code#M/function/valid%3F/1");
        assert!(triples.has_type(&iri, structure::PUBLIC_FUNCTION));
        let module = Iri::new("https://ex.org/code#M");
        assert!(triples
            .objects(&iri, structure::BELONGS_TO)
            .any(|o| o.as_iri() == Some(&module)));
    }

    #[test]
    fn test_private_macro() {
        let mut record = create_test_function("m", vec![]);
        record.kind = FunctionKind::Macro;
        record.visibility = Visibility::Private;
        let (iri, triples, _) = FunctionBuilder::build(&record, &create_test_context());
        assert_eq!(iri.as_str(), "https://ex.org/code#M/macro/m/0");
        assert!(triples.has_type(&iri, structure::PRIVATE_MACRO));
    }

    #[test]
    fn test_clause_parameters_guard_and_body() {
        let record = create_test_function(
            "abs",
            vec![create_test_clause(
                vec![Ast::var("n")],
                Some(Ast::op("<", Ast::var("n"), Ast::int(0))),
                Ast::unary("-", Ast::var("n")),
            )],
        );
        let (iri, triples, _) = FunctionBuilder::build(&record, &create_test_context());

        let clause = Iri::new(format!("{}/clause/0", iri));
        assert!(triples.has_type(&clause, structure::FUNCTION_CLAUSE));

        let param = Iri::new(format!("{}/param/0", clause));
        assert!(triples.has_type(&param, structure::PARAMETER));
        let pattern = Iri::new(format!("{}/expr/param_0", clause));
        assert!(triples
            .objects(&param, structure::HAS_PATTERN)
            .any(|o| o.as_iri() == Some(&pattern)));
        assert!(triples.has_type(&pattern, core::VARIABLE_PATTERN));

        let guard = Iri::new(format!("{}/expr/guard", clause));
        assert!(triples.has_type(&guard, core::COMPARISON_OPERATOR));

        let body = Iri::new(format!("{}/expr/expr_0", clause));
        assert!(triples.has_type(&body, core::ARITHMETIC_OPERATOR));
        assert_eq!(triples.objects(&body, core::HAS_OPERAND).count(), 1);
    }

    #[test]
    fn test_default_argument() {
        let mut record = create_test_function(
            "greet",
            vec![create_test_clause(
                vec![Ast::op("\\\\", Ast::var("name"), Ast::string("world"))],
                None,
                Ast::var("name"),
            )],
        );
        record.min_arity = Some(0);
        let (iri, triples, _) = FunctionBuilder::build(&record, &create_test_context());

        assert_eq!(triples.objects(&iri, structure::MIN_ARITY).count(), 1);
        let param = Iri::new(format!("{}/clause/0/param/0", iri));
        let default = Iri::new(format!("{}/clause/0/expr/default_0", iri));
        assert!(triples
            .objects(&param, structure::HAS_DEFAULT_VALUE)
            .any(|o| o.as_iri() == Some(&default)));
        assert!(triples.has_type(&default, core::STRING_LITERAL));
    }

    #[test]
    fn test_clauses_use_independent_namespaces() {
        let clause = || create_test_clause(vec![Ast::int(0)], None, Ast::int(1));
        let record = create_test_function("f", vec![clause(), clause()]);
        let (iri, triples, _) = FunctionBuilder::build(&record, &create_test_context());

        for i in 0..2 {
            let body = Iri::new(format!("{}/clause/{}/expr/expr_0", iri, i));
            assert!(triples.has_type(&body, core::INTEGER_LITERAL), "clause {}", i);
        }
    }

    #[test]
    fn test_expressions_disabled_keeps_structure() {
        let record = create_test_function(
            "f",
            vec![create_test_clause(vec![Ast::var("x")], None, Ast::var("x"))],
        );
        let ctx = Context::new(BuildConfig::new(BASE));
        let (iri, triples, _) = FunctionBuilder::build(&record, &ctx);
        let param = Iri::new(format!("{}/clause/0/param/0", iri));
        assert!(triples.has_type(&param, structure::PARAMETER));
        assert_eq!(triples.objects(&param, structure::HAS_PATTERN).count(), 0);
    }
}
