//! `build` / `build_pattern`
//!
//! Mode gate, structural sharing and root identifier minting. Everything
//! below the root is emitted by [`Emitter`].

use tracing::trace;

use crate::config::ExpressionMode;
use crate::features::context::{expression_iri, get_or_create_iri, Context};
use crate::features::expression_builder::domain::{BuildResult, ExprOpts};
use crate::features::expression_builder::infrastructure::Emitter;
use crate::shared::models::{Ast, TripleSet, MAX_NESTING_DEPTH};
use crate::shared::utils::fingerprint;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    Expression,
    Pattern,
}

/// Recursive expression/pattern builder
#[derive(Debug, Default, Clone, Copy)]
pub struct ExpressionBuilder;

impl ExpressionBuilder {
    /// Build `ast` in expression context
    pub fn build(ast: &Ast, ctx: &Context, opts: &ExprOpts) -> BuildResult {
        Self::run(ast, ctx, opts, Position::Expression)
    }

    /// Build `ast` in pattern (binding) context
    pub fn build_pattern(ast: &Ast, ctx: &Context, opts: &ExprOpts) -> BuildResult {
        Self::run(ast, ctx, opts, Position::Pattern)
    }

    fn run(ast: &Ast, ctx: &Context, opts: &ExprOpts, position: Position) -> BuildResult {
        if ctx.is_dependency_file() {
            trace!("skipping expression in dependency file {:?}", ctx.file_path());
            return BuildResult::Skip;
        }
        match ctx.expression_mode() {
            ExpressionMode::Disabled => return BuildResult::Skip,
            ExpressionMode::Reduced if position == Position::Expression && is_absent(ast) => {
                return BuildResult::Skip
            }
            ExpressionMode::Reduced | ExpressionMode::Full => {}
        }

        let namespace = opts
            .namespace
            .clone()
            .unwrap_or_else(|| ctx.base_iri().to_string());
        let context = ctx.clone();

        // Fingerprints serialize the whole tree
        let shareable = opts.share_structure && !ast.exceeds_depth(MAX_NESTING_DEPTH);
        let share_key = shareable.then(|| match position {
            Position::Expression => fingerprint(&namespace, ast),
            Position::Pattern => fingerprint(&format!("{}#pattern", namespace), ast),
        });
        if let Some(key) = &share_key {
            if let Some(iri) = context.cache().and_then(|cache| cache.get(key)).cloned() {
                trace!("structural share hit: {}", iri);
                return BuildResult::Ok {
                    iri,
                    triples: TripleSet::new(),
                    context,
                };
            }
        }

        let (iri, context) = expression_iri(&namespace, context, &opts.iri_options());

        let current_module = opts.current_module.as_deref().or(context.current_module());
        let mut emitter = Emitter::new(context.base_iri(), current_module);
        match position {
            Position::Expression => emitter.expression(&iri, ast),
            Position::Pattern => emitter.pattern(&iri, ast),
        }
        let triples = emitter.finish();

        let context = match share_key {
            Some(key) => {
                let (cache, context) = context.take_cache();
                let (_, cache) = get_or_create_iri(cache, &key, || iri.clone());
                context.with_cache_value(cache)
            }
            None => context,
        };

        BuildResult::Ok {
            iri,
            triples,
            context,
        }
    }
}

/// The absent-value sentinel (`nil`)
fn is_absent(ast: &Ast) -> bool {
    matches!(ast, Ast::Atom(name) if name == "nil")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BuildConfig, ExpressionDetail};
    use crate::shared::models::{Iri, Literal, Term};
    use crate::shared::vocab::core;
    use pretty_assertions::assert_eq;

    const BASE: &str = "https://ex.org/code#";

    fn create_test_context(detail: ExpressionDetail) -> Context {
        Context::new(BuildConfig::new(BASE).with_expressions(detail)).with_expression_counter()
    }

    fn built(result: BuildResult) -> (Iri, TripleSet, Context) {
        result.into_parts().expect("expected a built node")
    }

    // ------------------------------------------------------------------
    // Mode gate
    // ------------------------------------------------------------------

    #[test]
    fn test_disabled_mode_skips() {
        let ctx = Context::new(BuildConfig::new(BASE));
        assert!(ExpressionBuilder::build(&Ast::int(1), &ctx, &ExprOpts::new()).is_skip());
    }

    #[test]
    fn test_absent_value_skipped_in_reduced_mode() {
        let ctx = create_test_context(ExpressionDetail::Reduced);
        assert!(ExpressionBuilder::build(&Ast::atom("nil"), &ctx, &ExprOpts::new()).is_skip());
    }

    #[test]
    fn test_absent_value_is_nil_literal_in_full_mode() {
        let ctx = create_test_context(ExpressionDetail::Full);
        let (iri, triples, _) =
            built(ExpressionBuilder::build(&Ast::atom("nil"), &ctx, &ExprOpts::new()));
        assert!(triples.has_type(&iri, core::NIL_LITERAL));
    }

    #[test]
    fn test_dependency_file_always_skips() {
        let config = BuildConfig::new(BASE)
            .with_file_path("deps/jason/lib/jason.ex")
            .with_expressions(ExpressionDetail::Full);
        let ctx = Context::new(config);
        assert!(ExpressionBuilder::build(&Ast::int(1), &ctx, &ExprOpts::new()).is_skip());
        assert!(
            ExpressionBuilder::build_pattern(&Ast::var("x"), &ctx, &ExprOpts::new()).is_skip()
        );
    }

    // ------------------------------------------------------------------
    // Identifiers
    // ------------------------------------------------------------------

    #[test]
    fn test_root_identifiers_follow_counter() {
        let ctx = create_test_context(ExpressionDetail::Reduced);
        let (first, _, ctx) = built(ExpressionBuilder::build(&Ast::int(1), &ctx, &ExprOpts::new()));
        let (second, _, _) = built(ExpressionBuilder::build(&Ast::int(1), &ctx, &ExprOpts::new()));
        assert_eq!(first.as_str(), "https://ex.org/code#expr/expr_0");
        assert_eq!(second.as_str(), "https://ex.org/code#expr/expr_1");
    }

    #[test]
    fn test_suffix_in_namespace() {
        let ctx = create_test_context(ExpressionDetail::Reduced);
        let opts = ExprOpts::in_namespace("https://ex.org/code#M/function/f/1/clause/0/")
            .with_suffix("guard");
        let (iri, _, ctx) = built(ExpressionBuilder::build(&Ast::var("x"), &ctx, &opts));
        assert_eq!(
            iri.as_str(),
            "https://ex.org/code#M/function/f/1/clause/0/expr/guard"
        );
        assert_eq!(ctx.peek_counter("https://ex.org/code#M/function/f/1/clause/0/"), 0);
    }

    // ------------------------------------------------------------------
    // Classification end to end
    // ------------------------------------------------------------------

    #[test]
    fn test_comparison_with_nested_arithmetic() {
        let ctx = create_test_context(ExpressionDetail::Reduced);
        let ast = Ast::op(">", Ast::var("x"), Ast::op("+", Ast::var("y"), Ast::int(1)));
        let (iri, triples, _) = built(ExpressionBuilder::build(&ast, &ctx, &ExprOpts::new()));

        assert!(triples.has_type(&iri, core::COMPARISON_OPERATOR));
        let symbol: Vec<_> = triples.objects(&iri, core::OPERATOR_SYMBOL).collect();
        assert_eq!(symbol, vec![&Term::from(Literal::string(">"))]);

        let right = Iri::new(format!("{}/right", iri));
        assert!(triples.has_type(&right, core::ARITHMETIC_OPERATOR));
        let left_of_right = Iri::new(format!("{}/right/left", iri));
        assert!(triples.has_type(&left_of_right, core::VARIABLE));
    }

    #[test]
    fn test_variable_duality() {
        let ctx = create_test_context(ExpressionDetail::Reduced);
        let x = Ast::var("x");
        let (e, et, ctx) = built(ExpressionBuilder::build(&x, &ctx, &ExprOpts::new()));
        let (p, pt, _) = built(ExpressionBuilder::build_pattern(&x, &ctx, &ExprOpts::new()));
        assert!(et.has_type(&e, core::VARIABLE));
        assert!(pt.has_type(&p, core::VARIABLE_PATTERN));
    }

    #[test]
    fn test_charlist_vs_list() {
        let ctx = create_test_context(ExpressionDetail::Reduced);
        let chars = Ast::list(vec![Ast::int(1), Ast::int(2), Ast::int(3)]);
        let (a, at, ctx) = built(ExpressionBuilder::build(&chars, &ctx, &ExprOpts::new()));
        assert!(at.has_type(&a, core::CHARLIST_LITERAL));

        let mixed = Ast::list(vec![Ast::int(1), Ast::string("two"), Ast::atom("three")]);
        let (b, bt, _) = built(ExpressionBuilder::build(&mixed, &ctx, &ExprOpts::new()));
        assert!(bt.has_type(&b, core::LIST_LITERAL));
        assert!(bt.has_type(&Iri::new(format!("{}/element_1", b)), core::STRING_LITERAL));
        assert!(bt.has_type(&Iri::new(format!("{}/element_2", b)), core::ATOM_LITERAL));
    }

    #[test]
    fn test_match_left_side_is_pattern() {
        let ctx = create_test_context(ExpressionDetail::Reduced);
        let ast = Ast::op(
            "=",
            Ast::tuple(vec![Ast::atom("ok"), Ast::var("value")]),
            Ast::call("fetch", vec![]),
        );
        let (iri, triples, _) = built(ExpressionBuilder::build(&ast, &ctx, &ExprOpts::new()));
        assert!(triples.has_type(&iri, core::MATCH_OPERATOR));
        let left = Iri::new(format!("{}/left", iri));
        assert!(triples.has_type(&left, core::TUPLE_PATTERN));
        assert!(triples.has_type(
            &Iri::new(format!("{}/element_1", left)),
            core::VARIABLE_PATTERN
        ));
        assert!(triples.has_type(&Iri::new(format!("{}/right", iri)), core::LOCAL_CALL));
    }

    #[test]
    fn test_every_node_reachable_from_root() {
        let ctx = create_test_context(ExpressionDetail::Reduced);
        let ast = Ast::call(
            "%{}",
            vec![Ast::tuple(vec![
                Ast::atom("k"),
                Ast::list(vec![Ast::var("a"), Ast::op("|", Ast::var("b"), Ast::var("t"))]),
            ])],
        );
        let (iri, triples, _) = built(ExpressionBuilder::build(&ast, &ctx, &ExprOpts::new()));
        for triple in triples.iter() {
            assert!(
                triple.subject.as_str().starts_with(iri.as_str()),
                "{} not under root {}",
                triple.subject,
                iri
            );
        }
        let subjects: ahash::AHashSet<&Iri> = triples.iter().map(|t| &t.subject).collect();
        let objects: ahash::AHashSet<&Iri> =
            triples.iter().filter_map(|t| t.object.as_iri()).collect();
        for subject in subjects {
            assert!(subject == &iri || objects.contains(subject), "{} unreachable", subject);
        }
    }

    #[test]
    fn test_struct_literal_self_reference() {
        let ctx = create_test_context(ExpressionDetail::Reduced).with_module("My.User");
        let ast = Ast::call(
            "%",
            vec![Ast::var("__MODULE__"), Ast::call("%{}", vec![])],
        );
        let (iri, triples, _) = built(ExpressionBuilder::build(&ast, &ctx, &ExprOpts::new()));
        assert!(triples.has_type(&iri, core::STRUCT_LITERAL));
        let module: Vec<_> = triples.objects(&iri, core::REFERS_TO_MODULE).collect();
        assert_eq!(module, vec![&Term::from(Iri::new("https://ex.org/code#My.User"))]);
    }

    // ------------------------------------------------------------------
    // Structural sharing
    // ------------------------------------------------------------------

    #[test]
    fn test_structural_sharing_reuses_identifier() {
        let ctx = create_test_context(ExpressionDetail::Reduced).with_cache();
        let ast = Ast::op("+", Ast::var("a"), Ast::int(1));
        let opts = ExprOpts::new().sharing_structure();

        let (first, first_triples, ctx) = built(ExpressionBuilder::build(&ast, &ctx, &opts));
        let (second, second_triples, ctx) = built(ExpressionBuilder::build(&ast, &ctx, &opts));

        assert_eq!(first, second);
        assert!(!first_triples.is_empty());
        assert!(second_triples.is_empty());
        assert_eq!(ctx.peek_counter(BASE), 1);

        let other = Ast::op("+", Ast::var("a"), Ast::int(2));
        let (third, _, _) = built(ExpressionBuilder::build(&other, &ctx, &opts));
        assert_ne!(first, third);
    }

    // ------------------------------------------------------------------
    // Collections and duality
    // ------------------------------------------------------------------

    fn child(iri: &Iri, path: &str) -> Iri {
        Iri::new(format!("{}/{}", iri, path))
    }

    #[test]
    fn test_range_with_and_without_step() {
        let ctx = create_test_context(ExpressionDetail::Reduced);
        let plain = Ast::op("..", Ast::int(1), Ast::int(10));
        let (iri, triples, ctx) = built(ExpressionBuilder::build(&plain, &ctx, &ExprOpts::new()));
        assert!(triples.has_type(&iri, core::RANGE_LITERAL));
        assert_eq!(
            triples.objects(&iri, core::RANGE_START).collect::<Vec<_>>(),
            vec![&Term::from(child(&iri, "start"))]
        );
        assert!(triples.has_type(&child(&iri, "end"), core::INTEGER_LITERAL));
        assert_eq!(triples.objects(&iri, core::RANGE_STEP).count(), 0);

        let stepped = Ast::call("..//", vec![Ast::int(1), Ast::var("n"), Ast::int(2)]);
        let (iri, triples, _) = built(ExpressionBuilder::build(&stepped, &ctx, &ExprOpts::new()));
        assert!(triples.has_type(&iri, core::RANGE_LITERAL));
        assert!(triples.has_type(&child(&iri, "end"), core::VARIABLE));
        assert_eq!(
            triples.objects(&child(&iri, "step"), core::INTEGER_VALUE).collect::<Vec<_>>(),
            vec![&Term::from(Literal::integer(2))]
        );
    }

    #[test]
    fn test_keyword_list_entries() {
        let ctx = create_test_context(ExpressionDetail::Reduced);
        let ast = Ast::list(vec![
            Ast::tuple(vec![Ast::atom("timeout"), Ast::int(5000)]),
            Ast::tuple(vec![Ast::atom("name"), Ast::var("name")]),
        ]);
        let (iri, triples, _) = built(ExpressionBuilder::build(&ast, &ctx, &ExprOpts::new()));

        assert!(triples.has_type(&iri, core::KEYWORD_LIST_LITERAL));
        assert_eq!(triples.objects(&iri, core::HAS_ENTRY).count(), 2);
        assert_eq!(
            triples.objects(&iri, core::ELEMENT_COUNT).collect::<Vec<_>>(),
            vec![&Term::from(Literal::count(2))]
        );
        let key = child(&iri, "entry_1/key");
        assert!(triples.has_type(&key, core::ATOM_LITERAL));
        assert_eq!(
            triples.objects(&key, core::ATOM_VALUE).collect::<Vec<_>>(),
            vec![&Term::from(Literal::string("name"))]
        );
        assert!(triples.has_type(&child(&iri, "entry_1/value"), core::VARIABLE));
        assert!(triples.has_type(&child(&iri, "entry_0/value"), core::INTEGER_LITERAL));
    }

    #[test]
    fn test_map_literal_and_pattern() {
        let ctx = create_test_context(ExpressionDetail::Reduced);
        let ast = Ast::call("%{}", vec![Ast::tuple(vec![Ast::atom("id"), Ast::var("id")])]);
        let (e, et, ctx) = built(ExpressionBuilder::build(&ast, &ctx, &ExprOpts::new()));
        let (p, pt, _) = built(ExpressionBuilder::build_pattern(&ast, &ctx, &ExprOpts::new()));

        assert!(et.has_type(&e, core::MAP_LITERAL));
        assert!(et.has_type(&child(&e, "entry_0"), core::MAP_ENTRY));
        assert!(et.has_type(&child(&e, "entry_0/key"), core::ATOM_LITERAL));
        assert!(et.has_type(&child(&e, "entry_0/value"), core::VARIABLE));

        assert!(pt.has_type(&p, core::MAP_PATTERN));
        assert!(pt.has_type(&child(&p, "entry_0/key"), core::LITERAL_PATTERN));
        assert!(pt.has_type(&child(&p, "entry_0/value"), core::VARIABLE_PATTERN));
    }

    #[test]
    fn test_struct_literal_and_pattern() {
        let ctx = create_test_context(ExpressionDetail::Reduced);
        let ast = Ast::call(
            "%",
            vec![
                Ast::aliases(&["MyApp", "User"]),
                Ast::call("%{}", vec![Ast::tuple(vec![Ast::atom("name"), Ast::var("n")])]),
            ],
        );
        let user = Term::from(Iri::new("https://ex.org/code#MyApp.User"));
        let (e, et, ctx) = built(ExpressionBuilder::build(&ast, &ctx, &ExprOpts::new()));
        let (p, pt, _) = built(ExpressionBuilder::build_pattern(&ast, &ctx, &ExprOpts::new()));

        assert!(et.has_type(&e, core::STRUCT_LITERAL));
        assert_eq!(et.objects(&e, core::REFERS_TO_MODULE).collect::<Vec<_>>(), vec![&user]);
        assert!(et.has_type(&child(&e, "entry_0/value"), core::VARIABLE));

        assert!(pt.has_type(&p, core::STRUCT_PATTERN));
        assert_eq!(pt.objects(&p, core::REFERS_TO_MODULE).collect::<Vec<_>>(), vec![&user]);
        assert!(pt.has_type(&child(&p, "entry_0/value"), core::VARIABLE_PATTERN));
    }

    #[test]
    fn test_binary_literal_and_pattern() {
        let ctx = create_test_context(ExpressionDetail::Reduced);
        let bytes = Ast::call("<<>>", vec![Ast::int(1), Ast::int(2), Ast::int(255)]);
        let (e, et, ctx) = built(ExpressionBuilder::build(&bytes, &ctx, &ExprOpts::new()));
        assert!(et.has_type(&e, core::BINARY_LITERAL));
        assert_eq!(
            et.objects(&e, core::BINARY_VALUE).collect::<Vec<_>>(),
            vec![&Term::from(Literal::hex_binary(&[1, 2, 255]))]
        );

        let segments = Ast::call(
            "<<>>",
            vec![
                Ast::var("tag"),
                Ast::op("::", Ast::var("rest"), Ast::call("binary", vec![])),
            ],
        );
        let (p, pt, _) = built(ExpressionBuilder::build_pattern(&segments, &ctx, &ExprOpts::new()));
        assert!(pt.has_type(&p, core::BINARY_PATTERN));
        assert_eq!(pt.objects(&p, core::HAS_SEGMENT).count(), 2);
        let rest = child(&p, "segment_1");
        assert!(pt.has_type(&rest, core::VARIABLE_PATTERN));
        assert_eq!(
            pt.objects(&rest, core::NAME).collect::<Vec<_>>(),
            vec![&Term::from(Literal::string("rest"))]
        );
    }

    #[test]
    fn test_match_operator_and_as_pattern() {
        let ctx = create_test_context(ExpressionDetail::Reduced);
        let ast = Ast::op("=", Ast::tuple(vec![Ast::var("a"), Ast::var("b")]), Ast::var("whole"));
        let (e, et, ctx) = built(ExpressionBuilder::build(&ast, &ctx, &ExprOpts::new()));
        let (p, pt, _) = built(ExpressionBuilder::build_pattern(&ast, &ctx, &ExprOpts::new()));

        assert!(et.has_type(&e, core::MATCH_OPERATOR));
        assert!(et.has_type(&child(&e, "left"), core::TUPLE_PATTERN));
        assert!(et.has_type(&child(&e, "right"), core::VARIABLE));

        assert!(pt.has_type(&p, core::AS_PATTERN));
        assert!(pt.has_type(&child(&p, "left"), core::TUPLE_PATTERN));
        assert!(pt.has_type(&child(&p, "right"), core::VARIABLE_PATTERN));
    }

    // ------------------------------------------------------------------
    // Nesting bound
    // ------------------------------------------------------------------

    fn left_nested_chain(symbol: &str, depth: i64) -> Ast {
        let mut ast = Ast::var("x");
        for i in 0..depth {
            ast = Ast::op(symbol, ast, Ast::int(i));
        }
        ast
    }

    #[test]
    fn test_deep_operator_chain_degrades_to_generic() {
        let ctx = create_test_context(ExpressionDetail::Reduced);
        let ast = left_nested_chain("+", 10_000);
        let (iri, triples, _) = built(ExpressionBuilder::build(&ast, &ctx, &ExprOpts::new()));

        assert!(triples.has_type(&iri, core::ARITHMETIC_OPERATOR));
        let above = Iri::new(format!("{}{}", iri, "/left".repeat(MAX_NESTING_DEPTH - 1)));
        assert!(triples.has_type(&above, core::ARITHMETIC_OPERATOR));

        let bound = Iri::new(format!("{}{}", iri, "/left".repeat(MAX_NESTING_DEPTH)));
        assert!(triples.has_type(&bound, core::EXPRESSION));
        assert_eq!(
            triples.objects(&bound, core::FORM_NAME).collect::<Vec<_>>(),
            vec![&Term::from(Literal::string("+"))]
        );
        assert_eq!(triples.objects(&bound, core::HAS_LEFT_OPERAND).count(), 0);
    }

    #[test]
    fn test_deep_pattern_degrades_to_generic() {
        let ctx = create_test_context(ExpressionDetail::Reduced);
        let mut ast = Ast::var("x");
        for _ in 0..10_000 {
            ast = Ast::call("{}", vec![ast]);
        }
        let (iri, triples, _) = built(ExpressionBuilder::build_pattern(&ast, &ctx, &ExprOpts::new()));

        assert!(triples.has_type(&iri, core::TUPLE_PATTERN));
        let bound = Iri::new(format!("{}{}", iri, "/element_0".repeat(MAX_NESTING_DEPTH)));
        assert!(triples.has_type(&bound, core::PATTERN));
        assert_eq!(triples.objects(&bound, core::HAS_ELEMENT).count(), 0);
    }

    #[test]
    fn test_deep_tree_is_never_shared() {
        let ctx = create_test_context(ExpressionDetail::Reduced).with_cache();
        let ast = left_nested_chain("<>", 10_000);
        let opts = ExprOpts::new().sharing_structure();

        let (first, _, ctx) = built(ExpressionBuilder::build(&ast, &ctx, &opts));
        let (second, second_triples, _) = built(ExpressionBuilder::build(&ast, &ctx, &opts));
        assert_ne!(first, second);
        assert!(second_triples.has_type(&second, core::STRING_CONCAT_OPERATOR));
    }
}
