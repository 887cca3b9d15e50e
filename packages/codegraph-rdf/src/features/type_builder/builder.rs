//! TypeSystemBuilder implementation

use tracing::trace;

use super::classify::classify_type;
use super::domain::TypeShape;
use crate::features::context::Context;
use crate::shared::models::{
    Ast, Form, Iri, Literal, SpecKind, SpecRecord, TripleSet, TypeRecord, TypeVisibility,
    MAX_NESTING_DEPTH,
};
use crate::shared::utils::emit::{add_docstring, add_source_location};
use crate::shared::utils::id_generator::{fresh_iri, IriGenerator, MemberKind};
use crate::shared::vocab::{core, structure};

#[derive(Debug, Default, Clone, Copy)]
pub struct TypeSystemBuilder;

impl TypeSystemBuilder {
    /// `@type` / `@typep` / `@opaque` definition
    pub fn build_type(record: &TypeRecord, ctx: &Context) -> (Iri, TripleSet) {
        let module = IriGenerator::module(ctx.base_iri(), &record.module);
        let iri = IriGenerator::member(&module, MemberKind::Type, &record.name, record.arity());
        let mut triples = TripleSet::new();

        let class = match record.visibility {
            TypeVisibility::Public => structure::PUBLIC_TYPE,
            TypeVisibility::Private => structure::PRIVATE_TYPE,
            TypeVisibility::Opaque => structure::OPAQUE_TYPE,
        };
        triples.add_type(&iri, class);
        triples.add_literal(&iri, structure::TYPE_NAME, Literal::string(record.name.as_str()));
        triples.add_literal(&iri, structure::ARITY, Literal::count(record.parameters.len()));
        triples.add_iri(&iri, structure::BELONGS_TO, &module);
        add_docstring(&mut triples, &iri, &record.docstring);
        add_source_location(&mut triples, &iri, record.location.as_ref(), ctx.file_path());

        for (i, parameter) in record.parameters.iter().enumerate() {
            let param = IriGenerator::parameter(&iri, i);
            triples.add_iri(&iri, structure::HAS_TYPE_PARAMETER, &param);
            triples.add_type(&param, structure::TYPE_VARIABLE);
            triples.add_literal(&param, core::NAME, Literal::string(parameter.as_str()));
            triples.add_literal(&param, structure::PARAMETER_POSITION, Literal::count(i));
        }

        if let Some(definition) = &record.definition {
            let expr = fresh_iri(&iri, "definition");
            triples.add_iri(&iri, structure::HAS_TYPE_EXPRESSION, &expr);
            Self::build_type_expression(&expr, definition, &mut triples);
        }

        (iri, triples)
    }

    /// `@spec` / `@callback` / `@macrocallback`
    ///
    /// Specs attach to the identifier of what they describe, so a function
    /// and its spec are one node with both classes.
    pub fn build_spec(record: &SpecRecord, ctx: &Context) -> (Iri, TripleSet) {
        let module = IriGenerator::module(ctx.base_iri(), &record.module);
        let (kind, class) = match record.kind {
            SpecKind::Spec => (MemberKind::Function, structure::FUNCTION_SPEC),
            SpecKind::Callback => (MemberKind::Callback, structure::CALLBACK_SPEC),
            SpecKind::MacroCallback => (MemberKind::Callback, structure::MACRO_CALLBACK_SPEC),
        };
        let iri = IriGenerator::member(&module, kind, &record.name, record.arity);
        let mut triples = TripleSet::new();

        triples.add_type(&iri, class);
        triples.add_iri(&iri, structure::HAS_SPEC, &iri);
        if kind == MemberKind::Callback {
            triples.add_literal(
                &iri,
                structure::FUNCTION_NAME,
                Literal::string(record.name.as_str()),
            );
            triples.add_literal(&iri, structure::ARITY, Literal::count(record.arity as usize));
            triples.add_iri(&iri, structure::BELONGS_TO, &module);
        }

        let Some((params, ret)) = spec_signature(&record.ast) else {
            trace!("unrecognized spec shape for {}", iri);
            return (iri, triples);
        };

        let spec = fresh_iri(&iri, "spec");
        for (i, param) in params.iter().enumerate() {
            let param_iri = fresh_iri(&spec, &format!("param_{}", i));
            triples.add_iri(&iri, structure::HAS_PARAMETER_TYPE, &param_iri);
            Self::build_type_expression(&param_iri, param, &mut triples);
        }
        let return_iri = fresh_iri(&spec, "return");
        triples.add_iri(&iri, structure::HAS_RETURN_TYPE, &return_iri);
        Self::build_type_expression(&return_iri, ret, &mut triples);

        (iri, triples)
    }

    /// Classify `ast` and emit it at `iri`, children nested by role
    pub fn build_type_expression(iri: &Iri, ast: &Ast, triples: &mut TripleSet) {
        Self::emit(iri, ast, 0, triples);
    }

    fn emit(iri: &Iri, ast: &Ast, depth: usize, triples: &mut TripleSet) {
        if depth >= MAX_NESTING_DEPTH {
            trace!("nesting bound reached at {}", iri);
            triples.add_type(iri, structure::TYPE_EXPRESSION);
            if let Some(name) = ast.as_form().and_then(Form::name) {
                triples.add_literal(iri, core::FORM_NAME, Literal::string(name));
            }
            return;
        }

        let shape = classify_type(ast);
        triples.add_type(iri, shape.class_iri());
        let depth = depth + 1;

        match shape {
            TypeShape::Union(members) => {
                for (i, member) in members.into_iter().enumerate() {
                    let role = format!("member_{}", i);
                    let child = Self::link(iri, &role, structure::HAS_UNION_MEMBER, triples);
                    Self::emit(&child, member, depth, triples);
                }
            }
            TypeShape::Tuple(elements) => {
                for (i, element) in elements.iter().enumerate() {
                    let role = format!("element_{}", i);
                    let child = Self::link(iri, &role, structure::HAS_ELEMENT_TYPE, triples);
                    Self::emit(&child, element, depth, triples);
                }
            }
            TypeShape::Function { params, ret } => {
                for (i, param) in params.iter().enumerate() {
                    let role = format!("param_{}", i);
                    let child = Self::link(iri, &role, structure::HAS_PARAMETER_TYPE, triples);
                    Self::emit(&child, param, depth, triples);
                }
                let child = Self::link(iri, "return", structure::HAS_RETURN_TYPE, triples);
                Self::emit(&child, ret, depth, triples);
            }
            TypeShape::Parameterized { name, args } => {
                triples.add_literal(iri, structure::BASE_TYPE_NAME, Literal::string(name));
                for (i, arg) in args.into_iter().enumerate() {
                    let role = format!("arg_{}", i);
                    let child = Self::link(iri, &role, structure::HAS_TYPE_ARGUMENT, triples);
                    Self::emit(&child, arg, depth, triples);
                }
            }
            TypeShape::Remote { module, name, args } => {
                triples.add_literal(iri, structure::TYPE_MODULE_NAME, Literal::string(module));
                triples.add_literal(iri, structure::TYPE_NAME, Literal::string(name));
                for (i, arg) in args.iter().enumerate() {
                    let role = format!("arg_{}", i);
                    let child = Self::link(iri, &role, structure::HAS_TYPE_ARGUMENT, triples);
                    Self::emit(&child, arg, depth, triples);
                }
            }
            TypeShape::Variable(name) => {
                triples.add_literal(iri, core::NAME, Literal::string(name));
            }
            TypeShape::Basic(name) => {
                triples.add_literal(iri, structure::TYPE_NAME, Literal::string(name));
            }
            TypeShape::Literal(value) => {
                triples.add_literal(iri, structure::LITERAL_TYPE_VALUE, Literal::string(value));
            }
            TypeShape::Map(fields) => {
                for (i, (key, value)) in fields.into_iter().enumerate() {
                    let role = format!("field_{}", i);
                    let field = Self::link(iri, &role, structure::HAS_FIELD_TYPE, triples);
                    Self::emit(&field, value, depth, triples);
                    Self::map_key(&field, key, depth, triples);
                }
            }
            TypeShape::Generic { form_name } => {
                trace!("generic type expression: {} ({:?})", iri, form_name);
                if let Some(name) = form_name {
                    triples.add_literal(iri, core::FORM_NAME, Literal::string(name));
                }
            }
        }
    }

    /// `name: t` names the field; `required(k)`, `optional(k)` and other
    /// keys are typed under `{field}/key`
    fn map_key(field: &Iri, key: &Ast, depth: usize, triples: &mut TripleSet) {
        if let Ast::Atom(name) = key {
            triples.add_literal(field, structure::FIELD_NAME, Literal::string(name.as_str()));
            return;
        }
        let wrapped = key.as_form().and_then(|form| match (form.name(), form.args()) {
            (Some("required"), [inner]) => Some((true, inner)),
            (Some("optional"), [inner]) => Some((false, inner)),
            _ => None,
        });
        let key_type = match wrapped {
            Some((required, inner)) => {
                triples.add_literal(field, structure::IS_REQUIRED_KEY, Literal::boolean(required));
                inner
            }
            None => key,
        };
        let child = Self::link(field, "key", structure::HAS_KEY_TYPE, triples);
        Self::emit(&child, key_type, depth + 1, triples);
    }

    fn link(parent: &Iri, role: &str, predicate: &str, triples: &mut TripleSet) -> Iri {
        let child = fresh_iri(parent, role);
        triples.add_iri(parent, predicate, &child);
        child
    }
}

/// Parameter types and return type of `name(params) :: ret [when ...]`
fn spec_signature(ast: &Ast) -> Option<(&[Ast], &Ast)> {
    let signature = match ast.as_form().filter(|f| f.is_named("when")).map(Form::args) {
        Some([signature, _constraints]) => signature,
        _ => ast,
    };
    let [head, ret] = signature.as_form().filter(|f| f.is_named("::"))?.args() else {
        return None;
    };
    Some((head.as_form()?.args(), ret))
}
