//! Behaviour Builder - callback-defining modules and their implementers

use crate::features::context::Context;
use crate::shared::models::{BehaviourRecord, Iri, Literal, TripleSet};
use crate::shared::utils::id_generator::{IriGenerator, MemberKind};
use crate::shared::vocab::structure;

#[derive(Debug, Default, Clone, Copy)]
pub struct BehaviourBuilder;

impl BehaviourBuilder {
    pub fn build(record: &BehaviourRecord, ctx: &Context) -> (Iri, TripleSet) {
        let base = ctx.base_iri();
        let iri = IriGenerator::module(base, &record.module);
        let mut triples = TripleSet::new();

        if !record.callbacks.is_empty() {
            triples.add_type(&iri, structure::BEHAVIOUR);
        }
        for callback in &record.callbacks {
            let callback_iri =
                IriGenerator::member(&iri, MemberKind::Callback, &callback.name, callback.arity);
            let class = if callback.is_macro {
                structure::MACRO_CALLBACK_SPEC
            } else {
                structure::CALLBACK_SPEC
            };
            triples.add_iri(&iri, structure::DEFINES_CALLBACK, &callback_iri);
            triples.add_type(&callback_iri, class);
            triples.add_literal(
                &callback_iri,
                structure::FUNCTION_NAME,
                Literal::string(callback.name.as_str()),
            );
            triples.add_literal(
                &callback_iri,
                structure::ARITY,
                Literal::count(callback.arity as usize),
            );
            triples.add_literal(
                &callback_iri,
                structure::IS_OPTIONAL_CALLBACK,
                Literal::boolean(callback.optional),
            );
        }

        for behaviour in &record.implements {
            let behaviour_iri = IriGenerator::module(base, behaviour);
            triples.add_iri(&iri, structure::IMPLEMENTS_BEHAVIOUR, &behaviour_iri);
        }

        (iri, triples)
    }
}
