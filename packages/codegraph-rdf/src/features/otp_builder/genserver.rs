//! GenServer implementations

use crate::features::context::Context;
use crate::shared::models::{GenServerRecord, Iri, Literal, TripleSet};
use crate::shared::utils::id_generator::{IriGenerator, MemberKind};
use crate::shared::vocab::otp;

#[derive(Debug, Default, Clone, Copy)]
pub struct GenServerBuilder;

impl GenServerBuilder {
    pub fn build(record: &GenServerRecord, ctx: &Context) -> (Iri, TripleSet) {
        let iri = IriGenerator::module(ctx.base_iri(), &record.module);
        let mut triples = TripleSet::new();

        triples.add_type(&iri, otp::GEN_SERVER_IMPLEMENTATION);
        if record.use_option_count > 0 {
            triples.add_literal(
                &iri,
                otp::USE_OPTION_COUNT,
                Literal::count(record.use_option_count),
            );
        }

        // Callbacks are ordinary functions of the module
        for callback in &record.callbacks {
            let function =
                IriGenerator::member(&iri, MemberKind::Function, &callback.name, callback.arity);
            triples.add_iri(&iri, otp::IMPLEMENTS_CALLBACK, &function);
            triples.add_type(&function, otp::CALLBACK_IMPLEMENTATION);
            triples.add_literal(
                &function,
                otp::CALLBACK_NAME,
                Literal::string(callback.name.as_str()),
            );
        }

        (iri, triples)
    }
}
