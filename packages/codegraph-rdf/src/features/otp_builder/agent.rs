//! Agent implementations

use crate::features::context::Context;
use crate::shared::models::{AgentRecord, Iri, Literal, TripleSet};
use crate::shared::utils::id_generator::IriGenerator;
use crate::shared::vocab::otp;

#[derive(Debug, Default, Clone, Copy)]
pub struct AgentBuilder;

impl AgentBuilder {
    pub fn build(record: &AgentRecord, ctx: &Context) -> (Iri, TripleSet) {
        let iri = IriGenerator::module(ctx.base_iri(), &record.module);
        let mut triples = TripleSet::new();
        triples.add_type(&iri, otp::AGENT_IMPLEMENTATION);
        if record.use_option_count > 0 {
            triples.add_literal(
                &iri,
                otp::USE_OPTION_COUNT,
                Literal::count(record.use_option_count),
            );
        }
        (iri, triples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuildConfig;

    #[test]
    fn test_agent_without_options() {
        let record = AgentRecord {
            module: "Cache".into(),
            use_option_count: 0,
        };
        let ctx = Context::new(BuildConfig::new("https://ex.org/code#"));
        let (iri, triples) = AgentBuilder::build(&record, &ctx);
        assert!(triples.has_type(&iri, otp::AGENT_IMPLEMENTATION));
        assert_eq!(triples.len(), 1);
    }
}
