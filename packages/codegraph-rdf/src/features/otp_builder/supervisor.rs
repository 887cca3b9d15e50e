//! Supervisor and DynamicSupervisor implementations

use crate::features::context::Context;
use crate::shared::models::{Iri, Literal, SupervisorKind, SupervisorRecord, TripleSet};
use crate::shared::utils::id_generator::{fresh_iri, IriGenerator};
use crate::shared::vocab::otp;

#[derive(Debug, Default, Clone, Copy)]
pub struct SupervisorBuilder;

impl SupervisorBuilder {
    pub fn build(record: &SupervisorRecord, ctx: &Context) -> (Iri, TripleSet) {
        let base = ctx.base_iri();
        let iri = IriGenerator::module(base, &record.module);
        let mut triples = TripleSet::new();

        let class = match record.kind {
            SupervisorKind::Supervisor => otp::SUPERVISOR_IMPLEMENTATION,
            SupervisorKind::Dynamic => otp::DYNAMIC_SUPERVISOR_IMPLEMENTATION,
        };
        triples.add_type(&iri, class);

        if let Some(strategy) = &record.strategy {
            let strategy_iri = fresh_iri(&iri, "strategy");
            triples.add_iri(&iri, otp::HAS_STRATEGY, &strategy_iri);
            triples.add_type(&strategy_iri, otp::SUPERVISION_STRATEGY);
            triples.add_literal(
                &strategy_iri,
                otp::STRATEGY_TYPE,
                Literal::string(strategy.kind.as_str()),
            );
            if let Some(max_restarts) = strategy.max_restarts {
                triples.add_literal(
                    &strategy_iri,
                    otp::MAX_RESTARTS,
                    Literal::count(max_restarts as usize),
                );
            }
            if let Some(max_seconds) = strategy.max_seconds {
                triples.add_literal(
                    &strategy_iri,
                    otp::MAX_SECONDS,
                    Literal::count(max_seconds as usize),
                );
            }
        }

        for (i, child) in record.children.iter().enumerate() {
            let child_iri = fresh_iri(&iri, &format!("child/{}", i));
            triples.add_iri(&iri, otp::HAS_CHILD_SPEC, &child_iri);
            triples.add_type(&child_iri, otp::CHILD_SPEC);
            triples.add_literal(&child_iri, otp::CHILD_ID, Literal::string(child.id.as_str()));
            triples.add_literal(&child_iri, otp::CHILD_ORDER, Literal::count(i));
            if let Some(module) = &child.module {
                let module_iri = IriGenerator::module(base, module);
                triples.add_iri(&child_iri, otp::START_MODULE, &module_iri);
            }
            if let Some(restart) = &child.restart {
                triples.add_literal(
                    &child_iri,
                    otp::RESTART_STRATEGY,
                    Literal::string(restart.as_str()),
                );
            }
        }

        (iri, triples)
    }
}
