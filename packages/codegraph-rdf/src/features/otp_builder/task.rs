//! Task implementations

use crate::features::context::Context;
use crate::shared::models::{Iri, Literal, TaskRecord, TripleSet};
use crate::shared::utils::id_generator::IriGenerator;
use crate::shared::vocab::otp;

#[derive(Debug, Default, Clone, Copy)]
pub struct TaskBuilder;

impl TaskBuilder {
    pub fn build(record: &TaskRecord, ctx: &Context) -> (Iri, TripleSet) {
        let iri = IriGenerator::module(ctx.base_iri(), &record.module);
        let mut triples = TripleSet::new();
        triples.add_type(&iri, otp::TASK_IMPLEMENTATION);
        triples.add_literal(&iri, otp::TASK_KIND, Literal::string(record.kind.as_str()));
        (iri, triples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuildConfig;
    use crate::shared::models::TaskKind;

    #[test]
    fn test_task_kind() {
        let record = TaskRecord {
            module: "Importer".into(),
            kind: TaskKind::Supervised,
        };
        let ctx = Context::new(BuildConfig::new("https://ex.org/code#"));
        let (iri, triples) = TaskBuilder::build(&record, &ctx);
        assert!(triples
            .objects(&iri, otp::TASK_KIND)
            .any(|o| o.as_literal() == Some(&Literal::string("supervised"))));
    }
}
