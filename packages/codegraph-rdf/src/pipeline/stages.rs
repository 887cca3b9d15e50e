//! Builder stages
//!
//! Every builder the orchestrator drives implements [`RecordBuilder`]: it
//! reads its record collection from the shared input and builds against a
//! read-only context snapshot.

use std::time::{Duration, Instant};

use super::builder_kind::BuilderKind;
use crate::features::behaviour_builder::BehaviourBuilder;
use crate::features::context::Context;
use crate::features::function_builder::FunctionBuilder;
use crate::features::module_builder::ModuleBuilder;
use crate::features::otp_builder::{AgentBuilder, GenServerBuilder, SupervisorBuilder, TaskBuilder};
use crate::features::protocol_builder::ProtocolBuilder;
use crate::features::struct_builder::StructBuilder;
use crate::features::type_builder::TypeSystemBuilder;
use crate::shared::models::{AnalysisInput, TripleSet};

/// Output of one builder run
#[derive(Debug, Clone)]
pub struct BuilderOutput {
    pub kind: BuilderKind,
    pub triples: TripleSet,
    pub duration: Duration,
    /// Records consumed
    pub items_processed: usize,
}

/// Builder stage (one per [`BuilderKind`])
pub trait RecordBuilder: Send + Sync {
    fn kind(&self) -> BuilderKind;

    /// Build every record of this builder's kind
    fn build_all(&self, input: &AnalysisInput, ctx: &Context) -> TripleSet;

    fn item_count(&self, input: &AnalysisInput) -> usize;

    /// Timed run
    fn execute(&self, input: &AnalysisInput, ctx: &Context) -> BuilderOutput {
        let start = Instant::now();
        let triples = self.build_all(input, ctx);
        BuilderOutput {
            kind: self.kind(),
            triples,
            duration: start.elapsed(),
            items_processed: self.item_count(input),
        }
    }
}

/// Stage for `kind`
pub fn builder_for(kind: BuilderKind) -> &'static dyn RecordBuilder {
    match kind {
        BuilderKind::Module => &ModuleBuilder,
        BuilderKind::Function => &FunctionBuilder,
        BuilderKind::Type => &TypeSystemBuilder,
        BuilderKind::Struct => &StructBuilder,
        BuilderKind::Protocol => &ProtocolBuilder,
        BuilderKind::Behaviour => &BehaviourBuilder,
        BuilderKind::GenServer => &GenServerBuilder,
        BuilderKind::Supervisor => &SupervisorBuilder,
        BuilderKind::Agent => &AgentBuilder,
        BuilderKind::Task => &TaskBuilder,
    }
}

impl RecordBuilder for ModuleBuilder {
    fn kind(&self) -> BuilderKind {
        BuilderKind::Module
    }

    fn build_all(&self, input: &AnalysisInput, ctx: &Context) -> TripleSet {
        let mut triples = TripleSet::new();
        for module in input.module.iter().chain(&input.nested_modules) {
            let (_, built) = ModuleBuilder::build(module, ctx);
            triples.extend(built);
        }
        triples
    }

    fn item_count(&self, input: &AnalysisInput) -> usize {
        input.module.iter().count() + input.nested_modules.len()
    }
}

impl RecordBuilder for FunctionBuilder {
    fn kind(&self) -> BuilderKind {
        BuilderKind::Function
    }

    fn build_all(&self, input: &AnalysisInput, ctx: &Context) -> TripleSet {
        let mut triples = TripleSet::new();
        let mut context = ctx.clone();
        for function in &input.functions {
            let (_, built, next) = FunctionBuilder::build(function, &context);
            triples.extend(built);
            context = next;
        }
        triples
    }

    fn item_count(&self, input: &AnalysisInput) -> usize {
        input.functions.len()
    }
}

impl RecordBuilder for TypeSystemBuilder {
    fn kind(&self) -> BuilderKind {
        BuilderKind::Type
    }

    fn build_all(&self, input: &AnalysisInput, ctx: &Context) -> TripleSet {
        let mut triples = TripleSet::new();
        for record in &input.types {
            let (_, built) = TypeSystemBuilder::build_type(record, ctx);
            triples.extend(built);
        }
        for record in &input.specs {
            let (_, built) = TypeSystemBuilder::build_spec(record, ctx);
            triples.extend(built);
        }
        triples
    }

    fn item_count(&self, input: &AnalysisInput) -> usize {
        input.types.len() + input.specs.len()
    }
}

impl RecordBuilder for StructBuilder {
    fn kind(&self) -> BuilderKind {
        BuilderKind::Struct
    }

    fn build_all(&self, input: &AnalysisInput, ctx: &Context) -> TripleSet {
        let mut triples = TripleSet::new();
        let mut context = ctx.clone();
        for record in &input.structs {
            let (_, built, next) = StructBuilder::build(record, &context);
            triples.extend(built);
            context = next;
        }
        triples
    }

    fn item_count(&self, input: &AnalysisInput) -> usize {
        input.structs.len()
    }
}

impl RecordBuilder for ProtocolBuilder {
    fn kind(&self) -> BuilderKind {
        BuilderKind::Protocol
    }

    fn build_all(&self, input: &AnalysisInput, ctx: &Context) -> TripleSet {
        let mut triples = TripleSet::new();
        for record in &input.protocols {
            let (_, built) = ProtocolBuilder::build_protocol(record, ctx);
            triples.extend(built);
        }
        for record in &input.implementations {
            let (_, built) = ProtocolBuilder::build_implementation(record, ctx);
            triples.extend(built);
        }
        triples
    }

    fn item_count(&self, input: &AnalysisInput) -> usize {
        input.protocols.len() + input.implementations.len()
    }
}

/// Stages whose records map one-to-one onto `(Iri, TripleSet)` builds
macro_rules! simple_stage {
    ($builder:ty, $kind:expr, $field:ident) => {
        impl RecordBuilder for $builder {
            fn kind(&self) -> BuilderKind {
                $kind
            }

            fn build_all(&self, input: &AnalysisInput, ctx: &Context) -> TripleSet {
                let mut triples = TripleSet::new();
                for record in &input.$field {
                    let (_, built) = <$builder>::build(record, ctx);
                    triples.extend(built);
                }
                triples
            }

            fn item_count(&self, input: &AnalysisInput) -> usize {
                input.$field.len()
            }
        }
    };
}

simple_stage!(BehaviourBuilder, BuilderKind::Behaviour, behaviours);
simple_stage!(GenServerBuilder, BuilderKind::GenServer, genservers);
simple_stage!(SupervisorBuilder, BuilderKind::Supervisor, supervisors);
simple_stage!(AgentBuilder, BuilderKind::Agent, agents);
simple_stage!(TaskBuilder, BuilderKind::Task, tasks);
