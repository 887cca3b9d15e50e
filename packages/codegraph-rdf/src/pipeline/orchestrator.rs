//! Build orchestrator
//!
//! Runs the selected builders over one [`AnalysisInput`] and unions their
//! output into a [`Graph`].
//!
//! ```text
//! AnalysisInput + Context
//!   ├─ Sequential: for kind in BuilderKind::ALL ─▶ execute
//!   └─ Concurrent: rayon pool ─▶ spawn(execute) ─▶ mpsc ─▶ recv_timeout
//!                         │
//!                         ▼
//!           sort by canonical kind order ─▶ Graph::merge
//! ```
//!
//! Every builder receives the same context snapshot, so both paths mint the
//! same identifiers and yield the same triple set.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, error, info};

use super::graph::Graph;
use super::stages::{builder_for, BuilderOutput, RecordBuilder};
use crate::config::{ExecutionMode, OrchestratorConfig};
use crate::errors::{BuildError, Result};
use crate::features::context::Context;
use crate::shared::models::AnalysisInput;

/// Drives the per-record builders for one module
#[derive(Debug, Clone, Default)]
pub struct Orchestrator {
    config: OrchestratorConfig,
}

impl Orchestrator {
    pub fn new(config: OrchestratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &OrchestratorConfig {
        &self.config
    }

    /// Build the graph for `input`
    ///
    /// Fails with [`BuildError::MissingModule`] when the input carries no
    /// module record. The current module of the context is set from it.
    pub fn build(&self, input: &AnalysisInput, ctx: &Context) -> Result<Graph> {
        let stages: Vec<&'static dyn RecordBuilder> = self
            .config
            .selected_builders()
            .into_iter()
            .map(builder_for)
            .collect();
        self.build_stages(&stages, input, ctx)
    }

    fn build_stages(
        &self,
        stages: &[&'static dyn RecordBuilder],
        input: &AnalysisInput,
        ctx: &Context,
    ) -> Result<Graph> {
        let module = input.module.as_ref().ok_or(BuildError::MissingModule)?;
        let ctx = ctx.clone().with_module(module.name.clone());
        let start = Instant::now();

        info!(
            module = %module.name,
            mode = ?self.config.execution,
            builders = stages.len(),
            "Starting graph build"
        );

        let mut outputs = match self.config.execution {
            ExecutionMode::Sequential => run_sequential(stages, input, &ctx),
            ExecutionMode::Concurrent => self.run_concurrent(stages, input, &ctx)?,
        };
        outputs.sort_by_key(|output| output.kind);

        let mut graph = Graph::new();
        for output in outputs {
            debug!(
                builder = output.kind.name(),
                items = output.items_processed,
                triples = output.triples.len(),
                duration_us = output.duration.as_micros() as u64,
                "Builder finished"
            );
            graph.merge(output);
        }

        info!(
            module = %module.name,
            triples = graph.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Graph build complete"
        );
        Ok(graph)
    }

    fn run_concurrent(
        &self,
        stages: &[&'static dyn RecordBuilder],
        input: &AnalysisInput,
        ctx: &Context,
    ) -> Result<Vec<BuilderOutput>> {
        if stages.is_empty() {
            return Ok(Vec::new());
        }

        let threads = self
            .config
            .max_threads
            .unwrap_or_else(num_cpus::get)
            .min(stages.len())
            .max(1);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("graph-builder-{}", i))
            .panic_handler(|_| error!("Builder task panicked"))
            .build()
            .map_err(|e| BuildError::task_lost(format!("thread pool: {}", e)))?;

        let input = Arc::new(input.clone());
        let ctx = Arc::new(ctx.clone());
        let (tx, rx) = mpsc::channel::<BuilderOutput>();

        for &stage in stages {
            let tx = tx.clone();
            let input = Arc::clone(&input);
            let ctx = Arc::clone(&ctx);
            pool.spawn(move || {
                let output = stage.execute(&input, &ctx);
                // Receiver gone means the build already timed out
                let _ = tx.send(output);
            });
        }
        drop(tx);

        let timeout = self.config.timeout();
        let deadline = Instant::now() + timeout;
        let mut outputs = Vec::with_capacity(stages.len());
        while outputs.len() < stages.len() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match rx.recv_timeout(remaining) {
                Ok(output) => outputs.push(output),
                Err(RecvTimeoutError::Timeout) => {
                    error!(
                        timeout_ms = self.config.timeout_ms,
                        finished = outputs.len(),
                        scheduled = stages.len(),
                        "Concurrent build timed out"
                    );
                    return Err(BuildError::Timeout {
                        timeout_ms: self.config.timeout_ms,
                        builder_count: stages.len(),
                    });
                }
                Err(RecvTimeoutError::Disconnected) => {
                    return Err(BuildError::task_lost(format!(
                        "{} of {} builders reported",
                        outputs.len(),
                        stages.len()
                    )));
                }
            }
        }
        Ok(outputs)
    }
}

fn run_sequential(
    stages: &[&'static dyn RecordBuilder],
    input: &AnalysisInput,
    ctx: &Context,
) -> Vec<BuilderOutput> {
    stages.iter().map(|stage| stage.execute(input, ctx)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuildConfig;
    use crate::pipeline::BuilderKind;
    use crate::shared::models::{FunctionRecord, ModuleRecord};
    use crate::shared::models::TripleSet;
    use crate::shared::vocab::structure;
    use std::time::Duration;

    struct PanickingBuilder;

    impl RecordBuilder for PanickingBuilder {
        fn kind(&self) -> BuilderKind {
            BuilderKind::Task
        }

        fn build_all(&self, _input: &AnalysisInput, _ctx: &Context) -> TripleSet {
            panic!("malformed record");
        }

        fn item_count(&self, _input: &AnalysisInput) -> usize {
            0
        }
    }

    struct SlowBuilder;

    impl RecordBuilder for SlowBuilder {
        fn kind(&self) -> BuilderKind {
            BuilderKind::Agent
        }

        fn build_all(&self, _input: &AnalysisInput, _ctx: &Context) -> TripleSet {
            std::thread::sleep(Duration::from_millis(500));
            TripleSet::new()
        }

        fn item_count(&self, _input: &AnalysisInput) -> usize {
            0
        }
    }

    fn input() -> AnalysisInput {
        let mut input = AnalysisInput::for_module(ModuleRecord::new("MyApp"));
        input.functions.push(FunctionRecord {
            module: "MyApp".into(),
            name: "run".into(),
            ..Default::default()
        });
        input
    }

    #[test]
    fn test_missing_module() {
        let orchestrator = Orchestrator::default();
        let err = orchestrator
            .build(&AnalysisInput::default(), &Context::default())
            .unwrap_err();
        assert!(matches!(err, BuildError::MissingModule));
    }

    #[test]
    fn test_contributions_follow_canonical_order() {
        let orchestrator = Orchestrator::new(OrchestratorConfig::concurrent()).unwrap();
        let graph = orchestrator
            .build(&input(), &Context::new(BuildConfig::default()))
            .unwrap();
        let kinds: Vec<BuilderKind> = graph.contributions().iter().map(|(k, _)| *k).collect();
        assert_eq!(kinds, BuilderKind::ALL.to_vec());
    }

    #[test]
    fn test_exclude_drops_builder_output() {
        let config = OrchestratorConfig::sequential().exclude([BuilderKind::Function]);
        let graph = Orchestrator::new(config)
            .unwrap()
            .build(&input(), &Context::default())
            .unwrap();
        assert!(!graph
            .iter()
            .any(|t| t.predicate.as_str() == structure::FUNCTION_NAME));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = OrchestratorConfig::concurrent().with_timeout(std::time::Duration::ZERO);
        assert!(matches!(
            Orchestrator::new(config),
            Err(BuildError::Config(_))
        ));
    }

    #[test]
    fn test_panicking_builder_is_task_lost() {
        let orchestrator = Orchestrator::new(OrchestratorConfig::concurrent()).unwrap();
        let stages: [&'static dyn RecordBuilder; 2] =
            [builder_for(BuilderKind::Module), &PanickingBuilder];
        let err = orchestrator
            .build_stages(&stages, &input(), &Context::default())
            .unwrap_err();
        match err {
            BuildError::TaskLost(detail) => assert_eq!(detail, "1 of 2 builders reported"),
            other => panic!("expected TaskLost, got {:?}", other),
        }
    }

    #[test]
    fn test_slow_builder_times_out() {
        let config = OrchestratorConfig::concurrent().with_timeout(Duration::from_millis(20));
        let orchestrator = Orchestrator::new(config).unwrap();
        let stages: [&'static dyn RecordBuilder; 2] =
            [builder_for(BuilderKind::Module), &SlowBuilder];
        let err = orchestrator
            .build_stages(&stages, &input(), &Context::default())
            .unwrap_err();
        assert!(matches!(
            err,
            BuildError::Timeout {
                timeout_ms: 20,
                builder_count: 2
            }
        ));
    }
}
