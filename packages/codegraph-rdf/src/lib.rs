/*
 * Codegraph RDF - Knowledge Graph Builders
 *
 * Feature-First Architecture:
 * - shared/      : Records, syntax tree, triples, vocabulary, identifiers
 * - features/    : One vertical slice per builder (context, expressions,
 *                  modules, functions, types, structs, protocols,
 *                  behaviours, OTP patterns)
 * - pipeline/    : Builder stages and the orchestrator
 * - config/      : Build and scheduling configuration
 */

#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Build and orchestrator configuration
pub mod config;

/// Error types
pub mod errors;

/// Per-record builders
pub mod features;

/// Builder stages and orchestration
pub mod pipeline;

/// Shared models, vocabulary and utilities
pub mod shared;

pub use config::{BuildConfig, ExecutionMode, ExpressionDetail, ExpressionMode, OrchestratorConfig};
pub use errors::{BuildError, Result};
pub use features::context::Context;
pub use features::expression_builder::{BuildResult, ExprOpts, ExpressionBuilder};
pub use pipeline::{BuilderKind, Graph, Orchestrator};
pub use shared::models::{AnalysisInput, Ast, Iri, Literal, Term, Triple, TripleSet};

/// Build the graph for one module with the given configurations
///
/// Shorthand for `Orchestrator::new(orchestrator)?.build(input, &Context::new(build))`.
pub fn build_graph(
    input: &AnalysisInput,
    build: BuildConfig,
    orchestrator: OrchestratorConfig,
) -> Result<Graph> {
    build.validate()?;
    let ctx = Context::new(build).with_expression_counter();
    Orchestrator::new(orchestrator)?.build(input, &ctx)
}
