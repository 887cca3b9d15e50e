//! Build pipeline
//!
//! - [`BuilderKind`]: the builders the orchestrator knows about
//! - [`RecordBuilder`]: one stage per kind over the shared input
//! - [`Orchestrator`]: sequential or concurrent execution, merged into a [`Graph`]

pub mod builder_kind;
pub mod graph;
pub mod orchestrator;
pub mod stages;

pub use builder_kind::BuilderKind;
pub use graph::Graph;
pub use orchestrator::Orchestrator;
pub use stages::{builder_for, BuilderOutput, RecordBuilder};
