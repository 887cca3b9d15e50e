//! Shared module - Common types and utilities
//!
//! Types shared by every builder: graph primitives, input records, the
//! syntax tree, vocabulary and identifier helpers.

pub mod models;
pub mod utils;
pub mod vocab;

// Re-exports for convenience
pub use models::*;
pub use utils::id_generator::{fresh_iri, IriGenerator, MemberKind};
