//! Build Context - explicitly threaded build state
//!
//! Holds the base namespace, the per-namespace expression counters, the
//! structural dedup cache, the current file and the feature flags. A context
//! is created once per build pass and moves through builder calls by value:
//! every operation that mints an identifier returns the updated context.
//! Nothing here is global, so concurrent builders working from the same
//! snapshot cannot race.

pub mod cache;
pub mod domain;
pub mod iri;

pub use cache::{get_or_create_iri, IriCache};
pub use domain::Context;
pub use iri::{expression_iri, IriOptions};
