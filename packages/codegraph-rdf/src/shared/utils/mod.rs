//! Utility modules shared across features
//!
//! - `id_generator`: deterministic identifier composition
//! - `fingerprint`: structural keys for the dedup cache
//! - `emit`: location and docstring triples

pub mod emit;
pub mod fingerprint;
pub mod id_generator;

pub use fingerprint::fingerprint;
