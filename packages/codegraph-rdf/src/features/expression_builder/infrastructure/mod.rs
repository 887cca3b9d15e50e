//! Classification and triple emission

pub mod classify;
pub mod emitter;

pub use classify::{classify_expression, classify_pattern};
pub use emitter::Emitter;
