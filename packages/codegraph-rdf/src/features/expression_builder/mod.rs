//! Expression Builder - syntax tree → expression/pattern nodes
//!
//! ## Architecture
//!
//! ```text
//! Ast
//!  ↓ classify (one shape enum per construct family)
//! ExprShape / PatternShape
//!  ↓ emit (recursive, children addressed by role)
//! TripleSet
//! ```
//!
//! Two entry points share the machinery: `build` for expressions and
//! `build_pattern` for binding positions, where the same raw shape gets the
//! pattern class (`Variable` vs `VariablePattern`, ...).

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::ExpressionBuilder;
pub use domain::{BuildResult, ExprOpts};
