//! Module Builder - module and nested-module nodes
//!
//! One node per module at `{base}A.B.C`, with its directives, its nesting
//! relations and containment links to member functions, macros and types.

mod builder;

pub use builder::ModuleBuilder;
