//! Type System Builder - type definitions, type expressions and specs
//!
//! Type definitions live at `{module}/type/{name}/{arity}` with one
//! `TypeVariable` node per declared parameter. Type expressions are
//! classified recursively (union, tuple, function, parameterized, remote,
//! variable, basic, literal, map) and nested by role under their owner.
//! A function spec is attached to the function's own identifier.

mod builder;
mod classify;
mod domain;

pub use builder::TypeSystemBuilder;
pub use classify::classify_type;
pub use domain::TypeShape;
