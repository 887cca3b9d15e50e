//! Function Builder - functions, macros and their clauses
//!
//! ```text
//! {module}/function/{name}/{arity}
//!   └─ clause/{i}                      FunctionClause
//!        ├─ param/{j}                   Parameter ─hasPattern→ {clause}/expr/param_{j}
//!        ├─ hasGuard                    {clause}/expr/guard
//!        └─ hasBody                     {clause}/expr/expr_{n}
//! ```
//!
//! Each clause mints its expressions under its own namespace, so a
//! function's identifiers never depend on what was built before it.

mod builder;

pub use builder::FunctionBuilder;
