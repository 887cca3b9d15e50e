//! Shared models

pub mod ast;
pub mod records;
mod triple;

pub use ast::{Ast, Form, Head, Meta, MAX_NESTING_DEPTH};
pub use records::*;
pub use triple::{Datatype, Iri, Literal, Term, Triple, TripleSet};
