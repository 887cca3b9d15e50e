//! Expression Builder Domain
//!
//! Shape enums (one per construct family), build options and results.

mod result;
mod shapes;

pub use result::{BuildResult, ExprOpts};
pub use shapes::{
    CaptureShape, ExprShape, ListShape, LiteralShape, OperatorArity, OperatorClass, PatternShape,
};
