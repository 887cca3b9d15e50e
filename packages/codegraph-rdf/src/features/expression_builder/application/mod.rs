//! Expression Builder entry points

mod builder;

pub use builder::ExpressionBuilder;
