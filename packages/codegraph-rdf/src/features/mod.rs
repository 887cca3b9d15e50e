//! Feature modules
//!
//! - `context`: identifier and cache primitives threaded through every build
//! - `expression_builder`: expressions and binding patterns
//! - `module_builder`, `function_builder`, `type_builder`: module structure
//! - `struct_builder`, `protocol_builder`, `behaviour_builder`: definitions
//! - `otp_builder`: process-pattern implementations

pub mod behaviour_builder;
pub mod context;
pub mod expression_builder;
pub mod function_builder;
pub mod module_builder;
pub mod otp_builder;
pub mod protocol_builder;
pub mod struct_builder;
pub mod type_builder;
