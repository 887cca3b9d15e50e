//! Build configuration
//!
//! Two layers, both serde-derived and loadable from YAML:
//!
//! - [`BuildConfig`]: what a build pass produces (namespace, file boundary,
//!   expression extraction mode). Carried by the build context.
//! - [`OrchestratorConfig`]: how builders are scheduled (sequential or
//!   concurrent, timeout, include/exclude filters).
//!
//! # Examples
//!
//! ```rust,ignore
//! use codegraph_rdf::config::{BuildConfig, ExpressionDetail};
//!
//! let config = BuildConfig::new("https://example.org/code#")
//!     .with_file_path("lib/my_app/users.ex")
//!     .with_expressions(ExpressionDetail::Full);
//! config.validate()?;
//! ```

pub mod build_config;
pub mod error;
pub mod orchestrator_config;

pub use build_config::{BuildConfig, ExpressionDetail, ExpressionMode};
pub use error::{ConfigError, ConfigResult};
pub use orchestrator_config::{ExecutionMode, OrchestratorConfig};
