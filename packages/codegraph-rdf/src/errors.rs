//! Error types for codegraph-rdf
//!
//! Only structural failures are errors. Unrecognized syntax never is: it
//! degrades to a generic node inside the builders.

use thiserror::Error;

use crate::config::ConfigError;

/// Main error type for build operations
#[derive(Debug, Error)]
pub enum BuildError {
    /// The orchestrator was given no module record
    #[error("Missing module record: an orchestrated build needs the module being analyzed")]
    MissingModule,

    /// The concurrent path exceeded its bound
    #[error("Build timed out after {timeout_ms}ms ({builder_count} builders scheduled)")]
    Timeout {
        timeout_ms: u64,
        builder_count: usize,
    },

    /// A builder task ended without reporting (panicked worker)
    #[error("Builder task lost: {0}")]
    TaskLost(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl BuildError {
    pub fn task_lost(msg: impl Into<String>) -> Self {
        BuildError::TaskLost(msg.into())
    }
}

/// Result type alias for build operations
pub type Result<T> = std::result::Result<T, BuildError>;
