//! Per-pass build configuration

use serde::{Deserialize, Serialize};
use std::path::{Component, Path};

use super::error::{ConfigError, ConfigResult};

/// How much of an expression tree to extract when extraction is on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpressionDetail {
    /// Absent expressions are skipped
    #[default]
    Reduced,
    /// Absent expressions become explicit nil literals
    Full,
}

/// Effective expression extraction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpressionMode {
    Disabled,
    Reduced,
    Full,
}

/// Directory name that marks third-party sources
const DEPENDENCY_DIR: &str = "deps";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Namespace every identifier is minted under; ends in `/` or `#`
    pub base_iri: String,
    /// File the records were extracted from
    pub file_path: Option<String>,
    pub include_expressions: bool,
    pub expression_detail: ExpressionDetail,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            base_iri: Self::DEFAULT_BASE_IRI.to_string(),
            file_path: None,
            include_expressions: false,
            expression_detail: ExpressionDetail::Reduced,
        }
    }
}

impl BuildConfig {
    pub const DEFAULT_BASE_IRI: &'static str = "https://example.org/code#";

    pub fn new(base_iri: impl Into<String>) -> Self {
        Self {
            base_iri: base_iri.into(),
            ..Default::default()
        }
    }

    pub fn with_file_path(mut self, file_path: impl Into<String>) -> Self {
        self.file_path = Some(file_path.into());
        self
    }

    /// Turn expression extraction on at the given detail level
    pub fn with_expressions(mut self, detail: ExpressionDetail) -> Self {
        self.include_expressions = true;
        self.expression_detail = detail;
        self
    }

    /// Flag + detail folded into one mode; the file boundary is separate
    pub fn expression_mode(&self) -> ExpressionMode {
        match (self.include_expressions, self.expression_detail) {
            (false, _) => ExpressionMode::Disabled,
            (true, ExpressionDetail::Reduced) => ExpressionMode::Reduced,
            (true, ExpressionDetail::Full) => ExpressionMode::Full,
        }
    }

    /// True when the current file lives under a dependency directory
    pub fn is_dependency_file(&self) -> bool {
        self.file_path
            .as_deref()
            .map(is_dependency_path)
            .unwrap_or(false)
    }

    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.base_iri.is_empty() {
            return Err(ConfigError::InvalidIri {
                value: self.base_iri.clone(),
                hint: "Base IRI must not be empty".to_string(),
            });
        }
        if !self.base_iri.ends_with('/') && !self.base_iri.ends_with('#') {
            return Err(ConfigError::InvalidIri {
                value: self.base_iri.clone(),
                hint: "Base IRI must end with '/' or '#'".to_string(),
            });
        }
        if self.base_iri.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidIri {
                value: self.base_iri.clone(),
                hint: "Base IRI must not contain whitespace".to_string(),
            });
        }
        Ok(())
    }
}

/// Any path with a `deps` component is outside the project boundary
pub fn is_dependency_path(path: &str) -> bool {
    Path::new(path)
        .components()
        .any(|c| matches!(c, Component::Normal(name) if name == DEPENDENCY_DIR))
}
