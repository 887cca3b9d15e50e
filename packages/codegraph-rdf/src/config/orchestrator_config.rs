//! Scheduling configuration for the orchestrator

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use super::error::{ConfigError, ConfigResult};
use crate::pipeline::BuilderKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionMode {
    /// Builders run one after another in `BuilderKind::ALL` order
    #[default]
    Sequential,
    /// Builders run as rayon tasks, bounded by `timeout_ms`
    Concurrent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrchestratorConfig {
    pub execution: ExecutionMode,
    /// Upper bound for the concurrent path
    pub timeout_ms: u64,
    /// Worker threads for the concurrent path (`None` = number of CPUs)
    pub max_threads: Option<usize>,
    /// Run only these builders (`None` = all)
    pub include: Option<Vec<BuilderKind>>,
    /// Never run these builders (applied after `include`)
    pub exclude: Vec<BuilderKind>,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            execution: ExecutionMode::Sequential,
            timeout_ms: Self::DEFAULT_TIMEOUT_MS,
            max_threads: None,
            include: None,
            exclude: Vec::new(),
        }
    }
}

impl OrchestratorConfig {
    pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
    const MAX_TIMEOUT_MS: u64 = 3_600_000;
    const MAX_THREADS: usize = 1024;

    pub fn sequential() -> Self {
        Self::default()
    }

    pub fn concurrent() -> Self {
        Self {
            execution: ExecutionMode::Concurrent,
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = timeout.as_millis() as u64;
        self
    }

    pub fn with_max_threads(mut self, threads: usize) -> Self {
        self.max_threads = Some(threads);
        self
    }

    pub fn include(mut self, kinds: impl IntoIterator<Item = BuilderKind>) -> Self {
        self.include = Some(kinds.into_iter().collect());
        self
    }

    pub fn exclude(mut self, kinds: impl IntoIterator<Item = BuilderKind>) -> Self {
        self.exclude.extend(kinds);
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Whether the filters let `kind` run
    pub fn is_selected(&self, kind: BuilderKind) -> bool {
        let included = self
            .include
            .as_ref()
            .map_or(true, |kinds| kinds.contains(&kind));
        included && !self.exclude.contains(&kind)
    }

    /// Selected builders in canonical order
    pub fn selected_builders(&self) -> Vec<BuilderKind> {
        BuilderKind::ALL
            .iter()
            .copied()
            .filter(|kind| self.is_selected(*kind))
            .collect()
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
        if self.timeout_ms == 0 || self.timeout_ms > Self::MAX_TIMEOUT_MS {
            return Err(ConfigError::range_with_hint(
                "timeout_ms",
                self.timeout_ms,
                1,
                Self::MAX_TIMEOUT_MS,
                "The concurrent path needs a positive timeout",
            ));
        }
        if let Some(threads) = self.max_threads {
            if threads == 0 || threads > Self::MAX_THREADS {
                return Err(ConfigError::range_with_hint(
                    "max_threads",
                    threads,
                    1,
                    Self::MAX_THREADS,
                    "Use at least one worker thread",
                ));
            }
        }
        Ok(())
    }
}
