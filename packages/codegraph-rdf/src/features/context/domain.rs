//! Context domain model

use ahash::AHashMap;
use std::sync::Arc;

use super::cache::IriCache;
use crate::config::{BuildConfig, ExpressionMode};

/// Build state threaded through every builder call
#[derive(Debug, Clone)]
pub struct Context {
    config: Arc<BuildConfig>,
    /// `None` until numbering is enabled; a missing table counts from zero
    counters: Option<AHashMap<String, u64>>,
    cache: Option<IriCache>,
    /// Module whose records are being built (resolves `__MODULE__`)
    current_module: Option<String>,
}

impl Context {
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config: Arc::new(config),
            counters: None,
            cache: None,
            current_module: None,
        }
    }

    /// Install a fresh counter table so numbering starts at `expr_0`
    pub fn with_expression_counter(mut self) -> Self {
        self.counters = Some(AHashMap::new());
        self
    }

    /// Install an empty structural dedup cache
    ///
    /// Only read by `ExpressionBuilder` calls that opt into sharing; the
    /// orchestrated build leaves it off.
    pub fn with_cache(mut self) -> Self {
        self.cache = Some(IriCache::new());
        self
    }

    pub fn with_module(mut self, module_name: impl Into<String>) -> Self {
        self.current_module = Some(module_name.into());
        self
    }

    // ------------------------------------------------------------------
    // Read access
    // ------------------------------------------------------------------

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    pub fn base_iri(&self) -> &str {
        &self.config.base_iri
    }

    pub fn file_path(&self) -> Option<&str> {
        self.config.file_path.as_deref()
    }

    pub fn current_module(&self) -> Option<&str> {
        self.current_module.as_deref()
    }

    pub fn expression_mode(&self) -> ExpressionMode {
        self.config.expression_mode()
    }

    pub fn is_dependency_file(&self) -> bool {
        self.config.is_dependency_file()
    }

    /// Next value `next_counter` would hand out for `namespace`
    pub fn peek_counter(&self, namespace: &str) -> u64 {
        self.counters
            .as_ref()
            .and_then(|c| c.get(namespace).copied())
            .unwrap_or(0)
    }

    pub fn cache(&self) -> Option<&IriCache> {
        self.cache.as_ref()
    }

    // ------------------------------------------------------------------
    // Threaded updates
    // ------------------------------------------------------------------

    /// Take the next counter value for `namespace`
    pub fn next_counter(mut self, namespace: &str) -> (u64, Self) {
        let counters = self.counters.get_or_insert_with(AHashMap::new);
        let slot = counters.entry(namespace.to_string()).or_insert(0);
        let n = *slot;
        *slot += 1;
        (n, self)
    }

    /// Detach the cache for a `get_or_create_iri` round-trip
    pub fn take_cache(mut self) -> (Option<IriCache>, Self) {
        let cache = self.cache.take();
        (cache, self)
    }

    pub fn with_cache_value(mut self, cache: IriCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Restart numbering for one namespace.
    ///
    /// Test control only: builds never call this, they rely on fresh
    /// contexts instead.
    pub fn reset_counter(mut self, namespace: &str) -> Self {
        if let Some(counters) = self.counters.as_mut() {
            counters.remove(namespace);
        }
        self
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new(BuildConfig::default())
    }
}
