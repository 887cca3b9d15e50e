//! Structural dedup cache

use ahash::AHashMap;

use crate::shared::models::Iri;

/// Fingerprint → identifier
#[derive(Debug, Clone, Default)]
pub struct IriCache {
    entries: AHashMap<String, Iri>,
}

impl IriCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Iri> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Memoize `generator` under `key`
///
/// A missing cache behaves as an empty one. The generator only runs on a
/// miss, so a hit never mints anything.
pub fn get_or_create_iri<F>(cache: Option<IriCache>, key: &str, generator: F) -> (Iri, IriCache)
where
    F: FnOnce() -> Iri,
{
    let mut cache = cache.unwrap_or_default();
    if let Some(existing) = cache.entries.get(key) {
        return (existing.clone(), cache);
    }
    let iri = generator();
    cache.entries.insert(key.to_string(), iri.clone());
    (iri, cache)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_key_reuses_first_identifier() {
        let (first, cache) = get_or_create_iri(None, "k", || Iri::new("http://x/1"));
        let (second, cache) = get_or_create_iri(Some(cache), "k", || Iri::new("http://x/2"));
        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_different_key_new_identifier() {
        let (first, cache) = get_or_create_iri(None, "k1", || Iri::new("http://x/1"));
        let (second, cache) = get_or_create_iri(Some(cache), "k2", || Iri::new("http://x/2"));
        assert_ne!(first, second);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_hit_does_not_run_generator() {
        let (_, cache) = get_or_create_iri(None, "k", || Iri::new("http://x/1"));
        let (_, _) = get_or_create_iri(Some(cache), "k", || panic!("generator ran on a hit"));
    }
}
