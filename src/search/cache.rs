use std::hash::Hash;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};

use lru::LruCache;
use parking_lot::Mutex;
use serde::Serialize;

/// Bounded least-recently-used memo table shared across threads
///
/// A capacity of zero disables caching: every lookup misses and nothing
/// is stored.
pub struct QueryCache<K, V> {
    cache: Option<Mutex<LruCache<K, V>>>,
    capacity: usize,
    hits: AtomicU64,
    misses: AtomicU64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
    pub capacity: usize,
    #[serde(rename = "hitRate")]
    pub hit_rate: f64,
}

impl<K: Hash + Eq, V: Clone> QueryCache<K, V> {
    pub fn new(capacity: usize) -> Self {
        Self {
            cache: NonZeroUsize::new(capacity).map(|cap| Mutex::new(LruCache::new(cap))),
            capacity,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Look up a key, refreshing its recency on a hit
    pub fn get(&self, key: &K) -> Option<V> {
        let value = self
            .cache
            .as_ref()
            .and_then(|cache| cache.lock().get(key).cloned());

        match value {
            Some(_) => self.hits.fetch_add(1, Ordering::Relaxed),
            None => self.misses.fetch_add(1, Ordering::Relaxed),
        };
        value
    }

    /// Insert a value, evicting the least recently used entry when full
    pub fn put(&self, key: K, value: V) {
        if let Some(cache) = &self.cache {
            cache.lock().put(key, value);
        }
    }

    pub fn len(&self) -> usize {
        self.cache.as_ref().map_or(0, |cache| cache.lock().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let total = hits + misses;
        let hit_rate = if total > 0 { hits as f64 / total as f64 } else { 0.0 };

        CacheStats {
            hits,
            misses,
            size: self.len(),
            capacity: self.capacity,
            hit_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_and_miss_counting() {
        let cache: QueryCache<String, u32> = QueryCache::new(4);

        assert_eq!(cache.get(&"a".to_string()), None);
        cache.put("a".to_string(), 1);
        assert_eq!(cache.get(&"a".to_string()), Some(1));

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.size, 1);
        assert_eq!(stats.capacity, 4);
        assert!((stats.hit_rate - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_least_recently_used_is_evicted() {
        let cache: QueryCache<&str, u32> = QueryCache::new(2);
        cache.put("a", 1);
        cache.put("b", 2);

        // Touch "a" so "b" becomes the eviction candidate
        assert_eq!(cache.get(&"a"), Some(1));
        cache.put("c", 3);

        assert_eq!(cache.get(&"b"), None);
        assert_eq!(cache.get(&"a"), Some(1));
        assert_eq!(cache.get(&"c"), Some(3));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_zero_capacity_disables_caching() {
        let cache: QueryCache<&str, u32> = QueryCache::new(0);
        cache.put("a", 1);

        assert_eq!(cache.get(&"a"), None);
        assert!(cache.is_empty());
    }
}
