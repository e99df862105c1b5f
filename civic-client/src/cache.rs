//! In-memory TTL cache

use std::time::Duration;

use dashmap::DashMap;
use tokio::time::Instant;

use crate::config::DEFAULT_CACHE_TTL;

struct Entry<V> {
    data: V,
    stored_at: Instant,
    ttl: Duration,
}

impl<V> Entry<V> {
    fn is_expired(&self) -> bool {
        self.stored_at.elapsed() > self.ttl
    }
}

/// Key/value cache whose entries expire after a per-entry TTL
///
/// Expired entries are evicted lazily on read.
pub struct TtlCache<V> {
    entries: DashMap<String, Entry<V>>,
    default_ttl: Duration,
}

impl<V: Clone> TtlCache<V> {
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            default_ttl,
        }
    }

    pub fn set(&self, key: impl Into<String>, data: V) {
        self.set_with_ttl(key, data, self.default_ttl);
    }

    pub fn set_with_ttl(&self, key: impl Into<String>, data: V, ttl: Duration) {
        self.entries.insert(
            key.into(),
            Entry {
                data,
                stored_at: Instant::now(),
                ttl,
            },
        );
    }

    pub fn get(&self, key: &str) -> Option<V> {
        if self
            .entries
            .remove_if(key, |_, entry| entry.is_expired())
            .is_some()
        {
            return None;
        }
        self.entries.get(key).map(|entry| entry.data.clone())
    }

    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Drop one key, or everything when `key` is `None`
    pub fn clear(&self, key: Option<&str>) {
        match key {
            Some(key) => {
                self.entries.remove(key);
            }
            None => self.entries.clear(),
        }
    }

    /// Stored entries, expired ones included until they are read
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Clone> Default for TtlCache<V> {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_TTL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_entry_expires_after_ttl() {
        let cache = TtlCache::new(Duration::from_secs(60));
        cache.set("villages", 10);
        assert_eq!(cache.get("villages"), Some(10));

        tokio::time::advance(Duration::from_secs(60)).await;
        assert!(cache.has("villages"));

        tokio::time::advance(Duration::from_secs(1)).await;
        assert_eq!(cache.get("villages"), None);
        assert_eq!(cache.len(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_per_entry_ttl() {
        let cache = TtlCache::default();
        cache.set_with_ttl("short", "a", Duration::from_secs(1));
        cache.set("long", "b");

        tokio::time::advance(Duration::from_secs(2)).await;
        assert!(!cache.has("short"));
        assert_eq!(cache.get("long"), Some("b"));
    }

    #[tokio::test]
    async fn test_clear() {
        let cache = TtlCache::default();
        cache.set("a", 1);
        cache.set("b", 2);
        cache.clear(Some("a"));
        assert!(!cache.has("a"));
        assert_eq!(cache.len(), 1);
        cache.clear(None);
        assert!(cache.is_empty());
    }
}
