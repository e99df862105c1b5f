//! Multi-source resolver
//!
//! Sources are tried strictly in order, one attempt each, every attempt
//! bounded by the configured timeout. The first source returning data
//! wins; errors, empty answers and timeouts all fall through to the next
//! source. When every source has failed the [`Fallback`] supplies seeded
//! data for the key, or a sentinel record when there is no seed.

use std::fmt::Display;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::future::join_all;
use serde::Serialize;

use crate::cache::TtlCache;
use crate::config::{DEFAULT_TIMEOUT, LOCAL_CACHE_TTL};
use crate::error::ClientResult;

/// One external provider for records of type `T` keyed by `K`
#[async_trait]
pub trait Source<K, T>: Send + Sync {
    /// Provider name reported in [`DataSource::Api`]
    fn name(&self) -> &'static str;

    /// `Ok(None)` when the provider has nothing usable for `key`
    async fn fetch(&self, key: &K) -> ClientResult<Option<T>>;
}

/// Local data used once every source has failed
pub trait Fallback<K, T>: Send + Sync {
    fn seed(&self, key: &K) -> Option<T>;
    fn sentinel(&self, key: &K) -> T;
}

/// Where a resolved value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DataSource {
    Api { provider: &'static str },
    /// `seeded` is false for the sentinel record
    Local { seeded: bool },
}

impl DataSource {
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolved<T> {
    pub data: T,
    pub source: DataSource,
}

pub struct Resolver<K, T> {
    entity: &'static str,
    sources: Vec<Arc<dyn Source<K, T>>>,
    fallback: Arc<dyn Fallback<K, T>>,
    timeout: Duration,
    cache: Option<TtlCache<Resolved<T>>>,
    local_ttl: Duration,
}

impl<K, T> Resolver<K, T>
where
    K: Display + Sync,
    T: Clone + Send + Sync,
{
    /// `entity` names the record type in logs
    pub fn new(entity: &'static str, fallback: Arc<dyn Fallback<K, T>>) -> Self {
        Self {
            entity,
            sources: Vec::new(),
            fallback,
            timeout: DEFAULT_TIMEOUT,
            cache: None,
            local_ttl: LOCAL_CACHE_TTL,
        }
    }

    /// Append a source after the ones already registered
    pub fn with_source(mut self, source: Arc<dyn Source<K, T>>) -> Self {
        self.sources.push(source);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Cache resolved values by the key's `Display` form
    ///
    /// Source answers live for `ttl`; local fallbacks for at most
    /// [`LOCAL_CACHE_TTL`].
    pub fn with_cache(mut self, ttl: Duration) -> Self {
        self.cache = Some(TtlCache::new(ttl));
        self.local_ttl = ttl.min(LOCAL_CACHE_TTL);
        self
    }

    pub fn source_names(&self) -> Vec<&'static str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Drop cached values
    pub fn invalidate(&self, key: Option<&K>) {
        if let Some(cache) = &self.cache {
            let key = key.map(|k| k.to_string());
            cache.clear(key.as_deref());
        }
    }

    pub async fn resolve(&self, key: &K) -> Resolved<T> {
        let cache_key = key.to_string();
        if let Some(cache) = &self.cache
            && let Some(hit) = cache.get(&cache_key)
        {
            tracing::debug!(entity = self.entity, key = %cache_key, "Resolver cache hit");
            return hit;
        }

        let resolved = self.resolve_uncached(key).await;
        if let Some(cache) = &self.cache {
            if resolved.source.is_api() {
                cache.set(cache_key, resolved.clone());
            } else {
                cache.set_with_ttl(cache_key, resolved.clone(), self.local_ttl);
            }
        }
        resolved
    }

    /// Resolve every key concurrently, each through the sequential chain
    pub async fn resolve_batch(&self, keys: &[K]) -> Vec<Resolved<T>> {
        tracing::debug!(entity = self.entity, count = keys.len(), "Resolving batch");
        join_all(keys.iter().map(|key| self.resolve(key))).await
    }

    async fn resolve_uncached(&self, key: &K) -> Resolved<T> {
        for source in &self.sources {
            let provider = source.name();
            match tokio::time::timeout(self.timeout, source.fetch(key)).await {
                Ok(Ok(Some(data))) => {
                    tracing::info!(entity = self.entity, key = %key, provider, "Resolved from source");
                    return Resolved {
                        data,
                        source: DataSource::Api { provider },
                    };
                }
                Ok(Ok(None)) => {
                    tracing::debug!(entity = self.entity, key = %key, provider, "Source had no data");
                }
                Ok(Err(e)) => {
                    tracing::warn!(entity = self.entity, key = %key, provider, error = %e, "Source failed");
                }
                Err(_) => {
                    tracing::warn!(
                        entity = self.entity,
                        key = %key,
                        provider,
                        timeout_ms = self.timeout.as_millis() as u64,
                        "Source timed out"
                    );
                }
            }
        }

        match self.fallback.seed(key) {
            Some(data) => {
                tracing::info!(entity = self.entity, key = %key, "Using seeded local data");
                Resolved {
                    data,
                    source: DataSource::Local { seeded: true },
                }
            }
            None => {
                tracing::info!(entity = self.entity, key = %key, "No seed, using sentinel");
                Resolved {
                    data: self.fallback.sentinel(key),
                    source: DataSource::Local { seeded: false },
                }
            }
        }
    }
}
