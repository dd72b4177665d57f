use async_trait::async_trait;
use moka::future::Cache;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::trace;

use crate::config::CacheConfig;
use crate::region::CacheRegion;

/// [`CacheRegion`] backed by a `moka::future::Cache`
pub struct MokaRegion<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    name: String,
    cache: Cache<K, V>,
    generation: AtomicU64,
}

impl<K, V> MokaRegion<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    pub fn new(name: impl Into<String>, config: &CacheConfig) -> Self {
        let name = name.into();
        let mut builder = Cache::builder().name(&name).max_capacity(config.max_capacity);

        if let Some(ttl) = config.time_to_live {
            builder = builder.time_to_live(ttl);
        }

        Self {
            name,
            cache: builder.build(),
            generation: AtomicU64::new(0),
        }
    }
}

#[async_trait]
impl<K, V> CacheRegion<K, V> for MokaRegion<K, V>
where
    K: Debug + Clone + Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    async fn get(&self, key: &K) -> Option<V> {
        self.cache.get(key).await
    }

    async fn insert(&self, key: K, value: V, generation: u64) -> bool {
        if self.generation() != generation {
            trace!(region = %self.name, ?key, "Dropping value loaded before invalidation");
            return false;
        }

        self.cache.insert(key.clone(), value).await;

        // An invalidation may have landed between the check and the insert
        if self.generation() != generation {
            self.cache.invalidate(&key).await;
            trace!(region = %self.name, ?key, "Invalidated during insert, entry removed");
            return false;
        }

        true
    }

    async fn invalidate_all(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
        self.cache.invalidate_all();
    }
}

impl<K, V> Debug for MokaRegion<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaRegion")
            .field("name", &self.name)
            .field("generation", &self.generation.load(Ordering::Relaxed))
            .field("entry_count", &self.cache.entry_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region() -> MokaRegion<&'static str, u32> {
        MokaRegion::new("test", &CacheConfig::default())
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let region = region();
        assert!(region.insert("a", 1, region.generation()).await);
        assert_eq!(region.get(&"a").await, Some(1));
    }

    #[tokio::test]
    async fn test_invalidate_all_clears_every_key() {
        let region = region();
        let generation = region.generation();
        region.insert("a", 1, generation).await;
        region.insert("b", 2, generation).await;

        region.invalidate_all().await;

        assert_eq!(region.get(&"a").await, None);
        assert_eq!(region.get(&"b").await, None);
        assert_eq!(region.generation(), generation + 1);
    }

    #[tokio::test]
    async fn test_stale_generation_is_rejected() {
        let region = region();
        let observed = region.generation();

        region.invalidate_all().await;

        assert!(!region.insert("a", 1, observed).await);
        assert_eq!(region.get(&"a").await, None);
    }
}
