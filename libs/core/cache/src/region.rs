use async_trait::async_trait;
use std::marker::PhantomData;

/// A named group of cached results invalidated as a unit.
///
/// Every [`invalidate_all`](CacheRegion::invalidate_all) starts a new generation.
/// Readers note [`generation`](CacheRegion::generation) before loading from storage
/// and pass it to [`insert`](CacheRegion::insert); a value loaded before an
/// invalidation is then dropped instead of resurrecting pre-write data.
#[async_trait]
pub trait CacheRegion<K, V>: Send + Sync
where
    K: Send + Sync + 'static,
    V: Send + Sync + 'static,
{
    /// Region name used in logs
    fn name(&self) -> &str;

    /// Current invalidation generation
    fn generation(&self) -> u64;

    async fn get(&self, key: &K) -> Option<V>;

    /// Store `value` if the region has not been invalidated since `generation`.
    ///
    /// Returns whether the value was kept.
    async fn insert(&self, key: K, value: V, generation: u64) -> bool;

    /// Drop every entry in the region
    async fn invalidate_all(&self);
}

/// Region that never stores anything; every read is a miss.
#[derive(Debug)]
pub struct NoopRegion<K, V> {
    name: String,
    _marker: PhantomData<fn() -> (K, V)>,
}

impl<K, V> NoopRegion<K, V> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            _marker: PhantomData,
        }
    }
}

#[async_trait]
impl<K, V> CacheRegion<K, V> for NoopRegion<K, V>
where
    K: Send + Sync + 'static,
    V: Send + Sync + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn generation(&self) -> u64 {
        0
    }

    async fn get(&self, _key: &K) -> Option<V> {
        None
    }

    async fn insert(&self, _key: K, _value: V, _generation: u64) -> bool {
        false
    }

    async fn invalidate_all(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_noop_region_never_hits() {
        let region: NoopRegion<u32, String> = NoopRegion::new("noop");
        assert!(!region.insert(1, "one".to_string(), region.generation()).await);
        assert_eq!(region.get(&1).await, None);
        assert_eq!(region.name(), "noop");
    }
}
