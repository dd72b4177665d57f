//! Caching policy applied by services around their storage calls.

use std::future::Future;
use tracing::trace;

use crate::region::CacheRegion;

/// Return the cached value for `key`, or run `load` and cache its result.
///
/// Errors from `load` are returned as-is and nothing is cached.
pub async fn read_through<R, K, V, E, F, Fut>(region: &R, key: K, load: F) -> Result<V, E>
where
    R: CacheRegion<K, V> + ?Sized,
    K: std::fmt::Debug + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<V, E>>,
{
    if let Some(hit) = region.get(&key).await {
        trace!(region = region.name(), ?key, "Cache hit");
        return Ok(hit);
    }

    trace!(region = region.name(), ?key, "Cache miss");
    let generation = region.generation();
    let value = load().await?;
    region.insert(key, value.clone(), generation).await;
    Ok(value)
}

/// Run `write`, then invalidate the whole region.
///
/// The region is cleared only when the write succeeds.
pub async fn evict_region<R, K, V, T, E, Fut>(region: &R, write: Fut) -> Result<T, E>
where
    R: CacheRegion<K, V> + ?Sized,
    K: Send + Sync + 'static,
    V: Send + Sync + 'static,
    Fut: Future<Output = Result<T, E>>,
{
    let result = write.await?;
    region.invalidate_all().await;
    trace!(region = region.name(), "Region invalidated after write");
    Ok(result)
}

/// Like [`evict_region`], but only invalidates when the write produced a value.
pub async fn evict_region_if_present<R, K, V, T, E, Fut>(
    region: &R,
    write: Fut,
) -> Result<Option<T>, E>
where
    R: CacheRegion<K, V> + ?Sized,
    K: Send + Sync + 'static,
    V: Send + Sync + 'static,
    Fut: Future<Output = Result<Option<T>, E>>,
{
    let result = write.await?;
    if result.is_some() {
        region.invalidate_all().await;
        trace!(region = region.name(), "Region invalidated after write");
    }
    Ok(result)
}
