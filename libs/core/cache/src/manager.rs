use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;
use tracing::debug;

use crate::config::CacheConfig;
use crate::moka_region::MokaRegion;
use crate::region::{CacheRegion, NoopRegion};

/// Hands out cache regions built from one [`CacheConfig`].
///
/// Each call creates a fresh region; services are expected to ask once at
/// construction time and keep the `Arc`.
#[derive(Clone, Debug, Default)]
pub struct CacheManager {
    config: CacheConfig,
}

impl CacheManager {
    pub fn new(config: CacheConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    pub fn region<K, V>(&self, name: &str) -> Arc<dyn CacheRegion<K, V>>
    where
        K: Debug + Clone + Hash + Eq + Send + Sync + 'static,
        V: Clone + Send + Sync + 'static,
    {
        if !self.config.enabled {
            debug!(region = name, "Caching disabled, using no-op region");
            return Arc::new(NoopRegion::new(name));
        }

        debug!(
            region = name,
            max_capacity = self.config.max_capacity,
            ttl = ?self.config.time_to_live,
            "Creating cache region"
        );
        Arc::new(MokaRegion::new(name, &self.config))
    }
}
