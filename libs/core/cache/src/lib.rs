//! Cache Layer
//!
//! Named, process-wide key → result stores ("regions"), one per service, that are
//! invalidated as a unit whenever that service writes.
//!
//! ```text
//! read path:  read_through(region, key, load)   hit → cached value
//!                                               miss → load, store, return
//! write path: evict_region(region, write)       write, then invalidate_all
//! ```
//!
//! Services hold an `Arc<dyn CacheRegion<K, V>>` handed out by a [`CacheManager`],
//! so tests can swap in a [`NoopRegion`] or their own fake.
//!
//! ```rust,no_run
//! use core_cache::{CacheConfig, CacheManager, read_through};
//!
//! # async fn example() -> Result<(), std::io::Error> {
//! let caches = CacheManager::new(CacheConfig::default());
//! let region = caches.region::<u64, String>("greetings");
//!
//! let greeting = read_through(region.as_ref(), 1, || async {
//!     Ok::<_, std::io::Error>("hello".to_string())
//! })
//! .await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod manager;
pub mod moka_region;
pub mod policy;
pub mod region;

pub use config::CacheConfig;
pub use manager::CacheManager;
pub use moka_region::MokaRegion;
pub use policy::{evict_region, evict_region_if_present, read_through};
pub use region::{CacheRegion, NoopRegion};
