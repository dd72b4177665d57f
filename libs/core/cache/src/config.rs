use core_config::{env_parse_optional, env_parse_or_default, ConfigError, FromEnv};
use std::time::Duration;

/// Settings shared by every cache region
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheConfig {
    /// Upper bound on entries per region
    pub max_capacity: u64,
    /// Entries expire this long after insertion; `None` keeps them until evicted
    pub time_to_live: Option<Duration>,
    /// When false every region is a no-op and reads always hit storage
    pub enabled: bool,
}

impl CacheConfig {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: 10_000,
            time_to_live: None,
            enabled: true,
        }
    }
}

/// Environment variables:
/// - `CACHE_MAX_CAPACITY` (default 10000)
/// - `CACHE_TTL_SECS` (unset means no expiry)
/// - `CACHE_ENABLED` (default true)
impl FromEnv for CacheConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            max_capacity: env_parse_or_default("CACHE_MAX_CAPACITY", defaults.max_capacity)?,
            time_to_live: env_parse_optional::<u64>("CACHE_TTL_SECS")?.map(Duration::from_secs),
            enabled: env_parse_or_default("CACHE_ENABLED", defaults.enabled)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_config_from_env_defaults() {
        temp_env::with_vars_unset(
            ["CACHE_MAX_CAPACITY", "CACHE_TTL_SECS", "CACHE_ENABLED"],
            || {
                let config = CacheConfig::from_env().unwrap();
                assert_eq!(config, CacheConfig::default());
            },
        );
    }

    #[test]
    fn test_cache_config_from_env_custom() {
        temp_env::with_vars(
            [
                ("CACHE_MAX_CAPACITY", Some("500")),
                ("CACHE_TTL_SECS", Some("60")),
                ("CACHE_ENABLED", Some("false")),
            ],
            || {
                let config = CacheConfig::from_env().unwrap();
                assert_eq!(config.max_capacity, 500);
                assert_eq!(config.time_to_live, Some(Duration::from_secs(60)));
                assert!(!config.enabled);
            },
        );
    }

    #[test]
    fn test_cache_config_from_env_rejects_garbage() {
        temp_env::with_var("CACHE_TTL_SECS", Some("soon"), || {
            let err = CacheConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("CACHE_TTL_SECS"));
        });
    }
}
