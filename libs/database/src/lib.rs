//! Storage infrastructure shared by the domain crates
//!
//! - [`common`]: pagination types, timestamp rules, connection retry, [`DatabaseError`]
//! - [`postgres`]: PostgreSQL pool configuration and connection (feature `postgres`)
//!
//! # Features
//!
//! - `postgres` (default) - PostgreSQL support with SeaORM
//! - `config` (default) - `core_config::FromEnv` for `postgres::PostgresConfig`
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::common::RetryConfig;
//! use database::postgres::{PostgresConfig, connect_with_retry};
//!
//! let db = connect_with_retry(PostgresConfig::from_env()?, &RetryConfig::default()).await?;
//! ```

pub mod common;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult, Page, PageRequest};
