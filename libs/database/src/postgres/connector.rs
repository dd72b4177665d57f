use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use super::PostgresConfig;
use crate::common::{DatabaseError, DatabaseResult, RetryConfig, retry_with_backoff};

/// Open a connection pool with the given options
pub async fn connect_with_options(options: ConnectOptions) -> DatabaseResult<DatabaseConnection> {
    let db = Database::connect(options).await?;
    info!("Connected to PostgreSQL");
    Ok(db)
}

/// Open a connection pool from a [`PostgresConfig`]
pub async fn connect(config: PostgresConfig) -> DatabaseResult<DatabaseConnection> {
    connect_with_options(config.into_connect_options()).await
}

/// Open a connection pool, retrying with exponential backoff while the server
/// is unreachable (typical during container start-up).
///
/// ```ignore
/// use core_config::FromEnv;
/// use database::common::RetryConfig;
/// use database::postgres::{PostgresConfig, connect_with_retry};
///
/// let db = connect_with_retry(PostgresConfig::from_env()?, &RetryConfig::default()).await?;
/// ```
pub async fn connect_with_retry(
    config: PostgresConfig,
    retry: &RetryConfig,
) -> DatabaseResult<DatabaseConnection> {
    let options = config.into_connect_options();

    retry_with_backoff(|| connect_with_options(options.clone()), retry)
        .await
        .map_err(|e| DatabaseError::ConnectionFailed {
            attempts: retry.attempts(),
            message: e.to_string(),
        })
}
