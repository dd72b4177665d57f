//! PostgreSQL connection management

mod config;
mod connector;

pub use config::PostgresConfig;
pub use connector::{connect, connect_with_options, connect_with_retry};

// Re-export SeaORM types for convenience
pub use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
