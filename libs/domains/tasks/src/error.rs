use domain_projects::ProjectError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// The parent-project lookup failed
    #[error(transparent)]
    Project(#[from] ProjectError),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type TaskResult<T> = Result<T, TaskError>;
