use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Failed to remove dependents of project {project_id}: {message}")]
    Cascade { project_id: i64, message: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ProjectResult<T> = Result<T, ProjectError>;
