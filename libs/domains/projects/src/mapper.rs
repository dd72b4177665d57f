//! Translation from request inputs to domain entities. Never touches storage.

use crate::models::{CreateProject, Project};

/// Unsaved project built from a creation input
pub fn to_project(input: CreateProject) -> Project {
    Project::new(input.name)
}
