use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Project entity
///
/// `id` and both timestamps are `None` until the project is first saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: Option<i64>,
    pub name: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Project {
    /// Unsaved project
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            created_at: None,
            updated_at: None,
        }
    }
}

/// DTO for creating a new project
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProject {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}

/// DTO for updating a project
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProject {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_project_validation() {
        assert!(CreateProject { name: "Alpha".into() }.validate().is_ok());
        assert!(CreateProject { name: String::new() }.validate().is_err());
        assert!(CreateProject { name: "x".repeat(256) }.validate().is_err());
    }

    #[test]
    fn test_update_project_validation() {
        assert!(UpdateProject { name: "x".repeat(255) }.validate().is_ok());
        assert!(UpdateProject { name: String::new() }.validate().is_err());
    }

    #[test]
    fn test_new_project_is_unsaved() {
        let project = Project::new("Alpha");
        assert!(project.id.is_none());
        assert!(project.created_at.is_none());
        assert!(project.updated_at.is_none());
    }

    #[test]
    fn test_project_deserializes_from_json() {
        let input: CreateProject = serde_json::from_str(r#"{"name":"Alpha"}"#).unwrap();
        assert_eq!(input.name, "Alpha");
    }
}
