use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Task entity, owned by exactly one project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Option<i64>,
    pub project_id: i64,
    pub description: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Unsaved task under `project_id`
    pub fn new(project_id: i64, description: impl Into<String>) -> Self {
        Self {
            id: None,
            project_id,
            description: description.into(),
            created_at: None,
            updated_at: None,
        }
    }
}

/// DTO for creating a new task
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTask {
    #[validate(length(min = 1, max = 255))]
    pub description: String,
}

/// DTO for updating a task
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateTask {
    #[validate(length(min = 1, max = 255))]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_input_validation() {
        assert!(CreateTask { description: "first".into() }.validate().is_ok());
        assert!(CreateTask { description: String::new() }.validate().is_err());
        assert!(UpdateTask { description: "y".repeat(256) }.validate().is_err());
    }

    #[test]
    fn test_task_serializes_with_parent() {
        let task = Task::new(1, "first");
        let json = serde_json::to_value(&task).unwrap();

        assert_eq!(json["project_id"], 1);
        assert_eq!(json["description"], "first");
        assert!(json["id"].is_null());
    }
}
