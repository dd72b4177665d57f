use crate::models::{CreateTask, Task};

/// Unsaved task for `project_id` built from a creation input
pub fn to_task(project_id: i64, input: CreateTask) -> Task {
    Task::new(project_id, input.description)
}
