use async_trait::async_trait;
use database::PageRequest;
use database::common::{next_update_timestamp, now_micros};
use sea_orm::DbErr;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::TaskResult;
use crate::models::Task;

/// Repository trait for Task persistence
///
/// Every lookup is scoped by project: a task id that exists under a different
/// project behaves exactly like one that does not exist.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// One page of a project's tasks in ascending id order
    async fn find_page(&self, project_id: i64, page: PageRequest) -> TaskResult<Vec<Task>>;

    /// Count tasks by project
    async fn count(&self, project_id: i64) -> TaskResult<u64>;

    async fn find_one(&self, project_id: i64, task_id: i64) -> TaskResult<Option<Task>>;

    /// Insert when `task.id` is `None`, otherwise update the description.
    async fn save(&self, task: Task) -> TaskResult<Task>;

    async fn delete_one(&self, project_id: i64, task_id: i64) -> TaskResult<bool>;

    /// Delete every task of a project, returning the number removed
    async fn delete_all_by_project(&self, project_id: i64) -> TaskResult<u64>;
}

#[derive(Debug, Default)]
struct TaskTable {
    rows: BTreeMap<i64, Task>,
    last_id: i64,
}

/// In-memory implementation of TaskRepository (for development/testing)
///
/// Does not check that `project_id` refers to a stored project.
#[derive(Debug, Default, Clone)]
pub struct InMemoryTaskRepository {
    table: Arc<RwLock<TaskTable>>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn find_page(&self, project_id: i64, page: PageRequest) -> TaskResult<Vec<Task>> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .filter(|task| task.project_id == project_id)
            .skip(page.offset() as usize)
            .take(page.size() as usize)
            .cloned()
            .collect())
    }

    async fn count(&self, project_id: i64) -> TaskResult<u64> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .filter(|task| task.project_id == project_id)
            .count() as u64)
    }

    async fn find_one(&self, project_id: i64, task_id: i64) -> TaskResult<Option<Task>> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .get(&task_id)
            .filter(|task| task.project_id == project_id)
            .cloned())
    }

    async fn save(&self, mut task: Task) -> TaskResult<Task> {
        let mut table = self.table.write().await;

        match task.id {
            None => {
                table.last_id += 1;
                let id = table.last_id;
                let now = now_micros();

                task.id = Some(id);
                task.created_at = Some(now);
                task.updated_at = Some(now);
                table.rows.insert(id, task.clone());

                tracing::info!(task_id = id, project_id = task.project_id, "Created task");
                Ok(task)
            }
            Some(id) => {
                let stored = table.rows.get_mut(&id).ok_or(DbErr::RecordNotUpdated)?;
                stored.description = task.description;
                stored.updated_at = Some(next_update_timestamp(stored.updated_at));

                tracing::info!(task_id = id, "Updated task");
                Ok(stored.clone())
            }
        }
    }

    async fn delete_one(&self, project_id: i64, task_id: i64) -> TaskResult<bool> {
        let mut table = self.table.write().await;

        let owned = table
            .rows
            .get(&task_id)
            .is_some_and(|task| task.project_id == project_id);
        if owned {
            table.rows.remove(&task_id);
            tracing::info!(task_id, project_id, "Deleted task");
        }
        Ok(owned)
    }

    async fn delete_all_by_project(&self, project_id: i64) -> TaskResult<u64> {
        let mut table = self.table.write().await;

        let before = table.rows.len();
        table.rows.retain(|_, task| task.project_id != project_id);
        let removed = (before - table.rows.len()) as u64;

        tracing::info!(project_id, removed, "Deleted project tasks");
        Ok(removed)
    }
}
