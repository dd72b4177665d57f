//! Keys and values of the `"tasks"` cache region.

use core_cache::CacheRegion;
use database::{Page, PageRequest};
use std::sync::Arc;

use crate::error::{TaskError, TaskResult};
use crate::models::Task;

pub const TASKS_REGION: &str = "tasks";

pub type TaskCache = Arc<dyn CacheRegion<TaskCacheKey, TaskCacheEntry>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskCacheKey {
    Page { project_id: i64, page: PageRequest },
    Task { project_id: i64, task_id: i64 },
}

#[derive(Debug, Clone)]
pub enum TaskCacheEntry {
    Page(Page<Task>),
    Task(Option<Task>),
}

impl TaskCacheEntry {
    pub fn into_page(self) -> TaskResult<Page<Task>> {
        match self {
            Self::Page(page) => Ok(page),
            Self::Task(_) => Err(TaskError::Internal(
                "task cache returned a task for a page key".to_string(),
            )),
        }
    }

    pub fn into_task(self) -> TaskResult<Option<Task>> {
        match self {
            Self::Task(task) => Ok(task),
            Self::Page(_) => Err(TaskError::Internal(
                "task cache returned a page for a task key".to_string(),
            )),
        }
    }
}
