use async_trait::async_trait;
use core_cache::evict_region;
use domain_projects::{ProjectDependents, ProjectError, ProjectResult};
use std::sync::Arc;
use tracing::instrument;

use crate::cache::TaskCache;
use crate::error::TaskResult;
use crate::repository::TaskRepository;

/// Removes a project's tasks and clears the task cache region.
///
/// Registered on `ProjectService` so deleting a project never leaves tasks behind.
pub struct TaskCascade<R: TaskRepository> {
    repository: Arc<R>,
    cache: TaskCache,
}

impl<R: TaskRepository> Clone for TaskCascade<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            cache: Arc::clone(&self.cache),
        }
    }
}

impl<R: TaskRepository> TaskCascade<R> {
    pub fn new(repository: Arc<R>, cache: TaskCache) -> Self {
        Self { repository, cache }
    }

    #[instrument(skip(self))]
    pub async fn delete_all(&self, project_id: i64) -> TaskResult<u64> {
        evict_region(
            self.cache.as_ref(),
            self.repository.delete_all_by_project(project_id),
        )
        .await
    }
}

#[async_trait]
impl<R: TaskRepository + 'static> ProjectDependents for TaskCascade<R> {
    async fn delete_project_dependents(&self, project_id: i64) -> ProjectResult<u64> {
        self.delete_all(project_id)
            .await
            .map_err(|err| ProjectError::Cascade {
                project_id,
                message: err.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{TASKS_REGION, TaskCacheEntry, TaskCacheKey};
    use crate::models::Task;
    use crate::repository::MockTaskRepository;
    use core_cache::CacheManager;
    use mockall::predicate::eq;
    use sea_orm::DbErr;

    #[tokio::test]
    async fn test_delete_all_clears_task_region() {
        let mut mock_repo = MockTaskRepository::new();
        mock_repo
            .expect_delete_all_by_project()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(3));

        let cache: TaskCache = CacheManager::default().region(TASKS_REGION);
        let key = TaskCacheKey::Task { project_id: 1, task_id: 1 };
        cache
            .insert(key, TaskCacheEntry::Task(Some(Task::new(1, "a"))), cache.generation())
            .await;

        let cascade = TaskCascade::new(Arc::new(mock_repo), Arc::clone(&cache));
        assert_eq!(cascade.delete_project_dependents(1).await.unwrap(), 3);
        assert!(cache.get(&key).await.is_none());
    }

    #[tokio::test]
    async fn test_storage_failure_becomes_cascade_error() {
        let mut mock_repo = MockTaskRepository::new();
        mock_repo
            .expect_delete_all_by_project()
            .returning(|_| Err(DbErr::Custom("disk full".into()).into()));

        let cascade = TaskCascade::new(
            Arc::new(mock_repo),
            CacheManager::default().region(TASKS_REGION),
        );

        let err = cascade.delete_project_dependents(7).await.unwrap_err();
        match err {
            ProjectError::Cascade { project_id, message } => {
                assert_eq!(project_id, 7);
                assert!(message.contains("disk full"));
            }
            other => panic!("expected cascade error, got {other:?}"),
        }
    }
}
