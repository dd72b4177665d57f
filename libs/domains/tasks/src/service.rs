use core_cache::{evict_region, read_through};
use database::{Page, PageRequest};
use domain_projects::{ProjectRepository, ProjectService};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::cache::{TaskCache, TaskCacheEntry, TaskCacheKey};
use crate::cascade::TaskCascade;
use crate::error::{TaskError, TaskResult};
use crate::mapper;
use crate::models::{CreateTask, Task, UpdateTask};
use crate::repository::TaskRepository;

/// Service layer for Task business logic
///
/// Writes that need a parent project (`create_task`, `update_task`) return
/// `None` without touching storage or the cache when the project is missing.
pub struct TaskService<P: ProjectRepository, R: TaskRepository> {
    repository: Arc<R>,
    projects: ProjectService<P>,
    cache: TaskCache,
    cascade: TaskCascade<R>,
}

impl<P: ProjectRepository, R: TaskRepository> Clone for TaskService<P, R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            projects: self.projects.clone(),
            cache: Arc::clone(&self.cache),
            cascade: self.cascade.clone(),
        }
    }
}

impl<P: ProjectRepository, R: TaskRepository> TaskService<P, R> {
    pub fn new(repository: Arc<R>, projects: ProjectService<P>, cache: TaskCache) -> Self {
        let cascade = TaskCascade::new(Arc::clone(&repository), Arc::clone(&cache));
        Self {
            repository,
            projects,
            cache,
            cascade,
        }
    }

    #[instrument(skip(self), fields(page = page.page(), size = page.size()))]
    pub async fn list_tasks(&self, project_id: i64, page: PageRequest) -> TaskResult<Page<Task>> {
        let key = TaskCacheKey::Page { project_id, page };
        let entry = read_through(self.cache.as_ref(), key, || async move {
            let (content, total) = tokio::try_join!(
                self.repository.find_page(project_id, page),
                self.repository.count(project_id)
            )?;
            Ok::<_, TaskError>(TaskCacheEntry::Page(Page::new(content, page, total)))
        })
        .await?;

        entry.into_page()
    }

    #[instrument(skip(self))]
    pub async fn get_task(&self, project_id: i64, task_id: i64) -> TaskResult<Option<Task>> {
        let key = TaskCacheKey::Task { project_id, task_id };
        let entry = read_through(self.cache.as_ref(), key, || async move {
            let task = self.repository.find_one(project_id, task_id).await?;
            Ok::<_, TaskError>(TaskCacheEntry::Task(task))
        })
        .await?;

        entry.into_task()
    }

    #[instrument(skip(self, input))]
    pub async fn create_task(&self, project_id: i64, input: CreateTask) -> TaskResult<Option<Task>> {
        debug!(project_id, "Creating task");

        if !self.projects.project_exists(project_id).await? {
            debug!(project_id, reason = "parent project missing", "Task not created");
            return Ok(None);
        }

        let task = mapper::to_task(project_id, input);
        let saved = evict_region(self.cache.as_ref(), self.repository.save(task)).await?;
        Ok(Some(saved))
    }

    #[instrument(skip(self, input))]
    pub async fn update_task(
        &self,
        project_id: i64,
        task_id: i64,
        input: UpdateTask,
    ) -> TaskResult<Option<Task>> {
        if !self.projects.project_exists(project_id).await? {
            debug!(project_id, task_id, reason = "parent project missing", "Task not updated");
            return Ok(None);
        }

        let Some(mut task) = self.repository.find_one(project_id, task_id).await? else {
            debug!(project_id, task_id, reason = "task missing", "Task not updated");
            return Ok(None);
        };

        task.description = input.description;
        let saved = evict_region(self.cache.as_ref(), self.repository.save(task)).await?;
        Ok(Some(saved))
    }

    /// `false` when no such task exists under the project
    #[instrument(skip(self))]
    pub async fn delete_task(&self, project_id: i64, task_id: i64) -> TaskResult<bool> {
        evict_region(
            self.cache.as_ref(),
            self.repository.delete_one(project_id, task_id),
        )
        .await
    }

    /// Remove every task of a project; the same path `delete_project` takes
    pub async fn delete_project_tasks(&self, project_id: i64) -> TaskResult<u64> {
        self.cascade.delete_all(project_id).await
    }
}
