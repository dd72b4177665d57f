use async_trait::async_trait;
use core_cache::{evict_region, read_through};
use database::{Page, PageRequest};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::cache::{ProjectCache, ProjectCacheEntry, ProjectCacheKey};
use crate::error::{ProjectError, ProjectResult};
use crate::mapper;
use crate::models::{CreateProject, Project, UpdateProject};
use crate::repository::ProjectRepository;

/// Records owned by a project that must go before the project does.
///
/// Implemented outside this crate (tasks) and passed to [`ProjectService::new`].
#[async_trait]
pub trait ProjectDependents: Send + Sync {
    /// Remove every dependent of `project_id`, returning how many were removed
    async fn delete_project_dependents(&self, project_id: i64) -> ProjectResult<u64>;
}

/// Service layer for Project business logic
pub struct ProjectService<R: ProjectRepository> {
    repository: Arc<R>,
    cache: ProjectCache,
    dependents: Option<Arc<dyn ProjectDependents>>,
}

impl<R: ProjectRepository> Clone for ProjectService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            cache: Arc::clone(&self.cache),
            dependents: self.dependents.clone(),
        }
    }
}

impl<R: ProjectRepository> ProjectService<R> {
    /// `dependents` runs before every project row is deleted
    pub fn new(
        repository: Arc<R>,
        cache: ProjectCache,
        dependents: Arc<dyn ProjectDependents>,
    ) -> Self {
        Self {
            repository,
            cache,
            dependents: Some(dependents),
        }
    }

    /// Service for a deployment with nothing stored under projects.
    ///
    /// `delete_project` removes only the project row and logs a warning.
    pub fn without_dependents(repository: Arc<R>, cache: ProjectCache) -> Self {
        Self {
            repository,
            cache,
            dependents: None,
        }
    }

    /// List projects page by page, cached per `(page, size)`
    #[instrument(skip(self), fields(page = page.page(), size = page.size()))]
    pub async fn list_projects(&self, page: PageRequest) -> ProjectResult<Page<Project>> {
        let entry = read_through(self.cache.as_ref(), ProjectCacheKey::Page(page), || async move {
            let (content, total) =
                tokio::try_join!(self.repository.find_page(page), self.repository.count())?;
            Ok::<_, ProjectError>(ProjectCacheEntry::Page(Page::new(content, page, total)))
        })
        .await?;

        entry.into_page()
    }

    /// Get a project by ID; a miss is cached as well
    #[instrument(skip(self), fields(project_id = id))]
    pub async fn get_project(&self, id: i64) -> ProjectResult<Option<Project>> {
        let entry = read_through(self.cache.as_ref(), ProjectCacheKey::Project(id), || async move {
            let project = self.repository.find_by_id(id).await?;
            Ok::<_, ProjectError>(ProjectCacheEntry::Project(project))
        })
        .await?;

        entry.into_project()
    }

    #[instrument(skip(self, input), fields(project_name = %input.name))]
    pub async fn create_project(&self, input: CreateProject) -> ProjectResult<Project> {
        let project = mapper::to_project(input);
        evict_region(self.cache.as_ref(), self.repository.save(project)).await
    }

    /// Rename a project. `None` when it does not exist, in which case nothing is
    /// written and the cache is left alone.
    #[instrument(skip(self, input), fields(project_id = id))]
    pub async fn update_project(
        &self,
        id: i64,
        input: UpdateProject,
    ) -> ProjectResult<Option<Project>> {
        let Some(mut project) = self.repository.find_by_id(id).await? else {
            debug!(project_id = id, "Project missing, skipping update");
            return Ok(None);
        };

        project.name = input.name;
        let saved = evict_region(self.cache.as_ref(), self.repository.save(project)).await?;
        Ok(Some(saved))
    }

    /// Delete a project after its dependents. `false` when it did not exist.
    #[instrument(skip(self), fields(project_id = id))]
    pub async fn delete_project(&self, id: i64) -> ProjectResult<bool> {
        match &self.dependents {
            Some(dependents) => {
                let removed = dependents.delete_project_dependents(id).await?;
                debug!(project_id = id, removed, "Removed project dependents");
            }
            None => warn!(project_id = id, "No dependents registered, deleting project row only"),
        }

        let deleted = evict_region(self.cache.as_ref(), self.repository.delete_by_id(id)).await?;
        if deleted {
            info!(project_id = id, "Project deleted");
        }
        Ok(deleted)
    }

    /// Uncached existence check, always answered by storage
    pub async fn project_exists(&self, id: i64) -> ProjectResult<bool> {
        self.repository.exists_by_id(id).await
    }
}
