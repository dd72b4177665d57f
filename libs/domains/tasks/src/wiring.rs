use core_cache::CacheManager;
use domain_projects::{PROJECTS_REGION, ProjectRepository, ProjectService};
use std::sync::Arc;

use crate::cache::{TASKS_REGION, TaskCache};
use crate::cascade::TaskCascade;
use crate::repository::TaskRepository;
use crate::service::TaskService;

/// Both services sharing one set of cache regions
pub struct Services<P: ProjectRepository, R: TaskRepository> {
    pub projects: ProjectService<P>,
    pub tasks: TaskService<P, R>,
}

/// Build the project and task services with the task cascade registered on
/// the project service.
pub fn build_services<P, R>(
    project_repository: Arc<P>,
    task_repository: Arc<R>,
    caches: &CacheManager,
) -> Services<P, R>
where
    P: ProjectRepository,
    R: TaskRepository + 'static,
{
    let task_cache: TaskCache = caches.region(TASKS_REGION);
    let cascade = TaskCascade::new(Arc::clone(&task_repository), Arc::clone(&task_cache));

    let projects = ProjectService::new(
        project_repository,
        caches.region(PROJECTS_REGION),
        Arc::new(cascade),
    );
    let tasks = TaskService::new(task_repository, projects.clone(), task_cache);

    Services { projects, tasks }
}
