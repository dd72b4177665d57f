use async_trait::async_trait;
use database::PageRequest;
use database::common::{next_update_timestamp, now_micros};
use sea_orm::DbErr;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ProjectResult;
use crate::models::Project;

/// Repository trait for Project persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// One page of projects in ascending id order
    async fn find_page(&self, page: PageRequest) -> ProjectResult<Vec<Project>>;

    /// Count all projects
    async fn count(&self) -> ProjectResult<u64>;

    async fn find_by_id(&self, id: i64) -> ProjectResult<Option<Project>>;

    async fn exists_by_id(&self, id: i64) -> ProjectResult<bool>;

    /// Insert when `project.id` is `None`, otherwise update.
    ///
    /// Inserts assign the id and both timestamps; updates keep `created_at` and
    /// move `updated_at` forward.
    async fn save(&self, project: Project) -> ProjectResult<Project>;

    /// Returns `false` when no project had this id
    async fn delete_by_id(&self, id: i64) -> ProjectResult<bool>;
}

#[derive(Debug, Default)]
struct ProjectTable {
    rows: BTreeMap<i64, Project>,
    last_id: i64,
}

/// In-memory implementation of ProjectRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProjectRepository {
    table: Arc<RwLock<ProjectTable>>,
}

impl InMemoryProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn find_page(&self, page: PageRequest) -> ProjectResult<Vec<Project>> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .skip(page.offset() as usize)
            .take(page.size() as usize)
            .cloned()
            .collect())
    }

    async fn count(&self) -> ProjectResult<u64> {
        Ok(self.table.read().await.rows.len() as u64)
    }

    async fn find_by_id(&self, id: i64) -> ProjectResult<Option<Project>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: i64) -> ProjectResult<bool> {
        Ok(self.table.read().await.rows.contains_key(&id))
    }

    async fn save(&self, mut project: Project) -> ProjectResult<Project> {
        let mut table = self.table.write().await;

        match project.id {
            None => {
                table.last_id += 1;
                let id = table.last_id;
                let now = now_micros();

                project.id = Some(id);
                project.created_at = Some(now);
                project.updated_at = Some(now);
                table.rows.insert(id, project.clone());

                tracing::info!(project_id = id, "Created project");
                Ok(project)
            }
            Some(id) => {
                let stored = table.rows.get_mut(&id).ok_or(DbErr::RecordNotUpdated)?;
                stored.name = project.name;
                stored.updated_at = Some(next_update_timestamp(stored.updated_at));

                tracing::info!(project_id = id, "Updated project");
                Ok(stored.clone())
            }
        }
    }

    async fn delete_by_id(&self, id: i64) -> ProjectResult<bool> {
        let mut table = self.table.write().await;

        if table.rows.remove(&id).is_some() {
            tracing::info!(project_id = id, "Deleted project");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
