use async_trait::async_trait;
use database::PageRequest;
use database::common::{next_update_timestamp, now_micros};
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect,
};

use crate::{entity, error::ProjectResult, models::Project, repository::ProjectRepository};

/// PostgreSQL implementation of ProjectRepository
pub struct PgProjectRepository {
    db: DatabaseConnection,
}

impl PgProjectRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepository for PgProjectRepository {
    async fn find_page(&self, page: PageRequest) -> ProjectResult<Vec<Project>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .offset(page.offset())
            .limit(page.size())
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn count(&self) -> ProjectResult<u64> {
        Ok(entity::Entity::find().count(&self.db).await?)
    }

    async fn find_by_id(&self, id: i64) -> ProjectResult<Option<Project>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn exists_by_id(&self, id: i64) -> ProjectResult<bool> {
        let count = entity::Entity::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }

    async fn save(&self, project: Project) -> ProjectResult<Project> {
        let model = match project.id {
            None => {
                let now = now_micros();
                let model = entity::ActiveModel {
                    id: NotSet,
                    name: Set(project.name),
                    created_at: Set(now.into()),
                    updated_at: Set(now.into()),
                }
                .insert(&self.db)
                .await?;

                tracing::info!(project_id = model.id, "Created project");
                model
            }
            Some(id) => {
                let model = entity::ActiveModel {
                    id: Unchanged(id),
                    name: Set(project.name),
                    created_at: NotSet,
                    updated_at: Set(next_update_timestamp(project.updated_at).into()),
                }
                .update(&self.db)
                .await?;

                tracing::info!(project_id = id, "Updated project");
                model
            }
        };

        Ok(model.into())
    }

    async fn delete_by_id(&self, id: i64) -> ProjectResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(project_id = id, "Deleted project");
        }
        Ok(result.rows_affected > 0)
    }
}
