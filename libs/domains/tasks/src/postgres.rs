use async_trait::async_trait;
use database::PageRequest;
use database::common::{next_update_timestamp, now_micros};
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::{entity, error::TaskResult, models::Task, repository::TaskRepository};

/// PostgreSQL implementation of TaskRepository
///
/// `tasks.project_id` references `projects.id`, so inserting under a project
/// deleted after the existence check fails with a foreign key violation.
pub struct PgTaskRepository {
    db: DatabaseConnection,
}

impl PgTaskRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn scoped(project_id: i64) -> sea_orm::Select<entity::Entity> {
        entity::Entity::find().filter(entity::Column::ProjectId.eq(project_id))
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn find_page(&self, project_id: i64, page: PageRequest) -> TaskResult<Vec<Task>> {
        let models = Self::scoped(project_id)
            .order_by_asc(entity::Column::Id)
            .offset(page.offset())
            .limit(page.size())
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn count(&self, project_id: i64) -> TaskResult<u64> {
        Ok(Self::scoped(project_id).count(&self.db).await?)
    }

    async fn find_one(&self, project_id: i64, task_id: i64) -> TaskResult<Option<Task>> {
        let model = Self::scoped(project_id)
            .filter(entity::Column::Id.eq(task_id))
            .one(&self.db)
            .await?;
        Ok(model.map(Into::into))
    }

    async fn save(&self, task: Task) -> TaskResult<Task> {
        let model = match task.id {
            None => {
                let now = now_micros();
                let model = entity::ActiveModel {
                    id: NotSet,
                    project_id: Set(task.project_id),
                    description: Set(task.description),
                    created_at: Set(now.into()),
                    updated_at: Set(now.into()),
                }
                .insert(&self.db)
                .await?;

                tracing::info!(task_id = model.id, project_id = model.project_id, "Created task");
                model
            }
            Some(id) => {
                let model = entity::ActiveModel {
                    id: Unchanged(id),
                    project_id: Unchanged(task.project_id),
                    description: Set(task.description),
                    created_at: NotSet,
                    updated_at: Set(next_update_timestamp(task.updated_at).into()),
                }
                .update(&self.db)
                .await?;

                tracing::info!(task_id = id, "Updated task");
                model
            }
        };

        Ok(model.into())
    }

    async fn delete_one(&self, project_id: i64, task_id: i64) -> TaskResult<bool> {
        let result = entity::Entity::delete_many()
            .filter(entity::Column::Id.eq(task_id))
            .filter(entity::Column::ProjectId.eq(project_id))
            .exec(&self.db)
            .await?;

        if result.rows_affected > 0 {
            tracing::info!(task_id, project_id, "Deleted task");
        }
        Ok(result.rows_affected > 0)
    }

    async fn delete_all_by_project(&self, project_id: i64) -> TaskResult<u64> {
        let result = entity::Entity::delete_many()
            .filter(entity::Column::ProjectId.eq(project_id))
            .exec(&self.db)
            .await?;

        tracing::info!(project_id, removed = result.rows_affected, "Deleted project tasks");
        Ok(result.rows_affected)
    }
}
