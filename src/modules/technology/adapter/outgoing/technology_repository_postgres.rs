use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    Select, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::experience::adapter::outgoing::sea_orm_entity::experience_technologies;
use crate::modules::project::adapter::outgoing::sea_orm_entity::project_technologies;
use crate::modules::resource::adapter::outgoing::map_db_err;
use crate::modules::resource::application::ports::outgoing::{
    RepositoryError, ResourceRepository,
};
use crate::modules::technology::adapter::outgoing::sea_orm_entity::{
    ActiveModel, Column, Entity,
};
use crate::modules::technology::application::domain::entities::{
    Technology, TechnologyChanges,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct TechnologyRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TechnologyRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn list_query() -> Select<Entity> {
        Entity::find().order_by_asc(Column::CreatedAt)
    }
}

#[async_trait]
impl ResourceRepository<Technology> for TechnologyRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Technology>, RepositoryError> {
        let models = Self::list_query()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(Technology::from).collect())
    }

    async fn get(&self, id: Uuid) -> Result<Technology, RepositoryError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(Technology::from)
            .ok_or(RepositoryError::NotFound)
    }

    async fn create(&self, changes: TechnologyChanges) -> Result<Technology, RepositoryError> {
        let now = Utc::now().fixed_offset();

        let mut model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(String::new()),
            description: Set(String::new()),
            icon: Set(String::new()),
            created_at: Set(now),
            updated_at: Set(now),
        };
        apply_changes(&mut model, changes);

        let created = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(created.into())
    }

    async fn update(
        &self,
        id: Uuid,
        changes: TechnologyChanges,
    ) -> Result<Technology, RepositoryError> {
        let existing = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(RepositoryError::NotFound)?;

        let mut model: ActiveModel = existing.clone().into();
        if !apply_changes(&mut model, changes) {
            return Ok(existing.into());
        }

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;

        Ok(updated.into())
    }

    /// Detaches the technology from every experience and project, then removes it.
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        experience_technologies::Entity::delete_many()
            .filter(experience_technologies::Column::TechnologyId.eq(id))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        project_technologies::Entity::delete_many()
            .filter(project_technologies::Column::TechnologyId.eq(id))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        let result = Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }

        txn.commit().await.map_err(map_db_err)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Returns whether any column was touched.
fn apply_changes(model: &mut ActiveModel, changes: TechnologyChanges) -> bool {
    let mut touched = false;

    if let Some(name) = changes.name {
        model.name = Set(name);
        touched = true;
    }
    if let Some(description) = changes.description {
        model.description = Set(description);
        touched = true;
    }
    if let Some(icon) = changes.icon {
        model.icon = Set(icon);
        touched = true;
    }

    touched
}

// ============================================================================
// Tests
// ============================================================================
