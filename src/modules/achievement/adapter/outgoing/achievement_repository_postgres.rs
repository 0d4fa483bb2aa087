use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Select, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::achievement::adapter::outgoing::sea_orm_entity::{
    ActiveModel, Column, Entity,
};
use crate::modules::achievement::application::domain::entities::{
    Achievement, AchievementChanges,
};
use crate::modules::resource::adapter::outgoing::map_db_err;
use crate::modules::resource::application::ports::outgoing::{
    RepositoryError, ResourceRepository,
};

#[derive(Clone)]
pub struct AchievementRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AchievementRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn list_query() -> Select<Entity> {
        Entity::find()
            .order_by_desc(Column::Date)
            .order_by_desc(Column::CreatedAt)
    }
}

#[async_trait]
impl ResourceRepository<Achievement> for AchievementRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Achievement>, RepositoryError> {
        let models = Self::list_query()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(Achievement::from).collect())
    }

    async fn get(&self, id: Uuid) -> Result<Achievement, RepositoryError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(Achievement::from)
            .ok_or(RepositoryError::NotFound)
    }

    async fn create(&self, changes: AchievementChanges) -> Result<Achievement, RepositoryError> {
        let now = Utc::now().fixed_offset();

        let mut model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(String::new()),
            description: Set(String::new()),
            date: Set(now.date_naive()),
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
        changes: AchievementChanges,
    ) -> Result<Achievement, RepositoryError> {
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

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

fn apply_changes(model: &mut ActiveModel, changes: AchievementChanges) -> bool {
    let mut touched = false;

    if let Some(title) = changes.title {
        model.title = Set(title);
        touched = true;
    }
    if let Some(description) = changes.description {
        model.description = Set(description);
        touched = true;
    }
    if let Some(date) = changes.date {
        model.date = Set(date);
        touched = true;
    }

    touched
}
