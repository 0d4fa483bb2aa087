use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Select, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::resource::adapter::outgoing::map_db_err;
use crate::modules::resource::application::ports::outgoing::{
    BulkResourceRepository, RepositoryError, ResourceRepository,
};
use crate::modules::skill::adapter::outgoing::sea_orm_entity::{ActiveModel, Column, Entity};
use crate::modules::skill::application::domain::entities::{
    Skill, SkillCategory, SkillChanges, DEFAULT_PROFICIENCY,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct SkillRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn list_query() -> Select<Entity> {
        Entity::find().order_by_asc(Column::CreatedAt)
    }
}

#[async_trait]
impl ResourceRepository<Skill> for SkillRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Skill>, RepositoryError> {
        let models = Self::list_query()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models.into_iter().map(Skill::try_from).collect()
    }

    async fn get(&self, id: Uuid) -> Result<Skill, RepositoryError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(RepositoryError::NotFound)?
            .try_into()
    }

    async fn create(&self, changes: SkillChanges) -> Result<Skill, RepositoryError> {
        let mut model = new_active_model();
        apply_changes(&mut model, changes);

        model
            .insert(&*self.db)
            .await
            .map_err(map_db_err)?
            .try_into()
    }

    async fn update(&self, id: Uuid, changes: SkillChanges) -> Result<Skill, RepositoryError> {
        let existing = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(RepositoryError::NotFound)?;

        let mut model: ActiveModel = existing.clone().into();
        if !apply_changes(&mut model, changes) {
            return existing.try_into();
        }

        model
            .update(&*self.db)
            .await
            .map_err(map_db_err)?
            .try_into()
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

#[async_trait]
impl BulkResourceRepository<Skill> for SkillRepositoryPostgres {
    async fn create_many(&self, items: Vec<SkillChanges>) -> Result<Vec<Skill>, RepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let mut created = Vec::with_capacity(items.len());
        for changes in items {
            let mut model = new_active_model();
            apply_changes(&mut model, changes);

            let stored = model.insert(&txn).await.map_err(map_db_err)?;
            created.push(Skill::try_from(stored)?);
        }

        txn.commit().await.map_err(map_db_err)?;

        Ok(created)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn new_active_model() -> ActiveModel {
    let now = Utc::now().fixed_offset();

    ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(String::new()),
        category: Set(SkillCategory::Concepts.as_str().to_string()),
        proficiency: Set(DEFAULT_PROFICIENCY),
        icon: Set(String::new()),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

/// Returns whether any column was touched.
fn apply_changes(model: &mut ActiveModel, changes: SkillChanges) -> bool {
    let mut touched = false;

    if let Some(name) = changes.name {
        model.name = Set(name);
        touched = true;
    }
    if let Some(category) = changes.category {
        model.category = Set(category.as_str().to_string());
        touched = true;
    }
    if let Some(proficiency) = changes.proficiency {
        model.proficiency = Set(proficiency);
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
