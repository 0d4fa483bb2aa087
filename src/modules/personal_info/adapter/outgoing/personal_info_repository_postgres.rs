use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Select, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::personal_info::adapter::outgoing::sea_orm_entity::{
    ActiveModel, Column, Entity,
};
use crate::modules::personal_info::application::domain::entities::{
    PersonalInfo, PersonalInfoChanges, DEFAULT_EMAIL, DEFAULT_LOCATION,
};
use crate::modules::personal_info::application::ports::outgoing::PersonalInfoQuery;
use crate::modules::resource::adapter::outgoing::map_db_err;
use crate::modules::resource::application::ports::outgoing::{
    RepositoryError, ResourceRepository,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct PersonalInfoRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PersonalInfoRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn list_query() -> Select<Entity> {
        Entity::find().order_by_asc(Column::CreatedAt)
    }
}

#[async_trait]
impl ResourceRepository<PersonalInfo> for PersonalInfoRepositoryPostgres {
    async fn list(&self) -> Result<Vec<PersonalInfo>, RepositoryError> {
        let models = Self::list_query()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(PersonalInfo::from).collect())
    }

    async fn get(&self, id: Uuid) -> Result<PersonalInfo, RepositoryError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(PersonalInfo::from)
            .ok_or(RepositoryError::NotFound)
    }

    async fn create(&self, changes: PersonalInfoChanges) -> Result<PersonalInfo, RepositoryError> {
        let now = Utc::now().fixed_offset();

        let mut model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(String::new()),
            title: Set(String::new()),
            summary: Set(String::new()),
            linkedin_url: Set(String::new()),
            github_url: Set(String::new()),
            email: Set(DEFAULT_EMAIL.to_string()),
            phone: Set(String::new()),
            location: Set(DEFAULT_LOCATION.to_string()),
            leetcode_problems: Set(0),
            leetcode_rating: Set(0),
            years_experience: Set(0),
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
        changes: PersonalInfoChanges,
    ) -> Result<PersonalInfo, RepositoryError> {
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

#[async_trait]
impl PersonalInfoQuery for PersonalInfoRepositoryPostgres {
    async fn first(&self) -> Result<Option<PersonalInfo>, RepositoryError> {
        let model = Self::list_query()
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(PersonalInfo::from))
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Returns whether any column was touched.
fn apply_changes(model: &mut ActiveModel, changes: PersonalInfoChanges) -> bool {
    let mut touched = false;

    if let Some(name) = changes.name {
        model.name = Set(name);
        touched = true;
    }
    if let Some(title) = changes.title {
        model.title = Set(title);
        touched = true;
    }
    if let Some(summary) = changes.summary {
        model.summary = Set(summary);
        touched = true;
    }
    if let Some(linkedin_url) = changes.linkedin_url {
        model.linkedin_url = Set(linkedin_url);
        touched = true;
    }
    if let Some(github_url) = changes.github_url {
        model.github_url = Set(github_url);
        touched = true;
    }
    if let Some(email) = changes.email {
        model.email = Set(email);
        touched = true;
    }
    if let Some(phone) = changes.phone {
        model.phone = Set(phone);
        touched = true;
    }
    if let Some(location) = changes.location {
        model.location = Set(location);
        touched = true;
    }
    if let Some(leetcode_problems) = changes.leetcode_problems {
        model.leetcode_problems = Set(leetcode_problems);
        touched = true;
    }
    if let Some(leetcode_rating) = changes.leetcode_rating {
        model.leetcode_rating = Set(leetcode_rating);
        touched = true;
    }
    if let Some(years_experience) = changes.years_experience {
        model.years_experience = Set(years_experience);
        touched = true;
    }

    touched
}

// ============================================================================
// Tests
// ============================================================================
