use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Select, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::education::adapter::outgoing::sea_orm_entity::{ActiveModel, Column, Entity};
use crate::modules::education::application::domain::entities::{
    Education, EducationChanges, DEFAULT_FIELD_OF_STUDY,
};
use crate::modules::resource::adapter::outgoing::map_db_err;
use crate::modules::resource::application::ports::outgoing::{
    RepositoryError, ResourceRepository,
};

#[derive(Clone)]
pub struct EducationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EducationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn list_query() -> Select<Entity> {
        Entity::find()
            .order_by_desc(Column::StartYear)
            .order_by_desc(Column::CreatedAt)
    }
}

#[async_trait]
impl ResourceRepository<Education> for EducationRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Education>, RepositoryError> {
        let models = Self::list_query()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(Education::from).collect())
    }

    async fn get(&self, id: Uuid) -> Result<Education, RepositoryError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(Education::from)
            .ok_or(RepositoryError::NotFound)
    }

    async fn create(&self, changes: EducationChanges) -> Result<Education, RepositoryError> {
        let now = Utc::now().fixed_offset();

        let mut model = ActiveModel {
            id: Set(Uuid::new_v4()),
            institution: Set(String::new()),
            degree: Set(String::new()),
            field_of_study: Set(DEFAULT_FIELD_OF_STUDY.to_string()),
            start_year: Set(0),
            end_year: Set(None),
            is_current: Set(false),
            cgpa: Set(String::new()),
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
        changes: EducationChanges,
    ) -> Result<Education, RepositoryError> {
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

fn apply_changes(model: &mut ActiveModel, changes: EducationChanges) -> bool {
    let mut touched = false;

    if let Some(institution) = changes.institution {
        model.institution = Set(institution);
        touched = true;
    }
    if let Some(degree) = changes.degree {
        model.degree = Set(degree);
        touched = true;
    }
    if let Some(field_of_study) = changes.field_of_study {
        model.field_of_study = Set(field_of_study);
        touched = true;
    }
    if let Some(start_year) = changes.start_year {
        model.start_year = Set(start_year);
        touched = true;
    }
    if let Some(end_year) = changes.end_year {
        model.end_year = Set(end_year);
        touched = true;
    }
    if let Some(is_current) = changes.is_current {
        model.is_current = Set(is_current);
        touched = true;
    }
    if let Some(cgpa) = changes.cgpa {
        model.cgpa = Set(cgpa);
        touched = true;
    }

    touched
}
