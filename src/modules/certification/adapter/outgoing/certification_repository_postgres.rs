use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Select, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::certification::adapter::outgoing::sea_orm_entity::{
    ActiveModel, Column, Entity,
};
use crate::modules::certification::application::domain::entities::{
    Certification, CertificationChanges,
};
use crate::modules::resource::adapter::outgoing::map_db_err;
use crate::modules::resource::application::ports::outgoing::{
    RepositoryError, ResourceRepository,
};

#[derive(Clone)]
pub struct CertificationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CertificationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn list_query() -> Select<Entity> {
        Entity::find()
            .order_by_desc(Column::IssueDate)
            .order_by_desc(Column::CreatedAt)
    }
}

#[async_trait]
impl ResourceRepository<Certification> for CertificationRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Certification>, RepositoryError> {
        let models = Self::list_query()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(Certification::from).collect())
    }

    async fn get(&self, id: Uuid) -> Result<Certification, RepositoryError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(Certification::from)
            .ok_or(RepositoryError::NotFound)
    }

    async fn create(
        &self,
        changes: CertificationChanges,
    ) -> Result<Certification, RepositoryError> {
        let now = Utc::now().fixed_offset();

        let mut model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(String::new()),
            issuer: Set(String::new()),
            issue_date: Set(now.date_naive()),
            expiry_date: Set(None),
            credential_url: Set(String::new()),
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
        changes: CertificationChanges,
    ) -> Result<Certification, RepositoryError> {
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

fn apply_changes(model: &mut ActiveModel, changes: CertificationChanges) -> bool {
    let mut touched = false;

    if let Some(name) = changes.name {
        model.name = Set(name);
        touched = true;
    }
    if let Some(issuer) = changes.issuer {
        model.issuer = Set(issuer);
        touched = true;
    }
    if let Some(issue_date) = changes.issue_date {
        model.issue_date = Set(issue_date);
        touched = true;
    }
    if let Some(expiry_date) = changes.expiry_date {
        model.expiry_date = Set(expiry_date);
        touched = true;
    }
    if let Some(credential_url) = changes.credential_url {
        model.credential_url = Set(credential_url);
        touched = true;
    }

    touched
}
