use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Select, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::experience::adapter::outgoing::sea_orm_entity::experience_technologies;
use crate::modules::experience::adapter::outgoing::sea_orm_entity::experiences::{
    ActiveModel, Column, Entity, Model,
};
use crate::modules::experience::application::domain::entities::{
    Experience, ExperienceChanges,
};
use crate::modules::resource::adapter::outgoing::map_db_err;
use crate::modules::resource::application::ports::outgoing::{
    RepositoryError, ResourceRepository,
};
use crate::modules::technology::adapter::outgoing::technology_links;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ExperienceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn list_query() -> Select<Entity> {
        Entity::find()
            .order_by_desc(Column::StartDate)
            .order_by_desc(Column::CreatedAt)
    }

    /// Loads the technology tags of `models` and builds domain records,
    /// preserving the order of `models`.
    async fn attach<C>(conn: &C, models: Vec<Model>) -> Result<Vec<Experience>, DbErr>
    where
        C: ConnectionTrait,
    {
        if models.is_empty() {
            return Ok(vec![]);
        }

        let ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
        let links: Vec<(Uuid, Uuid)> = experience_technologies::Entity::find()
            .filter(experience_technologies::Column::ExperienceId.is_in(ids))
            .all(conn)
            .await?
            .into_iter()
            .map(|l| (l.experience_id, l.technology_id))
            .collect();

        let technologies =
            technology_links::find_technologies(conn, &technology_links::technology_ids(&links))
                .await?;
        let mut grouped = technology_links::group_by_owner(&links, &technologies);

        Ok(models
            .into_iter()
            .map(|m| {
                let tags = grouped.remove(&m.id).unwrap_or_default();
                m.into_domain(tags)
            })
            .collect())
    }

    async fn insert_links<C>(
        conn: &C,
        experience_id: Uuid,
        technology_ids: &[Uuid],
    ) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        if technology_ids.is_empty() {
            return Ok(());
        }

        let links = technology_ids
            .iter()
            .map(|technology_id| experience_technologies::ActiveModel {
                experience_id: Set(experience_id),
                technology_id: Set(*technology_id),
            });

        experience_technologies::Entity::insert_many(links)
            .exec_without_returning(conn)
            .await?;

        Ok(())
    }

    async fn delete_links<C>(conn: &C, experience_id: Uuid) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        experience_technologies::Entity::delete_many()
            .filter(experience_technologies::Column::ExperienceId.eq(experience_id))
            .exec(conn)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl ResourceRepository<Experience> for ExperienceRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Experience>, RepositoryError> {
        let models = Self::list_query()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Self::attach(&*self.db, models).await.map_err(map_db_err)
    }

    async fn get(&self, id: Uuid) -> Result<Experience, RepositoryError> {
        let model = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(RepositoryError::NotFound)?;

        Self::attach(&*self.db, vec![model])
            .await
            .map_err(map_db_err)?
            .pop()
            .ok_or(RepositoryError::NotFound)
    }

    async fn create(&self, mut changes: ExperienceChanges) -> Result<Experience, RepositoryError> {
        let technology_ids = changes.technology_ids.take().unwrap_or_default();
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let found = technology_links::find_technologies(&txn, &technology_ids)
            .await
            .map_err(map_db_err)?;
        technology_links::ensure_known(0, &technology_ids, &found)?;

        let mut model = new_active_model();
        apply_changes(&mut model, changes);

        let created = model.insert(&txn).await.map_err(map_db_err)?;
        Self::insert_links(&txn, created.id, &technology_ids)
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;

        Ok(created.into_domain(technology_links::select(&technology_ids, &found)))
    }

    /// Replaces the technology set only when `changes` carries one.
    async fn update(
        &self,
        id: Uuid,
        mut changes: ExperienceChanges,
    ) -> Result<Experience, RepositoryError> {
        let technology_ids = changes.technology_ids.take();
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let existing = Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or(RepositoryError::NotFound)?;

        let replacement = match technology_ids {
            Some(ids) => {
                let found = technology_links::find_technologies(&txn, &ids)
                    .await
                    .map_err(map_db_err)?;
                technology_links::ensure_known(0, &ids, &found)?;
                Some((ids, found))
            }
            None => None,
        };

        let mut model: ActiveModel = existing.clone().into();
        let stored = if apply_changes(&mut model, changes) {
            model.update(&txn).await.map_err(map_db_err)?
        } else {
            existing
        };

        let experience = match replacement {
            Some((ids, found)) => {
                Self::delete_links(&txn, id).await.map_err(map_db_err)?;
                Self::insert_links(&txn, id, &ids)
                    .await
                    .map_err(map_db_err)?;
                stored.into_domain(technology_links::select(&ids, &found))
            }
            None => Self::attach(&txn, vec![stored])
                .await
                .map_err(map_db_err)?
                .pop()
                .ok_or(RepositoryError::NotFound)?,
        };

        txn.commit().await.map_err(map_db_err)?;

        Ok(experience)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        Self::delete_links(&txn, id).await.map_err(map_db_err)?;

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

fn new_active_model() -> ActiveModel {
    let now = Utc::now().fixed_offset();

    ActiveModel {
        id: Set(Uuid::new_v4()),
        company: Set(String::new()),
        position: Set(String::new()),
        location: Set(String::new()),
        start_date: Set(now.date_naive()),
        end_date: Set(None),
        is_current: Set(false),
        description: Set(String::new()),
        achievements: Set(String::new()),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

/// Returns whether any column was touched. Technology ids are handled by the caller.
fn apply_changes(model: &mut ActiveModel, changes: ExperienceChanges) -> bool {
    let mut touched = false;

    if let Some(company) = changes.company {
        model.company = Set(company);
        touched = true;
    }
    if let Some(position) = changes.position {
        model.position = Set(position);
        touched = true;
    }
    if let Some(location) = changes.location {
        model.location = Set(location);
        touched = true;
    }
    if let Some(start_date) = changes.start_date {
        model.start_date = Set(start_date);
        touched = true;
    }
    if let Some(end_date) = changes.end_date {
        model.end_date = Set(end_date);
        touched = true;
    }
    if let Some(is_current) = changes.is_current {
        model.is_current = Set(is_current);
        touched = true;
    }
    if let Some(description) = changes.description {
        model.description = Set(description);
        touched = true;
    }
    if let Some(achievements) = changes.achievements {
        model.achievements = Set(achievements);
        touched = true;
    }

    touched
}

// ============================================================================
// Tests
// ============================================================================
