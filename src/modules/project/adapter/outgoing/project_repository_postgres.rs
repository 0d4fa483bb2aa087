use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Select, Set, TransactionTrait,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::adapter::outgoing::sea_orm_entity::project_technologies;
use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{
    ActiveModel, Column, Entity, Model,
};
use crate::modules::project::application::domain::entities::{Project, ProjectChanges};
use crate::modules::project::application::ports::outgoing::FeaturedProjectsQuery;
use crate::modules::resource::adapter::outgoing::map_db_err;
use crate::modules::resource::application::ports::outgoing::{
    BulkResourceRepository, RepositoryError, ResourceRepository,
};
use crate::modules::technology::adapter::outgoing::technology_links;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn list_query() -> Select<Entity> {
        Entity::find()
            .order_by_desc(Column::CreatedDate)
            .order_by_desc(Column::CreatedAt)
    }

    fn featured_query() -> Select<Entity> {
        Self::list_query().filter(Column::Featured.eq(true))
    }

    /// Loads the technology tags of `models`, preserving their order.
    async fn attach<C>(conn: &C, models: Vec<Model>) -> Result<Vec<Project>, DbErr>
    where
        C: ConnectionTrait,
    {
        if models.is_empty() {
            return Ok(vec![]);
        }

        let ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
        let links: Vec<(Uuid, Uuid)> = project_technologies::Entity::find()
            .filter(project_technologies::Column::ProjectId.is_in(ids))
            .all(conn)
            .await?
            .into_iter()
            .map(|l| (l.project_id, l.technology_id))
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

    /// Inserts `(project_id, technology_id)` pairs in one statement.
    async fn insert_links<C>(conn: &C, links: Vec<(Uuid, Uuid)>) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        if links.is_empty() {
            return Ok(());
        }

        let rows = links
            .into_iter()
            .map(|(project_id, technology_id)| project_technologies::ActiveModel {
                project_id: Set(project_id),
                technology_id: Set(technology_id),
            });

        project_technologies::Entity::insert_many(rows)
            .exec_without_returning(conn)
            .await?;

        Ok(())
    }

    async fn delete_links<C>(conn: &C, project_id: Uuid) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        project_technologies::Entity::delete_many()
            .filter(project_technologies::Column::ProjectId.eq(project_id))
            .exec(conn)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl ResourceRepository<Project> for ProjectRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Project>, RepositoryError> {
        let models = Self::list_query()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Self::attach(&*self.db, models).await.map_err(map_db_err)
    }

    async fn get(&self, id: Uuid) -> Result<Project, RepositoryError> {
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

    async fn create(&self, mut changes: ProjectChanges) -> Result<Project, RepositoryError> {
        let technology_ids = changes.technology_ids.take().unwrap_or_default();
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let found = technology_links::find_technologies(&txn, &technology_ids)
            .await
            .map_err(map_db_err)?;
        technology_links::ensure_known(0, &technology_ids, &found)?;

        let mut model = new_active_model();
        apply_changes(&mut model, changes);

        let created = model.insert(&txn).await.map_err(map_db_err)?;
        Self::insert_links(&txn, pairs(created.id, &technology_ids))
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;

        Ok(created.into_domain(technology_links::select(&technology_ids, &found)))
    }

    /// Replaces the technology set only when `changes` carries one.
    async fn update(
        &self,
        id: Uuid,
        mut changes: ProjectChanges,
    ) -> Result<Project, RepositoryError> {
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

        let project = match replacement {
            Some((ids, found)) => {
                Self::delete_links(&txn, id).await.map_err(map_db_err)?;
                Self::insert_links(&txn, pairs(id, &ids))
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

        Ok(project)
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

#[async_trait]
impl BulkResourceRepository<Project> for ProjectRepositoryPostgres {
    /// Resolves every item's technologies with one lookup; any unknown id
    /// rejects the whole batch before a row is written.
    async fn create_many(
        &self,
        mut items: Vec<ProjectChanges>,
    ) -> Result<Vec<Project>, RepositoryError> {
        let requested: Vec<Vec<Uuid>> = items
            .iter_mut()
            .map(|c| c.technology_ids.take().unwrap_or_default())
            .collect();

        let mut all_ids: Vec<Uuid> = Vec::new();
        for id in requested.iter().flatten() {
            if !all_ids.contains(id) {
                all_ids.push(*id);
            }
        }

        let txn = self.db.begin().await.map_err(map_db_err)?;

        let found = technology_links::find_technologies(&txn, &all_ids)
            .await
            .map_err(map_db_err)?;

        let unknown: BTreeMap<usize, Vec<Uuid>> = requested
            .iter()
            .enumerate()
            .filter_map(|(index, ids)| {
                let missing = technology_links::missing_ids(ids, &found);
                (!missing.is_empty()).then_some((index, missing))
            })
            .collect();
        if !unknown.is_empty() {
            return Err(RepositoryError::UnknownTechnologies(unknown));
        }

        let mut stored: Vec<Model> = Vec::with_capacity(items.len());
        let mut links: Vec<(Uuid, Uuid)> = Vec::new();
        for (changes, ids) in items.into_iter().zip(&requested) {
            let mut model = new_active_model();
            apply_changes(&mut model, changes);

            let created = model.insert(&txn).await.map_err(map_db_err)?;
            links.extend(pairs(created.id, ids));
            stored.push(created);
        }

        Self::insert_links(&txn, links).await.map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;

        Ok(stored
            .into_iter()
            .zip(&requested)
            .map(|(model, ids)| model.into_domain(technology_links::select(ids, &found)))
            .collect())
    }
}

#[async_trait]
impl FeaturedProjectsQuery for ProjectRepositoryPostgres {
    async fn list_featured(&self) -> Result<Vec<Project>, RepositoryError> {
        let models = Self::featured_query()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Self::attach(&*self.db, models).await.map_err(map_db_err)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn pairs(project_id: Uuid, technology_ids: &[Uuid]) -> Vec<(Uuid, Uuid)> {
    technology_ids.iter().map(|t| (project_id, *t)).collect()
}

fn new_active_model() -> ActiveModel {
    let now = Utc::now().fixed_offset();

    ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(String::new()),
        description: Set(String::new()),
        tech_stack: Set(String::new()),
        github_url: Set(String::new()),
        live_url: Set(String::new()),
        image_url: Set(String::new()),
        featured: Set(false),
        created_date: Set(now.date_naive()),
        achievements: Set(String::new()),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

/// Returns whether any column was touched. Technology ids are handled by the caller.
fn apply_changes(model: &mut ActiveModel, changes: ProjectChanges) -> bool {
    let mut touched = false;

    if let Some(title) = changes.title {
        model.title = Set(title);
        touched = true;
    }
    if let Some(description) = changes.description {
        model.description = Set(description);
        touched = true;
    }
    if let Some(tech_stack) = changes.tech_stack {
        model.tech_stack = Set(tech_stack);
        touched = true;
    }
    if let Some(github_url) = changes.github_url {
        model.github_url = Set(github_url);
        touched = true;
    }
    if let Some(live_url) = changes.live_url {
        model.live_url = Set(live_url);
        touched = true;
    }
    if let Some(image_url) = changes.image_url {
        model.image_url = Set(image_url);
        touched = true;
    }
    if let Some(featured) = changes.featured {
        model.featured = Set(featured);
        touched = true;
    }
    if let Some(created_date) = changes.created_date {
        model.created_date = Set(created_date);
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
