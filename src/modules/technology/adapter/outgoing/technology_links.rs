//! Helpers shared by the repositories that tag records with technologies.
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use std::collections::{BTreeMap, HashMap};
use uuid::Uuid;

use crate::modules::resource::application::ports::outgoing::RepositoryError;
use crate::modules::technology::adapter::outgoing::sea_orm_entity::{Column, Entity, Model};
use crate::modules::technology::application::domain::entities::Technology;

/// Loads the technologies named by `ids`. Ids without a row are simply absent.
pub async fn find_technologies<C>(conn: &C, ids: &[Uuid]) -> Result<Vec<Model>, DbErr>
where
    C: ConnectionTrait,
{
    if ids.is_empty() {
        return Ok(vec![]);
    }

    Entity::find()
        .filter(Column::Id.is_in(ids.iter().copied()))
        .all(conn)
        .await
}

/// Requested ids with no matching technology, in request order.
pub fn missing_ids(requested: &[Uuid], found: &[Model]) -> Vec<Uuid> {
    requested
        .iter()
        .filter(|id| !found.iter().any(|t| t.id == **id))
        .copied()
        .collect()
}

/// Fails with [`RepositoryError::UnknownTechnologies`] for item `index` when
/// any requested id is unknown.
pub fn ensure_known(index: usize, requested: &[Uuid], found: &[Model]) -> Result<(), RepositoryError> {
    let missing = missing_ids(requested, found);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(RepositoryError::UnknownTechnologies(BTreeMap::from([(
            index, missing,
        )])))
    }
}

/// Picks the technologies named by `ids`, sorted by name.
pub fn select(ids: &[Uuid], technologies: &[Model]) -> Vec<Technology> {
    let mut selected: Vec<Technology> = technologies
        .iter()
        .filter(|t| ids.contains(&t.id))
        .cloned()
        .map(Technology::from)
        .collect();
    sort_by_name(&mut selected);
    selected
}

/// Groups technologies by owner from `(owner_id, technology_id)` link pairs.
/// Each owner's list is sorted by name.
pub fn group_by_owner(
    links: &[(Uuid, Uuid)],
    technologies: &[Model],
) -> HashMap<Uuid, Vec<Technology>> {
    let by_id: HashMap<Uuid, &Model> = technologies.iter().map(|t| (t.id, t)).collect();
    let mut grouped: HashMap<Uuid, Vec<Technology>> = HashMap::new();

    for (owner_id, technology_id) in links {
        if let Some(model) = by_id.get(technology_id) {
            grouped
                .entry(*owner_id)
                .or_default()
                .push(Technology::from((*model).clone()));
        }
    }

    for list in grouped.values_mut() {
        sort_by_name(list);
    }

    grouped
}

/// Distinct technology ids referenced by `links`.
pub fn technology_ids(links: &[(Uuid, Uuid)]) -> Vec<Uuid> {
    let mut ids: Vec<Uuid> = Vec::with_capacity(links.len());
    for (_, technology_id) in links {
        if !ids.contains(technology_id) {
            ids.push(*technology_id);
        }
    }
    ids
}

fn sort_by_name(list: &mut [Technology]) {
    list.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
}
