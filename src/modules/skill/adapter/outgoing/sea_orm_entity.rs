use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};

use crate::modules::resource::application::ports::outgoing::RepositoryError;
use crate::modules::skill::application::domain::entities::{Skill, UnknownSkillCategory};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "skills")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub name: String,

    /// One of the `SkillCategory` keys; the table has a CHECK constraint.
    pub category: String,

    pub proficiency: i32,

    pub icon: String,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl TryFrom<Model> for Skill {
    type Error = RepositoryError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let category = model
            .category
            .parse()
            .map_err(|e: UnknownSkillCategory| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(Skill {
            id: model.id,
            name: model.name,
            category,
            proficiency: model.proficiency,
            icon: model.icon,
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(name) = &self.name {
            self.name = Set(name.trim().to_string());
        }

        #[cfg(feature = "no_db_triggers")]
        {
            use chrono::Utc;

            if !_insert {
                self.updated_at = Set(Utc::now().into());
            }
        }

        Ok(self)
    }
}
