use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};

use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::technology::adapter::outgoing::sea_orm_entity as technologies;
use crate::modules::technology::application::domain::entities::Technology;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "experiences")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub company: String,

    pub position: String,

    pub location: String,

    pub start_date: Date,

    pub end_date: Option<Date>,

    pub is_current: bool,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(column_type = "Text")]
    pub achievements: String,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn into_domain(self, technologies: Vec<Technology>) -> Experience {
        Experience {
            id: self.id,
            company: self.company,
            position: self.position,
            location: self.location,
            start_date: self.start_date,
            end_date: self.end_date,
            is_current: self.is_current,
            description: self.description,
            achievements: self.achievements,
            technologies,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::experience_technologies::Entity")]
    ExperienceTechnologies,
}

impl Related<super::experience_technologies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExperienceTechnologies.def()
    }
}

impl Related<technologies::Entity> for Entity {
    fn to() -> RelationDef {
        super::experience_technologies::Relation::Technologies.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::experience_technologies::Relation::Experiences.def().rev())
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(company) = &self.company {
            self.company = Set(company.trim().to_string());
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
