use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};

use crate::modules::project::application::domain::entities::Project;
use crate::modules::technology::adapter::outgoing::sea_orm_entity as technologies;
use crate::modules::technology::application::domain::entities::Technology;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    pub tech_stack: String,

    pub github_url: String,

    pub live_url: String,

    pub image_url: String,

    pub featured: bool,

    pub created_date: Date,

    #[sea_orm(column_type = "Text")]
    pub achievements: String,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn into_domain(self, technologies: Vec<Technology>) -> Project {
        Project {
            id: self.id,
            title: self.title,
            description: self.description,
            tech_stack: self.tech_stack,
            technologies,
            github_url: self.github_url,
            live_url: self.live_url,
            image_url: self.image_url,
            featured: self.featured,
            created_date: self.created_date,
            achievements: self.achievements,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::project_technologies::Entity")]
    ProjectTechnologies,
}

impl Related<super::project_technologies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectTechnologies.def()
    }
}

impl Related<technologies::Entity> for Entity {
    fn to() -> RelationDef {
        super::project_technologies::Relation::Technologies.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::project_technologies::Relation::Projects.def().rev())
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(title) = &self.title {
            self.title = Set(title.trim().to_string());
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
