use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};

use crate::modules::education::application::domain::entities::Education;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "education")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub institution: String,

    pub degree: String,

    pub field_of_study: String,

    pub start_year: i32,

    pub end_year: Option<i32>,

    pub is_current: bool,

    pub cgpa: String,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl From<Model> for Education {
    fn from(model: Model) -> Self {
        Education {
            id: model.id,
            institution: model.institution,
            degree: model.degree,
            field_of_study: model.field_of_study,
            start_year: model.start_year,
            end_year: model.end_year,
            is_current: model.is_current,
            cgpa: model.cgpa,
        }
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
        if let ActiveValue::Set(institution) = &self.institution {
            self.institution = Set(institution.trim().to_string());
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
