use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};

use crate::modules::personal_info::application::domain::entities::PersonalInfo;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "personal_info")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub name: String,

    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub summary: String,

    pub linkedin_url: String,

    pub github_url: String,

    pub email: String,

    pub phone: String,

    pub location: String,

    pub leetcode_problems: i32,

    pub leetcode_rating: i32,

    pub years_experience: i32,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl From<Model> for PersonalInfo {
    fn from(model: Model) -> Self {
        PersonalInfo {
            id: model.id,
            name: model.name,
            title: model.title,
            summary: model.summary,
            linkedin_url: model.linkedin_url,
            github_url: model.github_url,
            email: model.email,
            phone: model.phone,
            location: model.location,
            leetcode_problems: model.leetcode_problems,
            leetcode_rating: model.leetcode_rating,
            years_experience: model.years_experience,
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
        if let ActiveValue::Set(email) = &self.email {
            self.email = Set(email.trim().to_string());
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
