use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};

use crate::modules::certification::application::domain::entities::Certification;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "certifications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub name: String,

    pub issuer: String,

    pub issue_date: Date,

    pub expiry_date: Option<Date>,

    pub credential_url: String,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl From<Model> for Certification {
    fn from(model: Model) -> Self {
        Certification {
            id: model.id,
            name: model.name,
            issuer: model.issuer,
            issue_date: model.issue_date,
            expiry_date: model.expiry_date,
            credential_url: model.credential_url,
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
