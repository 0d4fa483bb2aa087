use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "experience_technologies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub experience_id: Uuid,

    #[sea_orm(primary_key, auto_increment = false)]
    pub technology_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::experiences::Entity",
        from = "Column::ExperienceId",
        to = "super::experiences::Column::Id",
        on_delete = "Cascade"
    )]
    Experiences,

    #[sea_orm(
        belongs_to = "crate::modules::technology::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::TechnologyId",
        to = "crate::modules::technology::adapter::outgoing::sea_orm_entity::Column::Id",
        on_delete = "Cascade"
    )]
    Technologies,
}

impl Related<super::experiences::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Experiences.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
