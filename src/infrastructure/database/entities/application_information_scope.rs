//! Scope granted to an application

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "application_information_scopes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub application_information_id: Uuid,
    pub scope: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::application_information::Entity",
        from = "Column::ApplicationInformationId",
        to = "super::application_information::Column::Id"
    )]
    ApplicationInformation,
}

impl Related<super::application_information::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ApplicationInformation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
