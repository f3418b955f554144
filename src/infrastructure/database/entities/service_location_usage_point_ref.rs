//! Usage point href owned by a service location

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "service_location_usage_point_refs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub service_location_id: Uuid,
    pub usage_point_href: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::service_location::Entity",
        from = "Column::ServiceLocationId",
        to = "super::service_location::Column::Id"
    )]
    ServiceLocation,
}

impl Related<super::service_location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ServiceLocation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
