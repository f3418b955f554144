//! Aggregate node reference owned by a usage point

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "usage_point_aggregate_node_refs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub usage_point_id: Uuid,
    pub anode_type: String,
    pub reference: String,
    pub start_effective_date: Option<i64>,
    pub end_effective_date: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::usage_point::Entity",
        from = "Column::UsagePointId",
        to = "super::usage_point::Column::Id"
    )]
    UsagePoint,
}

impl Related<super::usage_point::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UsagePoint.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
