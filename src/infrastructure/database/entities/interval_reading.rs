//! IntervalReading entity (usage schema)

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "interval_readings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub interval_block_id: Uuid,
    pub time_period_start: Option<i64>,
    pub time_period_duration: Option<i64>,
    pub value: Option<i64>,
    pub cost: Option<i64>,
    pub consumption_tier: Option<i32>,
    pub tou: Option<i32>,
    pub cpp: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::interval_block::Entity",
        from = "Column::IntervalBlockId",
        to = "super::interval_block::Column::Id"
    )]
    IntervalBlock,
}

impl Related<super::interval_block::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::IntervalBlock.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
