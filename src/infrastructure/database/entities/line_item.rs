//! Billing line item owned by a usage summary

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "line_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub usage_summary_id: Uuid,
    pub amount: i64,
    pub rounding: Option<i64>,
    pub date_time: i64,
    pub note: String,
    pub measurement_multiplier: Option<i32>,
    pub measurement_uom: Option<i32>,
    pub measurement_value: Option<i64>,
    pub measurement_time_stamp: Option<i64>,
    pub measurement_reading_type_ref: Option<String>,
    pub item_kind: Option<i32>,
    pub unit_cost: Option<i64>,
    pub item_period_start: Option<i64>,
    pub item_period_duration: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::usage_summary::Entity",
        from = "Column::UsageSummaryId",
        to = "super::usage_summary::Column::Id"
    )]
    UsageSummary,
}

impl Related<super::usage_summary::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UsageSummary.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
