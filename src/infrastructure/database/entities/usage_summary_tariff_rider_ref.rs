//! Tariff rider reference owned by a usage summary

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "usage_summary_tariff_rider_refs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub usage_summary_id: Uuid,
    pub rider_type: String,
    pub enrollment_status: String,
    pub effective_date: i64,
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
