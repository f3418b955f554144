//! UsageSummary entity (usage schema)

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "usage_summaries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub description: Option<String>,
    pub published: Option<DateTimeUtc>,
    pub updated: Option<DateTimeUtc>,
    pub self_link_href: Option<String>,
    pub self_link_rel: Option<String>,
    pub up_link_href: Option<String>,
    pub up_link_rel: Option<String>,
    pub usage_point_id: Uuid,
    pub position: i32,
    pub billing_period_start: Option<i64>,
    pub billing_period_duration: Option<i64>,
    pub bill_last_period: Option<i64>,
    pub bill_to_date: Option<i64>,
    pub cost_additional_last_period: Option<i64>,
    pub currency: Option<i32>,
    pub quality_of_reading: Option<i32>,
    pub status_time_stamp: Option<i64>,
    pub ratchet_demand_period_start: Option<i64>,
    pub ratchet_demand_period_duration: Option<i64>,
    pub overall_consumption_last_period_multiplier: Option<i32>,
    pub overall_consumption_last_period_uom: Option<i32>,
    pub overall_consumption_last_period_value: Option<i64>,
    pub overall_consumption_last_period_time_stamp: Option<i64>,
    pub overall_consumption_last_period_reading_type_ref: Option<String>,
    pub current_billing_period_overall_consumption_multiplier: Option<i32>,
    pub current_billing_period_overall_consumption_uom: Option<i32>,
    pub current_billing_period_overall_consumption_value: Option<i64>,
    pub current_billing_period_overall_consumption_time_stamp: Option<i64>,
    pub current_billing_period_overall_consumption_reading_type_ref: Option<String>,
    pub current_day_net_consumption_multiplier: Option<i32>,
    pub current_day_net_consumption_uom: Option<i32>,
    pub current_day_net_consumption_value: Option<i64>,
    pub current_day_net_consumption_time_stamp: Option<i64>,
    pub current_day_net_consumption_reading_type_ref: Option<String>,
    pub current_day_overall_consumption_multiplier: Option<i32>,
    pub current_day_overall_consumption_uom: Option<i32>,
    pub current_day_overall_consumption_value: Option<i64>,
    pub current_day_overall_consumption_time_stamp: Option<i64>,
    pub current_day_overall_consumption_reading_type_ref: Option<String>,
    pub peak_demand_multiplier: Option<i32>,
    pub peak_demand_uom: Option<i32>,
    pub peak_demand_value: Option<i64>,
    pub peak_demand_time_stamp: Option<i64>,
    pub peak_demand_reading_type_ref: Option<String>,
    pub ratchet_demand_multiplier: Option<i32>,
    pub ratchet_demand_uom: Option<i32>,
    pub ratchet_demand_value: Option<i64>,
    pub ratchet_demand_time_stamp: Option<i64>,
    pub ratchet_demand_reading_type_ref: Option<String>,
    pub billing_charge_source_agency_name: Option<String>,
    pub tariff_profile: Option<String>,
    pub read_cycle: Option<String>,
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
