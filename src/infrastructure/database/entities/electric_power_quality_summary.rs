//! ElectricPowerQualitySummary entity (usage schema)

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "electric_power_quality_summaries")]
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
    pub summary_interval_start: Option<i64>,
    pub summary_interval_duration: Option<i64>,
    pub flicker_plt: Option<i64>,
    pub flicker_pst: Option<i64>,
    pub harmonic_voltage: Option<i64>,
    pub long_interruptions: Option<i64>,
    pub mains_voltage: Option<i64>,
    pub measurement_protocol: Option<i16>,
    pub power_frequency: Option<i64>,
    pub rapid_voltage_changes: Option<i64>,
    pub short_interruptions: Option<i64>,
    pub supply_voltage_dips: Option<i64>,
    pub supply_voltage_imbalance: Option<i64>,
    pub supply_voltage_variations: Option<i64>,
    pub temp_overvoltage: Option<i64>,
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
