//! ReadingType entity (usage schema)

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reading_types")]
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
    pub accumulation_behaviour: Option<i32>,
    pub commodity: Option<i32>,
    pub consumption_tier: Option<i32>,
    pub currency: Option<i32>,
    pub data_qualifier: Option<i32>,
    pub default_quality: Option<i32>,
    pub flow_direction: Option<i32>,
    pub interval_length: Option<i64>,
    pub kind: Option<i32>,
    pub phase: Option<i32>,
    pub power_of_ten_multiplier: Option<i32>,
    pub time_attribute: Option<i32>,
    pub tou: Option<i32>,
    pub uom: Option<i32>,
    pub cpp: Option<i32>,
    pub interharmonic_numerator: Option<i64>,
    pub interharmonic_denominator: Option<i64>,
    pub measuring_period: Option<i32>,
    pub argument_numerator: Option<i64>,
    pub argument_denominator: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
