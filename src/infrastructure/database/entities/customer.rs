//! Customer entity (customer schema)

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "customers")]
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
    pub organisation_name: Option<String>,
    pub organisation_address_street_number: Option<String>,
    pub organisation_address_street_name: Option<String>,
    pub organisation_address_street_suffix: Option<String>,
    pub organisation_address_suite_number: Option<String>,
    pub organisation_address_town_code: Option<String>,
    pub organisation_address_town_name: Option<String>,
    pub organisation_address_state_or_province: Option<String>,
    pub organisation_address_country: Option<String>,
    pub organisation_address_postal_code: Option<String>,
    pub organisation_address_status_value: Option<String>,
    pub organisation_address_status_date_time: Option<i64>,
    pub organisation_address_status_remark: Option<String>,
    pub organisation_address_status_reason: Option<String>,
    pub organisation_phone1_country_code: Option<String>,
    pub organisation_phone1_area_code: Option<String>,
    pub organisation_phone1_local_number: Option<String>,
    pub organisation_phone1_ext: Option<String>,
    pub organisation_electronic_address_email1: Option<String>,
    pub organisation_electronic_address_email2: Option<String>,
    pub organisation_electronic_address_web: Option<String>,
    pub organisation_electronic_address_lan: Option<String>,
    pub kind: Option<String>,
    pub special_need: Option<String>,
    pub vip: bool,
    pub puc_number: Option<String>,
    pub status_value: Option<String>,
    pub status_date_time: Option<i64>,
    pub status_remark: Option<String>,
    pub status_reason: Option<String>,
    pub priority_value: Option<i32>,
    pub priority_rank: Option<i32>,
    pub priority_type: Option<String>,
    pub locale: Option<String>,
    pub customer_name: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
