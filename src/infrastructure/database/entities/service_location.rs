//! ServiceLocation entity (customer schema)

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "service_locations")]
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
    pub location_type: Option<String>,
    pub main_address_street_number: Option<String>,
    pub main_address_street_name: Option<String>,
    pub main_address_street_suffix: Option<String>,
    pub main_address_suite_number: Option<String>,
    pub main_address_town_code: Option<String>,
    pub main_address_town_name: Option<String>,
    pub main_address_state_or_province: Option<String>,
    pub main_address_country: Option<String>,
    pub main_address_postal_code: Option<String>,
    pub main_address_status_value: Option<String>,
    pub main_address_status_date_time: Option<i64>,
    pub main_address_status_remark: Option<String>,
    pub main_address_status_reason: Option<String>,
    pub phone1_country_code: Option<String>,
    pub phone1_area_code: Option<String>,
    pub phone1_local_number: Option<String>,
    pub phone1_ext: Option<String>,
    pub electronic_address_email1: Option<String>,
    pub electronic_address_email2: Option<String>,
    pub electronic_address_web: Option<String>,
    pub electronic_address_lan: Option<String>,
    pub geo_info_reference: Option<String>,
    pub direction: Option<String>,
    pub status_value: Option<String>,
    pub status_date_time: Option<i64>,
    pub status_remark: Option<String>,
    pub status_reason: Option<String>,
    pub access_method: Option<String>,
    pub site_access_problem: Option<String>,
    pub needs_inspection: bool,
    pub outage_block: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
