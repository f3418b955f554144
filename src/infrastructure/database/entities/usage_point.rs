//! UsagePoint entity (usage schema)

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "usage_points")]
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
    /// Hex-encoded role flag bytes
    pub role_flags: Option<String>,
    pub service_category: Option<i32>,
    pub status: Option<i16>,
    pub uri: Option<String>,
    pub ami_billing_ready: Option<String>,
    pub check_billing: Option<bool>,
    pub connection_state: Option<String>,
    pub estimated_load_multiplier: Option<i32>,
    pub estimated_load_uom: Option<i32>,
    pub estimated_load_value: Option<i64>,
    pub estimated_load_time_stamp: Option<i64>,
    pub estimated_load_reading_type_ref: Option<String>,
    pub grounded: Option<bool>,
    pub is_sdp: Option<bool>,
    pub is_virtual: Option<bool>,
    pub minimal_usage_expected: Option<bool>,
    pub nominal_service_voltage_multiplier: Option<i32>,
    pub nominal_service_voltage_uom: Option<i32>,
    pub nominal_service_voltage_value: Option<i64>,
    pub nominal_service_voltage_time_stamp: Option<i64>,
    pub nominal_service_voltage_reading_type_ref: Option<String>,
    pub outage_region: Option<String>,
    pub phase_code: Option<i32>,
    pub rated_current_multiplier: Option<i32>,
    pub rated_current_uom: Option<i32>,
    pub rated_current_value: Option<i64>,
    pub rated_current_time_stamp: Option<i64>,
    pub rated_current_reading_type_ref: Option<String>,
    pub rated_power_multiplier: Option<i32>,
    pub rated_power_uom: Option<i32>,
    pub rated_power_value: Option<i64>,
    pub rated_power_time_stamp: Option<i64>,
    pub rated_power_reading_type_ref: Option<String>,
    pub read_cycle: Option<String>,
    pub read_route: Option<String>,
    pub service_delivery_remark: Option<String>,
    pub service_priority: Option<String>,
    pub retail_customer_id: Option<Uuid>,
    pub service_delivery_point_id: Option<Uuid>,
    /// TimeConfiguration used for local time
    pub local_time_parameters_id: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::retail_customer::Entity",
        from = "Column::RetailCustomerId",
        to = "super::retail_customer::Column::Id"
    )]
    RetailCustomer,
    #[sea_orm(
        belongs_to = "super::service_delivery_point::Entity",
        from = "Column::ServiceDeliveryPointId",
        to = "super::service_delivery_point::Column::Id"
    )]
    ServiceDeliveryPoint,
    #[sea_orm(
        belongs_to = "super::time_configuration::Entity",
        from = "Column::LocalTimeParametersId",
        to = "super::time_configuration::Column::Id"
    )]
    TimeConfiguration,
}

impl Related<super::retail_customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RetailCustomer.def()
    }
}

impl Related<super::service_delivery_point::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ServiceDeliveryPoint.def()
    }
}

impl Related<super::time_configuration::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TimeConfiguration.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
