//! Database entities module
//!
//! One entity per table. Value objects are flattened into prefixed
//! columns; coded kinds are stored as their numeric or string code.

pub mod application_information;
pub mod application_information_grant_type;
pub mod application_information_scope;
pub mod authorization;
pub mod customer;
pub mod customer_account;
pub mod customer_account_notification;
pub mod customer_agreement;
pub mod customer_agreement_demand_response_program;
pub mod customer_agreement_future_status;
pub mod customer_agreement_pricing_structure;
pub mod electric_power_quality_summary;
pub mod end_device;
pub mod interval_block;
pub mod interval_reading;
pub mod line_item;
pub mod meter_reading;
pub mod reading_quality;
pub mod reading_type;
pub mod retail_customer;
pub mod service_delivery_point;
pub mod service_location;
pub mod service_location_position_point;
pub mod service_location_usage_point_ref;
pub mod service_supplier;
pub mod subscription;
pub mod subscription_usage_point;
pub mod time_configuration;
pub mod usage_point;
pub mod usage_point_aggregate_node_ref;
pub mod usage_point_pnode_ref;
pub mod usage_summary;
pub mod usage_summary_tariff_rider_ref;
