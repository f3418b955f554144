//! Database migrations module
//!
//! Tables of the "usage" and "customer" logical schemas, created in
//! foreign-key order. Both schemas live in the connection's default
//! namespace; each migration names the schema its tables belong to.

pub use sea_orm_migration::prelude::*;

mod columns;
mod m20250101_000001_create_retail_customers;
mod m20250101_000002_create_application_information;
mod m20250101_000003_create_authorizations;
mod m20250101_000004_create_reading_types;
mod m20250101_000005_create_reference_data;
mod m20250101_000006_create_usage_points;
mod m20250101_000007_create_meter_readings;
mod m20250101_000008_create_usage_summaries;
mod m20250101_000009_create_subscriptions;
mod m20250101_000010_create_customers;
mod m20250101_000011_create_customer_agreements;
mod m20250101_000012_create_service_locations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_retail_customers::Migration),
            Box::new(m20250101_000002_create_application_information::Migration),
            Box::new(m20250101_000003_create_authorizations::Migration),
            Box::new(m20250101_000004_create_reading_types::Migration),
            Box::new(m20250101_000005_create_reference_data::Migration),
            Box::new(m20250101_000006_create_usage_points::Migration),
            Box::new(m20250101_000007_create_meter_readings::Migration),
            Box::new(m20250101_000008_create_usage_summaries::Migration),
            Box::new(m20250101_000009_create_subscriptions::Migration),
            Box::new(m20250101_000010_create_customers::Migration),
            Box::new(m20250101_000011_create_customer_agreements::Migration),
            Box::new(m20250101_000012_create_service_locations::Migration),
        ]
    }
}
