//! Create time_configurations and service_delivery_points tables (usage schema)

use sea_orm_migration::prelude::*;

use super::columns;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut time_configurations = Table::create();
        time_configurations
            .table(TimeConfigurations::Table)
            .if_not_exists();
        // DST rules are stored hex-encoded.
        columns::identified_object(&mut time_configurations)
            .col(ColumnDef::new(TimeConfigurations::DstEndRule).string())
            .col(ColumnDef::new(TimeConfigurations::DstOffset).big_integer())
            .col(ColumnDef::new(TimeConfigurations::DstStartRule).string())
            .col(ColumnDef::new(TimeConfigurations::TzOffset).big_integer());
        manager.create_table(time_configurations.to_owned()).await?;

        let mut service_delivery_points = Table::create();
        service_delivery_points
            .table(ServiceDeliveryPoints::Table)
            .if_not_exists();
        columns::identified_object(&mut service_delivery_points)
            .col(ColumnDef::new(ServiceDeliveryPoints::Name).string())
            .col(ColumnDef::new(ServiceDeliveryPoints::TariffProfile).string())
            .col(ColumnDef::new(ServiceDeliveryPoints::CustomerAgreement).string());
        manager.create_table(service_delivery_points.to_owned()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServiceDeliveryPoints::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TimeConfigurations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum TimeConfigurations {
    Table,
    DstEndRule,
    DstOffset,
    DstStartRule,
    TzOffset,
}

#[derive(Iden)]
pub enum ServiceDeliveryPoints {
    Table,
    Name,
    TariffProfile,
    CustomerAgreement,
}
