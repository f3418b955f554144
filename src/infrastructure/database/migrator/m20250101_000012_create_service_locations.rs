//! Create service_locations, their owned collections and end_devices
//! (customer schema)

use sea_orm_migration::prelude::*;

use super::columns;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut locations = Table::create();
        locations.table(ServiceLocations::Table).if_not_exists();
        columns::identified_object(&mut locations)
            .col(ColumnDef::new(ServiceLocations::LocationType).string())
            .col(ColumnDef::new(ServiceLocations::GeoInfoReference).string())
            .col(ColumnDef::new(ServiceLocations::Direction).string())
            .col(ColumnDef::new(ServiceLocations::AccessMethod).string())
            .col(ColumnDef::new(ServiceLocations::SiteAccessProblem).string())
            .col(
                ColumnDef::new(ServiceLocations::NeedsInspection)
                    .boolean()
                    .not_null()
                    .default(false),
            )
            .col(ColumnDef::new(ServiceLocations::OutageBlock).string());
        columns::street_address(&mut locations, "main_address");
        columns::telephone(&mut locations, "phone1");
        columns::electronic_address(&mut locations, "electronic_address");
        columns::status(&mut locations, "status");
        manager.create_table(locations.to_owned()).await?;

        let mut points = Table::create();
        points
            .table(ServiceLocationPositionPoints::Table)
            .if_not_exists();
        columns::serial_id(&mut points, OwnedByLocation::Id)
            .col(ColumnDef::new(OwnedByLocation::ServiceLocationId).uuid().not_null())
            .col(
                ColumnDef::new(ServiceLocationPositionPoints::XPosition)
                    .string()
                    .not_null(),
            )
            .col(
                ColumnDef::new(ServiceLocationPositionPoints::YPosition)
                    .string()
                    .not_null(),
            )
            .col(ColumnDef::new(ServiceLocationPositionPoints::ZPosition).string())
            .foreign_key(&mut columns::references(
                "fk_service_location_position_points_owner",
                ServiceLocationPositionPoints::Table,
                OwnedByLocation::ServiceLocationId,
                ServiceLocations::Table,
                ForeignKeyAction::Cascade,
            ));
        manager.create_table(points.to_owned()).await?;

        let mut refs = Table::create();
        refs.table(ServiceLocationUsagePointRefs::Table).if_not_exists();
        columns::serial_id(&mut refs, OwnedByLocation::Id)
            .col(ColumnDef::new(OwnedByLocation::ServiceLocationId).uuid().not_null())
            .col(
                ColumnDef::new(ServiceLocationUsagePointRefs::UsagePointHref)
                    .string()
                    .not_null(),
            )
            .foreign_key(&mut columns::references(
                "fk_service_location_usage_point_refs_owner",
                ServiceLocationUsagePointRefs::Table,
                OwnedByLocation::ServiceLocationId,
                ServiceLocations::Table,
                ForeignKeyAction::Cascade,
            ));
        manager.create_table(refs.to_owned()).await?;

        let mut devices = Table::create();
        devices.table(EndDevices::Table).if_not_exists();
        columns::identified_object(&mut devices)
            .col(ColumnDef::new(EndDevices::AssetType).string())
            .col(ColumnDef::new(EndDevices::UtcNumber).string())
            .col(ColumnDef::new(EndDevices::SerialNumber).string())
            .col(ColumnDef::new(EndDevices::LotNumber).string())
            .col(ColumnDef::new(EndDevices::PurchasePrice).big_integer())
            .col(
                ColumnDef::new(EndDevices::Critical)
                    .boolean()
                    .not_null()
                    .default(false),
            )
            .col(ColumnDef::new(EndDevices::InstallationDate).big_integer())
            .col(ColumnDef::new(EndDevices::ManufacturedDate).big_integer())
            .col(
                ColumnDef::new(EndDevices::IsVirtual)
                    .boolean()
                    .not_null()
                    .default(false),
            )
            .col(
                ColumnDef::new(EndDevices::IsPan)
                    .boolean()
                    .not_null()
                    .default(false),
            )
            .col(ColumnDef::new(EndDevices::InstallCode).string())
            .col(ColumnDef::new(EndDevices::AmrSystem).string())
            .col(ColumnDef::new(OwnedByLocation::ServiceLocationId).uuid())
            .foreign_key(&mut columns::references(
                "fk_end_devices_service_location",
                EndDevices::Table,
                OwnedByLocation::ServiceLocationId,
                ServiceLocations::Table,
                ForeignKeyAction::SetNull,
            ));
        columns::electronic_address(&mut devices, "electronic_address");
        columns::status(&mut devices, "status");
        manager.create_table(devices.to_owned()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EndDevices::Table).to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(ServiceLocationUsagePointRefs::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(ServiceLocationPositionPoints::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(ServiceLocations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ServiceLocations {
    Table,
    LocationType,
    GeoInfoReference,
    Direction,
    AccessMethod,
    SiteAccessProblem,
    NeedsInspection,
    OutageBlock,
}

#[derive(Iden)]
enum OwnedByLocation {
    Id,
    ServiceLocationId,
}

#[derive(Iden)]
enum ServiceLocationPositionPoints {
    Table,
    XPosition,
    YPosition,
    ZPosition,
}

#[derive(Iden)]
enum ServiceLocationUsagePointRefs {
    Table,
    UsagePointHref,
}

#[derive(Iden)]
enum EndDevices {
    Table,
    AssetType,
    UtcNumber,
    SerialNumber,
    LotNumber,
    PurchasePrice,
    Critical,
    InstallationDate,
    ManufacturedDate,
    IsVirtual,
    IsPan,
    InstallCode,
    AmrSystem,
}
