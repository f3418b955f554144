//! Create usage_points and node reference tables (usage schema)

use sea_orm_migration::prelude::*;

use super::columns;
use super::m20250101_000001_create_retail_customers::RetailCustomers;
use super::m20250101_000005_create_reference_data::{ServiceDeliveryPoints, TimeConfigurations};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut table = Table::create();
        table.table(UsagePoints::Table).if_not_exists();
        columns::identified_object(&mut table)
            .col(ColumnDef::new(UsagePoints::RoleFlags).string())
            .col(ColumnDef::new(UsagePoints::ServiceCategory).integer())
            .col(ColumnDef::new(UsagePoints::Status).small_integer())
            .col(ColumnDef::new(UsagePoints::Uri).string())
            .col(ColumnDef::new(UsagePoints::AmiBillingReady).string())
            .col(ColumnDef::new(UsagePoints::CheckBilling).boolean())
            .col(ColumnDef::new(UsagePoints::ConnectionState).string())
            .col(ColumnDef::new(UsagePoints::Grounded).boolean())
            .col(ColumnDef::new(UsagePoints::IsSdp).boolean())
            .col(ColumnDef::new(UsagePoints::IsVirtual).boolean())
            .col(ColumnDef::new(UsagePoints::MinimalUsageExpected).boolean())
            .col(ColumnDef::new(UsagePoints::OutageRegion).string())
            .col(ColumnDef::new(UsagePoints::PhaseCode).integer())
            .col(ColumnDef::new(UsagePoints::ReadCycle).string())
            .col(ColumnDef::new(UsagePoints::ReadRoute).string())
            .col(ColumnDef::new(UsagePoints::ServiceDeliveryRemark).string())
            .col(ColumnDef::new(UsagePoints::ServicePriority).string())
            .col(ColumnDef::new(UsagePoints::RetailCustomerId).uuid())
            .col(ColumnDef::new(UsagePoints::ServiceDeliveryPointId).uuid())
            .col(ColumnDef::new(UsagePoints::LocalTimeParametersId).uuid());
        columns::measurement(&mut table, "estimated_load");
        columns::measurement(&mut table, "nominal_service_voltage");
        columns::measurement(&mut table, "rated_current");
        columns::measurement(&mut table, "rated_power");
        table
            .foreign_key(&mut columns::references(
                "fk_usage_points_retail_customer",
                UsagePoints::Table,
                UsagePoints::RetailCustomerId,
                RetailCustomers::Table,
                ForeignKeyAction::SetNull,
            ))
            .foreign_key(&mut columns::references(
                "fk_usage_points_service_delivery_point",
                UsagePoints::Table,
                UsagePoints::ServiceDeliveryPointId,
                ServiceDeliveryPoints::Table,
                ForeignKeyAction::SetNull,
            ))
            .foreign_key(&mut columns::references(
                "fk_usage_points_local_time_parameters",
                UsagePoints::Table,
                UsagePoints::LocalTimeParametersId,
                TimeConfigurations::Table,
                ForeignKeyAction::SetNull,
            ));
        manager.create_table(table.to_owned()).await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_usage_points_retail_customer")
                    .table(UsagePoints::Table)
                    .col(UsagePoints::RetailCustomerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(node_ref_table(
                UsagePointPnodeRefs::Table,
                UsagePointPnodeRefs::ApnodeType,
                "fk_usage_point_pnode_refs_owner",
            ))
            .await?;

        manager
            .create_table(node_ref_table(
                UsagePointAggregateNodeRefs::Table,
                UsagePointAggregateNodeRefs::AnodeType,
                "fk_usage_point_aggregate_node_refs_owner",
            ))
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(UsagePointAggregateNodeRefs::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(UsagePointPnodeRefs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UsagePoints::Table).to_owned())
            .await
    }
}

/// Pricing and aggregate node references share one layout.
fn node_ref_table<T, K>(table: T, kind: K, fk_name: &str) -> TableCreateStatement
where
    T: IntoIden + Copy + 'static,
    K: IntoIden,
{
    let mut statement = Table::create();
    statement.table(table).if_not_exists();
    columns::serial_id(&mut statement, NodeRef::Id)
        .col(ColumnDef::new(NodeRef::UsagePointId).uuid().not_null())
        .col(ColumnDef::new(kind).string().not_null())
        .col(ColumnDef::new(NodeRef::Reference).string().not_null())
        .col(ColumnDef::new(NodeRef::StartEffectiveDate).big_integer())
        .col(ColumnDef::new(NodeRef::EndEffectiveDate).big_integer())
        .foreign_key(&mut columns::references(
            fk_name,
            table,
            NodeRef::UsagePointId,
            UsagePoints::Table,
            ForeignKeyAction::Cascade,
        ));
    statement.to_owned()
}

#[derive(Iden)]
pub enum UsagePoints {
    Table,
    RoleFlags,
    ServiceCategory,
    Status,
    Uri,
    AmiBillingReady,
    CheckBilling,
    ConnectionState,
    Grounded,
    IsSdp,
    IsVirtual,
    MinimalUsageExpected,
    OutageRegion,
    PhaseCode,
    ReadCycle,
    ReadRoute,
    ServiceDeliveryRemark,
    ServicePriority,
    RetailCustomerId,
    ServiceDeliveryPointId,
    LocalTimeParametersId,
}

#[derive(Iden, Clone, Copy)]
enum UsagePointPnodeRefs {
    Table,
    ApnodeType,
}

#[derive(Iden, Clone, Copy)]
enum UsagePointAggregateNodeRefs {
    Table,
    AnodeType,
}

#[derive(Iden)]
enum NodeRef {
    Id,
    UsagePointId,
    Reference,
    StartEffectiveDate,
    EndEffectiveDate,
}
