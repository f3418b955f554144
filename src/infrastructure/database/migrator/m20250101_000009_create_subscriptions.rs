//! Create subscriptions and subscription_usage_points tables (usage schema)

use sea_orm_migration::prelude::*;

use super::columns;
use super::m20250101_000001_create_retail_customers::RetailCustomers;
use super::m20250101_000002_create_application_information::ApplicationInformation;
use super::m20250101_000003_create_authorizations::Authorizations;
use super::m20250101_000006_create_usage_points::UsagePoints;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // All three links are mandatory; the retail customer owns its
        // subscriptions, the application and authorization must outlive them.
        let mut table = Table::create();
        table.table(Subscriptions::Table).if_not_exists();
        columns::identified_object(&mut table)
            .col(ColumnDef::new(Subscriptions::HashedId).string().not_null())
            .col(ColumnDef::new(Subscriptions::LastUpdate).timestamp_with_time_zone())
            .col(
                ColumnDef::new(Subscriptions::ApplicationInformationId)
                    .uuid()
                    .not_null(),
            )
            .col(ColumnDef::new(Subscriptions::AuthorizationId).uuid().not_null())
            .col(ColumnDef::new(Subscriptions::RetailCustomerId).uuid().not_null())
            .foreign_key(&mut columns::references(
                "fk_subscriptions_application_information",
                Subscriptions::Table,
                Subscriptions::ApplicationInformationId,
                ApplicationInformation::Table,
                ForeignKeyAction::Restrict,
            ))
            .foreign_key(&mut columns::references(
                "fk_subscriptions_authorization",
                Subscriptions::Table,
                Subscriptions::AuthorizationId,
                Authorizations::Table,
                ForeignKeyAction::Restrict,
            ))
            .foreign_key(&mut columns::references(
                "fk_subscriptions_retail_customer",
                Subscriptions::Table,
                Subscriptions::RetailCustomerId,
                RetailCustomers::Table,
                ForeignKeyAction::Cascade,
            ));
        manager.create_table(table.to_owned()).await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_subscriptions_hashed_id")
                    .table(Subscriptions::Table)
                    .col(Subscriptions::HashedId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        let mut usage_points = Table::create();
        usage_points.table(SubscriptionUsagePoints::Table).if_not_exists();
        columns::serial_id(&mut usage_points, SubscriptionUsagePoints::Id)
            .col(
                ColumnDef::new(SubscriptionUsagePoints::SubscriptionId)
                    .uuid()
                    .not_null(),
            )
            .col(
                ColumnDef::new(SubscriptionUsagePoints::UsagePointId)
                    .uuid()
                    .not_null(),
            )
            .foreign_key(&mut columns::references(
                "fk_subscription_usage_points_subscription",
                SubscriptionUsagePoints::Table,
                SubscriptionUsagePoints::SubscriptionId,
                Subscriptions::Table,
                ForeignKeyAction::Cascade,
            ))
            .foreign_key(&mut columns::references(
                "fk_subscription_usage_points_usage_point",
                SubscriptionUsagePoints::Table,
                SubscriptionUsagePoints::UsagePointId,
                UsagePoints::Table,
                ForeignKeyAction::Cascade,
            ));
        manager.create_table(usage_points.to_owned()).await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_subscription_usage_points_pair")
                    .table(SubscriptionUsagePoints::Table)
                    .col(SubscriptionUsagePoints::SubscriptionId)
                    .col(SubscriptionUsagePoints::UsagePointId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SubscriptionUsagePoints::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Subscriptions::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Subscriptions {
    Table,
    HashedId,
    LastUpdate,
    ApplicationInformationId,
    AuthorizationId,
    RetailCustomerId,
}

#[derive(Iden)]
enum SubscriptionUsagePoints {
    Table,
    Id,
    SubscriptionId,
    UsagePointId,
}
