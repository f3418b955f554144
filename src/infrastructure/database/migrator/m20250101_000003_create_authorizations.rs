//! Create authorizations table (usage schema)

use sea_orm_migration::prelude::*;

use super::columns;
use super::m20250101_000001_create_retail_customers::RetailCustomers;
use super::m20250101_000002_create_application_information::ApplicationInformation;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut table = Table::create();
        table.table(Authorizations::Table).if_not_exists();
        columns::identified_object(&mut table);
        columns::interval(&mut table, "authorized_period");
        columns::interval(&mut table, "published_period");
        table
            .col(ColumnDef::new(Authorizations::AccessToken).string())
            .col(ColumnDef::new(Authorizations::RefreshToken).string())
            .col(ColumnDef::new(Authorizations::AuthorizationUri).string())
            .col(ColumnDef::new(Authorizations::ResourceUri).string())
            .col(ColumnDef::new(Authorizations::CustomerResourceUri).string())
            .col(ColumnDef::new(Authorizations::Scope).string())
            .col(ColumnDef::new(Authorizations::State).string())
            .col(ColumnDef::new(Authorizations::Status).integer())
            .col(ColumnDef::new(Authorizations::ExpiresIn).big_integer())
            .col(ColumnDef::new(Authorizations::GrantType).string())
            .col(ColumnDef::new(Authorizations::ResponseType).string())
            .col(ColumnDef::new(Authorizations::TokenType).string())
            .col(ColumnDef::new(Authorizations::Error).string())
            .col(ColumnDef::new(Authorizations::ErrorDescription).string())
            .col(ColumnDef::new(Authorizations::ErrorUri).string())
            .col(ColumnDef::new(Authorizations::ThirdParty).string())
            .col(ColumnDef::new(Authorizations::Code).string())
            .col(ColumnDef::new(Authorizations::ApplicationInformationId).uuid())
            .col(ColumnDef::new(Authorizations::RetailCustomerId).uuid())
            .foreign_key(&mut columns::references(
                "fk_authorizations_application_information",
                Authorizations::Table,
                Authorizations::ApplicationInformationId,
                ApplicationInformation::Table,
                ForeignKeyAction::SetNull,
            ))
            .foreign_key(&mut columns::references(
                "fk_authorizations_retail_customer",
                Authorizations::Table,
                Authorizations::RetailCustomerId,
                RetailCustomers::Table,
                ForeignKeyAction::SetNull,
            ));
        manager.create_table(table.to_owned()).await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_authorizations_access_token")
                    .table(Authorizations::Table)
                    .col(Authorizations::AccessToken)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_authorizations_retail_customer")
                    .table(Authorizations::Table)
                    .col(Authorizations::RetailCustomerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Authorizations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Authorizations {
    Table,
    AccessToken,
    RefreshToken,
    AuthorizationUri,
    ResourceUri,
    CustomerResourceUri,
    Scope,
    State,
    Status,
    ExpiresIn,
    GrantType,
    ResponseType,
    TokenType,
    Error,
    ErrorDescription,
    ErrorUri,
    ThirdParty,
    Code,
    ApplicationInformationId,
    RetailCustomerId,
}
