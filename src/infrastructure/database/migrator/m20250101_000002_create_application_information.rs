//! Create application_information and its element tables (usage schema)

use sea_orm_migration::prelude::*;

use super::columns;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut table = Table::create();
        table.table(ApplicationInformation::Table).if_not_exists();
        columns::identified_object(&mut table)
            .col(ColumnDef::new(ApplicationInformation::ClientId).string().not_null())
            .col(ColumnDef::new(ApplicationInformation::ClientSecret).string())
            .col(ColumnDef::new(ApplicationInformation::ClientName).string())
            .col(ColumnDef::new(ApplicationInformation::ClientIdIssuedAt).big_integer())
            .col(ColumnDef::new(ApplicationInformation::ClientSecretExpiresAt).big_integer())
            .col(ColumnDef::new(ApplicationInformation::DataCustodianId).string())
            .col(ColumnDef::new(ApplicationInformation::DataCustodianApplicationStatus).integer())
            .col(ColumnDef::new(ApplicationInformation::ThirdPartyApplicationDescription).string())
            .col(ColumnDef::new(ApplicationInformation::ThirdPartyApplicationStatus).integer())
            .col(ColumnDef::new(ApplicationInformation::ThirdPartyApplicationType).integer())
            .col(ColumnDef::new(ApplicationInformation::ThirdPartyApplicationUse).integer())
            .col(ColumnDef::new(ApplicationInformation::ThirdPartyPhone).string())
            .col(ColumnDef::new(ApplicationInformation::AuthorizationServerUri).string())
            .col(ColumnDef::new(ApplicationInformation::ThirdPartyNotifyUri).string())
            .col(
                ColumnDef::new(ApplicationInformation::AuthorizationServerAuthorizationEndpoint)
                    .string(),
            )
            .col(ColumnDef::new(ApplicationInformation::AuthorizationServerTokenEndpoint).string())
            .col(ColumnDef::new(ApplicationInformation::DataCustodianBulkRequestUri).string())
            .col(ColumnDef::new(ApplicationInformation::DataCustodianResourceEndpoint).string())
            .col(ColumnDef::new(ApplicationInformation::RedirectUri).string())
            .col(ColumnDef::new(ApplicationInformation::SoftwareId).string())
            .col(ColumnDef::new(ApplicationInformation::SoftwareVersion).string())
            .col(ColumnDef::new(ApplicationInformation::TokenEndpointAuthMethod).string())
            .col(ColumnDef::new(ApplicationInformation::ResponseType).string())
            .col(ColumnDef::new(ApplicationInformation::RegistrationAccessToken).string())
            .col(ColumnDef::new(ApplicationInformation::RegistrationClientUri).string());
        manager.create_table(table.to_owned()).await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_application_information_client_id")
                    .table(ApplicationInformation::Table)
                    .col(ApplicationInformation::ClientId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        let mut scopes = Table::create();
        scopes.table(ApplicationInformationScopes::Table).if_not_exists();
        columns::serial_id(&mut scopes, ApplicationInformationScopes::Id)
            .col(
                ColumnDef::new(ApplicationInformationScopes::ApplicationInformationId)
                    .uuid()
                    .not_null(),
            )
            .col(ColumnDef::new(ApplicationInformationScopes::Scope).string().not_null())
            .foreign_key(&mut columns::references(
                "fk_application_information_scopes_owner",
                ApplicationInformationScopes::Table,
                ApplicationInformationScopes::ApplicationInformationId,
                ApplicationInformation::Table,
                ForeignKeyAction::Cascade,
            ));
        manager.create_table(scopes.to_owned()).await?;

        let mut grant_types = Table::create();
        grant_types
            .table(ApplicationInformationGrantTypes::Table)
            .if_not_exists();
        columns::serial_id(&mut grant_types, ApplicationInformationGrantTypes::Id)
            .col(
                ColumnDef::new(ApplicationInformationGrantTypes::ApplicationInformationId)
                    .uuid()
                    .not_null(),
            )
            .col(
                ColumnDef::new(ApplicationInformationGrantTypes::GrantType)
                    .string()
                    .not_null(),
            )
            .foreign_key(&mut columns::references(
                "fk_application_information_grant_types_owner",
                ApplicationInformationGrantTypes::Table,
                ApplicationInformationGrantTypes::ApplicationInformationId,
                ApplicationInformation::Table,
                ForeignKeyAction::Cascade,
            ));
        manager.create_table(grant_types.to_owned()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(ApplicationInformationGrantTypes::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(ApplicationInformationScopes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ApplicationInformation::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum ApplicationInformation {
    Table,
    ClientId,
    ClientSecret,
    ClientName,
    ClientIdIssuedAt,
    ClientSecretExpiresAt,
    DataCustodianId,
    DataCustodianApplicationStatus,
    ThirdPartyApplicationDescription,
    ThirdPartyApplicationStatus,
    ThirdPartyApplicationType,
    ThirdPartyApplicationUse,
    ThirdPartyPhone,
    AuthorizationServerUri,
    ThirdPartyNotifyUri,
    AuthorizationServerAuthorizationEndpoint,
    AuthorizationServerTokenEndpoint,
    DataCustodianBulkRequestUri,
    DataCustodianResourceEndpoint,
    RedirectUri,
    SoftwareId,
    SoftwareVersion,
    TokenEndpointAuthMethod,
    ResponseType,
    RegistrationAccessToken,
    RegistrationClientUri,
}

#[derive(Iden)]
enum ApplicationInformationScopes {
    Table,
    Id,
    ApplicationInformationId,
    Scope,
}

#[derive(Iden)]
enum ApplicationInformationGrantTypes {
    Table,
    Id,
    ApplicationInformationId,
    GrantType,
}
