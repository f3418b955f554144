//! Create retail_customers table (usage schema)

use sea_orm_migration::prelude::*;

use super::columns;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut table = Table::create();
        table.table(RetailCustomers::Table).if_not_exists();
        columns::identified_object(&mut table)
            .col(ColumnDef::new(RetailCustomers::Username).string().not_null())
            .col(ColumnDef::new(RetailCustomers::FirstName).string())
            .col(ColumnDef::new(RetailCustomers::LastName).string())
            .col(ColumnDef::new(RetailCustomers::Password).string())
            .col(
                ColumnDef::new(RetailCustomers::Enabled)
                    .boolean()
                    .not_null()
                    .default(true),
            )
            .col(ColumnDef::new(RetailCustomers::Role).string().not_null())
            .col(ColumnDef::new(RetailCustomers::Email).string())
            .col(ColumnDef::new(RetailCustomers::Phone).string())
            .col(ColumnDef::new(RetailCustomers::AccountCreated).big_integer())
            .col(ColumnDef::new(RetailCustomers::LastLogin).big_integer())
            .col(
                ColumnDef::new(RetailCustomers::AccountLocked)
                    .boolean()
                    .not_null()
                    .default(false),
            )
            .col(
                ColumnDef::new(RetailCustomers::FailedLoginAttempts)
                    .integer()
                    .not_null()
                    .default(0),
            );
        manager.create_table(table.to_owned()).await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_retail_customers_username")
                    .table(RetailCustomers::Table)
                    .col(RetailCustomers::Username)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RetailCustomers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum RetailCustomers {
    Table,
    Username,
    FirstName,
    LastName,
    Password,
    Enabled,
    Role,
    Email,
    Phone,
    AccountCreated,
    LastLogin,
    AccountLocked,
    FailedLoginAttempts,
}
