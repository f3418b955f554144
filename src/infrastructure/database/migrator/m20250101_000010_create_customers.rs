//! Create customers, service_suppliers, customer_accounts and account
//! notification tables (customer schema)

use sea_orm_migration::prelude::*;

use super::columns;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut customers = Table::create();
        customers.table(Customers::Table).if_not_exists();
        columns::identified_object(&mut customers)
            .col(ColumnDef::new(Customers::Kind).string())
            .col(ColumnDef::new(Customers::SpecialNeed).string())
            .col(ColumnDef::new(Customers::Vip).boolean().not_null().default(false))
            .col(ColumnDef::new(Customers::PucNumber).string())
            .col(ColumnDef::new(Customers::PriorityValue).integer())
            .col(ColumnDef::new(Customers::PriorityRank).integer())
            .col(ColumnDef::new(Customers::PriorityType).string())
            .col(ColumnDef::new(Customers::Locale).string())
            .col(ColumnDef::new(Customers::CustomerName).string());
        columns::organisation(&mut customers, "organisation");
        columns::status(&mut customers, "status");
        manager.create_table(customers.to_owned()).await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_customers_puc_number")
                    .table(Customers::Table)
                    .col(Customers::PucNumber)
                    .to_owned(),
            )
            .await?;

        let mut suppliers = Table::create();
        suppliers.table(ServiceSuppliers::Table).if_not_exists();
        columns::identified_object(&mut suppliers)
            .col(ColumnDef::new(ServiceSuppliers::Kind).string())
            .col(ColumnDef::new(ServiceSuppliers::IssuerIdentificationNumber).string())
            .col(ColumnDef::new(ServiceSuppliers::EffectiveDate).big_integer());
        columns::organisation(&mut suppliers, "organisation");
        manager.create_table(suppliers.to_owned()).await?;

        let mut accounts = Table::create();
        accounts.table(CustomerAccounts::Table).if_not_exists();
        columns::identified_object(&mut accounts);
        columns::document(&mut accounts)
            .col(ColumnDef::new(CustomerAccounts::BillingCycle).string())
            .col(ColumnDef::new(CustomerAccounts::BudgetBill).string())
            .col(ColumnDef::new(CustomerAccounts::LastBillAmount).big_integer())
            .col(ColumnDef::new(CustomerAccounts::AccountId).string())
            .col(ColumnDef::new(CustomerAccounts::CustomerId).uuid())
            .foreign_key(&mut columns::references(
                "fk_customer_accounts_customer",
                CustomerAccounts::Table,
                CustomerAccounts::CustomerId,
                Customers::Table,
                ForeignKeyAction::SetNull,
            ));
        manager.create_table(accounts.to_owned()).await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_customer_accounts_account_id")
                    .table(CustomerAccounts::Table)
                    .col(CustomerAccounts::AccountId)
                    .to_owned(),
            )
            .await?;

        let mut notifications = Table::create();
        notifications
            .table(CustomerAccountNotifications::Table)
            .if_not_exists();
        columns::serial_id(&mut notifications, CustomerAccountNotifications::Id)
            .col(
                ColumnDef::new(CustomerAccountNotifications::CustomerAccountId)
                    .uuid()
                    .not_null(),
            )
            .col(ColumnDef::new(CustomerAccountNotifications::MethodKind).string())
            .col(ColumnDef::new(CustomerAccountNotifications::Time).big_integer())
            .col(ColumnDef::new(CustomerAccountNotifications::Note).string())
            .col(ColumnDef::new(CustomerAccountNotifications::CustomerNotificationKind).string())
            .foreign_key(&mut columns::references(
                "fk_customer_account_notifications_owner",
                CustomerAccountNotifications::Table,
                CustomerAccountNotifications::CustomerAccountId,
                CustomerAccounts::Table,
                ForeignKeyAction::Cascade,
            ));
        manager.create_table(notifications.to_owned()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(CustomerAccountNotifications::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(CustomerAccounts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ServiceSuppliers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Customers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Customers {
    Table,
    Kind,
    SpecialNeed,
    Vip,
    PucNumber,
    PriorityValue,
    PriorityRank,
    PriorityType,
    Locale,
    CustomerName,
}

#[derive(Iden)]
enum ServiceSuppliers {
    Table,
    Kind,
    IssuerIdentificationNumber,
    EffectiveDate,
}

#[derive(Iden)]
pub enum CustomerAccounts {
    Table,
    BillingCycle,
    BudgetBill,
    LastBillAmount,
    AccountId,
    CustomerId,
}

#[derive(Iden)]
enum CustomerAccountNotifications {
    Table,
    Id,
    CustomerAccountId,
    MethodKind,
    Time,
    Note,
    CustomerNotificationKind,
}
