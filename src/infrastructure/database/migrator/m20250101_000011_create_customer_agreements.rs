//! Create customer_agreements and their owned collections (customer schema)

use sea_orm_migration::prelude::*;

use super::columns;
use super::m20250101_000010_create_customers::CustomerAccounts;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut agreements = Table::create();
        agreements.table(CustomerAgreements::Table).if_not_exists();
        columns::identified_object(&mut agreements);
        columns::document(&mut agreements)
            .col(ColumnDef::new(CustomerAgreements::SignDate).big_integer())
            .col(ColumnDef::new(CustomerAgreements::LoadMgmt).string())
            .col(
                ColumnDef::new(CustomerAgreements::IsPrePay)
                    .boolean()
                    .not_null()
                    .default(false),
            )
            .col(ColumnDef::new(CustomerAgreements::ShutOffDateTime).big_integer())
            .col(ColumnDef::new(CustomerAgreements::Currency).string())
            .col(ColumnDef::new(CustomerAgreements::AgreementId).string())
            .col(ColumnDef::new(CustomerAgreements::CustomerAccountId).uuid())
            .foreign_key(&mut columns::references(
                "fk_customer_agreements_customer_account",
                CustomerAgreements::Table,
                CustomerAgreements::CustomerAccountId,
                CustomerAccounts::Table,
                ForeignKeyAction::SetNull,
            ));
        columns::interval(&mut agreements, "validity_interval");
        manager.create_table(agreements.to_owned()).await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_customer_agreements_agreement_id")
                    .table(CustomerAgreements::Table)
                    .col(CustomerAgreements::AgreementId)
                    .to_owned(),
            )
            .await?;

        let mut programs = Table::create();
        programs
            .table(CustomerAgreementDemandResponsePrograms::Table)
            .if_not_exists();
        columns::serial_id(&mut programs, Owned::Id)
            .col(ColumnDef::new(Owned::CustomerAgreementId).uuid().not_null())
            .col(
                ColumnDef::new(CustomerAgreementDemandResponsePrograms::ProgramName)
                    .string()
                    .not_null(),
            )
            .col(ColumnDef::new(CustomerAgreementDemandResponsePrograms::EnrollmentStatus).string())
            .col(
                ColumnDef::new(CustomerAgreementDemandResponsePrograms::ProgramDescription)
                    .string(),
            )
            .foreign_key(&mut owned_by_agreement(
                "fk_customer_agreement_demand_response_programs_owner",
                CustomerAgreementDemandResponsePrograms::Table,
            ));
        columns::interval(&mut programs, "program_date");
        columns::measurement(&mut programs, "capacity_reservation_level");
        columns::measurement(&mut programs, "dr_program_nomination");
        manager.create_table(programs.to_owned()).await?;

        let mut pricing = Table::create();
        pricing
            .table(CustomerAgreementPricingStructures::Table)
            .if_not_exists();
        columns::serial_id(&mut pricing, Owned::Id)
            .col(ColumnDef::new(Owned::CustomerAgreementId).uuid().not_null())
            .col(
                ColumnDef::new(CustomerAgreementPricingStructures::PricingStructure)
                    .string()
                    .not_null(),
            )
            .foreign_key(&mut owned_by_agreement(
                "fk_customer_agreement_pricing_structures_owner",
                CustomerAgreementPricingStructures::Table,
            ));
        manager.create_table(pricing.to_owned()).await?;

        let mut statuses = Table::create();
        statuses
            .table(CustomerAgreementFutureStatuses::Table)
            .if_not_exists();
        columns::serial_id(&mut statuses, Owned::Id)
            .col(ColumnDef::new(Owned::CustomerAgreementId).uuid().not_null())
            .foreign_key(&mut owned_by_agreement(
                "fk_customer_agreement_future_statuses_owner",
                CustomerAgreementFutureStatuses::Table,
            ));
        columns::status(&mut statuses, "status");
        manager.create_table(statuses.to_owned()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(CustomerAgreementFutureStatuses::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(CustomerAgreementPricingStructures::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(CustomerAgreementDemandResponsePrograms::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(CustomerAgreements::Table).to_owned())
            .await
    }
}

fn owned_by_agreement<T: IntoTableRef>(name: &str, table: T) -> ForeignKeyCreateStatement {
    columns::references(
        name,
        table,
        Owned::CustomerAgreementId,
        CustomerAgreements::Table,
        ForeignKeyAction::Cascade,
    )
}

#[derive(Iden)]
enum CustomerAgreements {
    Table,
    SignDate,
    LoadMgmt,
    IsPrePay,
    ShutOffDateTime,
    Currency,
    AgreementId,
    CustomerAccountId,
}

#[derive(Iden)]
enum Owned {
    Id,
    CustomerAgreementId,
}

#[derive(Iden)]
enum CustomerAgreementDemandResponsePrograms {
    Table,
    ProgramName,
    EnrollmentStatus,
    ProgramDescription,
}

#[derive(Iden)]
enum CustomerAgreementPricingStructures {
    Table,
    PricingStructure,
}

#[derive(Iden)]
enum CustomerAgreementFutureStatuses {
    Table,
}
