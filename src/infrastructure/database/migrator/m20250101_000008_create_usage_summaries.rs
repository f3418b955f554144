//! Create usage_summaries, line_items, tariff rider and power quality
//! summary tables (usage schema)

use sea_orm_migration::prelude::*;

use super::columns;
use super::m20250101_000006_create_usage_points::UsagePoints;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut summaries = Table::create();
        summaries.table(UsageSummaries::Table).if_not_exists();
        columns::identified_object(&mut summaries)
            .col(ColumnDef::new(UsageSummaries::UsagePointId).uuid().not_null())
            .col(ColumnDef::new(UsageSummaries::Position).integer().not_null())
            .col(ColumnDef::new(UsageSummaries::BillLastPeriod).big_integer())
            .col(ColumnDef::new(UsageSummaries::BillToDate).big_integer())
            .col(ColumnDef::new(UsageSummaries::CostAdditionalLastPeriod).big_integer())
            .col(ColumnDef::new(UsageSummaries::Currency).integer())
            .col(ColumnDef::new(UsageSummaries::QualityOfReading).integer())
            .col(ColumnDef::new(UsageSummaries::StatusTimeStamp).big_integer())
            .col(ColumnDef::new(UsageSummaries::BillingChargeSourceAgencyName).string())
            .col(ColumnDef::new(UsageSummaries::TariffProfile).string())
            .col(ColumnDef::new(UsageSummaries::ReadCycle).string())
            .foreign_key(&mut columns::references(
                "fk_usage_summaries_usage_point",
                UsageSummaries::Table,
                UsageSummaries::UsagePointId,
                UsagePoints::Table,
                ForeignKeyAction::Cascade,
            ));
        columns::interval(&mut summaries, "billing_period");
        columns::interval(&mut summaries, "ratchet_demand_period");
        for prefix in [
            "overall_consumption_last_period",
            "current_billing_period_overall_consumption",
            "current_day_net_consumption",
            "current_day_overall_consumption",
            "peak_demand",
            "ratchet_demand",
        ] {
            columns::measurement(&mut summaries, prefix);
        }
        manager.create_table(summaries.to_owned()).await?;

        let mut riders = Table::create();
        riders.table(UsageSummaryTariffRiderRefs::Table).if_not_exists();
        columns::serial_id(&mut riders, UsageSummaryTariffRiderRefs::Id)
            .col(
                ColumnDef::new(UsageSummaryTariffRiderRefs::UsageSummaryId)
                    .uuid()
                    .not_null(),
            )
            .col(
                ColumnDef::new(UsageSummaryTariffRiderRefs::RiderType)
                    .string()
                    .not_null(),
            )
            .col(
                ColumnDef::new(UsageSummaryTariffRiderRefs::EnrollmentStatus)
                    .string()
                    .not_null(),
            )
            .col(
                ColumnDef::new(UsageSummaryTariffRiderRefs::EffectiveDate)
                    .big_integer()
                    .not_null(),
            )
            .foreign_key(&mut columns::references(
                "fk_usage_summary_tariff_rider_refs_owner",
                UsageSummaryTariffRiderRefs::Table,
                UsageSummaryTariffRiderRefs::UsageSummaryId,
                UsageSummaries::Table,
                ForeignKeyAction::Cascade,
            ));
        manager.create_table(riders.to_owned()).await?;

        let mut line_items = Table::create();
        line_items.table(LineItems::Table).if_not_exists();
        columns::serial_id(&mut line_items, LineItems::Id)
            .col(ColumnDef::new(LineItems::UsageSummaryId).uuid().not_null())
            .col(ColumnDef::new(LineItems::Amount).big_integer().not_null())
            .col(ColumnDef::new(LineItems::Rounding).big_integer())
            .col(ColumnDef::new(LineItems::DateTime).big_integer().not_null())
            .col(ColumnDef::new(LineItems::Note).string().not_null())
            .col(ColumnDef::new(LineItems::ItemKind).integer())
            .col(ColumnDef::new(LineItems::UnitCost).big_integer())
            .foreign_key(&mut columns::references(
                "fk_line_items_usage_summary",
                LineItems::Table,
                LineItems::UsageSummaryId,
                UsageSummaries::Table,
                ForeignKeyAction::Cascade,
            ));
        columns::measurement(&mut line_items, "measurement");
        columns::interval(&mut line_items, "item_period");
        manager.create_table(line_items.to_owned()).await?;

        let mut quality = Table::create();
        quality
            .table(ElectricPowerQualitySummaries::Table)
            .if_not_exists();
        columns::identified_object(&mut quality)
            .col(
                ColumnDef::new(ElectricPowerQualitySummaries::UsagePointId)
                    .uuid()
                    .not_null(),
            )
            .col(
                ColumnDef::new(ElectricPowerQualitySummaries::Position)
                    .integer()
                    .not_null(),
            )
            .col(ColumnDef::new(ElectricPowerQualitySummaries::FlickerPlt).big_integer())
            .col(ColumnDef::new(ElectricPowerQualitySummaries::FlickerPst).big_integer())
            .col(ColumnDef::new(ElectricPowerQualitySummaries::HarmonicVoltage).big_integer())
            .col(ColumnDef::new(ElectricPowerQualitySummaries::LongInterruptions).big_integer())
            .col(ColumnDef::new(ElectricPowerQualitySummaries::MainsVoltage).big_integer())
            .col(
                ColumnDef::new(ElectricPowerQualitySummaries::MeasurementProtocol)
                    .small_integer(),
            )
            .col(ColumnDef::new(ElectricPowerQualitySummaries::PowerFrequency).big_integer())
            .col(
                ColumnDef::new(ElectricPowerQualitySummaries::RapidVoltageChanges)
                    .big_integer(),
            )
            .col(
                ColumnDef::new(ElectricPowerQualitySummaries::ShortInterruptions)
                    .big_integer(),
            )
            .col(ColumnDef::new(ElectricPowerQualitySummaries::SupplyVoltageDips).big_integer())
            .col(
                ColumnDef::new(ElectricPowerQualitySummaries::SupplyVoltageImbalance)
                    .big_integer(),
            )
            .col(
                ColumnDef::new(ElectricPowerQualitySummaries::SupplyVoltageVariations)
                    .big_integer(),
            )
            .col(ColumnDef::new(ElectricPowerQualitySummaries::TempOvervoltage).big_integer())
            .foreign_key(&mut columns::references(
                "fk_electric_power_quality_summaries_usage_point",
                ElectricPowerQualitySummaries::Table,
                ElectricPowerQualitySummaries::UsagePointId,
                UsagePoints::Table,
                ForeignKeyAction::Cascade,
            ));
        columns::interval(&mut quality, "summary_interval");
        manager.create_table(quality.to_owned()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(ElectricPowerQualitySummaries::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(LineItems::Table).to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(UsageSummaryTariffRiderRefs::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(UsageSummaries::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum UsageSummaries {
    Table,
    UsagePointId,
    Position,
    BillLastPeriod,
    BillToDate,
    CostAdditionalLastPeriod,
    Currency,
    QualityOfReading,
    StatusTimeStamp,
    BillingChargeSourceAgencyName,
    TariffProfile,
    ReadCycle,
}

#[derive(Iden)]
enum UsageSummaryTariffRiderRefs {
    Table,
    Id,
    UsageSummaryId,
    RiderType,
    EnrollmentStatus,
    EffectiveDate,
}

#[derive(Iden)]
enum LineItems {
    Table,
    Id,
    UsageSummaryId,
    Amount,
    Rounding,
    DateTime,
    Note,
    ItemKind,
    UnitCost,
}

#[derive(Iden)]
enum ElectricPowerQualitySummaries {
    Table,
    UsagePointId,
    Position,
    FlickerPlt,
    FlickerPst,
    HarmonicVoltage,
    LongInterruptions,
    MainsVoltage,
    MeasurementProtocol,
    PowerFrequency,
    RapidVoltageChanges,
    ShortInterruptions,
    SupplyVoltageDips,
    SupplyVoltageImbalance,
    SupplyVoltageVariations,
    TempOvervoltage,
}
