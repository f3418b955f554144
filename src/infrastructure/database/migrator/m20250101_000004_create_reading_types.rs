//! Create reading_types table (usage schema)

use sea_orm_migration::prelude::*;

use super::columns;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut table = Table::create();
        table.table(ReadingTypes::Table).if_not_exists();
        columns::identified_object(&mut table)
            .col(ColumnDef::new(ReadingTypes::AccumulationBehaviour).integer())
            .col(ColumnDef::new(ReadingTypes::Commodity).integer())
            .col(ColumnDef::new(ReadingTypes::ConsumptionTier).integer())
            .col(ColumnDef::new(ReadingTypes::Currency).integer())
            .col(ColumnDef::new(ReadingTypes::DataQualifier).integer())
            .col(ColumnDef::new(ReadingTypes::DefaultQuality).integer())
            .col(ColumnDef::new(ReadingTypes::FlowDirection).integer())
            .col(ColumnDef::new(ReadingTypes::IntervalLength).big_integer())
            .col(ColumnDef::new(ReadingTypes::Kind).integer())
            .col(ColumnDef::new(ReadingTypes::Phase).integer())
            .col(ColumnDef::new(ReadingTypes::PowerOfTenMultiplier).integer())
            .col(ColumnDef::new(ReadingTypes::TimeAttribute).integer())
            .col(ColumnDef::new(ReadingTypes::Tou).integer())
            .col(ColumnDef::new(ReadingTypes::Uom).integer())
            .col(ColumnDef::new(ReadingTypes::Cpp).integer())
            .col(ColumnDef::new(ReadingTypes::InterharmonicNumerator).big_integer())
            .col(ColumnDef::new(ReadingTypes::InterharmonicDenominator).big_integer())
            .col(ColumnDef::new(ReadingTypes::MeasuringPeriod).integer())
            .col(ColumnDef::new(ReadingTypes::ArgumentNumerator).big_integer())
            .col(ColumnDef::new(ReadingTypes::ArgumentDenominator).big_integer());
        manager.create_table(table.to_owned()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ReadingTypes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum ReadingTypes {
    Table,
    AccumulationBehaviour,
    Commodity,
    ConsumptionTier,
    Currency,
    DataQualifier,
    DefaultQuality,
    FlowDirection,
    IntervalLength,
    Kind,
    Phase,
    PowerOfTenMultiplier,
    TimeAttribute,
    Tou,
    Uom,
    Cpp,
    InterharmonicNumerator,
    InterharmonicDenominator,
    MeasuringPeriod,
    ArgumentNumerator,
    ArgumentDenominator,
}
