//! Create meter_readings, interval_blocks, interval_readings and
//! reading_qualities tables (usage schema)

use sea_orm_migration::prelude::*;

use super::columns;
use super::m20250101_000004_create_reading_types::ReadingTypes;
use super::m20250101_000006_create_usage_points::UsagePoints;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut meter_readings = Table::create();
        meter_readings.table(MeterReadings::Table).if_not_exists();
        columns::identified_object(&mut meter_readings)
            .col(ColumnDef::new(MeterReadings::UsagePointId).uuid().not_null())
            .col(ColumnDef::new(MeterReadings::ReadingTypeId).uuid())
            .col(ColumnDef::new(MeterReadings::Position).integer().not_null())
            .foreign_key(&mut columns::references(
                "fk_meter_readings_usage_point",
                MeterReadings::Table,
                MeterReadings::UsagePointId,
                UsagePoints::Table,
                ForeignKeyAction::Cascade,
            ))
            .foreign_key(&mut columns::references(
                "fk_meter_readings_reading_type",
                MeterReadings::Table,
                MeterReadings::ReadingTypeId,
                ReadingTypes::Table,
                ForeignKeyAction::SetNull,
            ));
        manager.create_table(meter_readings.to_owned()).await?;

        let mut interval_blocks = Table::create();
        interval_blocks.table(IntervalBlocks::Table).if_not_exists();
        columns::identified_object(&mut interval_blocks)
            .col(ColumnDef::new(IntervalBlocks::MeterReadingId).uuid().not_null())
            .col(ColumnDef::new(IntervalBlocks::Position).integer().not_null())
            .foreign_key(&mut columns::references(
                "fk_interval_blocks_meter_reading",
                IntervalBlocks::Table,
                IntervalBlocks::MeterReadingId,
                MeterReadings::Table,
                ForeignKeyAction::Cascade,
            ));
        columns::interval(&mut interval_blocks, "interval");
        manager.create_table(interval_blocks.to_owned()).await?;

        let mut interval_readings = Table::create();
        interval_readings.table(IntervalReadings::Table).if_not_exists();
        columns::serial_id(&mut interval_readings, IntervalReadings::Id)
            .col(ColumnDef::new(IntervalReadings::IntervalBlockId).uuid().not_null())
            .col(ColumnDef::new(IntervalReadings::Value).big_integer())
            .col(ColumnDef::new(IntervalReadings::Cost).big_integer())
            .col(ColumnDef::new(IntervalReadings::ConsumptionTier).integer())
            .col(ColumnDef::new(IntervalReadings::Tou).integer())
            .col(ColumnDef::new(IntervalReadings::Cpp).integer())
            .foreign_key(&mut columns::references(
                "fk_interval_readings_interval_block",
                IntervalReadings::Table,
                IntervalReadings::IntervalBlockId,
                IntervalBlocks::Table,
                ForeignKeyAction::Cascade,
            ));
        columns::interval(&mut interval_readings, "time_period");
        manager.create_table(interval_readings.to_owned()).await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_interval_readings_interval_block")
                    .table(IntervalReadings::Table)
                    .col(IntervalReadings::IntervalBlockId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ReadingQualities::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ReadingQualities::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ReadingQualities::IntervalReadingId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ReadingQualities::Quality).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reading_qualities_interval_reading")
                            .from(ReadingQualities::Table, ReadingQualities::IntervalReadingId)
                            .to(IntervalReadings::Table, IntervalReadings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // A reading never carries the same quality twice.
        manager
            .create_index(
                Index::create()
                    .name("idx_reading_qualities_reading_quality")
                    .table(ReadingQualities::Table)
                    .col(ReadingQualities::IntervalReadingId)
                    .col(ReadingQualities::Quality)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ReadingQualities::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(IntervalReadings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(IntervalBlocks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MeterReadings::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum MeterReadings {
    Table,
    UsagePointId,
    ReadingTypeId,
    Position,
}

#[derive(Iden)]
enum IntervalBlocks {
    Table,
    MeterReadingId,
    Position,
}

#[derive(Iden)]
enum IntervalReadings {
    Table,
    Id,
    IntervalBlockId,
    Value,
    Cost,
    ConsumptionTier,
    Tou,
    Cpp,
}

#[derive(Iden)]
enum ReadingQualities {
    Table,
    Id,
    IntervalReadingId,
    Quality,
}
