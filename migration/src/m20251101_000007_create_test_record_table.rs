use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000002_create_aircraft_table::Aircraft;

static IDX_TEST_RECORD_AIRCRAFT_ID: &str = "idx_test_record_aircraft_id";
static FK_TEST_RECORD_AIRCRAFT_ID: &str = "fk_test_record_aircraft_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TestRecord::Table)
                    .if_not_exists()
                    .col(pk_auto(TestRecord::Id))
                    .col(string(TestRecord::AircraftId))
                    .col(string(TestRecord::TestType))
                    .col(string(TestRecord::Result))
                    .col(date(TestRecord::DatePerformed))
                    .col(text_null(TestRecord::Notes))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TEST_RECORD_AIRCRAFT_ID)
                    .table(TestRecord::Table)
                    .col(TestRecord::AircraftId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TEST_RECORD_AIRCRAFT_ID)
                    .from_tbl(TestRecord::Table)
                    .from_col(TestRecord::AircraftId)
                    .to_tbl(Aircraft::Table)
                    .to_col(Aircraft::Id)
                    .on_update(ForeignKeyAction::Cascade)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TEST_RECORD_AIRCRAFT_ID)
                    .table(TestRecord::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TEST_RECORD_AIRCRAFT_ID)
                    .table(TestRecord::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TestRecord::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum TestRecord {
    Table,
    Id,
    AircraftId,
    TestType,
    Result,
    DatePerformed,
    Notes,
}
