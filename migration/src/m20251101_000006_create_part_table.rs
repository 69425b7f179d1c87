use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000002_create_aircraft_table::Aircraft;

static IDX_PART_AIRCRAFT_ID: &str = "idx_part_aircraft_id";
static FK_PART_AIRCRAFT_ID: &str = "fk_part_aircraft_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Part::Table)
                    .if_not_exists()
                    .col(pk_auto(Part::Id))
                    .col(string(Part::AircraftId))
                    .col(string(Part::Name))
                    .col(string(Part::PartType))
                    .col(string(Part::Supplier))
                    .col(string(Part::Status))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PART_AIRCRAFT_ID)
                    .table(Part::Table)
                    .col(Part::AircraftId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PART_AIRCRAFT_ID)
                    .from_tbl(Part::Table)
                    .from_col(Part::AircraftId)
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
                    .name(FK_PART_AIRCRAFT_ID)
                    .table(Part::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PART_AIRCRAFT_ID)
                    .table(Part::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Part::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Part {
    Table,
    Id,
    AircraftId,
    Name,
    PartType,
    Supplier,
    Status,
}
