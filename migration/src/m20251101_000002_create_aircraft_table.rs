use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_create_user_table::User;

static FK_AIRCRAFT_CREATED_BY: &str = "fk_aircraft_created_by";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Aircraft::Table)
                    .if_not_exists()
                    .col(string(Aircraft::Id).primary_key())
                    .col(string(Aircraft::Model))
                    .col(string(Aircraft::AircraftType))
                    .col(integer(Aircraft::Capacity))
                    .col(integer(Aircraft::Range))
                    .col(string_null(Aircraft::ClientName))
                    .col(date_null(Aircraft::DeliveryDeadline))
                    .col(string(Aircraft::Status))
                    .col(integer_null(Aircraft::CreatedBy))
                    .col(timestamp(Aircraft::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_AIRCRAFT_CREATED_BY)
                    .from_tbl(Aircraft::Table)
                    .from_col(Aircraft::CreatedBy)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_AIRCRAFT_CREATED_BY)
                    .table(Aircraft::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Aircraft::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Aircraft {
    Table,
    Id,
    Model,
    AircraftType,
    Capacity,
    Range,
    ClientName,
    DeliveryDeadline,
    Status,
    CreatedBy,
    CreatedAt,
}
