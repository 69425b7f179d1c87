use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000001_create_user_table::User, m20251101_000002_create_aircraft_table::Aircraft,
};

static IDX_AIRCRAFT_ENGINEER_USER_ID: &str = "idx_aircraft_engineer_user_id";
static FK_AIRCRAFT_ENGINEER_AIRCRAFT_ID: &str = "fk_aircraft_engineer_aircraft_id";
static FK_AIRCRAFT_ENGINEER_USER_ID: &str = "fk_aircraft_engineer_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AircraftEngineer::Table)
                    .if_not_exists()
                    .col(string(AircraftEngineer::AircraftId))
                    .col(integer(AircraftEngineer::UserId))
                    .primary_key(
                        Index::create()
                            .col(AircraftEngineer::AircraftId)
                            .col(AircraftEngineer::UserId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_AIRCRAFT_ENGINEER_USER_ID)
                    .table(AircraftEngineer::Table)
                    .col(AircraftEngineer::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_AIRCRAFT_ENGINEER_AIRCRAFT_ID)
                    .from_tbl(AircraftEngineer::Table)
                    .from_col(AircraftEngineer::AircraftId)
                    .to_tbl(Aircraft::Table)
                    .to_col(Aircraft::Id)
                    .on_update(ForeignKeyAction::Cascade)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_AIRCRAFT_ENGINEER_USER_ID)
                    .from_tbl(AircraftEngineer::Table)
                    .from_col(AircraftEngineer::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
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
                    .name(FK_AIRCRAFT_ENGINEER_USER_ID)
                    .table(AircraftEngineer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_AIRCRAFT_ENGINEER_AIRCRAFT_ID)
                    .table(AircraftEngineer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_AIRCRAFT_ENGINEER_USER_ID)
                    .table(AircraftEngineer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AircraftEngineer::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum AircraftEngineer {
    Table,
    AircraftId,
    UserId,
}
