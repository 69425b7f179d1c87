use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000001_create_user_table::User, m20251101_000002_create_aircraft_table::Aircraft,
};

static IDX_TASK_AIRCRAFT_ID: &str = "idx_task_aircraft_id";
static FK_TASK_AIRCRAFT_ID: &str = "fk_task_aircraft_id";
static FK_TASK_CREATOR_ID: &str = "fk_task_creator_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Task::Table)
                    .if_not_exists()
                    .col(pk_auto(Task::Id))
                    .col(string(Task::AircraftId))
                    .col(text(Task::Description))
                    .col(string(Task::Status))
                    .col(date(Task::DueDate))
                    .col(date(Task::CreationDate))
                    .col(date_null(Task::CompletionDate))
                    .col(integer_null(Task::CreatorId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TASK_AIRCRAFT_ID)
                    .table(Task::Table)
                    .col(Task::AircraftId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TASK_AIRCRAFT_ID)
                    .from_tbl(Task::Table)
                    .from_col(Task::AircraftId)
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
                    .name(FK_TASK_CREATOR_ID)
                    .from_tbl(Task::Table)
                    .from_col(Task::CreatorId)
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
                    .name(FK_TASK_CREATOR_ID)
                    .table(Task::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TASK_AIRCRAFT_ID)
                    .table(Task::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TASK_AIRCRAFT_ID)
                    .table(Task::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Task::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Task {
    Table,
    Id,
    AircraftId,
    Description,
    Status,
    DueDate,
    CreationDate,
    CompletionDate,
    CreatorId,
}
