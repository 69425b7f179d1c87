use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000001_create_user_table::User, m20251101_000004_create_task_table::Task};

static IDX_TASK_RESPONSIBLE_USER_ID: &str = "idx_task_responsible_user_id";
static FK_TASK_RESPONSIBLE_TASK_ID: &str = "fk_task_responsible_task_id";
static FK_TASK_RESPONSIBLE_USER_ID: &str = "fk_task_responsible_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TaskResponsible::Table)
                    .if_not_exists()
                    .col(integer(TaskResponsible::TaskId))
                    .col(integer(TaskResponsible::UserId))
                    .primary_key(
                        Index::create()
                            .col(TaskResponsible::TaskId)
                            .col(TaskResponsible::UserId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TASK_RESPONSIBLE_USER_ID)
                    .table(TaskResponsible::Table)
                    .col(TaskResponsible::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TASK_RESPONSIBLE_TASK_ID)
                    .from_tbl(TaskResponsible::Table)
                    .from_col(TaskResponsible::TaskId)
                    .to_tbl(Task::Table)
                    .to_col(Task::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TASK_RESPONSIBLE_USER_ID)
                    .from_tbl(TaskResponsible::Table)
                    .from_col(TaskResponsible::UserId)
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
                    .name(FK_TASK_RESPONSIBLE_USER_ID)
                    .table(TaskResponsible::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TASK_RESPONSIBLE_TASK_ID)
                    .table(TaskResponsible::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TASK_RESPONSIBLE_USER_ID)
                    .table(TaskResponsible::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TaskResponsible::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum TaskResponsible {
    Table,
    TaskId,
    UserId,
}
