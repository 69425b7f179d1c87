use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::TaskStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "task")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub aircraft_id: String,
    pub description: String,
    pub status: TaskStatus,
    pub due_date: Date,
    pub creation_date: Date,
    pub completion_date: Option<Date>,
    pub creator_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::aircraft::Entity",
        from = "Column::AircraftId",
        to = "super::aircraft::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Aircraft,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatorId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Creator,
    #[sea_orm(has_many = "super::task_responsible::Entity")]
    TaskResponsible,
}

impl Related<super::aircraft::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Aircraft.def()
    }
}

impl Related<super::task_responsible::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TaskResponsible.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
