use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::AircraftStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "aircraft")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub model: String,
    pub aircraft_type: String,
    pub capacity: i32,
    pub range: i32,
    pub client_name: Option<String>,
    pub delivery_deadline: Option<Date>,
    pub status: AircraftStatus,
    pub created_by: Option<i32>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatedBy",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Creator,
    #[sea_orm(has_many = "super::aircraft_engineer::Entity")]
    AircraftEngineer,
    #[sea_orm(has_many = "super::task::Entity")]
    Task,
    #[sea_orm(has_many = "super::part::Entity")]
    Part,
    #[sea_orm(has_many = "super::test_record::Entity")]
    TestRecord,
}

impl Related<super::aircraft_engineer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AircraftEngineer.def()
    }
}

impl Related<super::task::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Task.def()
    }
}

impl Related<super::part::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Part.def()
    }
}

impl Related<super::test_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TestRecord.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
