use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::UserLevel;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub username: String,
    pub password_hash: String,
    pub level: UserLevel,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::aircraft_engineer::Entity")]
    AircraftEngineer,
    #[sea_orm(has_many = "super::task_responsible::Entity")]
    TaskResponsible,
}

impl Related<super::aircraft_engineer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AircraftEngineer.def()
    }
}

impl Related<super::task_responsible::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TaskResponsible.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
