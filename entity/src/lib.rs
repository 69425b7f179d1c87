//! SeaORM entities for the Aerocode production tracker.

pub mod prelude;

pub mod aircraft;
pub mod aircraft_engineer;
pub mod part;
pub mod sea_orm_active_enums;
pub mod task;
pub mod task_responsible;
pub mod test_record;
pub mod user;
