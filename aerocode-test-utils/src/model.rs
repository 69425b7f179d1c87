//! Database model type aliases matching those used in the main crate.

pub type UserModel = entity::user::Model;

pub type AircraftModel = entity::aircraft::Model;

pub type TaskModel = entity::task::Model;

pub type PartModel = entity::part::Model;

pub type TestRecordModel = entity::test_record::Model;
