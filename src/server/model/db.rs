//! Database model type aliases.
//!
//! Short names for the sea-orm entity models used across repositories, services, and
//! controllers.

/// User account with its access level and password hash.
pub type UserModel = entity::user::Model;

/// Aircraft project. The string ID is the project code, e.g. `A-123`.
pub type AircraftModel = entity::aircraft::Model;

/// Link between an aircraft and one of its associated engineers.
pub type AircraftEngineerModel = entity::aircraft_engineer::Model;

/// Production task of an aircraft.
///
/// # Fields (from `entity::task::Model`)
/// - `status` - Current lifecycle status
/// - `completion_date` - Set if and only if `status` is completed
/// - `creator_id` - User who created the task, nulled if that user is deleted
pub type TaskModel = entity::task::Model;

/// Link between a task and one of its responsible users.
pub type TaskResponsibleModel = entity::task_responsible::Model;

pub type PartModel = entity::part::Model;

pub type TestRecordModel = entity::test_record::Model;
