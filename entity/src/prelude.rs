pub use super::aircraft::Entity as Aircraft;
pub use super::aircraft_engineer::Entity as AircraftEngineer;
pub use super::part::Entity as Part;
pub use super::task::Entity as Task;
pub use super::task_responsible::Entity as TaskResponsible;
pub use super::test_record::Entity as TestRecord;
pub use super::user::Entity as User;
