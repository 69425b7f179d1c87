//! Fixtures for inserting records during test execution.
//!
//! - `user` - User accounts with a known password
//! - `aircraft` - Aircraft projects and their engineer assignments
//! - `task` - Production tasks and their responsible users
//! - `part` - Parts and test records attached to an aircraft
//! - `factory` - In-memory models that never touch the database

pub mod aircraft;
pub mod factory;
pub mod part;
pub mod task;
pub mod user;
