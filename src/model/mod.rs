//! Request and response types exchanged over the REST API.

pub mod aircraft;
pub mod api;
pub mod part;
pub mod task;
pub mod test_record;
pub mod user;
