//! Data access layer repositories.
//!
//! Repositories wrap sea-orm queries per table group and are generic over
//! [`sea_orm::ConnectionTrait`] so they run on either a connection or a transaction.

pub mod aircraft;
pub mod part;
pub mod task;
pub mod test_record;
pub mod user;
