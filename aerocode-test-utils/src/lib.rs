//! Shared test harness for the aerocode crates.
//!
//! Tests build a [`TestContext`] through [`TestBuilder`], which provides an in-memory
//! SQLite database with the application schema and a fresh session, then insert
//! whatever records they need through the fixture helpers.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{constant::TEST_PASSWORD, fixtures::factory, TestBuilder, TestContext, TestError};
}
