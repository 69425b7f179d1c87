//! Fixed values shared by fixtures and the tests that log in with them.

/// Plain-text password of every user inserted through the fixtures.
pub static TEST_PASSWORD: &str = "password";

/// Username of the admin master account inserted by `TestBuilder::with_admin_master`.
pub static TEST_ADMIN_USERNAME: &str = "admin";

/// Aircraft model name used by aircraft fixtures.
pub static TEST_AIRCRAFT_MODEL: &str = "E195-E2";

/// Supplier used by part fixtures.
pub static TEST_PART_SUPPLIER: &str = "Safran";
