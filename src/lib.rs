//! Aerocode production tracker.
//!
//! Role-based tracking of aircraft projects along with their tasks, parts, and test
//! records. [`model`] holds the JSON types exchanged over the API, [`server`] holds the
//! HTTP service itself.

pub mod model;
pub mod server;
