//! Server application core modules.
//!
//! HTTP routing with session-based authentication and role checks, on top of the
//! persistence of users and aircraft projects with their production records.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
