//! Server-side models: application state and database aliases, plus session data.

pub mod app;
pub mod db;
pub mod session;
