//! Session data models.
//!
//! Type-safe wrappers for values kept in the tower-sessions store (Redis-backed in
//! production, in memory otherwise).

pub mod user;
