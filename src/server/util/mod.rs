//! Shared helpers for permission rules and password hashing, plus date utilities.

pub mod password;
pub mod permission;
pub mod time;
