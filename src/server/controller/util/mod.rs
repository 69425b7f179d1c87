//! Helpers shared by the controllers: resolving the session user and extracting JSON
//! bodies with API-style rejections.

pub mod get_user;
pub mod json;
