//! HTTP controller endpoints for the aerocode web API.
//!
//! Handlers resolve the acting user from the session, hand the request to a service, and
//! wrap the result in a JSON response. Every handler is annotated with `utoipa::path`
//! so the router can assemble the OpenAPI document.

pub mod aircraft;
pub mod auth;
pub mod part;
pub mod task;
pub mod test_record;
pub mod user;
pub mod util;
