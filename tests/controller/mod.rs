//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with a state and session from the test context, the
//! same way axum would invoke them, and the responses are checked for status and body.

mod aircraft;
mod auth;
mod part;
mod task;
mod test_record;
mod user;

use aerocode::server::model::session::user::SessionUserId;
use aerocode_test_utils::prelude::*;
use axum::response::Response;
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;

/// Put a user ID into the context's session as a successful login would
pub async fn login_as(test: &TestContext, user_id: i32) {
    SessionUserId::insert(&test.session, user_id).await.unwrap();
}

/// Collect a response body and deserialize it from JSON
pub async fn read_json<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();

    serde_json::from_slice(&bytes).unwrap()
}

pub async fn read_text(resp: Response) -> String {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();

    String::from_utf8(bytes.to_vec()).unwrap()
}
