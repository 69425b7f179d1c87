use axum::extract::FromRequest;

use crate::server::error::Error;

/// JSON body extractor whose rejections are answered with the API error body.
///
/// Malformed JSON, missing required fields, and unknown enum values all become a 400
/// with `{"error": "..."}` instead of axum's plain-text rejection.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct ApiJson<T>(pub T);
