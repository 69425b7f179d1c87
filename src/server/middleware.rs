//! Response timing.

use std::time::Instant;

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};

pub static PROCESS_TIME_HEADER: HeaderName = HeaderName::from_static("x-process-time");

/// Adds an `X-Process-Time` header with the time spent handling the request, in
/// milliseconds with six decimals.
pub async fn process_time(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let mut response = next.run(request).await;

    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    tracing::debug!(
        method = %method,
        uri = %uri,
        status = %response.status(),
        elapsed_ms,
        "Handled request"
    );

    if let Ok(value) = HeaderValue::from_str(&format!("{:.6}", elapsed_ms)) {
        response
            .headers_mut()
            .insert(PROCESS_TIME_HEADER.clone(), value);
    }

    response
}
