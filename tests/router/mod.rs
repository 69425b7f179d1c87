//! End-to-end requests through the assembled application router.

use aerocode::{
    model::{api::ErrorDto, user::UserDto},
    server::{middleware::PROCESS_TIME_HEADER, model::app::AppState, router::build_app},
};
use aerocode_test_utils::prelude::*;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::controller::{read_json, read_text};

fn app(test: &TestContext) -> Router {
    let state: AppState = test.to_app_state();

    build_app(state, SessionManagerLayer::new(MemoryStore::default()))
}

fn json_request(method: Method, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
/// Expect 400 with a JSON error body for malformed request bodies
async fn malformed_json_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let resp = app(&test)
        .oneshot(json_request(Method::POST, "/api/login", "{\"username\": "))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = read_json(resp).await;
    assert!(!body.error.is_empty());

    Ok(())
}

#[tokio::test]
/// Expect 400 for an unknown enum value in the body
async fn unknown_enum_value_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let resp = app(&test)
        .oneshot(json_request(
            Method::POST,
            "/api/parts",
            r#"{"aircraftId":"A-100","name":"Flap","type":"Nacional","supplier":"Akaer","status":"Quebrada"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 401 with a processing time header when no one is logged in
async fn protected_route_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let resp = app(&test)
        .oneshot(
            Request::builder()
                .uri("/api/users")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let process_time = resp
        .headers()
        .get(&PROCESS_TIME_HEADER)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    let (_, decimals) = process_time.split_once('.').unwrap();
    assert_eq!(decimals.len(), 6);
    let body: ErrorDto = read_json(resp).await;
    assert_eq!(body.error, "Not logged in");

    Ok(())
}

#[tokio::test]
/// Expect the session cookie from login to authenticate later requests
async fn login_cookie_authenticates() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().with_admin_master().build().await?;
    let app = app(&test);

    let login = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/login",
            &format!(r#"{{"username":"admin","password":"{}"}}"#, TEST_PASSWORD),
        ))
        .await
        .unwrap();
    assert_eq!(login.status(), StatusCode::OK);
    let cookie = login
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string();

    let me = app
        .oneshot(
            Request::builder()
                .uri("/api/me")
                .header(header::COOKIE, cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(me.status(), StatusCode::OK);
    let user: UserDto = read_json(me).await;
    assert_eq!(user.id, 1);
    assert_eq!(user.level_name, "Administrador");

    Ok(())
}

#[tokio::test]
/// Expect the OpenAPI document to list the API paths
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = app(&test)
        .oneshot(
            Request::builder()
                .uri("/api/docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let document = read_text(resp).await;
    assert!(document.contains("/api/tasks/{id}"));
    assert!(document.contains("/api/aircrafts/{id}/report"));

    Ok(())
}
