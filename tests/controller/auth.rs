use aerocode::{
    model::{
        api::ErrorDto,
        user::{LoginDto, PasswordValidityDto, UserDto},
    },
    server::{
        controller::{
            auth::{login, logout, me, verify_password},
            util::json::ApiJson,
        },
        model::{app::AppState, session::user::SessionUserId},
    },
};
use aerocode_test_utils::prelude::*;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use entity::sea_orm_active_enums::UserLevel;

use crate::controller::{login_as, read_json};

fn credentials(username: &str, password: &str) -> ApiJson<LoginDto> {
    ApiJson(LoginDto {
        username: username.to_string(),
        password: password.to_string(),
    })
}

#[tokio::test]
/// Expect 200 with the user and the user ID stored in session
async fn login_stores_user_in_session() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().build().await?;
    let user = test
        .user()
        .insert_user_with_name("Maria Silva", "maria", UserLevel::Engineer)
        .await?;

    let state: AppState = test.to_app_state();
    let result = login(State(state), test.session.clone(), credentials("maria", TEST_PASSWORD)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let dto: UserDto = read_json(resp).await;
    assert_eq!(dto.id, user.id);
    assert_eq!(dto.level_name, "Engenheiro");
    assert_eq!(SessionUserId::get(&test.session).await.unwrap(), Some(user.id));

    Ok(())
}

#[tokio::test]
/// Expect 401 unauthorized for a wrong password and for an unknown username alike
async fn login_rejects_invalid_credentials() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().build().await?;
    test.user().insert_user("maria", UserLevel::Engineer).await?;

    let state: AppState = test.to_app_state();

    for (username, password) in [("maria", "wrong"), ("nobody", TEST_PASSWORD)] {
        let result = login(
            State(state.clone()),
            test.session.clone(),
            credentials(username, password),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: ErrorDto = read_json(resp).await;
        assert_eq!(body.error, "Invalid username or password");
    }

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request when the username is empty
async fn login_requires_username() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let state: AppState = test.to_app_state();
    let result = login(State(state), test.session.clone(), credentials("", TEST_PASSWORD)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 200 after logout and the user removed from session
async fn logout_clears_session() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().build().await?;
    let user = test.user().insert_user("maria", UserLevel::Engineer).await?;
    login_as(&test, user.id).await;

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(SessionUserId::get(&test.session).await.unwrap(), None);

    Ok(())
}

#[tokio::test]
/// Expect 200 on logout even without a user in session
async fn logout_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = logout(test.session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 401 unauthorized from /me without a login, 200 with one
async fn me_requires_login() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().build().await?;
    let user = test.user().insert_user("maria", UserLevel::Engineer).await?;
    let state: AppState = test.to_app_state();

    let anonymous = me(State(state.clone()), test.session.clone()).await;
    assert!(anonymous.is_err());
    let resp = anonymous.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    login_as(&test, user.id).await;
    let result = me(State(state), test.session.clone()).await;
    let dto: UserDto = read_json(result.unwrap().into_response()).await;
    assert_eq!(dto.username, "maria");

    Ok(())
}

#[tokio::test]
/// Expect operators to verify only their own password and administrators any
async fn verify_password_scopes_to_self() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().build().await?;
    let admin = test.user().insert_user("ana", UserLevel::Administrator).await?;
    let operator = test.user().insert_user("joao", UserLevel::Operator).await?;
    let state: AppState = test.to_app_state();

    login_as(&test, operator.id).await;
    let own = verify_password(
        State(state.clone()),
        test.session.clone(),
        credentials("joao", TEST_PASSWORD),
    )
    .await;
    let other = verify_password(
        State(state.clone()),
        test.session.clone(),
        credentials("ana", TEST_PASSWORD),
    )
    .await;

    let own: PasswordValidityDto = read_json(own.unwrap().into_response()).await;
    assert!(own.valid);
    assert_eq!(
        other.err().unwrap().into_response().status(),
        StatusCode::FORBIDDEN
    );

    test.new_session();
    login_as(&test, admin.id).await;
    let wrong = verify_password(State(state), test.session.clone(), credentials("joao", "nope")).await;
    let wrong: PasswordValidityDto = read_json(wrong.unwrap().into_response()).await;
    assert!(!wrong.valid);

    Ok(())
}

#[tokio::test]
/// Expect 400 when the username or password to verify is empty
async fn verify_password_requires_fields() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().build().await?;
    let admin = test.user().insert_user("ana", UserLevel::Administrator).await?;
    login_as(&test, admin.id).await;
    let state: AppState = test.to_app_state();

    let empty_password =
        verify_password(State(state.clone()), test.session.clone(), credentials("ana", "")).await;
    let empty_username =
        verify_password(State(state), test.session.clone(), credentials("", TEST_PASSWORD)).await;

    assert_eq!(
        empty_password.err().unwrap().into_response().status(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        empty_username.err().unwrap().into_response().status(),
        StatusCode::BAD_REQUEST
    );

    Ok(())
}
