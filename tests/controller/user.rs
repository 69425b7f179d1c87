use aerocode::{
    model::{
        api::ErrorDto,
        user::{ChangePasswordDto, CreateUserDto, UpdateUserDto, UserDto},
    },
    server::{
        controller::{
            auth::login,
            user::{change_password, create_user, delete_user, get_user, get_users, update_user},
            util::json::ApiJson,
        },
        model::app::AppState,
    },
};
use aerocode_test_utils::prelude::*;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use entity::sea_orm_active_enums::{TaskStatus, UserLevel};

use crate::controller::{login_as, read_json};

fn new_user(username: &str, password: Option<&str>) -> CreateUserDto {
    CreateUserDto {
        name: "Carlos Lima".to_string(),
        username: username.to_string(),
        level: UserLevel::Operator,
        password: password.map(str::to_string),
    }
}

#[tokio::test]
/// Expect 200 with users listed with their associated aircraft
async fn lists_users_with_associated_aircraft() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().with_admin_master().build().await?;
    let engineer = test.user().insert_user("maria", UserLevel::Engineer).await?;
    let operator = test.user().insert_user("joao", UserLevel::Operator).await?;
    test.aircraft().insert_aircraft("B-200", &[engineer.id]).await?;
    test.aircraft().insert_aircraft("A-100", &[]).await?;
    test.task()
        .insert_task("A-100", TaskStatus::Pending, &[engineer.id, operator.id])
        .await?;
    login_as(&test, operator.id).await;

    let state: AppState = test.to_app_state();
    let result = get_users(State(state), test.session.clone()).await;

    let users: Vec<UserDto> = read_json(result.unwrap().into_response()).await;
    assert_eq!(users.len(), 3);
    assert_eq!(users[0].username, "admin");
    assert_eq!(users[1].associated_aircrafts, vec!["A-100", "B-200"]);
    assert_eq!(users[2].associated_aircrafts, vec!["A-100"]);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found for a user that does not exist
async fn get_unknown_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().build().await?;
    let user = test.user().insert_user("maria", UserLevel::Engineer).await?;
    login_as(&test, user.id).await;

    let state: AppState = test.to_app_state();
    let result = get_user(State(state), test.session.clone(), Path(404)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect a created user without password to log in with the default password
async fn created_user_uses_default_password() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().with_admin_master().build().await?;
    login_as(&test, 1).await;

    let state = AppState::new(test.db.clone(), "segredo");
    let result = create_user(
        State(state.clone()),
        test.session.clone(),
        ApiJson(new_user("carlos", None)),
    )
    .await;

    let created: UserDto = read_json(result.unwrap().into_response()).await;
    assert_eq!(created.level, UserLevel::Operator);
    assert!(created.associated_aircrafts.is_empty());

    test.new_session();
    let login_result = login(
        State(state),
        test.session.clone(),
        ApiJson(aerocode::model::user::LoginDto {
            username: "carlos".to_string(),
            password: "segredo".to_string(),
        }),
    )
    .await;
    assert!(login_result.is_ok());

    Ok(())
}

#[tokio::test]
/// Expect 400 for a duplicate username and 403 for a non-admin
async fn create_user_rejections() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().with_admin_master().build().await?;
    let engineer = test.user().insert_user("maria", UserLevel::Engineer).await?;
    let state: AppState = test.to_app_state();

    login_as(&test, 1).await;
    let duplicate = create_user(
        State(state.clone()),
        test.session.clone(),
        ApiJson(new_user("maria", Some("abc"))),
    )
    .await;
    let resp = duplicate.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = read_json(resp).await;
    assert_eq!(body.error, "Username 'maria' is already taken");

    test.new_session();
    login_as(&test, engineer.id).await;
    let forbidden = create_user(
        State(state),
        test.session.clone(),
        ApiJson(new_user("carlos", None)),
    )
    .await;
    assert_eq!(
        forbidden.err().unwrap().into_response().status(),
        StatusCode::FORBIDDEN
    );

    Ok(())
}

#[tokio::test]
/// Expect 403 when changing the admin master's level or deleting it
async fn admin_master_is_protected() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().with_admin_master().build().await?;
    let other_admin = test.user().insert_user("ana", UserLevel::Administrator).await?;
    login_as(&test, other_admin.id).await;
    let state: AppState = test.to_app_state();

    let demote = update_user(
        State(state.clone()),
        test.session.clone(),
        Path(1),
        ApiJson(UpdateUserDto {
            level: Some(UserLevel::Operator),
            ..Default::default()
        }),
    )
    .await;
    let delete = delete_user(State(state.clone()), test.session.clone(), Path(1)).await;
    let rename = update_user(
        State(state),
        test.session.clone(),
        Path(1),
        ApiJson(UpdateUserDto {
            name: Some("Chefe".to_string()),
            ..Default::default()
        }),
    )
    .await;

    assert_eq!(demote.err().unwrap().into_response().status(), StatusCode::FORBIDDEN);
    assert_eq!(delete.err().unwrap().into_response().status(), StatusCode::FORBIDDEN);
    let renamed: UserDto = read_json(rename.unwrap().into_response()).await;
    assert_eq!(renamed.name, "Chefe");
    assert_eq!(renamed.level, UserLevel::Administrator);

    Ok(())
}

#[tokio::test]
/// Expect 200 when deleting a regular user, then 404 when fetching them
async fn deletes_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().with_admin_master().build().await?;
    let operator = test.user().insert_user("joao", UserLevel::Operator).await?;
    login_as(&test, 1).await;
    let state: AppState = test.to_app_state();

    let result = delete_user(State(state.clone()), test.session.clone(), Path(operator.id)).await;
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    let fetched = get_user(State(state), test.session.clone(), Path(operator.id)).await;
    assert_eq!(fetched.err().unwrap().into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 401 for a wrong current password and 403 for another user's password
async fn change_password_rules() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().build().await?;
    let user = test.user().insert_user("maria", UserLevel::Engineer).await?;
    let other = test.user().insert_user("joao", UserLevel::Operator).await?;
    login_as(&test, user.id).await;
    let state: AppState = test.to_app_state();

    let dto = |old: &str| {
        ApiJson(ChangePasswordDto {
            old_password: old.to_string(),
            new_password: "nova-senha".to_string(),
        })
    };

    let wrong_old = change_password(
        State(state.clone()),
        test.session.clone(),
        Path(user.id),
        dto("wrong"),
    )
    .await;
    let someone_else = change_password(
        State(state.clone()),
        test.session.clone(),
        Path(other.id),
        dto(TEST_PASSWORD),
    )
    .await;
    let changed = change_password(
        State(state),
        test.session.clone(),
        Path(user.id),
        dto(TEST_PASSWORD),
    )
    .await;

    assert_eq!(
        wrong_old.err().unwrap().into_response().status(),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        someone_else.err().unwrap().into_response().status(),
        StatusCode::FORBIDDEN
    );
    assert_eq!(changed.unwrap().into_response().status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 400 for an empty current password
async fn change_password_requires_old_password() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().build().await?;
    let user = test.user().insert_user("maria", UserLevel::Engineer).await?;
    login_as(&test, user.id).await;
    let state: AppState = test.to_app_state();

    let result = change_password(
        State(state),
        test.session.clone(),
        Path(user.id),
        ApiJson(ChangePasswordDto {
            old_password: String::new(),
            new_password: "nova-senha".to_string(),
        }),
    )
    .await;

    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::BAD_REQUEST
    );

    Ok(())
}
