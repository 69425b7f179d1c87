use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    model::{app::AppState, db::UserModel, session::user::SessionUserId},
};

/// Retrieves the logged in user from the session and then from the database
///
/// # Arguments
/// - `state`: Application state with the database connection
/// - `session`: The user's session
///
/// # Returns
/// - `Ok(UserModel)`: The acting user
/// - `Err(Error::AuthError(AuthError::UserNotInSession))`: No user ID in session
/// - `Err(Error::AuthError(AuthError::UserNotInDatabase))`: User ID in session no longer
///   exists in the database (session is cleared)
/// - `Err(Error)`: Database or session failures
pub async fn get_user_from_session(state: &AppState, session: &Session) -> Result<UserModel, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(AuthError::UserNotInSession.into());
    };

    let Some(user) = UserRepository::new(&state.db).get(user_id).await? else {
        session.clear().await;

        tracing::debug!(
            user_id = %user_id,
            "Session cleared for user with active session but not found in database"
        );

        return Err(AuthError::UserNotInDatabase(user_id).into());
    };

    Ok(user)
}

#[cfg(test)]
mod tests {
    use aerocode_test_utils::prelude::*;
    use axum::{http::StatusCode, response::IntoResponse};
    use entity::sea_orm_active_enums::UserLevel;

    use crate::server::{
        controller::util::get_user::get_user_from_session,
        model::{app::AppState, session::user::SessionUserId},
    };

    /// Expect the session user to be loaded
    #[tokio::test]
    async fn returns_session_user() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_tables().build().await?;
        let user = test.user().insert_user("maria", UserLevel::Engineer).await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();

        let state: AppState = test.to_app_state();
        let result = get_user_from_session(&state, &test.session).await;

        assert_eq!(result.unwrap(), user);

        Ok(())
    }

    /// Expect 401 unauthorized without a user in session
    #[tokio::test]
    async fn fails_without_session_user() -> Result<(), TestError> {
        let test = TestBuilder::new().with_tables().build().await?;

        let state: AppState = test.to_app_state();
        let result = get_user_from_session(&state, &test.session).await;

        assert!(result.is_err());
        let resp = result.unwrap_err().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }

    /// Expect 401 unauthorized and a cleared session for a deleted user
    #[tokio::test]
    async fn clears_session_of_deleted_user() -> Result<(), TestError> {
        let test = TestBuilder::new().with_tables().build().await?;
        SessionUserId::insert(&test.session, 42).await.unwrap();

        let state: AppState = test.to_app_state();
        let result = get_user_from_session(&state, &test.session).await;

        assert!(result.is_err());
        let resp = result.unwrap_err().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(SessionUserId::get(&test.session).await.unwrap(), None);

        Ok(())
    }
}
