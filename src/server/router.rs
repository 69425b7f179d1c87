//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI annotations, and Swagger
//! UI serves the generated document at `/api/docs`.

use axum::{middleware, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tower_sessions::{SessionManagerLayer, SessionStore};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, middleware::process_time, model::app::AppState};

/// Builds the API router with all endpoints and Swagger UI documentation.
///
/// Handlers sharing a path are registered in one `routes!` call. The OpenAPI document
/// is available at `/api/docs/openapi.json`.
///
/// # Returns
/// A `Router<AppState>` that still needs its state and session layer, see [`build_app`].
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "Aerocode", description = "Aerocode production tracking API"),
        tags(
            (name = controller::auth::AUTH_TAG, description = "Login, logout, and password checks"),
            (name = controller::user::USER_TAG, description = "User management"),
            (name = controller::aircraft::AIRCRAFT_TAG, description = "Aircraft projects and reports"),
            (name = controller::task::TASK_TAG, description = "Production tasks"),
            (name = controller::part::PART_TAG, description = "Aircraft parts"),
            (name = controller::test_record::TEST_TAG, description = "Aircraft test history"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::me))
        .routes(routes!(controller::auth::verify_password))
        .routes(routes!(
            controller::user::get_users,
            controller::user::create_user
        ))
        .routes(routes!(
            controller::user::get_user,
            controller::user::update_user,
            controller::user::delete_user
        ))
        .routes(routes!(controller::user::change_password))
        .routes(routes!(
            controller::aircraft::get_aircrafts,
            controller::aircraft::create_aircraft
        ))
        .routes(routes!(
            controller::aircraft::get_aircraft,
            controller::aircraft::update_aircraft,
            controller::aircraft::delete_aircraft
        ))
        .routes(routes!(controller::aircraft::get_aircraft_report))
        .routes(routes!(
            controller::task::get_tasks,
            controller::task::create_task
        ))
        .routes(routes!(controller::task::get_aircraft_tasks))
        .routes(routes!(
            controller::task::update_task,
            controller::task::delete_task
        ))
        .routes(routes!(controller::part::get_aircraft_parts))
        .routes(routes!(controller::part::create_part))
        .routes(routes!(
            controller::part::update_part,
            controller::part::delete_part
        ))
        .routes(routes!(controller::test_record::get_aircraft_tests))
        .routes(routes!(controller::test_record::create_test))
        .routes(routes!(controller::test_record::delete_test))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

/// Assemble the complete application with state, sessions and the HTTP layers.
pub fn build_app<S>(state: AppState, session_layer: SessionManagerLayer<S>) -> Router
where
    S: SessionStore + Clone,
{
    routes()
        .with_state(state)
        .layer(session_layer)
        .layer(middleware::from_fn(process_time))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
