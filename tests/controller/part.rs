use aerocode::{
    model::part::{CreatePartDto, PartDto, UpdatePartDto},
    server::{
        controller::{
            part::{create_part, delete_part, get_aircraft_parts, update_part},
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
use entity::sea_orm_active_enums::{PartStatus, PartType, UserLevel};

use crate::controller::{login_as, read_json};

#[tokio::test]
/// Expect an associated engineer to create, move, and delete a part
async fn manages_parts() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().build().await?;
    let engineer = test.user().insert_user("maria", UserLevel::Engineer).await?;
    test.aircraft().insert_aircraft("A-100", &[engineer.id]).await?;
    login_as(&test, engineer.id).await;
    let state: AppState = test.to_app_state();

    let created = create_part(
        State(state.clone()),
        test.session.clone(),
        ApiJson(CreatePartDto {
            aircraft_id: "A-100".to_string(),
            name: "Aileron".to_string(),
            part_type: PartType::Domestic,
            supplier: "Akaer".to_string(),
            status: PartStatus::InProduction,
        }),
    )
    .await;
    let part: PartDto = read_json(created.unwrap().into_response()).await;

    let updated = update_part(
        State(state.clone()),
        test.session.clone(),
        Path(part.id),
        ApiJson(UpdatePartDto {
            status: Some(PartStatus::ReadyForUse),
            ..Default::default()
        }),
    )
    .await;
    let updated: PartDto = read_json(updated.unwrap().into_response()).await;
    assert_eq!(updated.status, PartStatus::ReadyForUse);

    let deleted = delete_part(State(state.clone()), test.session.clone(), Path(part.id)).await;
    assert_eq!(deleted.unwrap().into_response().status(), StatusCode::OK);

    let listed = get_aircraft_parts(State(state), test.session.clone(), Path("A-100".to_string())).await;
    let parts: Vec<PartDto> = read_json(listed.unwrap().into_response()).await;
    assert!(parts.is_empty());

    Ok(())
}

#[tokio::test]
/// Expect 403 when an operator edits a part and 404 for an unknown part
async fn part_rejections() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().build().await?;
    let operator = test.user().insert_user("joao", UserLevel::Operator).await?;
    test.aircraft().insert_aircraft("A-100", &[]).await?;
    let part = test.part().insert_part("A-100", PartStatus::InTransit).await?;
    login_as(&test, operator.id).await;
    let state: AppState = test.to_app_state();

    let forbidden = update_part(
        State(state.clone()),
        test.session.clone(),
        Path(part.id),
        ApiJson(UpdatePartDto::default()),
    )
    .await;
    let missing = delete_part(State(state), test.session.clone(), Path(999)).await;

    assert_eq!(forbidden.err().unwrap().into_response().status(), StatusCode::FORBIDDEN);
    assert_eq!(missing.err().unwrap().into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}
