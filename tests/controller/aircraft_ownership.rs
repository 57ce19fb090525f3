//! Tests for the aircraft ownership endpoints.

use hangar::{
    model::ownership::{AircraftOwnershipDto, UpdateAircraftOwnershipDto},
    server::controller::aircraft_ownership::{
        create_ownership, delete_ownership, list_ownerships, update_ownership,
    },
};

use super::*;

/// Expect 201 with the stored ownership
#[tokio::test]
async fn creates_ownership() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_aircraft(1)
        .build()
        .await?;
    let ownership: AircraftOwnershipDto =
        serde_json::from_value(factory::ownership_payload(1, 3))?;

    let resp = create_ownership(State(test.to_app_state()), Json(ownership.clone()))
        .await
        .ok()
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: AircraftOwnershipDto = json_body(resp).await;
    assert_eq!(created, ownership);

    Ok(())
}

/// Expect update by full key to leave the row sharing the aircraft untouched
#[tokio::test]
async fn update_targets_full_composite_key() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_aircraft(1)
        .with_ownership(1, 10)
        .with_ownership(1, 20)
        .build()
        .await?;

    let changes = UpdateAircraftOwnershipDto {
        registration: Some("PS-XYZ".to_string()),
        ..Default::default()
    };
    let resp = update_ownership(State(test.to_app_state()), Path((1, 20)), Json(changes))
        .await
        .ok()
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: AffectedRowsDto = json_body(resp).await;
    assert_eq!(body.rows_affected, 1);

    let resp = list_ownerships(State(test.to_app_state()))
        .await
        .ok()
        .unwrap()
        .into_response();
    let ownerships: Vec<AircraftOwnershipDto> = json_body(resp).await;
    let changed: Vec<i32> = ownerships
        .iter()
        .filter(|o| o.registration == "PS-XYZ")
        .map(|o| o.company_id)
        .collect();
    assert_eq!(changed, vec![20]);

    Ok(())
}

/// Expect delete by full key to leave the row sharing the aircraft untouched
#[tokio::test]
async fn delete_targets_full_composite_key() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_aircraft(1)
        .with_ownership(1, 10)
        .with_ownership(1, 20)
        .build()
        .await?;

    let resp = delete_ownership(State(test.to_app_state()), Path((1, 10)))
        .await
        .ok()
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: AffectedRowsDto = json_body(resp).await;
    assert_eq!(body.rows_affected, 1);

    let resp = list_ownerships(State(test.to_app_state()))
        .await
        .ok()
        .unwrap()
        .into_response();
    let ownerships: Vec<AircraftOwnershipDto> = json_body(resp).await;
    assert_eq!(ownerships.len(), 1);
    assert_eq!(ownerships[0].company_id, 20);

    Ok(())
}

/// Expect 500 when the aircraft does not exist
#[tokio::test]
async fn create_fails_for_unknown_aircraft() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let ownership: AircraftOwnershipDto =
        serde_json::from_value(factory::ownership_payload(1, 3))?;

    let result = create_ownership(State(test.to_app_state()), Json(ownership)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
