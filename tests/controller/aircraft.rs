//! Tests for the aircraft endpoint.

use hangar::{model::aircraft::AircraftDto, server::controller::aircraft::list_aircraft};

use super::*;

/// Expect 200 with every aircraft
#[tokio::test]
async fn lists_aircraft() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_aircraft(1)
        .build()
        .await?;

    let resp = list_aircraft(State(test.to_app_state()))
        .await
        .ok()
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let aircraft: Vec<AircraftDto> = json_body(resp).await;
    assert_eq!(aircraft.len(), 1);
    assert_eq!(aircraft[0].id, 1);

    Ok(())
}

/// Expect 500 when the aircraft table is missing
#[tokio::test]
async fn fails_when_table_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = list_aircraft(State(test.to_app_state())).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
