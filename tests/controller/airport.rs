//! Tests for the airport endpoint.

use hangar::{model::airport::AirportDto, server::controller::airport::list_airports};

use super::*;

/// Expect 200 with every airport
#[tokio::test]
async fn lists_airports() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_airport(1)
        .with_mock_airport(2)
        .build()
        .await?;

    let resp = list_airports(State(test.to_app_state()))
        .await
        .ok()
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let airports: Vec<AirportDto> = json_body(resp).await;
    assert_eq!(airports.len(), 2);

    Ok(())
}
