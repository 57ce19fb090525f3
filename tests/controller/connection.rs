//! Tests for the connection endpoints.

use hangar::{
    model::connection::{ConnectionDto, UpdateConnectionDto},
    server::controller::connection::{
        create_connection, delete_connection, list_connections, update_connection,
    },
};

use super::*;

/// Expect 201 with the stored connection
#[tokio::test]
async fn creates_connection() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_airport(1)
        .with_mock_airport(2)
        .build()
        .await?;
    let connection: ConnectionDto = serde_json::from_value(factory::connection_payload(1, 2))?;

    let resp = create_connection(State(test.to_app_state()), Json(connection.clone()))
        .await
        .ok()
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: ConnectionDto = json_body(resp).await;
    assert_eq!(created, connection);

    Ok(())
}

/// Expect update by full key to leave the row sharing the origin untouched
#[tokio::test]
async fn update_targets_full_composite_key() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_airport(1)
        .with_mock_airport(2)
        .with_mock_airport(3)
        .with_connection(1, 2)
        .with_connection(1, 3)
        .build()
        .await?;

    let changes = UpdateConnectionDto {
        distance_km: Some(2000),
        ..Default::default()
    };
    let resp = update_connection(State(test.to_app_state()), Path((1, 3)), Json(changes))
        .await
        .ok()
        .unwrap()
        .into_response();

    let body: AffectedRowsDto = json_body(resp).await;
    assert_eq!(body.rows_affected, 1);

    let resp = list_connections(State(test.to_app_state()))
        .await
        .ok()
        .unwrap()
        .into_response();
    let connections: Vec<ConnectionDto> = json_body(resp).await;
    let changed: Vec<i32> = connections
        .iter()
        .filter(|c| c.distance_km == 2000)
        .map(|c| c.destination_id)
        .collect();
    assert_eq!(changed, vec![3]);

    Ok(())
}

/// Expect delete by full key to leave the row sharing the origin untouched
#[tokio::test]
async fn delete_targets_full_composite_key() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_airport(1)
        .with_mock_airport(2)
        .with_mock_airport(3)
        .with_connection(1, 2)
        .with_connection(1, 3)
        .build()
        .await?;

    let resp = delete_connection(State(test.to_app_state()), Path((1, 2)))
        .await
        .ok()
        .unwrap()
        .into_response();

    let body: AffectedRowsDto = json_body(resp).await;
    assert_eq!(body.rows_affected, 1);

    let resp = list_connections(State(test.to_app_state()))
        .await
        .ok()
        .unwrap()
        .into_response();
    let connections: Vec<ConnectionDto> = json_body(resp).await;
    assert_eq!(connections.len(), 1);
    assert_eq!(connections[0].destination_id, 3);

    Ok(())
}
