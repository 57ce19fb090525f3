//! End-to-end tests through the assembled router.
//!
//! Requests travel through routing, extraction, the handler and the error mapping, so these
//! tests cover path parameters and JSON body parsing that direct handler calls skip.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::Utc;
use hangar::{
    model::{
        api::{AffectedRowsDto, ErrorDto},
        ownership::AircraftOwnershipDto,
        passenger::PassengerDto,
    },
    server::{model::app::AppState, router},
};
use hangar_test_utils::prelude::*;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::util::json_body;

fn app(test: &TestContext) -> Router {
    router::routes().with_state(test.to_app_state::<AppState>())
}

fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Expect a valid passenger posted over HTTP to be returned by the list route
#[tokio::test]
async fn registered_passenger_is_listed() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let payload = factory::passenger_payload(Utc::now().date_naive());

    let resp = app(&test)
        .oneshot(json_request(Method::POST, "/api/passengers", &payload))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: PassengerDto = json_body(resp).await;

    let resp = app(&test)
        .oneshot(empty_request(Method::GET, "/api/passengers"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let passengers: Vec<PassengerDto> = json_body(resp).await;
    assert_eq!(passengers, vec![created]);

    Ok(())
}

/// Expect an invalid email to be rejected with 400 and nothing listed afterwards
#[tokio::test]
async fn invalid_passenger_is_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let payload =
        factory::passenger_payload_with(Utc::now().date_naive(), "email", json!("a@b"));

    let resp = app(&test)
        .oneshot(json_request(Method::POST, "/api/passengers", &payload))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.error, "invalid email");

    let resp = app(&test)
        .oneshot(empty_request(Method::GET, "/api/passengers"))
        .await
        .unwrap();
    let passengers: Vec<PassengerDto> = json_body(resp).await;
    assert!(passengers.is_empty());

    Ok(())
}

/// Expect a passenger too young for registration to be rejected with the age reason
#[tokio::test]
async fn underage_passenger_is_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let today = Utc::now().date_naive();
    let birth = today - chrono::Days::new(365);
    let payload =
        factory::passenger_payload_with(today, "dataNascimento", json!(birth.to_string()));

    let resp = app(&test)
        .oneshot(json_request(Method::POST, "/api/passengers", &payload))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.error, "minimum age of 3 years for registration");

    Ok(())
}

/// Expect mistyped or unparseable fields to get a 400 with the failing rule's reason
#[tokio::test]
async fn mistyped_passenger_fields_are_rejected_with_reason() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let today = Utc::now().date_naive();

    for (field, value, reason) in [
        ("cpf", json!(12345678901u64), "invalid CPF"),
        ("telefone", json!(11912345678u64), "invalid phone"),
        (
            "dataNascimento",
            json!("15/06/1990"),
            "minimum age of 3 years for registration",
        ),
    ] {
        let payload = factory::passenger_payload_with(today, field, value);

        let resp = app(&test)
            .oneshot(json_request(Method::POST, "/api/passengers", &payload))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "field {}", field);
        let body: ErrorDto = json_body(resp).await;
        assert_eq!(body.error, reason, "field {}", field);
    }

    let resp = app(&test)
        .oneshot(empty_request(Method::GET, "/api/passengers"))
        .await
        .unwrap();
    let passengers: Vec<PassengerDto> = json_body(resp).await;
    assert!(passengers.is_empty());

    Ok(())
}

/// Expect a bad CPF to be reported ahead of an unparseable date of birth
#[tokio::test]
async fn mistyped_fields_follow_rule_order() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let mut payload = factory::passenger_payload(Utc::now().date_naive());
    payload["cpf"] = json!("123");
    payload["dataNascimento"] = json!("not-a-date");

    let resp = app(&test)
        .oneshot(json_request(Method::POST, "/api/passengers", &payload))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.error, "invalid CPF");

    Ok(())
}

/// Expect an explicit null acquisition date to clear the stored date
#[tokio::test]
async fn clears_ownership_acquisition_date() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_aircraft(1)
        .with_ownership(1, 10)
        .build()
        .await?;

    let resp = app(&test)
        .oneshot(json_request(
            Method::PUT,
            "/api/aircraft-ownerships/1/10",
            &json!({ "dataAquisicao": null }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app(&test)
        .oneshot(empty_request(Method::GET, "/api/aircraft-ownerships"))
        .await
        .unwrap();
    let ownerships: Vec<AircraftOwnershipDto> = json_body(resp).await;
    assert_eq!(ownerships[0].acquired_on, None);

    Ok(())
}

/// Expect a partial update body to be routed with the passenger ID from the path
#[tokio::test]
async fn updates_passenger_by_path_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_passenger("12345678901")
        .build()
        .await?;
    let passenger = test.passenger().insert_mock_passenger("98765432100").await?;

    let resp = app(&test)
        .oneshot(json_request(
            Method::PUT,
            &format!("/api/passengers/{}", passenger.id),
            &json!({ "nome": "Renamed" }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: AffectedRowsDto = json_body(resp).await;
    assert_eq!(body.rows_affected, 1);

    Ok(())
}

/// Expect an empty update body to report zero rows affected
#[tokio::test]
async fn empty_update_reports_zero_rows() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_passenger("12345678901")
        .build()
        .await?;

    let resp = app(&test)
        .oneshot(json_request(Method::PUT, "/api/passengers/1", &json!({})))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = json_body(resp).await;
    assert_eq!(body, json!({ "rowsAffected": 0 }));

    Ok(())
}

/// Expect both composite key halves to be read from the path
#[tokio::test]
async fn deletes_ownership_by_composite_path() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_aircraft(1)
        .with_ownership(1, 10)
        .with_ownership(1, 20)
        .build()
        .await?;

    let resp = app(&test)
        .oneshot(empty_request(Method::DELETE, "/api/aircraft-ownerships/1/20"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: AffectedRowsDto = json_body(resp).await;
    assert_eq!(body.rows_affected, 1);

    let resp = app(&test)
        .oneshot(empty_request(Method::GET, "/api/aircraft-ownerships"))
        .await
        .unwrap();
    let ownerships: Vec<AircraftOwnershipDto> = json_body(resp).await;
    assert_eq!(ownerships.len(), 1);
    assert_eq!(ownerships[0].company_id, 10);

    Ok(())
}

/// Expect ownership payloads missing a key half to be rejected before reaching storage
#[tokio::test]
async fn rejects_ownership_without_full_key() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_aircraft(1)
        .build()
        .await?;

    let resp = app(&test)
        .oneshot(json_request(
            Method::POST,
            "/api/aircraft-ownerships",
            &json!({ "aeronave_id": 1, "matricula": "PR-ABC" }),
        ))
        .await
        .unwrap();

    assert!(resp.status().is_client_error());

    Ok(())
}

/// Expect the read-only collections to be served
#[tokio::test]
async fn serves_read_only_collections() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_aircraft(1)
        .with_mock_airport(1)
        .build()
        .await?;

    for uri in ["/api/aircraft", "/api/airports", "/api/connections"] {
        let resp = app(&test)
            .oneshot(empty_request(Method::GET, uri))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK, "GET {}", uri);
    }

    Ok(())
}

/// Expect the OpenAPI document to list every collection path
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = app(&test)
        .oneshot(empty_request(Method::GET, "/api/docs/openapi.json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let doc: Value = json_body(resp).await;
    let paths = doc["paths"].as_object().unwrap();
    for path in [
        "/api/passengers",
        "/api/passengers/{id}",
        "/api/aircraft",
        "/api/aircraft-ownerships",
        "/api/aircraft-ownerships/{aeronave_id}/{companhia_id}",
        "/api/airports",
        "/api/connections",
        "/api/connections/{origem_id}/{destino_id}",
    ] {
        assert!(paths.contains_key(path), "missing {}", path);
    }

    Ok(())
}
