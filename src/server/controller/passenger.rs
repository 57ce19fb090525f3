//! Passenger endpoints under `/api/passengers`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{AffectedRowsDto, ErrorDto},
        passenger::{CreatePassengerDto, PassengerDto, UpdatePassengerDto},
    },
    server::{error::Error, model::app::AppState, service::passenger::PassengerService},
};

/// OpenAPI tag grouping the passenger endpoints
pub static PASSENGER_TAG: &str = "passenger";

/// List every registered passenger
#[utoipa::path(
    get,
    path = "/api/passengers",
    tag = PASSENGER_TAG,
    responses(
        (status = 200, description = "Every passenger in storage order", body = Vec<PassengerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_passengers(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let passenger_service = PassengerService::new(&state.db);

    let passengers = passenger_service.list_passengers().await?;

    Ok((StatusCode::OK, Json(passengers)))
}

/// Register a new passenger
///
/// The candidate must pass every registration rule; the first violated rule is returned as
/// the error message and nothing is stored.
#[utoipa::path(
    post,
    path = "/api/passengers",
    tag = PASSENGER_TAG,
    request_body = CreatePassengerDto,
    responses(
        (status = 201, description = "Passenger registered", body = PassengerDto),
        (status = 400, description = "Passenger failed validation", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_passenger(
    State(state): State<AppState>,
    Json(candidate): Json<CreatePassengerDto>,
) -> Result<impl IntoResponse, Error> {
    let passenger_service = PassengerService::new(&state.db);

    let passenger = passenger_service.create_passenger(candidate).await?;

    Ok((StatusCode::CREATED, Json(passenger)))
}

/// Update the supplied fields of a passenger
///
/// Updates are not re-validated.
#[utoipa::path(
    put,
    path = "/api/passengers/{id}",
    tag = PASSENGER_TAG,
    params(("id" = i32, Path, description = "Passenger ID")),
    request_body = UpdatePassengerDto,
    responses(
        (status = 200, description = "Number of passengers updated", body = AffectedRowsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_passenger(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(changes): Json<UpdatePassengerDto>,
) -> Result<impl IntoResponse, Error> {
    let passenger_service = PassengerService::new(&state.db);

    let rows_affected = passenger_service.update_passenger(id, changes).await?;

    Ok((StatusCode::OK, Json(AffectedRowsDto { rows_affected })))
}

/// Delete a passenger
#[utoipa::path(
    delete,
    path = "/api/passengers/{id}",
    tag = PASSENGER_TAG,
    params(("id" = i32, Path, description = "Passenger ID")),
    responses(
        (status = 200, description = "Number of passengers deleted", body = AffectedRowsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_passenger(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let passenger_service = PassengerService::new(&state.db);

    let rows_affected = passenger_service.delete_passenger(id).await?;

    Ok((StatusCode::OK, Json(AffectedRowsDto { rows_affected })))
}
