//! Read-only aircraft endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{aircraft::AircraftDto, api::ErrorDto},
    server::{error::Error, model::app::AppState, service::aircraft::AircraftService},
};

/// OpenAPI tag grouping the aircraft endpoints
pub static AIRCRAFT_TAG: &str = "aircraft";

/// List every aircraft
#[utoipa::path(
    get,
    path = "/api/aircraft",
    tag = AIRCRAFT_TAG,
    responses(
        (status = 200, description = "Every aircraft in storage order", body = Vec<AircraftDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_aircraft(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let aircraft_service = AircraftService::new(&state.db);

    let aircraft = aircraft_service.list_aircraft().await?;

    Ok((StatusCode::OK, Json(aircraft)))
}
