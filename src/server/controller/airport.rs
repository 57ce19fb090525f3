//! Read-only airport endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{airport::AirportDto, api::ErrorDto},
    server::{error::Error, model::app::AppState, service::airport::AirportService},
};

/// OpenAPI tag grouping the airport endpoints
pub static AIRPORT_TAG: &str = "airport";

/// List every airport
#[utoipa::path(
    get,
    path = "/api/airports",
    tag = AIRPORT_TAG,
    responses(
        (status = 200, description = "Every airport in storage order", body = Vec<AirportDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_airports(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let airport_service = AirportService::new(&state.db);

    let airports = airport_service.list_airports().await?;

    Ok((StatusCode::OK, Json(airports)))
}
