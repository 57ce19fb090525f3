//! Aircraft ownership endpoints under `/api/aircraft-ownerships`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{AffectedRowsDto, ErrorDto},
        ownership::{AircraftOwnershipDto, UpdateAircraftOwnershipDto},
    },
    server::{
        error::Error, model::app::AppState,
        service::aircraft_ownership::AircraftOwnershipService,
    },
};

/// OpenAPI tag grouping the aircraft ownership endpoints
pub static AIRCRAFT_OWNERSHIP_TAG: &str = "aircraft-ownership";

/// List every aircraft ownership
#[utoipa::path(
    get,
    path = "/api/aircraft-ownerships",
    tag = AIRCRAFT_OWNERSHIP_TAG,
    responses(
        (status = 200, description = "Every ownership in storage order", body = Vec<AircraftOwnershipDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_ownerships(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let ownership_service = AircraftOwnershipService::new(&state.db);

    let ownerships = ownership_service.list_ownerships().await?;

    Ok((StatusCode::OK, Json(ownerships)))
}

/// Record that a company owns an aircraft
#[utoipa::path(
    post,
    path = "/api/aircraft-ownerships",
    tag = AIRCRAFT_OWNERSHIP_TAG,
    request_body = AircraftOwnershipDto,
    responses(
        (status = 201, description = "Ownership stored", body = AircraftOwnershipDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_ownership(
    State(state): State<AppState>,
    Json(ownership): Json<AircraftOwnershipDto>,
) -> Result<impl IntoResponse, Error> {
    let ownership_service = AircraftOwnershipService::new(&state.db);

    let ownership = ownership_service.create_ownership(ownership).await?;

    Ok((StatusCode::CREATED, Json(ownership)))
}

/// Update the supplied fields of the ownership matching both key halves
#[utoipa::path(
    put,
    path = "/api/aircraft-ownerships/{aeronave_id}/{companhia_id}",
    tag = AIRCRAFT_OWNERSHIP_TAG,
    params(
        ("aeronave_id" = i32, Path, description = "Aircraft ID"),
        ("companhia_id" = i32, Path, description = "Company ID"),
    ),
    request_body = UpdateAircraftOwnershipDto,
    responses(
        (status = 200, description = "Number of ownerships updated", body = AffectedRowsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_ownership(
    State(state): State<AppState>,
    Path((aircraft_id, company_id)): Path<(i32, i32)>,
    Json(changes): Json<UpdateAircraftOwnershipDto>,
) -> Result<impl IntoResponse, Error> {
    let ownership_service = AircraftOwnershipService::new(&state.db);

    let rows_affected = ownership_service
        .update_ownership(aircraft_id, company_id, changes)
        .await?;

    Ok((StatusCode::OK, Json(AffectedRowsDto { rows_affected })))
}

/// Delete the ownership matching both key halves
#[utoipa::path(
    delete,
    path = "/api/aircraft-ownerships/{aeronave_id}/{companhia_id}",
    tag = AIRCRAFT_OWNERSHIP_TAG,
    params(
        ("aeronave_id" = i32, Path, description = "Aircraft ID"),
        ("companhia_id" = i32, Path, description = "Company ID"),
    ),
    responses(
        (status = 200, description = "Number of ownerships deleted", body = AffectedRowsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_ownership(
    State(state): State<AppState>,
    Path((aircraft_id, company_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let ownership_service = AircraftOwnershipService::new(&state.db);

    let rows_affected = ownership_service
        .delete_ownership(aircraft_id, company_id)
        .await?;

    Ok((StatusCode::OK, Json(AffectedRowsDto { rows_affected })))
}
