//! Flight connection endpoints under `/api/connections`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{AffectedRowsDto, ErrorDto},
        connection::{ConnectionDto, UpdateConnectionDto},
    },
    server::{error::Error, model::app::AppState, service::connection::ConnectionService},
};

/// OpenAPI tag grouping the connection endpoints
pub static CONNECTION_TAG: &str = "connection";

/// List every flight connection
#[utoipa::path(
    get,
    path = "/api/connections",
    tag = CONNECTION_TAG,
    responses(
        (status = 200, description = "Every connection in storage order", body = Vec<ConnectionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_connections(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let connection_service = ConnectionService::new(&state.db);

    let connections = connection_service.list_connections().await?;

    Ok((StatusCode::OK, Json(connections)))
}

/// Create a flight connection between two airports
#[utoipa::path(
    post,
    path = "/api/connections",
    tag = CONNECTION_TAG,
    request_body = ConnectionDto,
    responses(
        (status = 201, description = "Connection stored", body = ConnectionDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_connection(
    State(state): State<AppState>,
    Json(connection): Json<ConnectionDto>,
) -> Result<impl IntoResponse, Error> {
    let connection_service = ConnectionService::new(&state.db);

    let connection = connection_service.create_connection(connection).await?;

    Ok((StatusCode::CREATED, Json(connection)))
}

/// Update the supplied fields of the connection matching origin & destination
#[utoipa::path(
    put,
    path = "/api/connections/{origem_id}/{destino_id}",
    tag = CONNECTION_TAG,
    params(
        ("origem_id" = i32, Path, description = "Origin airport ID"),
        ("destino_id" = i32, Path, description = "Destination airport ID"),
    ),
    request_body = UpdateConnectionDto,
    responses(
        (status = 200, description = "Number of connections updated", body = AffectedRowsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_connection(
    State(state): State<AppState>,
    Path((origin_id, destination_id)): Path<(i32, i32)>,
    Json(changes): Json<UpdateConnectionDto>,
) -> Result<impl IntoResponse, Error> {
    let connection_service = ConnectionService::new(&state.db);

    let rows_affected = connection_service
        .update_connection(origin_id, destination_id, changes)
        .await?;

    Ok((StatusCode::OK, Json(AffectedRowsDto { rows_affected })))
}

/// Delete the connection matching origin & destination
#[utoipa::path(
    delete,
    path = "/api/connections/{origem_id}/{destino_id}",
    tag = CONNECTION_TAG,
    params(
        ("origem_id" = i32, Path, description = "Origin airport ID"),
        ("destino_id" = i32, Path, description = "Destination airport ID"),
    ),
    responses(
        (status = 200, description = "Number of connections deleted", body = AffectedRowsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_connection(
    State(state): State<AppState>,
    Path((origin_id, destination_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let connection_service = ConnectionService::new(&state.db);

    let rows_affected = connection_service
        .delete_connection(origin_id, destination_id)
        .await?;

    Ok((StatusCode::OK, Json(AffectedRowsDto { rows_affected })))
}
