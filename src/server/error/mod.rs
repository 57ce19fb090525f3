//! Error types for the Hangar server application.
//!
//! This module provides the error handling used across the service: configuration errors,
//! passenger validation errors, and pass-through storage errors. All errors implement
//! `IntoResponse` for Axum HTTP responses and use `thiserror` for ergonomic error definitions
//! with automatic `Display` and `Error` trait implementations.

pub mod config;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, validation::PassengerValidationError},
};

/// Main error type for the Hangar server application.
///
/// Aggregates domain-specific error types and external library errors into a single unified
/// error type. `#[from]` enables automatic conversion via the `?` operator. Storage errors are
/// carried unchanged; this layer never wraps, interprets or retries them.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Validation errors (passenger registration rules)
/// - External library errors (database, listener I/O)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Passenger record rejected before creation.
    #[error(transparent)]
    ValidationError(#[from] PassengerValidationError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error while binding or serving the HTTP listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For passenger validation failures, carrying the rule's reason
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
