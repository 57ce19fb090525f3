//! Passenger validation error types.
//!
//! Each variant corresponds to one registration rule. The `Display` output of a variant is the
//! fixed, machine-readable reason returned to API clients.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Reason a candidate passenger was rejected, in rule evaluation order.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassengerValidationError {
    /// CPF missing or not exactly 11 decimal digits.
    #[error("invalid CPF")]
    InvalidCpf,
    /// Name missing or empty.
    #[error("name is required")]
    NameRequired,
    /// Phone missing or not in the `(NN) NNNNN-NNNN` format.
    #[error("invalid phone")]
    InvalidPhone,
    /// Email missing or not shaped like `local@domain.tld`.
    #[error("invalid email")]
    InvalidEmail,
    /// Date of birth missing or less than 3 full years before today.
    #[error("minimum age of 3 years for registration")]
    BelowMinimumAge,
}

impl IntoResponse for PassengerValidationError {
    fn into_response(self) -> Response {
        tracing::debug!(reason = %self, "Rejected passenger registration");

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
