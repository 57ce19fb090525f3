//! Errors raised while reading configuration from the environment.

use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Configuration could not be loaded from the environment
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required variable is unset
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// Variable is set but cannot be used
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue {
        /// Variable name
        var: String,
        /// Why the value was rejected
        reason: String,
    },
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
