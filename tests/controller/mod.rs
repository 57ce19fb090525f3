//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extracted arguments, verifying status codes, response
//! bodies and what ends up in storage.

mod aircraft;
mod aircraft_ownership;
mod airport;
mod connection;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use hangar::model::api::{AffectedRowsDto, ErrorDto};
use hangar_test_utils::prelude::*;

use crate::util::json_body;
