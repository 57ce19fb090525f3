//! Response bodies shared by every endpoint.

use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response for update & delete requests
///
/// Reports how many rows the storage statement touched; zero means the key matched nothing.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AffectedRowsDto {
    /// Rows matched by the key
    #[serde(rename = "rowsAffected")]
    pub rows_affected: u64,
}
