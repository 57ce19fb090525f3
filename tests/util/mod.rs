//! Helpers for inspecting axum responses.

use axum::{body::to_bytes, response::Response};
use serde::de::DeserializeOwned;

/// Read and deserialize a JSON response body.
pub async fn json_body<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
