//! Flight connection wire models.

use serde::{Deserialize, Serialize};

/// Flight link between two airports, keyed by the composite (`origem_id`, `destino_id`)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ConnectionDto {
    /// Origin airport ID
    #[serde(rename = "origem_id")]
    pub origin_id: i32,
    /// Destination airport ID
    #[serde(rename = "destino_id")]
    pub destination_id: i32,
    /// Distance in kilometres
    #[serde(rename = "distanciaKm")]
    pub distance_km: i32,
    /// Scheduled duration in minutes
    #[serde(rename = "duracaoMinutos")]
    pub duration_minutes: i32,
}

impl From<entity::connection::Model> for ConnectionDto {
    fn from(model: entity::connection::Model) -> Self {
        Self {
            origin_id: model.origin_id,
            destination_id: model.destination_id,
            distance_km: model.distance_km,
            duration_minutes: model.duration_minutes,
        }
    }
}

/// Fields to overwrite on an existing connection, absent fields are left untouched
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateConnectionDto {
    /// Distance in kilometres
    #[serde(rename = "distanciaKm")]
    pub distance_km: Option<i32>,
    /// Scheduled duration in minutes
    #[serde(rename = "duracaoMinutos")]
    pub duration_minutes: Option<i32>,
}
