//! Aircraft wire model.

use serde::{Deserialize, Serialize};

/// Aircraft in the catalogue, read-only through the API
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AircraftDto {
    /// Aircraft ID
    pub id: i32,
    /// Model designation
    #[serde(rename = "modelo")]
    pub model: String,
    /// Manufacturer name
    #[serde(rename = "fabricante")]
    pub manufacturer: String,
    /// Seat capacity
    #[serde(rename = "capacidade")]
    pub capacity: i32,
}

impl From<entity::aircraft::Model> for AircraftDto {
    fn from(model: entity::aircraft::Model) -> Self {
        Self {
            id: model.id,
            model: model.model,
            manufacturer: model.manufacturer,
            capacity: model.capacity,
        }
    }
}
