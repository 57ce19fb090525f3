//! Airport wire model.

use serde::{Deserialize, Serialize};

/// Airport served by connections, read-only through the API
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AirportDto {
    /// Airport ID
    pub id: i32,
    /// IATA airport code
    #[serde(rename = "codigo")]
    pub code: String,
    /// Airport name
    #[serde(rename = "nome")]
    pub name: String,
    /// City served
    #[serde(rename = "cidade")]
    pub city: String,
    /// Country
    #[serde(rename = "pais")]
    pub country: String,
}

impl From<entity::airport::Model> for AirportDto {
    fn from(model: entity::airport::Model) -> Self {
        Self {
            id: model.id,
            code: model.code,
            name: model.name,
            city: model.city,
            country: model.country,
        }
    }
}
