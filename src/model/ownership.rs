//! Aircraft ownership wire models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which company owns or operates which aircraft.
///
/// Keyed by the composite (`aeronave_id`, `companhia_id`), both halves are required
/// when creating a record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AircraftOwnershipDto {
    /// Aircraft ID, must reference an existing aircraft
    #[serde(rename = "aeronave_id")]
    pub aircraft_id: i32,
    /// Owning or operating company ID
    #[serde(rename = "companhia_id")]
    pub company_id: i32,
    /// Registration mark
    #[serde(rename = "matricula")]
    pub registration: String,
    /// Acquisition date
    #[serde(rename = "dataAquisicao", default)]
    pub acquired_on: Option<NaiveDate>,
}

impl From<entity::aircraft_ownership::Model> for AircraftOwnershipDto {
    fn from(model: entity::aircraft_ownership::Model) -> Self {
        Self {
            aircraft_id: model.aircraft_id,
            company_id: model.company_id,
            registration: model.registration,
            acquired_on: model.acquired_on,
        }
    }
}

/// Fields to overwrite on an existing ownership, absent fields are left untouched
///
/// `dataAquisicao` distinguishes an absent field (`None`) from an explicit `null`
/// (`Some(None)`), which clears the stored date.
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateAircraftOwnershipDto {
    /// Registration mark
    #[serde(rename = "matricula")]
    pub registration: Option<String>,
    /// Acquisition date, `null` clears it
    #[serde(
        rename = "dataAquisicao",
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    #[schema(value_type = Option<NaiveDate>)]
    pub acquired_on: Option<Option<NaiveDate>>,
}
