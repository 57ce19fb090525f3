//! Passenger wire models.
//!
//! Registration accepts loosely typed candidates so the validation rules can report every
//! problem with a reason; stored passengers are always fully typed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Registered passenger as stored
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PassengerDto {
    /// Passenger ID, assigned by storage
    pub id: i32,
    /// Full name
    #[serde(rename = "nome")]
    pub name: String,
    /// 11 decimal digits
    pub cpf: String,
    /// `(NN) NNNNN-NNNN`
    #[serde(rename = "telefone")]
    pub phone: String,
    /// Email address
    pub email: String,
    /// Date of birth
    #[serde(rename = "dataNascimento")]
    pub date_of_birth: NaiveDate,
}

impl From<entity::passenger::Model> for PassengerDto {
    fn from(model: entity::passenger::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            cpf: model.cpf,
            phone: model.phone,
            email: model.email,
            date_of_birth: model.date_of_birth,
        }
    }
}

/// Candidate passenger submitted for registration.
///
/// Fields are kept as raw JSON so that a missing, mistyped or unparseable value is reported
/// by the passenger validation rules with its reason, instead of being rejected as a
/// malformed body.
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreatePassengerDto {
    /// 11 decimal digits
    #[schema(value_type = Option<String>)]
    pub cpf: Option<Value>,
    /// Full name
    #[serde(rename = "nome")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Value>,
    /// `(NN) NNNNN-NNNN`
    #[serde(rename = "telefone")]
    #[schema(value_type = Option<String>)]
    pub phone: Option<Value>,
    /// Email address
    #[schema(value_type = Option<String>)]
    pub email: Option<Value>,
    /// ISO `YYYY-MM-DD` date of birth
    #[serde(rename = "dataNascimento")]
    #[schema(value_type = Option<NaiveDate>)]
    pub date_of_birth: Option<Value>,
}

/// Fields to overwrite on an existing passenger, absent fields are left untouched
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdatePassengerDto {
    /// 11 decimal digits
    pub cpf: Option<String>,
    /// Full name
    #[serde(rename = "nome")]
    pub name: Option<String>,
    /// `(NN) NNNNN-NNNN`
    #[serde(rename = "telefone")]
    pub phone: Option<String>,
    /// Email address
    pub email: Option<String>,
    /// Date of birth
    #[serde(rename = "dataNascimento")]
    pub date_of_birth: Option<NaiveDate>,
}
