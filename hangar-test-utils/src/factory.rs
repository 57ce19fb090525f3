//! Request payload factories.
//!
//! Payloads are built as JSON using the API's wire field names so that tests exercise the
//! same deserialization path as real clients.

use chrono::{Months, NaiveDate};
use serde_json::{json, Value};

use crate::constant::{TEST_CPF, TEST_EMAIL, TEST_NAME, TEST_PHONE, TEST_REGISTRATION};

/// Fixed reference date used as "today" by tests that need a deterministic clock.
pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

/// The same calendar day `years` years before `date`.
///
/// Clamps 29 February to 28 February when the target year is not a leap year.
pub fn years_before(date: NaiveDate, years: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(years * 12)).unwrap()
}

/// A passenger payload that passes every registration rule as of `today`.
///
/// # Arguments
/// - `today` - Reference date; the passenger is made 30 years old relative to it
pub fn passenger_payload(today: NaiveDate) -> Value {
    json!({
        "cpf": TEST_CPF,
        "nome": TEST_NAME,
        "telefone": TEST_PHONE,
        "email": TEST_EMAIL,
        "dataNascimento": years_before(today, 30).to_string(),
    })
}

/// A valid passenger payload with a single field replaced.
///
/// Passing `Value::Null` produces a payload where the field is explicitly absent.
pub fn passenger_payload_with(today: NaiveDate, field: &str, value: Value) -> Value {
    let mut payload = passenger_payload(today);
    payload[field] = value;
    payload
}

/// An aircraft ownership payload for the given composite key.
pub fn ownership_payload(aircraft_id: i32, company_id: i32) -> Value {
    json!({
        "aeronave_id": aircraft_id,
        "companhia_id": company_id,
        "matricula": TEST_REGISTRATION,
        "dataAquisicao": "2019-11-02",
    })
}

/// A connection payload for the given origin & destination airports.
pub fn connection_payload(origin_id: i32, destination_id: i32) -> Value {
    json!({
        "origem_id": origin_id,
        "destino_id": destination_id,
        "distanciaKm": 358,
        "duracaoMinutos": 65,
    })
}
