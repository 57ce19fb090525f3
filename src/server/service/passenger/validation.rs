//! Passenger registration rules.
//!
//! A pure predicate over a candidate record: no storage, no clock, no request context. The
//! caller supplies "today" so the minimum-age rule is deterministic.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde_json::Value;

use crate::{
    model::passenger::CreatePassengerDto,
    server::{
        error::validation::PassengerValidationError, model::passenger::NewPassenger,
        util::time::age_in_years,
    },
};

/// Minimum age in whole years for a passenger to be registered.
pub const MINIMUM_AGE_YEARS: i32 = 3;

static CPF_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{11}$").unwrap());
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\([0-9]{2}\) [0-9]{5}-[0-9]{4}$").unwrap());
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Checks a candidate passenger against every registration rule.
///
/// Rules are evaluated in a fixed order and the first failure is reported:
/// 1. CPF is exactly 11 decimal digits
/// 2. Name is present and non-empty
/// 3. Phone matches `(NN) NNNNN-NNNN`
/// 4. Email matches `local@domain.tld`
/// 5. Passenger is at least [`MINIMUM_AGE_YEARS`] old on `today`
///
/// # Arguments
/// - `candidate` - Passenger as submitted by the client
/// - `today` - Date the minimum age is measured against
///
/// # Returns
/// - `Ok(NewPassenger)` - Every rule passed, fields are ready to persist
/// - `Err(PassengerValidationError)` - The first rule that failed
pub fn validate_passenger(
    candidate: CreatePassengerDto,
    today: NaiveDate,
) -> Result<NewPassenger, PassengerValidationError> {
    let cpf = text(candidate.cpf)
        .filter(|cpf| CPF_PATTERN.is_match(cpf))
        .ok_or(PassengerValidationError::InvalidCpf)?;

    let name = text(candidate.name)
        .filter(|name| !name.is_empty())
        .ok_or(PassengerValidationError::NameRequired)?;

    let phone = text(candidate.phone)
        .filter(|phone| PHONE_PATTERN.is_match(phone))
        .ok_or(PassengerValidationError::InvalidPhone)?;

    let email = text(candidate.email)
        .filter(|email| EMAIL_PATTERN.is_match(email))
        .ok_or(PassengerValidationError::InvalidEmail)?;

    // A missing or unparseable date of birth cannot prove the minimum age
    let date_of_birth = text(candidate.date_of_birth)
        .and_then(|date_of_birth| date_of_birth.parse::<NaiveDate>().ok())
        .filter(|date_of_birth| age_in_years(*date_of_birth, today) >= MINIMUM_AGE_YEARS)
        .ok_or(PassengerValidationError::BelowMinimumAge)?;

    Ok(NewPassenger {
        name,
        cpf,
        phone,
        email,
        date_of_birth,
    })
}

/// Only JSON strings count as text, numbers and other types fail their rule.
fn text(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(text)) => Some(text),
        _ => None,
    }
}
