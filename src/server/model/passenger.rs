//! Validated passenger record handed from the registration rules to storage.

use chrono::NaiveDate;

/// Passenger record that passed every registration rule and may be persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewPassenger {
    /// Full name, non-empty
    pub name: String,
    /// Exactly 11 decimal digits
    pub cpf: String,
    /// `(NN) NNNNN-NNNN`
    pub phone: String,
    /// Email address
    pub email: String,
    /// Date of birth, at least 3 years before the registration date
    pub date_of_birth: NaiveDate,
}
