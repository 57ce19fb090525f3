//! Calendar date utilities.

use chrono::{Datelike, NaiveDate};

/// Calculates age in whole years between a date of birth and a reference date.
///
/// Uses calendar-aware subtraction: the difference in years, reduced by one when the
/// reference month/day falls before the birth month/day. A birthday on 29 February is
/// only reached on 1 March in non-leap years.
///
/// Returns a negative value when `date_of_birth` is after `today`.
///
/// # Example
/// ```ignore
/// let born = NaiveDate::from_ymd_opt(2020, 6, 15).unwrap();
///
/// let today = NaiveDate::from_ymd_opt(2023, 6, 14).unwrap();
/// assert_eq!(age_in_years(born, today), 2);
///
/// let today = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
/// assert_eq!(age_in_years(born, today), 3);
/// ```
pub fn age_in_years(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let years = today.year() - date_of_birth.year();

    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        years - 1
    } else {
        years
    }
}
