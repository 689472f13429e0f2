//! Date-of-birth parsing.

use chrono::NaiveDate;

use moviedb_core::error::AppError;

const NOT_A_DATE: &str = "Invalid input: dob must be a real date in format YYYY-MM-DD.";
const NOT_IN_PAST: &str = "Invalid input: dob must be a date in the past.";

/// Parses a `YYYY-MM-DD` date of birth that lies strictly before `today`.
pub fn parse_dob(raw: &str, today: NaiveDate) -> Result<NaiveDate, AppError> {
    if !has_date_shape(raw) {
        return Err(AppError::validation(NOT_A_DATE));
    }

    let dob = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::validation(NOT_A_DATE))?;

    if dob >= today {
        return Err(AppError::validation(NOT_IN_PAST));
    }

    Ok(dob)
}

/// Exactly four digits, dash, two digits, dash, two digits.
fn has_date_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
