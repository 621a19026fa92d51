//! Textual date boundary -- the fixed `YYYY-MM-DD` format exchanged with the
//! UI layer.
//!
//! Inside the core, dates are `chrono::NaiveDate` values; text exists only at
//! this boundary. Impossible calendar text ("2025-02-30") is rejected here,
//! so the availability engine never sees an invalid date.

use chrono::NaiveDate;

use crate::error::{BookingError, Result};

/// The fixed date format: four-digit year, two-digit month, two-digit day,
/// dash-separated.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a calendar date from the fixed textual format.
///
/// # Errors
/// Returns `BookingError::InvalidDate` when the text does not parse or names
/// an impossible calendar date.
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
        .map_err(|_| BookingError::InvalidDate(text.trim().to_string()))
}

/// Serialize a calendar date back to the fixed textual format.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
