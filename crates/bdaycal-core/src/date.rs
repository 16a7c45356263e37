//! Birthdate normalization.
//!
//! Raw dates come in as `MM/DD/YYYY` or `YYYY/MM/DD`, sometimes with a single
//! stray trailing character (an artifact of the source data). Normalization
//! produces the canonical `YYYY-MM-DD` form the Calendar API expects for
//! all-day events.
//!
//! The month/day order of the slash forms is fixed here rather than delegated
//! to a locale-dependent parser: `MM/DD/YYYY` is tried first, so an input
//! valid under both readings takes the month-first one.

use chrono::NaiveDate;
use thiserror::Error;

/// A raw date string could not be interpreted as a calendar date.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unparseable date: {input:?}")]
pub struct DateParseError {
    /// The raw input that failed to parse (after the trailing-artifact fix).
    pub input: String,
}

/// The accepted input formats, in priority order.
const FORMATS: &[&str] = &["%m/%d/%Y", "%Y/%m/%d", "%Y-%m-%d"];

/// Normalizes a raw birthdate string to `YYYY-MM-DD`.
///
/// If the input is longer than 10 characters (not bytes) the final character
/// is dropped first; the source data is known to carry a stray trailing
/// character after some dates.
///
/// # Errors
///
/// Returns [`DateParseError`] if the input matches none of the accepted
/// formats or names an invalid calendar date.
pub fn normalize_date(raw_date: &str) -> Result<String, DateParseError> {
    let trimmed = if raw_date.chars().count() > 10 {
        let mut chars = raw_date.chars();
        chars.next_back();
        chars.as_str()
    } else {
        raw_date
    };

    FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .map(|date| date.format("%Y-%m-%d").to_string())
        .ok_or_else(|| DateParseError {
            input: trimmed.to_string(),
        })
}
