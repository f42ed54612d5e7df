//! Error types for civil date/time parsing.

use thiserror::Error;

/// Errors from parsing civil dates and clock strings.
///
/// Numeric conversions never fail; an out-of-range calendar date yields a
/// NaN Julian Day instead. Only string parsing reports errors.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Date string is not of the form `YYYY-MM-DD`.
    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    DateFormat(String),
    /// Clock string is not of the form `HH:MM` or `HH:MM:SS`.
    #[error("invalid clock time '{0}': expected HH:MM or HH:MM:SS")]
    ClockFormat(String),
    /// Clock field parsed but lies outside its range.
    #[error("clock time '{0}' out of range")]
    ClockRange(String),
}
