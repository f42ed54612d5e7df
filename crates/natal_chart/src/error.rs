//! Error types for chart assembly.

use natal_time::TimeError;
use thiserror::Error;

/// Errors met while resolving chart inputs.
///
/// The orchestrator never returns these to its caller; they are folded into
/// defaulted values and logged. They are exposed for callers that want to
/// validate a record up front.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Clock string or date failed to parse.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// Calendar date names no real day.
    #[error("invalid calendar date {0}")]
    InvalidDate(natal_time::CivilDate),
    /// Configuration value out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use natal_time::CivilDate;

    #[test]
    fn input_errors_display() {
        let e: ChartError = TimeError::ClockFormat("noon".into()).into();
        assert!(matches!(e, ChartError::Time(_)));
        assert!(e.to_string().starts_with("time error: "));
        let e = ChartError::InvalidDate(CivilDate::new(2023, 2, 30));
        assert_eq!(e.to_string(), "invalid calendar date 2023-02-30");
    }
}
