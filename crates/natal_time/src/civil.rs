//! Civil calendar date and clock time.
//!
//! `CivilDateTime` is the engine's input instant. It carries no timezone:
//! the clock time is fed to the Julian Day formula unchanged.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, jd_to_centuries};

/// Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CivilDate {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Whether `year` is a Gregorian leap year.
    pub const fn is_leap_year(year: i32) -> bool {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    }

    /// Number of days in the given month, or 0 for a month outside 1..=12.
    pub const fn days_in_month(year: i32, month: u32) -> u32 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }

    /// Whether month and day name a real calendar day.
    pub const fn is_valid(&self) -> bool {
        self.day >= 1 && self.day <= Self::days_in_month(self.year, self.month)
    }

    /// The following calendar day. An invalid date is returned unchanged.
    pub const fn next_day(&self) -> Self {
        if !self.is_valid() {
            return *self;
        }
        if self.day < Self::days_in_month(self.year, self.month) {
            Self::new(self.year, self.month, self.day + 1)
        } else if self.month < 12 {
            Self::new(self.year, self.month + 1, 1)
        } else {
            Self::new(self.year + 1, 1, 1)
        }
    }
}

impl FromStr for CivilDate {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD`. Field ranges are not checked here; see
    /// [`CivilDate::is_valid`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || TimeError::DateFormat(s.to_string());
        let trimmed = s.trim();
        // Allow a leading minus for BCE years.
        let (sign, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, trimmed),
        };
        let mut parts = body.split('-');
        let year: i32 = parts.next().ok_or_else(err)?.parse().map_err(|_| err())?;
        let month: u32 = parts.next().ok_or_else(err)?.parse().map_err(|_| err())?;
        let day: u32 = parts.next().ok_or_else(err)?.parse().map_err(|_| err())?;
        if parts.next().is_some() {
            return Err(err());
        }
        Ok(Self::new(sign * year, month, day))
    }
}

impl Display for CivilDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Parse a clock string `HH:MM` or `HH:MM:SS` into fractional hours.
pub fn parse_clock_time(s: &str) -> Result<f64, TimeError> {
    let trimmed = s.trim();
    let fields: Vec<&str> = trimmed.split(':').collect();
    if !(2..=3).contains(&fields.len()) {
        return Err(TimeError::ClockFormat(s.to_string()));
    }
    let mut values = [0u32; 3];
    for (slot, field) in values.iter_mut().zip(&fields) {
        *slot = field
            .parse()
            .map_err(|_| TimeError::ClockFormat(s.to_string()))?;
    }
    let [hour, minute, second] = values;
    if hour > 23 || minute > 59 || second > 59 {
        return Err(TimeError::ClockRange(s.to_string()));
    }
    Ok(hour as f64 + minute as f64 / 60.0 + second as f64 / 3600.0)
}

/// Civil date plus fractional clock hour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CivilDateTime {
    pub date: CivilDate,
    /// Fractional hours of the civil day, [0, 24).
    pub hour: f64,
}

impl CivilDateTime {
    pub const fn new(year: i32, month: u32, day: u32, hour: f64) -> Self {
        Self {
            date: CivilDate::new(year, month, day),
            hour,
        }
    }

    /// Combine a date with a parsed `HH:MM[:SS]` clock string.
    pub fn with_clock(date: CivilDate, clock: &str) -> Result<Self, TimeError> {
        Ok(Self {
            date,
            hour: parse_clock_time(clock)?,
        })
    }

    /// Whether both the calendar date and the clock hour are in range.
    pub fn is_valid(&self) -> bool {
        self.date.is_valid() && self.hour.is_finite() && (0.0..24.0).contains(&self.hour)
    }

    /// Julian Day of this instant.
    ///
    /// Returns NaN for an invalid date or hour rather than failing; callers
    /// that need a finite value must check the result.
    pub fn julian_day(&self) -> f64 {
        if !self.is_valid() {
            return f64::NAN;
        }
        calendar_to_jd(
            self.date.year,
            self.date.month,
            self.date.day as f64 + self.hour / 24.0,
        )
    }

    /// Julian centuries since J2000.0 (NaN for an invalid instant).
    pub fn julian_century(&self) -> f64 {
        jd_to_centuries(self.julian_day())
    }
}

impl Display for CivilDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if !self.hour.is_finite() {
            return write!(f, "{} --:--", self.date);
        }
        let mut date = self.date;
        let mut total_minutes = (self.hour * 60.0).round() as i64;
        // 23:59:30 and later round up into the next day
        if total_minutes == 24 * 60 && self.hour < 24.0 && date.is_valid() {
            date = date.next_day();
            total_minutes = 0;
        }
        write!(
            f,
            "{} {:02}:{:02}",
            date,
            total_minutes / 60,
            total_minutes % 60
        )
    }
}
