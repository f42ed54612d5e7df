//! Time-frame conversions for the natal engine.
//!
//! This crate provides:
//! - Civil calendar date/time types with validation and string parsing
//! - Julian Day ↔ calendar conversions and Julian centuries since J2000.0
//! - Greenwich and local sidereal time
//!
//! Civil times are taken as-is: no timezone or leap-second handling is
//! performed anywhere in the chain.

pub mod civil;
pub mod error;
pub mod julian;
pub mod sidereal;

pub use civil::{CivilDate, CivilDateTime, parse_clock_time};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, calendar_to_jd, centuries_to_jd, jd_to_calendar, jd_to_centuries,
};
pub use sidereal::{gmst_deg, local_sidereal_time_deg};
