//! Uniform precession correction in ecliptic longitude.
//!
//! A constant rate of 50.287″ per year is added to every computed longitude
//! in proportion to the time elapsed since J2000.0. This is a linear
//! approximation, not a precession model.

/// Precession rate in arcseconds per Julian century (50.287″/year).
pub const PRECESSION_ARCSEC_PER_CENTURY: f64 = 5028.7;

/// Accumulated precession in degrees after `t` Julian centuries.
pub fn precession_deg(t: f64) -> f64 {
    PRECESSION_ARCSEC_PER_CENTURY * t / 3600.0
}

/// Add the precession correction for epoch `t` to a longitude in degrees.
///
/// The result is not normalized.
pub fn apply_precession_deg(longitude_deg: f64, t: f64) -> f64 {
    longitude_deg + precession_deg(t)
}
