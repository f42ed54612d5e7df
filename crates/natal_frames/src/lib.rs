//! Reference-frame helpers for ecliptic longitudes.
//!
//! Provides the uniform precession correction applied to every body, the
//! obliquity of the ecliptic of date, and angle normalization.

pub mod angle;
pub mod obliquity;
pub mod precession;

pub use angle::{normalize_360, shortest_arc_deg};
pub use obliquity::mean_obliquity_deg;
pub use precession::{PRECESSION_ARCSEC_PER_CENTURY, apply_precession_deg, precession_deg};
