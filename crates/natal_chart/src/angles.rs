//! Ascendant and Midheaven from the local sidereal frame.
//!
//! Sources: Meeus, "Astronomical Algorithms" (2nd ed), Chapters 12, 13 and 22;
//! standard spherical astronomy (Montenbruck & Pfleger).

use natal_frames::{mean_obliquity_deg, normalize_360};
use natal_time::{gmst_deg, jd_to_centuries, local_sidereal_time_deg};
use serde::{Deserialize, Serialize};

use crate::types::GeoLocation;

/// Ecliptic longitude of the Ascendant in degrees, [0, 360).
///
/// `Asc = atan2(-cos(LST), sin(LST)*cos(eps) + tan(phi)*sin(eps))`
///
/// Singular at latitude ±90° (tan undefined); not guarded.
pub fn ascendant_deg(lst_deg: f64, obliquity_deg: f64, latitude_deg: f64) -> f64 {
    let lst = lst_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    let phi = latitude_deg.to_radians();
    let asc = f64::atan2(-lst.cos(), lst.sin() * eps.cos() + phi.tan() * eps.sin());
    normalize_360(asc.to_degrees())
}

/// Ecliptic longitude of the Midheaven in degrees, [0, 360).
///
/// `MC = atan2(sin(LST), cos(LST)*cos(eps))`
pub fn midheaven_deg(lst_deg: f64, obliquity_deg: f64) -> f64 {
    let lst = lst_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    normalize_360(f64::atan2(lst.sin(), lst.cos() * eps.cos()).to_degrees())
}

/// Sidereal frame and chart angles for one instant and place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocalFrame {
    pub julian_day: f64,
    /// Greenwich mean sidereal time, degrees.
    pub gmst_deg: f64,
    /// Local sidereal time (= RAMC), degrees.
    pub lst_deg: f64,
    pub obliquity_deg: f64,
    pub ascendant_deg: f64,
    pub midheaven_deg: f64,
}

impl LocalFrame {
    /// Compute the frame for `jd` at `location`. A NaN `jd` yields NaN fields.
    pub fn compute(jd: f64, location: &GeoLocation) -> Self {
        let t = jd_to_centuries(jd);
        let gmst = gmst_deg(jd);
        let lst = local_sidereal_time_deg(gmst, location.longitude_deg);
        let eps = mean_obliquity_deg(t);
        let frame = Self {
            julian_day: jd,
            gmst_deg: gmst,
            lst_deg: lst,
            obliquity_deg: eps,
            ascendant_deg: ascendant_deg(lst, eps, location.latitude_deg),
            midheaven_deg: midheaven_deg(lst, eps),
        };
        log::debug!(
            "frame: JD={jd:.6} LST={lst:.6} eps={eps:.6} Asc={:.6} MC={:.6}",
            frame.ascendant_deg,
            frame.midheaven_deg
        );
        frame
    }
}
