//! Greenwich and local sidereal time.
//!
//! The civil Julian Day is used directly as UT; no UT1 or timezone
//! correction is applied.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Eq. 12.4.

use crate::julian::{J2000_JD, jd_to_centuries};

/// Greenwich Mean Sidereal Time in degrees, [0, 360).
///
/// θ₀ = 280.46061837 + 360.98564736629·(JD − 2451545.0)
///      + 0.000387933·T² − T³/38710000
pub fn gmst_deg(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);
    let theta = 280.460_618_37 + 360.985_647_366_29 * (jd - J2000_JD) + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    theta.rem_euclid(360.0)
}

/// Local Sidereal Time in degrees from GMST and east longitude, [0, 360).
pub fn local_sidereal_time_deg(gmst_deg: f64, longitude_east_deg: f64) -> f64 {
    (gmst_deg + longitude_east_deg).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gmst_meeus_example_12a() {
        // 1987-Apr-10 0h UT: GMST = 13h10m46.3668s = 197.693195°
        let gmst = gmst_deg(2_446_895.5);
        assert!((gmst - 197.693_195).abs() < 1e-4, "gmst = {gmst}");
    }

    #[test]
    fn gmst_j2000_noon() {
        let gmst = gmst_deg(J2000_JD);
        assert!((gmst - 280.460_618_37).abs() < 1e-8, "gmst = {gmst}");
    }

    #[test]
    fn gmst_advances_about_one_degree_per_day() {
        let g1 = gmst_deg(2_451_545.0);
        let g2 = gmst_deg(2_451_546.0);
        let diff = (g2 - g1).rem_euclid(360.0);
        assert!((diff - 0.985_647).abs() < 1e-3, "diff = {diff}");
    }

    #[test]
    fn gmst_range() {
        for &jd in &[2_451_545.0, 2_451_544.5, 2_460_000.5, 2_440_000.5, 2_400_000.0] {
            let g = gmst_deg(jd);
            assert!((0.0..360.0).contains(&g), "GMST out of range: {g}");
        }
    }

    #[test]
    fn lst_east_offset_wraps() {
        assert!((local_sidereal_time_deg(300.0, 90.0) - 30.0).abs() < 1e-12);
        assert!((local_sidereal_time_deg(10.0, -20.0) - 350.0).abs() < 1e-12);
    }
}
