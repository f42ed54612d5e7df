//! Apparent geocentric longitude of the Sun.
//!
//! Mean longitude and mean anomaly polynomials with a five-term equation of
//! center, a fixed aberration constant and the dominant nutation term.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 25 (low
//! accuracy method); the 4M and 5M terms extend the series in e.

use natal_frames::{apply_precession_deg, normalize_360};

/// Annual aberration, degrees.
pub const ABERRATION_DEG: f64 = -0.005_69;

/// Amplitude of the nutation term, degrees.
pub const NUTATION_AMPLITUDE_DEG: f64 = -0.004_79;

/// Geometric mean longitude of the Sun, degrees (not normalized).
pub fn sun_mean_longitude_deg(t: f64) -> f64 {
    280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t
}

/// Mean anomaly of the Sun, degrees (not normalized).
pub fn sun_mean_anomaly_deg(t: f64) -> f64 {
    357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t
}

/// Equation of center C in degrees for mean anomaly `m_deg` at epoch `t`.
pub fn equation_of_center_deg(m_deg: f64, t: f64) -> f64 {
    let m = m_deg.to_radians();
    (1.914_602 - 0.004_817 * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin()
        + 0.000_004_8 * (4.0 * m).sin()
        + 0.000_000_1 * (5.0 * m).sin()
}

/// Nutation in longitude from the lunar node term, degrees.
pub fn nutation_longitude_deg(t: f64) -> f64 {
    NUTATION_AMPLITUDE_DEG * (125.04 - 1934.136 * t).to_radians().sin()
}

/// Ecliptic longitude of the Sun in degrees, [0, 360), precession-corrected.
pub fn sun_longitude_deg(t: f64) -> f64 {
    let l0 = sun_mean_longitude_deg(t);
    let c = equation_of_center_deg(sun_mean_anomaly_deg(t), t);
    let apparent = l0 + c + ABERRATION_DEG + nutation_longitude_deg(t);
    normalize_360(apply_precession_deg(apparent, t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_longitude() {
        // At J2000.0 the Sun is near 280.37° (apparent, no precession yet)
        let lon = sun_longitude_deg(0.0);
        assert!((lon - 280.37).abs() < 0.05, "lon = {lon}");
    }

    #[test]
    fn meeus_example_25a_before_precession() {
        // 1992-Oct-13 0h TD, T = -0.072_183_436; apparent λ = 199.90895°
        let t = -0.072_183_436;
        let l0 = sun_mean_longitude_deg(t);
        let c = equation_of_center_deg(sun_mean_anomaly_deg(t), t);
        let apparent = normalize_360(l0 + c + ABERRATION_DEG + nutation_longitude_deg(t));
        assert!((apparent - 199.908_95).abs() < 0.01, "apparent = {apparent}");
    }

    #[test]
    fn advances_about_one_degree_per_day() {
        let day = 1.0 / 36_525.0;
        let a = sun_longitude_deg(0.0);
        let b = sun_longitude_deg(day);
        let diff = (b - a).rem_euclid(360.0);
        assert!((0.95..1.03).contains(&diff), "diff = {diff}");
    }

    #[test]
    fn equation_of_center_bounded() {
        for i in 0..72 {
            let c = equation_of_center_deg(i as f64 * 5.0, 0.0);
            assert!(c.abs() < 1.95, "C = {c}");
        }
    }

    #[test]
    fn nan_propagates() {
        assert!(sun_longitude_deg(f64::NAN).is_nan());
    }
}
