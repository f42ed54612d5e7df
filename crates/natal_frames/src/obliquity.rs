//! Mean obliquity of the ecliptic of date.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Eq. 22.2 expressed in
//! degrees.

/// Mean obliquity of the ecliptic in degrees for `t` Julian centuries
/// since J2000.0.
///
/// ε = 23.439291 − 0.0130042·T − 1.64e-7·T² + 5.04e-7·T³
pub fn mean_obliquity_deg(t: f64) -> f64 {
    23.439_291 - 0.013_004_2 * t - 1.64e-7 * t * t + 5.04e-7 * t * t * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_value() {
        // 23°26'21.448"
        let expected = 23.0 + 26.0 / 60.0 + 21.448 / 3600.0;
        assert!((mean_obliquity_deg(0.0) - expected).abs() < 1e-5);
    }

    #[test]
    fn decreasing_over_centuries() {
        assert!(mean_obliquity_deg(1.0) < mean_obliquity_deg(0.0));
        assert!(mean_obliquity_deg(-1.0) > mean_obliquity_deg(0.0));
    }

    #[test]
    fn meeus_example_22a() {
        // 1987-Apr-10 0h TD: ε0 = 23°26'27.407"
        let t = -0.127_296_372_348;
        let expected = 23.0 + 26.0 / 60.0 + 27.407 / 3600.0;
        assert!((mean_obliquity_deg(t) - expected).abs() < 1e-4);
    }
}
