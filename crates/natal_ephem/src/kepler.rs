//! Kepler's equation and anomaly conversions.
//!
//! Newton–Raphson on f(E) = E − e·sin E − M, starting from E₀ = M.
//! Convergence is quadratic for the small eccentricities of the major
//! planets; no safeguard is attempted for e close to 1.

/// Maximum Newton–Raphson iterations.
pub const MAX_ITERATIONS: u32 = 10;

/// Stop once a Newton correction is smaller than this (radians).
pub const TOLERANCE_RAD: f64 = 1e-10;

/// Eccentric anomaly E (degrees) for mean anomaly `mean_anomaly_deg` and
/// eccentricity `e` (0 ≤ e < 1).
///
/// Runs at most [`MAX_ITERATIONS`] steps and never fails; non-finite input
/// yields a non-finite result.
pub fn solve_kepler_deg(mean_anomaly_deg: f64, e: f64) -> f64 {
    let m = mean_anomaly_deg.to_radians();
    let mut ecc_anomaly = m;
    for _ in 0..MAX_ITERATIONS {
        let delta = (ecc_anomaly - e * ecc_anomaly.sin() - m) / (1.0 - e * ecc_anomaly.cos());
        ecc_anomaly -= delta;
        if delta.abs() < TOLERANCE_RAD {
            return ecc_anomaly.to_degrees();
        }
    }
    log::trace!("kepler: iteration cap reached for M={mean_anomaly_deg}, e={e}");
    ecc_anomaly.to_degrees()
}

/// Residual `E − e·sin E − M` in radians for angles given in degrees.
pub fn kepler_residual_rad(ecc_anomaly_deg: f64, e: f64, mean_anomaly_deg: f64) -> f64 {
    let ea = ecc_anomaly_deg.to_radians();
    ea - e * ea.sin() - mean_anomaly_deg.to_radians()
}

/// True anomaly f (degrees) from eccentric anomaly E (degrees).
///
/// f = 2·atan( sqrt((1+e)/(1−e)) · tan(E/2) ), in (−180, 180].
pub fn true_anomaly_deg(ecc_anomaly_deg: f64, e: f64) -> f64 {
    let half = (ecc_anomaly_deg / 2.0).to_radians();
    let factor = ((1.0 + e) / (1.0 - e)).sqrt();
    2.0 * (factor * half.tan()).atan().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circular_orbit_is_identity() {
        for m in [0.0, 45.0, 180.0, 300.0] {
            assert!((solve_kepler_deg(m, 0.0) - m).abs() < 1e-10);
        }
    }

    #[test]
    fn meeus_example_30a() {
        // e = 0.100, M = 5° → E = 5.554589°
        let ea = solve_kepler_deg(5.0, 0.1);
        assert!((ea - 5.554_589).abs() < 1e-6, "E = {ea}");
    }

    #[test]
    fn residual_small_over_grid() {
        for i in 0..36 {
            let m = i as f64 * 10.0;
            for e in [0.0, 0.05, 0.1, 0.2, 0.3] {
                let ea = solve_kepler_deg(m, e);
                let r = kepler_residual_rad(ea, e, m);
                assert!(r.abs() < 1e-8, "M={m} e={e} residual={r}");
            }
        }
    }

    #[test]
    fn nan_input_propagates() {
        assert!(solve_kepler_deg(f64::NAN, 0.1).is_nan());
    }

    #[test]
    fn true_anomaly_zero_eccentricity() {
        assert!((true_anomaly_deg(60.0, 0.0) - 60.0).abs() < 1e-10);
    }

    #[test]
    fn true_anomaly_leads_eccentric_anomaly_in_first_half() {
        let e = 0.2;
        for ea in [10.0, 60.0, 120.0, 170.0] {
            assert!(true_anomaly_deg(ea, e) > ea);
        }
    }

    #[test]
    fn true_anomaly_second_half_wraps_negative() {
        // E = 270° lies in the second half of the orbit → f negative
        let f = true_anomaly_deg(270.0, 0.1);
        assert!(f < 0.0 && f > -180.0, "f = {f}");
    }
}
