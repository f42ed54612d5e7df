//! Analytic ecliptic longitudes for the Sun, Moon and eight planets.
//!
//! This crate provides:
//! - The closed set of ten chart bodies
//! - A static mean-element table and a Kepler solver for the planets
//! - Dedicated Sun (equation of center) and Moon (periodic series) paths
//! - Daily motion and the retrograde heuristic
//!
//! Every longitude is precession-corrected and normalized to [0, 360).
//! Functions are pure; non-finite epochs propagate as NaN through the
//! unchecked [`longitude_deg`] and surface as [`EphemError::NonFinite`]
//! through the checked [`body_longitude_deg`].

pub mod body;
pub mod elements;
pub mod error;
pub mod kepler;
pub mod moon;
pub mod motion;
pub mod planet;
pub mod sun;

pub use body::{ALL_BODIES, CelestialBody, PLANETS};
pub use elements::{
    ElementsAt, OrbitalElements, PLANET_ELEMENTS, PerturbationTerm, Secular, elements_for,
};
pub use error::EphemError;
pub use kepler::{kepler_residual_rad, solve_kepler_deg, true_anomaly_deg};
pub use moon::{LUNAR_TERMS, LunarArguments, LunarTerm, moon_longitude_deg};
pub use motion::{MotionConfig, daily_motion_deg, exceeds_threshold, is_retrograde};
pub use planet::{longitude_from_elements, planet_longitude_deg};
pub use sun::sun_longitude_deg;

/// Longitude of `body` in degrees at `t` Julian centuries, NaN-propagating.
pub fn longitude_deg(body: CelestialBody, t: f64) -> f64 {
    match body {
        CelestialBody::Sun => sun_longitude_deg(t),
        CelestialBody::Moon => moon_longitude_deg(t),
        _ => match elements_for(body) {
            Some(elements) => longitude_from_elements(elements, t),
            None => f64::NAN,
        },
    }
}

/// Longitude of `body` in degrees, [0, 360), rejecting non-finite results.
pub fn body_longitude_deg(body: CelestialBody, t: f64) -> Result<f64, EphemError> {
    let lon = longitude_deg(body, t);
    if !lon.is_finite() {
        return Err(EphemError::NonFinite { body, value: lon });
    }
    log::debug!("{body}: {lon:.6} deg at T={t:.9}");
    Ok(lon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_body_has_a_longitude() {
        for body in ALL_BODIES {
            let lon = body_longitude_deg(body, 0.1).unwrap();
            assert!((0.0..360.0).contains(&lon), "{body}: {lon}");
        }
    }

    #[test]
    fn dispatch_matches_direct_paths() {
        let t = -0.05;
        assert_eq!(longitude_deg(CelestialBody::Sun, t), sun_longitude_deg(t));
        assert_eq!(longitude_deg(CelestialBody::Moon, t), moon_longitude_deg(t));
        assert_eq!(
            longitude_deg(CelestialBody::Saturn, t),
            planet_longitude_deg(CelestialBody::Saturn, t).unwrap()
        );
    }

    #[test]
    fn non_finite_epoch_rejected() {
        for body in ALL_BODIES {
            assert!(matches!(
                body_longitude_deg(body, f64::NAN),
                Err(EphemError::NonFinite { .. })
            ));
        }
    }
}
