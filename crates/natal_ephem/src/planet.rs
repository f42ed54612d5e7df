//! Generic planet longitude from mean elements.
//!
//! Mean elements at T → Kepler → true anomaly → L + f, plus the planet's
//! periodic perturbation terms, then precession and normalization.

use natal_frames::{apply_precession_deg, normalize_360};

use crate::body::CelestialBody;
use crate::elements::{OrbitalElements, elements_for};
use crate::error::EphemError;
use crate::kepler::{solve_kepler_deg, true_anomaly_deg};

/// Longitude in degrees, [0, 360), for one element row at `t` Julian
/// centuries. Non-finite `t` yields NaN.
pub fn longitude_from_elements(elements: &OrbitalElements, t: f64) -> f64 {
    let el = elements.at(t);
    let ecc_anomaly = solve_kepler_deg(el.mean_anomaly_deg, el.eccentricity);
    let true_anomaly = true_anomaly_deg(ecc_anomaly, el.eccentricity);
    let raw = el.mean_longitude_deg + true_anomaly + elements.perturbation_deg(t);
    normalize_360(apply_precession_deg(raw, t))
}

/// Longitude of a planet (Mercury..Pluto) in degrees, [0, 360).
///
/// Returns [`EphemError::NoElements`] for the Sun and Moon.
pub fn planet_longitude_deg(body: CelestialBody, t: f64) -> Result<f64, EphemError> {
    let elements = elements_for(body).ok_or(EphemError::NoElements(body))?;
    Ok(longitude_from_elements(elements, t))
}
