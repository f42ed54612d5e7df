//! Daily motion and the retrograde heuristic.
//!
//! Longitude is sampled at T and T + step; the signed shortest arc between
//! the two samples, scaled to one day, is the daily motion. A body is flagged
//! retrograde when the magnitude of that motion exceeds the configured
//! threshold. This is a coarse classification, not a station-point search:
//! bodies near a station (speed ≈ 0) are reported as direct.

use natal_frames::shortest_arc_deg;
use natal_time::DAYS_PER_CENTURY;

use crate::body::CelestialBody;
use crate::error::EphemError;
use crate::longitude_deg;

/// Parameters of the finite-difference motion estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionConfig {
    /// Magnitude of daily motion above which a body is flagged retrograde.
    pub threshold_deg_per_day: f64,
    /// Finite-difference step in days.
    pub step_days: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            threshold_deg_per_day: 15.0,
            step_days: 1.0,
        }
    }
}

impl MotionConfig {
    /// Validate that step and threshold are positive and finite.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !(self.step_days.is_finite() && self.step_days > 0.0) {
            return Err("step_days must be positive and finite");
        }
        if !(self.threshold_deg_per_day.is_finite() && self.threshold_deg_per_day > 0.0) {
            return Err("threshold_deg_per_day must be positive and finite");
        }
        Ok(())
    }
}

/// Signed daily motion of `body` in degrees per day at `t` Julian centuries.
pub fn daily_motion_deg(
    body: CelestialBody,
    t: f64,
    config: &MotionConfig,
) -> Result<f64, EphemError> {
    let step_t = config.step_days / DAYS_PER_CENTURY;
    let now = longitude_deg(body, t);
    let later = longitude_deg(body, t + step_t);
    let motion = shortest_arc_deg(now, later) / config.step_days;
    if !motion.is_finite() {
        return Err(EphemError::NonFinite {
            body,
            value: motion,
        });
    }
    Ok(motion)
}

/// Classify a daily motion value against the configured threshold.
pub fn exceeds_threshold(motion_deg_per_day: f64, config: &MotionConfig) -> bool {
    motion_deg_per_day.abs() > config.threshold_deg_per_day
}

/// Whether `body` is flagged retrograde at `t` Julian centuries.
pub fn is_retrograde(
    body: CelestialBody,
    t: f64,
    config: &MotionConfig,
) -> Result<bool, EphemError> {
    Ok(exceeds_threshold(daily_motion_deg(body, t, config)?, config))
}
