//! Angle normalization helpers.

/// Normalize an angle to [0, 360) degrees. NaN stays NaN.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative input
    if r >= 360.0 { 0.0 } else { r }
}

/// Signed shortest arc `to - from` in degrees, wrapped into [-180, 180).
pub fn shortest_arc_deg(from: f64, to: f64) -> f64 {
    (to - from + 180.0).rem_euclid(360.0) - 180.0
}
