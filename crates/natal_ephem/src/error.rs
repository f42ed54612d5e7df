//! Error types for body longitude computation.

use thiserror::Error;

use crate::body::CelestialBody;

/// Errors from a single body's longitude computation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemError {
    /// The formula produced NaN or infinity (usually a non-finite epoch).
    #[error("non-finite longitude for {body}: {value}")]
    NonFinite { body: CelestialBody, value: f64 },
    /// The requested routine does not model this body.
    #[error("{0} has no orbital element row")]
    NoElements(CelestialBody),
}
