//! Input records, result types and chart configuration.

use natal_ephem::{CelestialBody, MotionConfig};
use natal_time::CivilDate;
use serde::{Deserialize, Serialize};

use crate::error::ChartError;
use crate::sign::ZodiacSign;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
}

/// Reference location used when a record carries no coordinates (Tokyo).
pub const DEFAULT_LOCATION: GeoLocation = GeoLocation {
    latitude_deg: 35.6762,
    longitude_deg: 139.6503,
};

impl GeoLocation {
    pub const fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// Validate coordinate ranges.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !(self.latitude_deg.is_finite() && (-90.0..=90.0).contains(&self.latitude_deg)) {
            return Err("latitude must be in [-90, 90]");
        }
        if !(self.longitude_deg.is_finite() && (-180.0..=180.0).contains(&self.longitude_deg)) {
            return Err("longitude must be in [-180, 180]");
        }
        Ok(())
    }
}

impl Default for GeoLocation {
    fn default() -> Self {
        DEFAULT_LOCATION
    }
}

/// Birth data handed to [`crate::calculate_horoscope`].
///
/// The clock string is local civil time and is used as-is; no timezone
/// conversion is performed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthRecord {
    pub date: CivilDate,
    /// `HH:MM` or `HH:MM:SS`; `None` uses the configured default hour.
    pub time: Option<String>,
    /// `None` uses the configured default location.
    pub location: Option<GeoLocation>,
}

impl BirthRecord {
    pub fn new(date: CivilDate, time: Option<&str>, location: Option<GeoLocation>) -> Self {
        Self {
            date,
            time: time.map(str::to_string),
            location,
        }
    }
}

/// Whether a body's longitude was computed or substituted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionStatus {
    Computed,
    /// The computation produced a non-finite value and 0° was used instead.
    Defaulted,
}

/// One body placed on the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub body: CelestialBody,
    pub sign: ZodiacSign,
    /// Degrees within the sign, [0, 30).
    pub degree_in_sign: f64,
    /// Equal house, 1..=12.
    pub house: u8,
    pub retrograde: bool,
    /// Ecliptic longitude, [0, 360).
    pub longitude_deg: f64,
    /// Signed daily motion, degrees per day (0 when defaulted).
    pub speed_deg_per_day: f64,
    pub status: PositionStatus,
}

/// The two chart angles reported beside the bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartAngle {
    Ascendant,
    Midheaven,
}

impl ChartAngle {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ascendant => "Ascendant",
            Self::Midheaven => "Midheaven",
        }
    }
}

/// Ascendant or Midheaven position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnglePosition {
    pub angle: ChartAngle,
    pub longitude_deg: f64,
    pub sign: ZodiacSign,
    pub degree_in_sign: f64,
}

/// Cusp of one equal house.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseCusp {
    /// House number, 1..=12.
    pub house: u8,
    pub sign: ZodiacSign,
    pub degree_in_sign: f64,
    pub longitude_deg: f64,
}

/// Positions of all ten bodies at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkySnapshot {
    /// Julian Day of the instant (NaN for an invalid date).
    pub julian_day: f64,
    /// Always ten entries, in [`natal_ephem::ALL_BODIES`] order.
    pub planets: Vec<PlanetPosition>,
    /// Present when coordinates were supplied.
    pub ascendant: Option<AnglePosition>,
    pub midheaven: Option<AnglePosition>,
}

/// Complete birth chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoroscopeResult {
    pub planets: Vec<PlanetPosition>,
    /// Always twelve cusps, house 1 first.
    pub houses: Vec<HouseCusp>,
    pub ascendant: AnglePosition,
    pub midheaven: AnglePosition,
    /// Location actually used (the default when the record had none).
    pub location: GeoLocation,
}

/// Tunables for chart calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartConfig {
    /// Used when a birth record has no coordinates.
    pub default_location: GeoLocation,
    /// Fractional hour used when a birth record has no clock time.
    pub default_clock_hour: f64,
    pub motion: MotionConfig,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            default_location: DEFAULT_LOCATION,
            default_clock_hour: 12.0,
            motion: MotionConfig::default(),
        }
    }
}

impl ChartConfig {
    /// Validate every field.
    pub fn validate(&self) -> Result<(), ChartError> {
        self.default_location
            .validate()
            .map_err(ChartError::InvalidConfig)?;
        if !(self.default_clock_hour.is_finite() && (0.0..24.0).contains(&self.default_clock_hour))
        {
            return Err(ChartError::InvalidConfig(
                "default clock hour must be in [0, 24)",
            ));
        }
        self.motion.validate().map_err(ChartError::InvalidConfig)
    }
}
