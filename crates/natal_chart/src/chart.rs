//! Chart orchestrator.
//!
//! Ties the time converter, body longitudes, motion classification, local
//! frame and house divider together. Each body is evaluated independently
//! into a [`BodyOutcome`]; a failed body is defaulted to 0° and logged,
//! and never prevents the others from being placed.

use natal_ephem::{
    ALL_BODIES, CelestialBody, EphemError, body_longitude_deg, daily_motion_deg,
    exceeds_threshold,
};
use natal_time::{CivilDateTime, jd_to_centuries};

use crate::angles::LocalFrame;
use crate::error::ChartError;
use crate::house::{house_cusps, house_of};
use crate::sign::{degree_in_sign, sign_index, zodiac_sign};
use crate::types::{
    AnglePosition, BirthRecord, ChartAngle, ChartConfig, GeoLocation, HoroscopeResult,
    PlanetPosition, PositionStatus, SkySnapshot,
};

/// Result of one body's longitude computation.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyOutcome {
    /// Finite longitude in degrees, [0, 360).
    Computed(f64),
    /// The computation failed; the body is placed at 0°.
    Defaulted(EphemError),
}

impl BodyOutcome {
    /// Evaluate `body` at `t` Julian centuries.
    pub fn evaluate(body: CelestialBody, t: f64) -> Self {
        match body_longitude_deg(body, t) {
            Ok(lon) => Self::Computed(lon),
            Err(e) => {
                log::warn!("{body}: {e}; defaulting to 0 deg");
                Self::Defaulted(e)
            }
        }
    }

    /// Longitude to place on the chart.
    pub fn longitude_deg(&self) -> f64 {
        match self {
            Self::Computed(lon) => *lon,
            Self::Defaulted(_) => 0.0,
        }
    }

    pub fn status(&self) -> PositionStatus {
        match self {
            Self::Computed(_) => PositionStatus::Computed,
            Self::Defaulted(_) => PositionStatus::Defaulted,
        }
    }
}

/// Resolve the instant of a birth record, using the configured default hour
/// when no clock time is given.
pub fn resolve_instant(
    record: &BirthRecord,
    config: &ChartConfig,
) -> Result<CivilDateTime, ChartError> {
    if !record.date.is_valid() {
        return Err(ChartError::InvalidDate(record.date));
    }
    match record.time.as_deref() {
        Some(clock) => Ok(CivilDateTime::with_clock(record.date, clock)?),
        None => Ok(CivilDateTime {
            date: record.date,
            hour: config.default_clock_hour,
        }),
    }
}

fn angle_position(angle: ChartAngle, lon_deg: f64) -> AnglePosition {
    let lon = if lon_deg.is_finite() {
        lon_deg
    } else {
        log::warn!("{}: non-finite longitude; defaulting to 0 deg", angle.name());
        0.0
    };
    AnglePosition {
        angle,
        longitude_deg: lon,
        sign: zodiac_sign(lon),
        degree_in_sign: degree_in_sign(lon),
    }
}

fn chart_angles(jd: f64, location: &GeoLocation) -> (AnglePosition, AnglePosition) {
    let frame = LocalFrame::compute(jd, location);
    (
        angle_position(ChartAngle::Ascendant, frame.ascendant_deg),
        angle_position(ChartAngle::Midheaven, frame.midheaven_deg),
    )
}

fn place_body(
    body: CelestialBody,
    t: f64,
    ascendant_deg: Option<f64>,
    config: &ChartConfig,
) -> PlanetPosition {
    let outcome = BodyOutcome::evaluate(body, t);
    let lon = outcome.longitude_deg();
    let speed = match &outcome {
        BodyOutcome::Computed(_) => daily_motion_deg(body, t, &config.motion).unwrap_or_else(|e| {
            log::warn!("{body}: {e}; motion unknown");
            0.0
        }),
        BodyOutcome::Defaulted(_) => 0.0,
    };
    let house = match ascendant_deg {
        Some(asc) => house_of(lon, asc),
        None => sign_index(lon) + 1,
    };
    PlanetPosition {
        body,
        sign: zodiac_sign(lon),
        degree_in_sign: degree_in_sign(lon),
        house,
        retrograde: exceeds_threshold(speed, &config.motion),
        longitude_deg: lon,
        speed_deg_per_day: speed,
        status: outcome.status(),
    }
}

fn place_bodies(t: f64, ascendant_deg: Option<f64>, config: &ChartConfig) -> Vec<PlanetPosition> {
    ALL_BODIES
        .iter()
        .map(|&body| place_body(body, t, ascendant_deg, config))
        .collect()
}

fn julian_day_checked(datetime: &CivilDateTime) -> f64 {
    let jd = datetime.julian_day();
    if !jd.is_finite() {
        log::warn!("invalid instant {datetime}: Julian Day is not finite");
    } else {
        log::debug!("instant {datetime}: JD={jd:.6}");
    }
    jd
}

/// Positions of all ten bodies at `datetime`.
///
/// When `location` is given, the Ascendant and Midheaven are included and
/// each body gets its equal house from the Ascendant; otherwise the house is
/// the natural house of its sign (Aries = 1).
pub fn calculate_all_planets(
    datetime: &CivilDateTime,
    location: Option<&GeoLocation>,
    config: &ChartConfig,
) -> SkySnapshot {
    let jd = julian_day_checked(datetime);
    let t = jd_to_centuries(jd);
    let angles = location.map(|loc| chart_angles(jd, loc));
    let planets = place_bodies(t, angles.map(|(asc, _)| asc.longitude_deg), config);
    SkySnapshot {
        julian_day: jd,
        planets,
        ascendant: angles.map(|(asc, _)| asc),
        midheaven: angles.map(|(_, mc)| mc),
    }
}

/// Full birth chart: ten bodies, the two angles and twelve equal houses.
///
/// Missing coordinates and clock time fall back to `config`. An unusable
/// date or clock string is logged and the bodies are defaulted.
pub fn calculate_horoscope(record: &BirthRecord, config: &ChartConfig) -> HoroscopeResult {
    let location = record.location.unwrap_or(config.default_location);
    let datetime = resolve_instant(record, config).unwrap_or_else(|e| {
        log::warn!("{e}; chart positions will be defaulted");
        CivilDateTime {
            date: record.date,
            hour: f64::NAN,
        }
    });
    let jd = julian_day_checked(&datetime);
    let (ascendant, midheaven) = chart_angles(jd, &location);
    let planets = place_bodies(jd_to_centuries(jd), Some(ascendant.longitude_deg), config);
    HoroscopeResult {
        planets,
        houses: house_cusps(ascendant.longitude_deg),
        ascendant,
        midheaven,
        location,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use natal_time::CivilDate;

    #[test]
    fn outcome_defaults_to_zero() {
        let outcome = BodyOutcome::evaluate(CelestialBody::Mars, f64::NAN);
        assert_eq!(outcome.longitude_deg(), 0.0);
        assert_eq!(outcome.status(), PositionStatus::Defaulted);
        let ok = BodyOutcome::evaluate(CelestialBody::Mars, 0.0);
        assert_eq!(ok.status(), PositionStatus::Computed);
    }

    #[test]
    fn resolve_uses_default_hour() {
        let record = BirthRecord::new(CivilDate::new(2000, 1, 1), None, None);
        let dt = resolve_instant(&record, &ChartConfig::default()).unwrap();
        assert_eq!(dt.hour, 12.0);
        assert_eq!(dt.julian_day(), 2_451_545.0);
    }

    #[test]
    fn resolve_reports_bad_input() {
        let config = ChartConfig::default();
        let bad_clock = BirthRecord::new(CivilDate::new(2000, 1, 1), Some("noon"), None);
        assert!(matches!(
            resolve_instant(&bad_clock, &config),
            Err(ChartError::Time(_))
        ));
        let bad_date = BirthRecord::new(CivilDate::new(2000, 2, 30), Some("10:00"), None);
        assert!(matches!(
            resolve_instant(&bad_date, &config),
            Err(ChartError::InvalidDate(_))
        ));
    }

    #[test]
    fn natural_houses_without_location() {
        let dt = CivilDateTime::new(2010, 6, 15, 6.0);
        let sky = calculate_all_planets(&dt, None, &ChartConfig::default());
        assert!(sky.ascendant.is_none());
        for p in &sky.planets {
            assert_eq!(p.house, p.sign.index() + 1, "{}", p.body);
        }
    }

    #[test]
    fn angles_present_with_location() {
        let dt = CivilDateTime::new(2010, 6, 15, 6.0);
        let loc = GeoLocation::new(48.85, 2.35);
        let sky = calculate_all_planets(&dt, Some(&loc), &ChartConfig::default());
        let asc = sky.ascendant.unwrap();
        assert_eq!(asc.angle, ChartAngle::Ascendant);
        assert_eq!(sky.midheaven.unwrap().angle, ChartAngle::Midheaven);
        for p in &sky.planets {
            assert_eq!(p.house, house_of(p.longitude_deg, asc.longitude_deg));
        }
    }

    #[test]
    fn unparseable_clock_defaults_every_body() {
        let record = BirthRecord::new(CivilDate::new(1990, 1, 1), Some("25:99"), None);
        let chart = calculate_horoscope(&record, &ChartConfig::default());
        assert_eq!(chart.planets.len(), 10);
        assert!(
            chart
                .planets
                .iter()
                .all(|p| p.status == PositionStatus::Defaulted && p.longitude_deg == 0.0)
        );
        assert_eq!(chart.houses.len(), 12);
        assert_eq!(chart.ascendant.longitude_deg, 0.0);
    }
}
