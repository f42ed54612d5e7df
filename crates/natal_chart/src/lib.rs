//! Chart assembly: zodiac signs, Ascendant/MC, equal houses and the
//! orchestrator that turns a civil instant into ten body positions.
//!
//! The orchestrator entry points [`calculate_all_planets`] and
//! [`calculate_horoscope`] never fail. A body whose longitude is non-finite
//! is reported at 0° with [`PositionStatus::Defaulted`] and a `warn` log,
//! while the remaining bodies compute normally.

pub mod angles;
pub mod chart;
pub mod error;
pub mod house;
pub mod sign;
pub mod types;

pub use angles::{LocalFrame, ascendant_deg, midheaven_deg};
pub use chart::{BodyOutcome, calculate_all_planets, calculate_horoscope, resolve_instant};
pub use error::ChartError;
pub use house::{equal_house_cusps, house_cusps, house_of};
pub use sign::{
    ALL_SIGNS, Dms, Element, Modality, SignInfo, ZodiacSign, deg_to_dms, degree_in_sign,
    dms_to_deg, sign_index, sign_info, zodiac_sign,
};
pub use types::{
    AnglePosition, BirthRecord, ChartAngle, ChartConfig, DEFAULT_LOCATION, GeoLocation,
    HoroscopeResult, HouseCusp, PlanetPosition, PositionStatus, SkySnapshot,
};
