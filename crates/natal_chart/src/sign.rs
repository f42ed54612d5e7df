//! Zodiac sign and DMS (degrees-minutes-seconds) mapping.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Aries at 0 deg. Given a tropical longitude we identify the
//! sign the point falls in and express the position within that sign.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use natal_frames::normalize_360;
use serde::{Deserialize, Serialize};

/// The 12 zodiac signs in ring order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

/// Classical element of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

/// Classical modality (quality) of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

impl ZodiacSign {
    /// English name of the sign.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }

    /// Sign at a ring index, wrapping modulo 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_SIGNS[(index % 12) as usize]
    }

    /// Element cycles Fire, Earth, Air, Water from Aries.
    pub const fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    /// Modality cycles Cardinal, Fixed, Mutable from Aries.
    pub const fn modality(self) -> Modality {
        match self.index() % 3 {
            0 => Modality::Cardinal,
            1 => Modality::Fixed,
            _ => Modality::Mutable,
        }
    }

    /// Longitude of the first degree of this sign.
    pub const fn start_deg(self) -> f64 {
        self.index() as f64 * 30.0
    }

    /// All 12 signs in order.
    pub const fn all() -> &'static [ZodiacSign; 12] {
        &ALL_SIGNS
    }
}

impl Display for ZodiacSign {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ZodiacSign {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_SIGNS
            .iter()
            .copied()
            .find(|z| z.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown zodiac sign '{s}'"))
    }
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dms {
    /// Whole degrees (0..29 within a sign, or 0..359 standalone).
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds [0.0, 60.0), may include a fractional part.
    pub seconds: f64,
}

impl Dms {
    /// Round seconds to `decimals` places, carrying a full 60 into minutes
    /// and then degrees.
    pub fn rounded(&self, decimals: u32) -> Dms {
        let scale = 10f64.powi(decimals as i32);
        let mut seconds = (self.seconds * scale).round() / scale;
        let mut minutes = self.minutes;
        let mut degrees = self.degrees;
        if seconds >= 60.0 {
            seconds -= 60.0;
            minutes += 1;
        }
        if minutes >= 60 {
            minutes -= 60;
            degrees += 1;
        }
        Dms {
            degrees,
            minutes,
            seconds,
        }
    }
}

impl Display for Dms {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let dms = self.rounded(2);
        write!(f, "{}°{:02}'{:05.2}\"", dms.degrees, dms.minutes, dms.seconds)
    }
}

/// Convert decimal degrees to degrees-minutes-seconds.
///
/// Negative input is taken by absolute value.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let degrees = d.floor() as u16;
    let remainder = (d - degrees as f64) * 60.0;
    let minutes = remainder.floor() as u8;
    let seconds = (remainder - minutes as f64) * 60.0;
    Dms {
        degrees,
        minutes,
        seconds,
    }
}

/// Convert DMS back to decimal degrees.
pub fn dms_to_deg(dms: &Dms) -> f64 {
    dms.degrees as f64 + dms.minutes as f64 / 60.0 + dms.seconds / 3600.0
}

/// Sign and in-sign degree, both taken from one normalized longitude.
fn split_longitude(lon_deg: f64) -> (ZodiacSign, f64) {
    let lon = normalize_360(lon_deg);
    // Clamp in case of a floating point edge at 360.0
    let sign = ALL_SIGNS[((lon / 30.0).floor() as u8).min(11) as usize];
    // lon / 30 may round up to the next sign just below a boundary
    let degree = lon - sign.start_deg();
    (sign, if degree < 0.0 { 0.0 } else { degree })
}

/// 0-based sign index of a finite longitude.
pub fn sign_index(lon_deg: f64) -> u8 {
    split_longitude(lon_deg).0.index()
}

/// Zodiac sign containing a finite longitude. 360° wraps to Aries.
pub fn zodiac_sign(lon_deg: f64) -> ZodiacSign {
    split_longitude(lon_deg).0
}

/// Degrees within the sign, [0, 30).
pub fn degree_in_sign(lon_deg: f64) -> f64 {
    split_longitude(lon_deg).1
}

/// Full sign position of a longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignInfo {
    pub sign: ZodiacSign,
    /// 0-based sign index (0 = Aries).
    pub sign_index: u8,
    /// Decimal degrees within the sign [0.0, 30.0).
    pub degree_in_sign: f64,
    /// Position within the sign as DMS.
    pub dms: Dms,
}

/// Sign, in-sign degree and DMS for a finite longitude.
pub fn sign_info(lon_deg: f64) -> SignInfo {
    let (sign, degree) = split_longitude(lon_deg);
    SignInfo {
        sign,
        sign_index: sign.index(),
        degree_in_sign: degree,
        dms: deg_to_dms(degree),
    }
}
