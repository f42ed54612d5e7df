//! Equal house division.
//!
//! Each house spans exactly 30 degrees of ecliptic longitude, with the cusp
//! of house 1 on the Ascendant.

use natal_frames::normalize_360;

use crate::sign::{degree_in_sign, zodiac_sign};
use crate::types::HouseCusp;

/// Cusp longitudes of the twelve equal houses, house 1 first.
pub fn equal_house_cusps(ascendant_deg: f64) -> [f64; 12] {
    let mut cusps = [0.0; 12];
    for (i, cusp) in cusps.iter_mut().enumerate() {
        *cusp = normalize_360(ascendant_deg + (i as f64) * 30.0);
    }
    cusps
}

/// The twelve cusps mapped through the sign mapper.
pub fn house_cusps(ascendant_deg: f64) -> Vec<HouseCusp> {
    equal_house_cusps(ascendant_deg)
        .iter()
        .zip(1u8..)
        .map(|(&lon, house)| HouseCusp {
            house,
            sign: zodiac_sign(lon),
            degree_in_sign: degree_in_sign(lon),
            longitude_deg: lon,
        })
        .collect()
}

/// Equal house (1..=12) containing `lon_deg` for the given Ascendant.
pub fn house_of(lon_deg: f64, ascendant_deg: f64) -> u8 {
    let offset = normalize_360(lon_deg - ascendant_deg);
    ((offset / 30.0).floor() as u8).min(11) + 1
}
