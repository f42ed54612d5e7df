//! The ten bodies placed on a chart.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Bodies whose ecliptic longitude the engine computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CelestialBody {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// All ten bodies in chart order (0 = Sun, 9 = Pluto).
pub const ALL_BODIES: [CelestialBody; 10] = [
    CelestialBody::Sun,
    CelestialBody::Moon,
    CelestialBody::Mercury,
    CelestialBody::Venus,
    CelestialBody::Mars,
    CelestialBody::Jupiter,
    CelestialBody::Saturn,
    CelestialBody::Uranus,
    CelestialBody::Neptune,
    CelestialBody::Pluto,
];

/// The eight bodies computed from mean orbital elements.
pub const PLANETS: [CelestialBody; 8] = [
    CelestialBody::Mercury,
    CelestialBody::Venus,
    CelestialBody::Mars,
    CelestialBody::Jupiter,
    CelestialBody::Saturn,
    CelestialBody::Uranus,
    CelestialBody::Neptune,
    CelestialBody::Pluto,
];

impl CelestialBody {
    /// English name of the body.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        }
    }

    /// 0-based index into [`ALL_BODIES`].
    pub const fn index(self) -> u8 {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mercury => 2,
            Self::Venus => 3,
            Self::Mars => 4,
            Self::Jupiter => 5,
            Self::Saturn => 6,
            Self::Uranus => 7,
            Self::Neptune => 8,
            Self::Pluto => 9,
        }
    }

    /// Whether the body's longitude comes from the orbital element table.
    pub const fn is_planet(self) -> bool {
        !matches!(self, Self::Sun | Self::Moon)
    }

    /// All ten bodies in chart order.
    pub const fn all() -> &'static [CelestialBody; 10] {
        &ALL_BODIES
    }
}

impl Display for CelestialBody {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CelestialBody {
    type Err = String;

    /// Case-insensitive English name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_BODIES
            .iter()
            .copied()
            .find(|b| b.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown body '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, b) in CelestialBody::all().iter().enumerate() {
            assert_eq!(b.index() as usize, i);
        }
    }

    #[test]
    fn planets_exclude_luminaries() {
        assert_eq!(PLANETS.len(), 8);
        assert!(PLANETS.iter().all(|b| b.is_planet()));
        assert!(!CelestialBody::Sun.is_planet());
        assert!(!CelestialBody::Moon.is_planet());
    }

    #[test]
    fn parse_names() {
        assert_eq!("mars".parse::<CelestialBody>(), Ok(CelestialBody::Mars));
        assert_eq!(" Pluto ".parse::<CelestialBody>(), Ok(CelestialBody::Pluto));
        assert!("Vulcan".parse::<CelestialBody>().is_err());
    }

    #[test]
    fn display_matches_name() {
        for b in ALL_BODIES {
            assert_eq!(b.to_string(), b.name());
        }
    }
}
