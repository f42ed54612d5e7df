//! Mean orbital elements for the eight planets.
//!
//! Each element is a linear function of T (Julian centuries since J2000.0).
//! Mean longitude, eccentricity and semi-major axis follow the JPL
//! "Keplerian Elements for Approximate Positions of the Major Planets"
//! (Standish, 1800-2050 AD fit); the mean anomaly row is L − ϖ from the same
//! fit. Perturbation terms are the classic Jupiter/Saturn/Uranus mutual
//! perturbations, re-expressed as `amplitude·sin(rate·T + phase)`.
//!
//! All tables are immutable statics.

use crate::body::CelestialBody;

/// A quantity that varies linearly with time: `base + rate·T`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Secular {
    pub base: f64,
    /// Change per Julian century.
    pub rate: f64,
}

impl Secular {
    pub const fn new(base: f64, rate: f64) -> Self {
        Self { base, rate }
    }

    /// Value at `t` Julian centuries since J2000.0.
    pub fn at(&self, t: f64) -> f64 {
        self.base + self.rate * t
    }
}

/// One periodic perturbation: `amplitude·sin(rate·T + phase)`, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerturbationTerm {
    pub name: &'static str,
    pub amplitude_deg: f64,
    pub rate_deg_per_century: f64,
    pub phase_deg: f64,
}

impl PerturbationTerm {
    /// Contribution in degrees at `t` Julian centuries.
    pub fn value_deg(&self, t: f64) -> f64 {
        self.amplitude_deg * (self.rate_deg_per_century * t + self.phase_deg).to_radians().sin()
    }
}

/// Mean element row for one planet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    pub body: CelestialBody,
    /// Mean longitude L (degrees).
    pub mean_longitude: Secular,
    /// Mean anomaly M (degrees).
    pub mean_anomaly: Secular,
    /// Eccentricity e.
    pub eccentricity: Secular,
    /// Semi-major axis a (AU).
    pub semi_major_axis: Secular,
    pub perturbations: &'static [PerturbationTerm],
}

/// Elements evaluated at one epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementsAt {
    pub mean_longitude_deg: f64,
    pub mean_anomaly_deg: f64,
    pub eccentricity: f64,
    pub semi_major_axis_au: f64,
}

impl OrbitalElements {
    /// Evaluate every secular element at `t` Julian centuries.
    pub fn at(&self, t: f64) -> ElementsAt {
        ElementsAt {
            mean_longitude_deg: self.mean_longitude.at(t),
            mean_anomaly_deg: self.mean_anomaly.at(t),
            eccentricity: self.eccentricity.at(t),
            semi_major_axis_au: self.semi_major_axis.at(t),
        }
    }

    /// Sum of all perturbation terms at `t`, in degrees.
    pub fn perturbation_deg(&self, t: f64) -> f64 {
        self.perturbations.iter().map(|p| p.value_deg(t)).sum()
    }
}

const fn term(
    name: &'static str,
    amplitude_deg: f64,
    rate_deg_per_century: f64,
    phase_deg: f64,
) -> PerturbationTerm {
    PerturbationTerm {
        name,
        amplitude_deg,
        rate_deg_per_century,
        phase_deg,
    }
}

// Arguments are integer combinations of the Jupiter (Mj), Saturn (Ms) and
// Uranus (Mu) mean anomalies; rate and phase below are those combinations
// evaluated against the mean anomaly rows of this table.

static JUPITER_TERMS: [PerturbationTerm; 7] = [
    term("great inequality 2Mj-5Ms", -0.332, -45.495_769, 184.959_1),
    term("2Mj-2Ms", -0.056, 3623.242_014, 145.625_2),
    term("3Mj-5Ms", 0.042, 2989.037_832, 293.227_1),
    term("Mj-2Ms", -0.036, 588.708_413, 104.957_2),
    term("Mj-Ms", 0.022, 1811.621_007, 152.312_6),
    term("2Mj-3Ms", 0.023, 2400.329_420, 219.269_8),
    term("Mj-5Ms", -0.016, -3080.029_370, 163.891_1),
];

static SATURN_TERMS: [PerturbationTerm; 5] = [
    term("great inequality 2Mj-5Ms", 0.812, -45.495_769, 184.959_1),
    term("2Mj-4Ms", -0.229, 1177.416_825, 297.914_5),
    term("Mj-2Ms", 0.119, 588.708_413, 101.957_2),
    term("2Mj-6Ms", 0.046, -1268.408_363, 226.203_7),
    term("Mj-3Ms", 0.014, -634.204_181, 179.601_9),
];

static URANUS_TERMS: [PerturbationTerm; 3] = [
    term("Ms-2Mu", 0.040, 366.764_644, 38.787_7),
    term("Ms-3Mu", 0.035, -61.309_331, 283.503_9),
    term("Mj-Mu", -0.015, 2606.459_626, 257.384_1),
];

/// Element rows in [`crate::body::PLANETS`] order.
pub static PLANET_ELEMENTS: [OrbitalElements; 8] = [
    OrbitalElements {
        body: CelestialBody::Mercury,
        mean_longitude: Secular::new(252.250_323_50, 149_472.674_111_75),
        mean_anomaly: Secular::new(174.792_527_22, 149_472.513_634_86),
        eccentricity: Secular::new(0.205_635_93, 0.000_019_06),
        semi_major_axis: Secular::new(0.387_099_27, 0.000_000_37),
        perturbations: &[],
    },
    OrbitalElements {
        body: CelestialBody::Venus,
        mean_longitude: Secular::new(181.979_099_50, 58_517.815_387_29),
        mean_anomaly: Secular::new(50.376_632_32, 58_517.812_704_00),
        eccentricity: Secular::new(0.006_776_72, -0.000_041_07),
        semi_major_axis: Secular::new(0.723_335_66, 0.000_003_90),
        perturbations: &[],
    },
    OrbitalElements {
        body: CelestialBody::Mars,
        mean_longitude: Secular::new(-4.553_432_05, 19_140.302_684_99),
        mean_anomaly: Secular::new(19.390_197_54, 19_139.858_274_11),
        eccentricity: Secular::new(0.093_394_10, 0.000_078_82),
        semi_major_axis: Secular::new(1.523_710_34, 0.000_018_47),
        perturbations: &[],
    },
    OrbitalElements {
        body: CelestialBody::Jupiter,
        mean_longitude: Secular::new(34.396_440_51, 3034.746_127_75),
        mean_anomaly: Secular::new(19.667_960_68, 3034.533_601_07),
        eccentricity: Secular::new(0.048_386_24, -0.000_132_53),
        semi_major_axis: Secular::new(5.202_887_00, -0.000_116_07),
        perturbations: &JUPITER_TERMS,
    },
    OrbitalElements {
        body: CelestialBody::Saturn,
        mean_longitude: Secular::new(49.954_244_23, 1222.493_622_01),
        mean_anomaly: Secular::new(-42.644_634_08, 1222.912_594_17),
        eccentricity: Secular::new(0.053_861_79, -0.000_509_91),
        semi_major_axis: Secular::new(9.536_675_94, -0.001_250_60),
        perturbations: &SATURN_TERMS,
    },
    OrbitalElements {
        body: CelestialBody::Uranus,
        mean_longitude: Secular::new(313.238_104_51, 428.482_027_85),
        mean_anomaly: Secular::new(142.283_828_21, 428.073_975_04),
        eccentricity: Secular::new(0.047_257_44, -0.000_043_97),
        semi_major_axis: Secular::new(19.189_164_64, -0.001_961_76),
        perturbations: &URANUS_TERMS,
    },
    OrbitalElements {
        body: CelestialBody::Neptune,
        mean_longitude: Secular::new(-55.120_029_69, 218.459_453_25),
        mean_anomaly: Secular::new(-100.084_791_96, 218.781_867_89),
        eccentricity: Secular::new(0.008_590_48, 0.000_051_05),
        semi_major_axis: Secular::new(30.069_922_76, 0.000_262_91),
        perturbations: &[],
    },
    OrbitalElements {
        body: CelestialBody::Pluto,
        mean_longitude: Secular::new(238.929_038_33, 145.207_805_15),
        mean_anomaly: Secular::new(14.860_122_04, 145.248_434_57),
        eccentricity: Secular::new(0.248_827_30, 0.000_051_70),
        semi_major_axis: Secular::new(39.482_116_75, -0.000_315_96),
        perturbations: &[],
    },
];

/// Element row for a planet, or `None` for the Sun and Moon.
pub fn elements_for(body: CelestialBody) -> Option<&'static OrbitalElements> {
    PLANET_ELEMENTS.iter().find(|el| el.body == body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::PLANETS;

    #[test]
    fn table_order_matches_planets() {
        for (row, body) in PLANET_ELEMENTS.iter().zip(PLANETS) {
            assert_eq!(row.body, body);
        }
    }

    #[test]
    fn luminaries_have_no_row() {
        assert!(elements_for(CelestialBody::Sun).is_none());
        assert!(elements_for(CelestialBody::Moon).is_none());
        assert!(elements_for(CelestialBody::Mars).is_some());
    }

    #[test]
    fn eccentricities_stay_elliptic() {
        for row in &PLANET_ELEMENTS {
            for t in [-2.0, 0.0, 2.0] {
                let e = row.eccentricity.at(t);
                assert!((0.0..0.3).contains(&e), "{}: e = {e}", row.body);
            }
        }
    }

    #[test]
    fn semi_major_axes_increase_outward() {
        let axes: Vec<f64> = PLANET_ELEMENTS
            .iter()
            .map(|row| row.semi_major_axis.at(0.0))
            .collect();
        assert!(axes.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn secular_evaluation() {
        let s = Secular::new(10.0, 2.0);
        assert_eq!(s.at(0.0), 10.0);
        assert_eq!(s.at(1.5), 13.0);
    }

    #[test]
    fn perturbation_bounded_by_amplitudes() {
        for row in &PLANET_ELEMENTS {
            let bound: f64 = row.perturbations.iter().map(|p| p.amplitude_deg.abs()).sum();
            for t in [-1.0, -0.1, 0.0, 0.25, 1.0] {
                assert!(row.perturbation_deg(t).abs() <= bound + 1e-12);
            }
        }
    }

    #[test]
    fn term_phase_at_epoch() {
        let p = term("test", 2.0, 100.0, 90.0);
        assert!((p.value_deg(0.0) - 2.0).abs() < 1e-12);
    }
}
