//! Geocentric longitude of the Moon from a truncated periodic series.
//!
//! The twenty largest longitude terms of the ELP-2000/82 based series,
//! giving arc-minute level accuracy.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 47,
//! Eqs. 47.1–47.5 and Table 47.A.

use natal_frames::{apply_precession_deg, normalize_360};

/// Mean longitude and fundamental arguments of the Moon, degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarArguments {
    /// Mean longitude of the Moon, Lm.
    pub mean_longitude: f64,
    /// Mean anomaly of the Moon, Mm.
    pub moon_anomaly: f64,
    /// Mean anomaly of the Sun, Ms.
    pub sun_anomaly: f64,
    /// Mean elongation of the Moon, D.
    pub elongation: f64,
    /// Argument of latitude of the Moon, F.
    pub latitude_argument: f64,
}

impl LunarArguments {
    /// Evaluate all arguments at `t` Julian centuries since J2000.0.
    pub fn at(t: f64) -> Self {
        let t2 = t * t;
        let t3 = t2 * t;
        let t4 = t3 * t;
        Self {
            mean_longitude: 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2
                + t3 / 538_841.0
                - t4 / 65_194_000.0,
            moon_anomaly: 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2
                + t3 / 69_699.0
                - t4 / 14_712_000.0,
            sun_anomaly: 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2
                + t3 / 24_490_000.0,
            elongation: 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2
                + t3 / 545_868.0
                - t4 / 113_065_000.0,
            latitude_argument: 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2
                - t3 / 3_526_000.0
                + t4 / 863_310_000.0,
        }
    }
}

/// One periodic longitude term: `coeff·sin(ms·Ms + mm·Mm + d·D + f·F)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarTerm {
    pub ms: i8,
    pub mm: i8,
    pub d: i8,
    pub f: i8,
    /// Amplitude in degrees.
    pub coeff_deg: f64,
}

impl LunarTerm {
    /// Argument of this term in degrees.
    pub fn argument_deg(&self, args: &LunarArguments) -> f64 {
        self.ms as f64 * args.sun_anomaly
            + self.mm as f64 * args.moon_anomaly
            + self.d as f64 * args.elongation
            + self.f as f64 * args.latitude_argument
    }

    /// Contribution of this term in degrees.
    pub fn value_deg(&self, args: &LunarArguments) -> f64 {
        self.coeff_deg * self.argument_deg(args).to_radians().sin()
    }
}

const fn lt(ms: i8, mm: i8, d: i8, f: i8, coeff_deg: f64) -> LunarTerm {
    LunarTerm {
        ms,
        mm,
        d,
        f,
        coeff_deg,
    }
}

/// Largest periodic terms in longitude, ordered by amplitude.
pub static LUNAR_TERMS: [LunarTerm; 20] = [
    lt(0, 1, 0, 0, 6.288_774),
    lt(0, -1, 2, 0, 1.274_027),
    lt(0, 0, 2, 0, 0.658_314),
    lt(0, 2, 0, 0, 0.213_618),
    lt(1, 0, 0, 0, -0.185_116),
    lt(0, 0, 0, 2, -0.114_332),
    lt(0, -2, 2, 0, 0.058_793),
    lt(-1, -1, 2, 0, 0.057_066),
    lt(0, 1, 2, 0, 0.053_322),
    lt(-1, 0, 2, 0, 0.045_758),
    lt(1, -1, 0, 0, -0.040_923),
    lt(0, 0, 1, 0, -0.034_720),
    lt(1, 1, 0, 0, -0.030_383),
    lt(0, 0, 2, -2, 0.015_327),
    lt(0, 1, 0, 2, -0.012_528),
    lt(0, 1, 0, -2, 0.010_980),
    lt(0, -1, 4, 0, 0.010_675),
    lt(0, 3, 0, 0, 0.010_034),
    lt(0, -2, 4, 0, 0.008_548),
    lt(1, -1, 2, 0, -0.007_888),
];

/// Sum of the periodic terms in degrees.
pub fn lunar_perturbation_deg(args: &LunarArguments) -> f64 {
    LUNAR_TERMS.iter().map(|term| term.value_deg(args)).sum()
}

/// Ecliptic longitude of the Moon in degrees, [0, 360), precession-corrected.
pub fn moon_longitude_deg(t: f64) -> f64 {
    let args = LunarArguments::at(t);
    let lon = args.mean_longitude + lunar_perturbation_deg(&args);
    normalize_360(apply_precession_deg(lon, t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_47a_before_precession() {
        // 1992-Apr-12 0h TD: geocentric λ = 133.162655° (full series)
        let t = -0.077_221_081_451;
        let args = LunarArguments::at(t);
        let lon = normalize_360(args.mean_longitude + lunar_perturbation_deg(&args));
        // Truncation to 20 terms keeps the error within a few arc-minutes
        assert!((lon - 133.162_655).abs() < 0.1, "lon = {lon}");
    }

    #[test]
    fn meeus_example_47a_arguments() {
        let args = LunarArguments::at(-0.077_221_081_451);
        assert!((args.mean_longitude.rem_euclid(360.0) - 134.290_182).abs() < 1e-5);
        assert!((args.elongation.rem_euclid(360.0) - 113.842_304).abs() < 1e-5);
        assert!((args.sun_anomaly.rem_euclid(360.0) - 97.643_514).abs() < 1e-5);
        assert!((args.moon_anomaly.rem_euclid(360.0) - 5.150_833).abs() < 1e-5);
        assert!((args.latitude_argument.rem_euclid(360.0) - 219.889_721).abs() < 1e-5);
    }

    #[test]
    fn table_has_twenty_terms() {
        assert_eq!(LUNAR_TERMS.len(), 20);
        assert!(LUNAR_TERMS.iter().all(|t| t.coeff_deg.abs() < 7.0));
    }

    #[test]
    fn daily_motion_in_lunar_range() {
        let day = 1.0 / 36_525.0;
        for i in 0..30 {
            let t = i as f64 * day;
            let diff = (moon_longitude_deg(t + day) - moon_longitude_deg(t)).rem_euclid(360.0);
            assert!((11.5..15.5).contains(&diff), "day {i}: {diff}");
        }
    }

    #[test]
    fn nan_propagates() {
        assert!(moon_longitude_deg(f64::NAN).is_nan());
    }
}
