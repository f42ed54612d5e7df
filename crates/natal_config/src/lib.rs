//! TOML configuration for the chart engine.
//!
//! ```toml
//! [chart]
//! default_clock_hour = 12.0
//!
//! [chart.default_location]
//! latitude = 35.6762
//! longitude = 139.6503
//!
//! [motion]
//! threshold_deg_per_day = 15.0
//! step_days = 1.0
//! ```
//!
//! Every table and key is optional; missing values keep their defaults.

pub mod error;

use std::fs;
use std::path::{Path, PathBuf};

use natal_chart::{ChartConfig, GeoLocation};
use natal_ephem::MotionConfig;
use serde::Deserialize;

pub use error::ConfigError;

/// Environment variable naming a config file when no path is given.
pub const CONFIG_ENV_VAR: &str = "NATAL_CONFIG";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RootToml {
    #[serde(default)]
    chart: ChartToml,
    #[serde(default)]
    motion: MotionToml,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ChartToml {
    #[serde(default)]
    default_clock_hour: Option<f64>,
    #[serde(default)]
    default_location: Option<LocationToml>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct LocationToml {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct MotionToml {
    #[serde(default)]
    threshold_deg_per_day: Option<f64>,
    #[serde(default)]
    step_days: Option<f64>,
}

impl RootToml {
    fn into_config(self) -> ChartConfig {
        let defaults = ChartConfig::default();
        let motion_defaults = MotionConfig::default();
        ChartConfig {
            default_location: self
                .chart
                .default_location
                .map(|l| GeoLocation::new(l.latitude, l.longitude))
                .unwrap_or(defaults.default_location),
            default_clock_hour: self
                .chart
                .default_clock_hour
                .unwrap_or(defaults.default_clock_hour),
            motion: MotionConfig {
                threshold_deg_per_day: self
                    .motion
                    .threshold_deg_per_day
                    .unwrap_or(motion_defaults.threshold_deg_per_day),
                step_days: self.motion.step_days.unwrap_or(motion_defaults.step_days),
            },
        }
    }
}

/// Parse and validate configuration text.
pub fn parse_config(text: &str) -> Result<ChartConfig, ConfigError> {
    let root: RootToml = toml::from_str(text)?;
    let config = root.into_config();
    config.validate()?;
    Ok(config)
}

/// Read, parse and validate a config file.
pub fn load_config_file(path: &Path) -> Result<ChartConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&text)?;
    log::debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Path to load: the explicit one, else `$NATAL_CONFIG` when set and non-empty.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    std::env::var_os(CONFIG_ENV_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Load configuration from the explicit path, `$NATAL_CONFIG`, or defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<ChartConfig, ConfigError> {
    match resolve_config_path(explicit) {
        Some(path) => load_config_file(&path),
        None => {
            log::debug!("no config file; using defaults");
            Ok(ChartConfig::default())
        }
    }
}
