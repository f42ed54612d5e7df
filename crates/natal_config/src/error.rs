//! Error types for configuration loading.

use std::path::PathBuf;

use natal_chart::ChartError;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The text is not valid TOML or has unknown/mistyped keys.
    #[error("cannot parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// A value parsed but is out of range.
    #[error("invalid config: {0}")]
    Invalid(#[from] ChartError),
}
