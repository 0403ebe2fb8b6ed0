//! Configuration layer: a JSON config file with environment overrides that
//! yields a `ChartConfig`, a default region and the solar term table.

pub mod config;
pub mod error;

pub use config::{CONFIG_ENV, SOLAR_TERMS_ENV, SajuConfig};
pub use error::ConfigError;
