//! `SajuConfig`: JSON config file plus environment overrides.
//!
//! Resolution order for the file is an explicit path, then `SAJU_CONFIG`,
//! then built-in defaults. `SAJU_SOLAR_TERMS` replaces the table path from
//! whichever source won.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use saju_chart::{ChartConfig, MonthFallback};
use saju_time::{Region, SolarTermTable};

use crate::error::ConfigError;

/// Env var naming the config file.
pub const CONFIG_ENV: &str = "SAJU_CONFIG";
/// Env var naming an override solar term table.
pub const SOLAR_TERMS_ENV: &str = "SAJU_SOLAR_TERMS";

/// On-disk configuration. Every field is optional in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SajuConfig {
    /// Replacement solar term table; the bundled one is used when absent.
    pub solar_terms: Option<PathBuf>,
    pub night_bucket: bool,
    /// `"strict"` or `"last-bucket"`; strict when absent.
    pub month_fallback: Option<MonthFallback>,
    /// Region name or signed minute offset.
    pub default_region: Option<String>,
}

impl SajuConfig {
    /// Parse a config from JSON text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(content)?;
        config.default_region()?;
        Ok(config)
    }

    /// Read and parse a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))?;
        Self::parse(&content)
    }

    /// Load using the process environment.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::resolve(explicit, |key| std::env::var(key).ok())
    }

    /// Load with a caller-supplied environment lookup.
    pub fn resolve<F>(explicit: Option<&Path>, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| env(CONFIG_ENV).map(PathBuf::from));
        let mut config = match &path {
            Some(p) => {
                tracing::debug!(path = %p.display(), "reading config file");
                Self::from_file(p)?
            }
            None => Self::default(),
        };
        if let Some(terms) = env(SOLAR_TERMS_ENV) {
            config.solar_terms = Some(PathBuf::from(terms));
        }
        Ok(config)
    }

    pub fn month_fallback(&self) -> MonthFallback {
        self.month_fallback.unwrap_or_default()
    }

    /// Configured default region, Seoul when unset.
    pub fn default_region(&self) -> Result<Region, ConfigError> {
        match &self.default_region {
            None => Ok(Region::Seoul),
            Some(name) => name.parse().map_err(|_| ConfigError::InvalidValue {
                field: "default_region",
                value: name.clone(),
            }),
        }
    }

    pub fn to_chart_config(&self) -> ChartConfig {
        ChartConfig {
            night_bucket: self.night_bucket,
            month_fallback: self.month_fallback(),
        }
    }

    /// Load the configured table, or the bundled one.
    pub fn load_table(&self) -> Result<SolarTermTable, ConfigError> {
        Ok(match &self.solar_terms {
            Some(path) => SolarTermTable::load(path)?,
            None => SolarTermTable::bundled()?,
        })
    }
}
