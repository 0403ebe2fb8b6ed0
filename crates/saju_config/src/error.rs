//! Configuration errors.

use std::error::Error;
use std::fmt::{Display, Formatter};

use saju_time::TimeError;

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    /// Config file could not be read.
    Io(String),
    /// Config file is not valid JSON for `SajuConfig`.
    Parse(String),
    /// A field parsed but holds an unusable value.
    InvalidValue { field: &'static str, value: String },
    /// The configured solar term table failed to load.
    Table(TimeError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "config I/O error: {msg}"),
            Self::Parse(msg) => write!(f, "config parse error: {msg}"),
            Self::InvalidValue { field, value } => {
                write!(f, "invalid value for {field}: {value}")
            }
            Self::Table(e) => write!(f, "solar term table: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Table(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<TimeError> for ConfigError {
    fn from(e: TimeError) -> Self {
        Self::Table(e)
    }
}
