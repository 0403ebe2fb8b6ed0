//! Error types for civil time handling and solar term tables.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from civil date validation or solar term table handling.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Calendar date does not exist (e.g. Feb 30).
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Clock time outside 00:00..=23:59.
    InvalidTime { hour: u32, minute: u32 },
    /// Year outside the range covered by the solar term table.
    UnsupportedYear(i32),
    /// Solar term table parsing failed.
    TermParse(String),
    /// Malformed civil date/time string.
    Parse(String),
    /// I/O error.
    Io(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { year, month, day } => {
                write!(f, "invalid calendar date: {year:04}-{month:02}-{day:02}")
            }
            Self::InvalidTime { hour, minute } => {
                write!(f, "invalid clock time: {hour:02}:{minute:02}")
            }
            Self::UnsupportedYear(year) => {
                write!(f, "solar term data not available for year {year}")
            }
            Self::TermParse(msg) => write!(f, "solar term table parse error: {msg}"),
            Self::Parse(msg) => write!(f, "date/time parse error: {msg}"),
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl Error for TimeError {}

impl From<std::io::Error> for TimeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for TimeError {
    fn from(e: serde_json::Error) -> Self {
        Self::TermParse(e.to_string())
    }
}
