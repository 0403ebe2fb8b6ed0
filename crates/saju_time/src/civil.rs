//! Civil (wall-clock) date/time in the reference timezone.
//!
//! Provides `CivilTime`, the canonical input representation used throughout
//! the engine. All values are interpreted in the fixed civil timezone of the
//! solar term table (UTC+9); no timezone arithmetic is ever applied.

use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::Serialize;

use crate::error::TimeError;

/// First year accepted as birth input.
pub const MIN_SUPPORTED_YEAR: i32 = 1940;

/// Last year accepted as birth input.
pub const MAX_SUPPORTED_YEAR: i32 = 2050;

const DATE_FORMAT: &str = "%Y-%m-%d";

const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

/// Civil calendar date with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CivilTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl CivilTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
        }
    }

    /// Midnight at the start of the given civil date.
    pub fn midnight(year: i32, month: u32, day: u32) -> Self {
        Self::new(year, month, day, 0, 0)
    }

    /// Validate the calendar date alone.
    pub fn to_date(&self) -> Result<NaiveDate, TimeError> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).ok_or(TimeError::InvalidDate {
            year: self.year,
            month: self.month,
            day: self.day,
        })
    }

    /// Validate and convert to a naive timestamp.
    pub fn to_datetime(&self) -> Result<NaiveDateTime, TimeError> {
        let date = self.to_date()?;
        let time = NaiveTime::from_hms_opt(self.hour, self.minute, 0).ok_or(
            TimeError::InvalidTime {
                hour: self.hour,
                minute: self.minute,
            },
        )?;
        Ok(date.and_time(time))
    }

    /// Build from a naive timestamp (seconds are dropped).
    pub fn from_datetime(dt: NaiveDateTime) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
        }
    }

    /// Validate as birth input: a real date, a real clock time, and a year
    /// inside the supported range.
    pub fn validate_birth(&self) -> Result<NaiveDateTime, TimeError> {
        let dt = self.to_datetime()?;
        if !(MIN_SUPPORTED_YEAR..=MAX_SUPPORTED_YEAR).contains(&self.year) {
            return Err(TimeError::UnsupportedYear(self.year));
        }
        Ok(dt)
    }
}

impl std::fmt::Display for CivilTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

impl FromStr for CivilTime {
    type Err = TimeError;

    /// Parse "YYYY-MM-DD", "YYYY-MM-DD hh:mm" or "YYYY-MM-DDThh:mm",
    /// optionally with seconds (which are dropped).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if !s.contains([' ', 'T']) {
            let date = NaiveDate::parse_from_str(s, DATE_FORMAT)
                .map_err(|e| TimeError::Parse(format!("'{s}': {e}")))?;
            return Ok(Self::midnight(date.year(), date.month(), date.day()));
        }
        DATE_TIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .map(Self::from_datetime)
            .ok_or_else(|| {
                let reason = NaiveDateTime::parse_from_str(s, DATE_TIME_FORMATS[0])
                    .err()
                    .map(|e| e.to_string())
                    .unwrap_or_default();
                TimeError::Parse(format!("expected YYYY-MM-DD hh:mm, got '{s}': {reason}"))
            })
    }
}
