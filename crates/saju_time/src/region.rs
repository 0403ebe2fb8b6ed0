//! Birth regions and the local-mean-time correction.
//!
//! The civil clock runs on the 135°E meridian. A birth place at longitude
//! `λ` is approximately `(135 − λ) × 4` minutes behind that clock; each
//! region carries a fixed rounded offset rather than an equation-of-time
//! calculation.

use std::str::FromStr;

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

use crate::error::TimeError;

/// Reference meridian of the civil clock, in degrees east.
pub const REFERENCE_MERIDIAN_DEG: f64 = 135.0;

/// Birth region with a fixed minute offset from the civil clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Region {
    Seoul,
    Busan,
    Daegu,
    Incheon,
    Daejeon,
    Gwangju,
    Jeonju,
    Chuncheon,
    Jeju,
    Mokpo,
    Gangneung,
    Pohang,
    Gyeongju,
    Yanji,
    /// Caller-supplied offset in minutes.
    Custom(i32),
}

/// All fixed regions in table order (index 0 = Seoul).
pub const ALL_REGIONS: [Region; 14] = [
    Region::Seoul,
    Region::Busan,
    Region::Daegu,
    Region::Incheon,
    Region::Daejeon,
    Region::Gwangju,
    Region::Jeonju,
    Region::Chuncheon,
    Region::Jeju,
    Region::Mokpo,
    Region::Gangneung,
    Region::Pohang,
    Region::Gyeongju,
    Region::Yanji,
];

impl Region {
    /// English name of the region.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Seoul => "Seoul",
            Self::Busan => "Busan",
            Self::Daegu => "Daegu",
            Self::Incheon => "Incheon",
            Self::Daejeon => "Daejeon",
            Self::Gwangju => "Gwangju",
            Self::Jeonju => "Jeonju",
            Self::Chuncheon => "Chuncheon",
            Self::Jeju => "Jeju",
            Self::Mokpo => "Mokpo",
            Self::Gangneung => "Gangneung",
            Self::Pohang => "Pohang",
            Self::Gyeongju => "Gyeongju",
            Self::Yanji => "Yanji",
            Self::Custom(_) => "Custom",
        }
    }

    /// Minutes the local mean solar time runs behind the civil clock.
    pub const fn offset_minutes(self) -> i32 {
        match self {
            Self::Seoul => 32,
            Self::Busan => 24,
            Self::Daegu => 26,
            Self::Incheon => 33,
            Self::Daejeon => 30,
            Self::Gwangju => 32,
            Self::Jeonju => 32,
            Self::Chuncheon => 29,
            Self::Jeju => 34,
            Self::Mokpo => 34,
            Self::Gangneung => 24,
            Self::Pohang => 22,
            Self::Gyeongju => 23,
            Self::Yanji => 22,
            Self::Custom(m) => m,
        }
    }

    /// Region with the offset implied by a longitude, rounded to the minute.
    pub fn from_longitude(lon_deg: f64) -> Self {
        Self::Custom(((REFERENCE_MERIDIAN_DEG - lon_deg) * 4.0).round() as i32)
    }

    /// All fixed regions in order.
    pub const fn all() -> &'static [Region; 14] {
        &ALL_REGIONS
    }
}

impl FromStr for Region {
    type Err = TimeError;

    /// Parse a region name (case-insensitive) or a bare signed minute offset.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(minutes) = trimmed.parse::<i32>() {
            return Ok(Self::Custom(minutes));
        }
        ALL_REGIONS
            .iter()
            .copied()
            .find(|r| r.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| TimeError::Parse(format!("unknown region: {trimmed}")))
    }
}

/// Shift a civil timestamp to approximate local mean solar time.
///
/// `corrected = civil − offset_minutes`. Total; never fails.
pub fn correct_to_local_mean(civil: NaiveDateTime, offset_minutes: i32) -> NaiveDateTime {
    civil - Duration::minutes(i64::from(offset_minutes))
}
