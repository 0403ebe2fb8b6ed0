//! Core types shared by the luck cycle projections.

use std::str::FromStr;

use serde::Serialize;

use crate::error::BaseError;
use crate::pillar::Pillar;
use crate::stem::Stem;

/// Number of decade pillars produced per chart.
pub const DECADE_PILLAR_COUNT: usize = 10;

/// Years covered by one decade pillar.
pub const DECADE_SPAN_YEARS: u32 = 10;

/// Lowest decade start age.
pub const MIN_START_AGE: u8 = 1;

/// Highest decade start age.
pub const MAX_START_AGE: u8 = 10;

/// Number of monthly pillars per year.
pub const MONTHS_PER_YEAR: usize = 12;

/// Declared gender of the chart subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = BaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            _ => Err(BaseError::UnknownGender(s.to_string())),
        }
    }
}

/// Direction in which decade pillars step through the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Forward for a yang year stem with a male subject or a yin year stem
    /// with a female subject; backward otherwise.
    pub const fn for_birth(year_stem: Stem, gender: Gender) -> Self {
        match (year_stem.polarity().is_yang(), gender) {
            (true, Gender::Male) | (false, Gender::Female) => Self::Forward,
            _ => Self::Backward,
        }
    }

    /// +1 forward, −1 backward.
    pub const fn sign(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}

/// A decade pillar and the age at which it begins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecadePillar {
    pub age: u32,
    pub pillar: Pillar,
}

impl DecadePillar {
    /// Whether `age` falls inside this decade.
    pub fn contains_age(&self, age: u32) -> bool {
        age >= self.age && age < self.age + DECADE_SPAN_YEARS
    }
}

/// An annual pillar for one civil year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnualPillar {
    pub year: i32,
    pub pillar: Pillar,
}

/// A monthly pillar with its approximate civil month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyPillar {
    /// Civil month (1..=12) the solar month mostly overlaps.
    pub civil_month: u32,
    /// Civil year of `civil_month` (the 丑 month falls in the next year).
    /// Widened so the 丑 month of `i32::MAX` still has a year.
    pub civil_year: i64,
    pub pillar: Pillar,
}

impl MonthlyPillar {
    /// Korean month name, e.g. "인월".
    pub fn month_name(&self) -> String {
        format!("{}월", self.pillar.stem_branch.branch.korean())
    }
}
