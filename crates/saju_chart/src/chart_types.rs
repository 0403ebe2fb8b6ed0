//! Types for chart computation inputs, options and results.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use saju_base::{
    AnnualPillar, DecadePillar, Direction, ElementTally, Gender, MonthlyPillar, Pillar, Stem,
    StarContext, StemBranch, SymbolicStars, annual_pillars, decade_for_age, monthly_pillars,
};
use saju_time::{CivilTime, Region};

/// Civil hour used for every pillar but the hour pillar when the hour is unknown.
pub const UNKNOWN_HOUR_CIVIL_HOUR: u32 = 12;

/// Start age assumed for charts entered directly as characters.
pub const DIRECT_INPUT_START_AGE: u8 = 5;

/// Behaviour when an instant matches no solar-term month interval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MonthFallback {
    /// Fail with `ChartError::UnresolvedMonthInterval`.
    #[default]
    Strict,
    /// Assign the 子 month from Major Snow onward, flagged as a fallback.
    LastBucket,
}

impl MonthFallback {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::LastBucket => "last-bucket",
        }
    }

    /// Inverse of [`name`](Self::name), case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        [Self::Strict, Self::LastBucket]
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(name.trim()))
    }
}

/// Query options for chart computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ChartConfig {
    /// Keep 23:30–23:59 births on the civil day (night 子 hour).
    pub night_bucket: bool,
    pub month_fallback: MonthFallback,
}

/// How the month interval of an instant was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthResolution {
    /// The instant lies in a fully bounded solar-term interval.
    Exact,
    /// Degraded: open-ended interval or last-bucket assignment.
    Fallback,
}

/// Month pillar of an instant with the solar-term interval that decided it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthPillarInfo {
    /// Sexagenary year (changes at Start of Spring).
    pub sexagenary_year: i32,
    /// Month position (0 = 寅 .. 11 = 丑).
    pub position: u8,
    pub stem_branch: StemBranch,
    /// Opening solar term of the interval (inclusive).
    pub start: NaiveDateTime,
    /// Next opening term (exclusive); `None` when outside the table.
    pub end: Option<NaiveDateTime>,
    pub resolution: MonthResolution,
}

impl MonthPillarInfo {
    pub fn is_fallback(&self) -> bool {
        self.resolution == MonthResolution::Fallback
    }
}

/// A birth to chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BirthInput {
    /// Civil date and time; hour/minute are ignored when `hour_known` is false.
    pub civil: CivilTime,
    pub hour_known: bool,
    pub gender: Gender,
    pub region: Region,
}

impl BirthInput {
    pub fn new(civil: CivilTime, gender: Gender, region: Region) -> Self {
        Self {
            civil,
            hour_known: true,
            gender,
            region,
        }
    }

    /// Same birth with the hour declared unknown.
    pub fn with_unknown_hour(mut self) -> Self {
        self.hour_known = false;
        self
    }

    /// Civil time the date-level pillars are computed from.
    pub fn effective_civil(&self) -> CivilTime {
        if self.hour_known {
            self.civil
        } else {
            CivilTime::new(
                self.civil.year,
                self.civil.month,
                self.civil.day,
                UNKNOWN_HOUR_CIVIL_HOUR,
                0,
            )
        }
    }
}

/// Birth metadata recorded on a computed chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthMoment {
    pub civil: CivilTime,
    pub hour_known: bool,
    pub region: Region,
    pub offset_minutes: i32,
    /// Civil time shifted to local mean time.
    pub corrected: NaiveDateTime,
}

/// A four-pillar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    /// Absent when the birth hour is unknown.
    pub hour: Option<Pillar>,
    pub gender: Gender,
    /// `None` for charts built directly from characters.
    pub birth: Option<BirthMoment>,
    pub month_info: Option<MonthPillarInfo>,
    pub direction: Direction,
    /// Age at which the first decade pillar begins (1..=10).
    pub start_age: u8,
    pub decade_pillars: Vec<DecadePillar>,
}

impl Chart {
    /// The day master: the day pillar's stem.
    pub fn day_master(&self) -> Stem {
        self.day.stem_branch.stem
    }

    /// Present pillars in year, month, day, hour order.
    pub fn pillars(&self) -> Vec<&Pillar> {
        let mut out = vec![&self.year, &self.month, &self.day];
        if let Some(hour) = &self.hour {
            out.push(hour);
        }
        out
    }

    /// Element counts over every stem and branch of the present pillars.
    pub fn element_tally(&self) -> ElementTally {
        self.pillars()
            .into_iter()
            .flat_map(|p| p.elements())
            .collect()
    }

    /// Day pillar, year branch and present branches for star lookups.
    pub fn star_context(&self) -> StarContext {
        StarContext::new(
            self.day.stem_branch,
            self.year.stem_branch.branch,
            self.pillars()
                .into_iter()
                .map(|p| p.stem_branch.branch)
                .collect(),
        )
    }

    /// Symbolic stars a pillar carries within this chart.
    pub fn symbolic_stars(&self, pillar: &Pillar) -> SymbolicStars {
        SymbolicStars::for_pillar(&self.star_context(), pillar.stem_branch)
    }

    /// Decade active at `age`.
    pub fn decade_for_age(&self, age: u32) -> Option<&DecadePillar> {
        decade_for_age(&self.decade_pillars, age)
    }

    pub fn annual_pillars(&self, start_year: i32, count: usize) -> Vec<AnnualPillar> {
        annual_pillars(start_year, count, self.day_master())
    }

    pub fn monthly_pillars(&self, year: i32) -> Vec<MonthlyPillar> {
        monthly_pillars(year, self.day_master())
    }
}
