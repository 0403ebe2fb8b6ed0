//! Convenience wrapper for the saju four-pillar engine.
//!
//! Provides a global, once-initialized solar term table and high-level
//! functions that take civil times and regions directly, removing the need
//! to thread a `SolarTermTable` through every call.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use saju_rs::*;
//!
//! init_bundled().expect("table init");
//!
//! let input = BirthInput::new(
//!     "1990-05-15 14:30".parse().unwrap(),
//!     Gender::Female,
//!     Region::Seoul,
//! );
//! let c = chart(&input, &ChartConfig::default()).unwrap();
//! println!("{} {} {}", c.year.stem_branch, c.month.stem_branch, c.day.stem_branch);
//! ```

pub mod convenience;
pub mod error;
pub mod global;

pub use convenience::{
    chart, day_pillar, decade_pillars_for, month_pillar, solar_term, start_of_spring,
    year_pillar,
};
pub use error::SajuRsError;
pub use global::{init, init_bundled, is_initialized};

// Re-export the value types so callers only need `use saju_rs::*`.
pub use saju_base::{
    AnnualPillar, Branch, DecadePillar, Direction, Element, ElementTally, Gender, MonthlyPillar,
    Pillar, PillarLabel, Polarity, Star, Stem, StemBranch, SymbolicStars, TenGod, TwelveStage,
    annual_pillars, monthly_pillars, ten_god, twelve_stage,
};
pub use saju_chart::{
    BirthInput, Chart, ChartConfig, DailyOutlook, MonthFallback, MonthPillarInfo,
    MonthResolution, PillarCache, chart_from_pillars, daily_outlook, daily_pillar,
};
pub use saju_time::{CivilTime, Region, SolarTerm, SolarTermTable};
