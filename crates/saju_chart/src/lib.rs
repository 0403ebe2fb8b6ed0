//! Four-pillar chart computation driven by a solar term table.
//!
//! This crate provides:
//! - Year/month/day/hour pillar calculation with the solar-term month rule,
//!   the 23:00 day roll and the optional night-bucket exception
//! - `compute_chart` and direct-input `chart_from_pillars`
//! - Decade direction and start age from adjacent solar terms
//! - Calendar helpers and a caller-owned chart cache

pub mod cache;
pub mod calendar;
pub mod chart;
pub mod chart_types;
pub mod error;
pub mod pillars;

pub use cache::{CacheStats, DEFAULT_CACHE_LIMIT, PillarCache};
pub use calendar::{DailyOutlook, daily_outlook, daily_pillar, month_supports_day_master};
pub use chart::{chart_from_pillars, compute_chart, decade_start_age};
pub use chart_types::{
    BirthInput, BirthMoment, Chart, ChartConfig, DIRECT_INPUT_START_AGE, MonthFallback,
    MonthPillarInfo, MonthResolution, UNKNOWN_HOUR_CIVIL_HOUR,
};
pub use error::ChartError;
pub use pillars::{
    DAY_EPOCH_DAYS_FROM_CE, day_pillar, day_pillar_date, day_pillar_of_date, hour_pillar,
    in_night_window, month_pillar_for_instant, sexagenary_year, year_pillar,
};
