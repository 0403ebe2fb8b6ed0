//! Luck cycle projection: decade, annual and monthly pillar sequences.
//!
//! All three are derived, read-only projections anchored to a chart:
//! - Decade pillars step from the month pillar in the birth direction
//! - Annual pillars follow the year rule for consecutive civil years
//! - Monthly pillars follow the five-tiger rule within one year

pub mod annual;
pub mod decade;
pub mod monthly;
pub mod types;

pub use annual::{annual_pillar, annual_pillars};
pub use decade::{decade_for_age, decade_pillars, start_age_from_days};
pub use monthly::{civil_month_of, monthly_pillars};
pub use types::{
    AnnualPillar, DECADE_PILLAR_COUNT, DECADE_SPAN_YEARS, DecadePillar, Direction, Gender,
    MAX_START_AGE, MIN_START_AGE, MONTHS_PER_YEAR, MonthlyPillar,
};
