//! Civil time, local-mean-time correction and solar term tables.
//!
//! This crate provides:
//! - `CivilTime` parsing/validation in the fixed civil timezone
//! - Region offsets and the local-mean-time correction
//! - A year-keyed table of the 24 solar term instants (bundled or loaded)

pub mod civil;
pub mod error;
pub mod region;
pub mod solar_terms;

pub use civil::{CivilTime, MAX_SUPPORTED_YEAR, MIN_SUPPORTED_YEAR};
pub use error::TimeError;
pub use region::{ALL_REGIONS, REFERENCE_MERIDIAN_DEG, Region, correct_to_local_mean};
pub use solar_terms::{
    ALL_SOLAR_TERMS, MONTH_OPENING_TERMS, SolarTerm, SolarTermTable, TERMS_PER_YEAR,
    parse_term_instant,
};
