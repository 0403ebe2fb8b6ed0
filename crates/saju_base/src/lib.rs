//! Symbol math for sexagenary (stem-branch) charts.
//!
//! This crate provides:
//! - The 10 stems, 12 branches, their elements, polarity and hidden stems
//! - The 60-entry stem-branch cycle with the year/month/day/hour index rules
//! - Ten-gods and twelve-stage resolution against a reference stem
//! - Pillar enrichment, symbolic stars and luck cycle projection
//!
//! Everything here is pure and table-free; solar term lookups live in
//! `saju_chart`.

pub mod branch;
pub mod element;
pub mod error;
pub mod luck;
pub mod pillar;
pub mod sexagenary;
pub mod stem;
pub mod symbol;
pub mod symbolic_stars;
pub mod ten_gods;
pub mod twelve_stage;

pub use branch::{ALL_BRANCHES, Branch};
pub use element::{ALL_ELEMENTS, Element, ElementTally, Polarity};
pub use error::BaseError;
pub use luck::{
    AnnualPillar, DECADE_PILLAR_COUNT, DecadePillar, Direction, Gender, MAX_START_AGE,
    MIN_START_AGE, MonthlyPillar, annual_pillar, annual_pillars, civil_month_of, decade_for_age,
    decade_pillars, monthly_pillars, start_age_from_days,
};
pub use pillar::{BranchDetail, HiddenStem, Pillar, PillarLabel, StemDetail};
pub use sexagenary::{
    ALL_STEM_BRANCHES, CYCLE_LEN, DAY_EPOCH_INDEX, MONTH_BRANCHES, SEXAGENARY_EPOCH_YEAR,
    StemBranch, day_stem_branch, hour_branch, hour_stem_branch, month_position,
    month_stem_branch, rat_hour_stem, tiger_month_stem, year_stem_branch,
};
pub use stem::{ALL_STEMS, Stem};
pub use symbol::Symbol;
pub use symbolic_stars::{
    ALL_STARS, Star, StarContext, SymbolicStars, academic_branch, flanking_branches,
    golden_carriage_branch, hidden_wealth_branch, is_commanding_power, is_needle,
    literary_branch, nobleman_branches, peach_blossom_branch, prosperity_branch, red_glow_branch,
    scholar_branch, supreme_branches, sword_edge_branch, traveling_horse_branch, void_branches,
};
pub use ten_gods::{ALL_TEN_GODS, TenGod, ten_god, ten_god_for_chars, ten_god_of};
pub use twelve_stage::{
    ALL_TWELVE_STAGES, TwelveStage, long_life_branch, twelve_stage, twelve_stage_for_chars,
};
