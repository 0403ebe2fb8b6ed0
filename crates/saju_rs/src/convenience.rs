use chrono::NaiveDateTime;

use saju_base::{DecadePillar, StemBranch};
use saju_chart::{BirthInput, Chart, ChartConfig, MonthFallback, MonthPillarInfo};
use saju_time::{CivilTime, Region, SolarTerm, correct_to_local_mean};

use crate::error::SajuRsError;
use crate::global::table;

fn corrected(civil: CivilTime, region: Region) -> Result<NaiveDateTime, SajuRsError> {
    Ok(correct_to_local_mean(
        civil.to_datetime()?,
        region.offset_minutes(),
    ))
}

/// Full chart against the global table.
pub fn chart(input: &BirthInput, config: &ChartConfig) -> Result<Chart, SajuRsError> {
    Ok(saju_chart::compute_chart(table()?, input, config)?)
}

/// Year pillar of a civil time, after region correction.
pub fn year_pillar(civil: CivilTime, region: Region) -> Result<StemBranch, SajuRsError> {
    Ok(saju_chart::year_pillar(table()?, corrected(civil, region)?)?)
}

/// Month pillar and its solar-term interval, after region correction.
pub fn month_pillar(
    civil: CivilTime,
    region: Region,
    fallback: MonthFallback,
) -> Result<MonthPillarInfo, SajuRsError> {
    Ok(saju_chart::month_pillar_for_instant(
        table()?,
        corrected(civil, region)?,
        fallback,
    )?)
}

/// Day pillar of a civil date. Needs no table.
pub fn day_pillar(year: i32, month: u32, day: u32) -> Result<StemBranch, SajuRsError> {
    Ok(saju_chart::day_pillar(year, month, day)?)
}

/// The ten decade pillars of a birth.
pub fn decade_pillars_for(
    input: &BirthInput,
    config: &ChartConfig,
) -> Result<Vec<DecadePillar>, SajuRsError> {
    Ok(chart(input, config)?.decade_pillars)
}

/// Instant of a solar term in the global table.
pub fn solar_term(year: i32, term: SolarTerm) -> Result<NaiveDateTime, SajuRsError> {
    Ok(table()?.term(year, term)?)
}

/// Start of Spring (the year boundary) of a civil year.
pub fn start_of_spring(year: i32) -> Result<NaiveDateTime, SajuRsError> {
    solar_term(year, SolarTerm::StartOfSpring)
}
