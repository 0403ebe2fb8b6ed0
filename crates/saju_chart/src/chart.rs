//! Four-pillar chart assembly.

use chrono::{NaiveDateTime, Timelike};

use saju_base::{
    Direction, Gender, MAX_START_AGE, MIN_START_AGE, Pillar, PillarLabel, StemBranch,
    decade_pillars, start_age_from_days, year_stem_branch,
};
use saju_time::{SolarTermTable, correct_to_local_mean};

use crate::chart_types::{BirthInput, BirthMoment, Chart, ChartConfig, MonthPillarInfo};
use crate::error::ChartError;
use crate::pillars::{day_pillar_date, day_pillar_of_date, hour_pillar, month_pillar_for_instant};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Compute the full chart of a birth.
///
/// Year, month and day pillars use the region-corrected instant; the hour
/// pillar uses the uncorrected civil clock hour. With an unknown hour the
/// date-level pillars are taken at civil noon and the hour pillar is absent.
pub fn compute_chart(
    table: &SolarTermTable,
    input: &BirthInput,
    config: &ChartConfig,
) -> Result<Chart, ChartError> {
    let civil = input.effective_civil().validate_birth()?;
    let offset_minutes = input.region.offset_minutes();
    let corrected = correct_to_local_mean(civil, offset_minutes);

    let month_info = month_pillar_for_instant(table, corrected, config.month_fallback)?;
    let year = year_stem_branch(month_info.sexagenary_year);
    let day = day_pillar_of_date(day_pillar_date(corrected, civil, config.night_bucket));
    let hour = input.hour_known.then(|| hour_pillar(day, civil.hour()));

    let direction = Direction::for_birth(year.stem, input.gender);
    let start_age = decade_start_age(corrected, direction, &month_info)?;

    tracing::debug!(
        %civil,
        %corrected,
        sexagenary_year = month_info.sexagenary_year,
        year = %year,
        month = %month_info.stem_branch,
        day = %day,
        hour_known = input.hour_known,
        "chart computed"
    );

    let mut chart = assemble(
        year,
        month_info.stem_branch,
        day,
        hour,
        input.gender,
        direction,
        start_age,
    );
    chart.birth = Some(BirthMoment {
        civil: input.civil,
        hour_known: input.hour_known,
        region: input.region,
        offset_minutes,
        corrected,
    });
    chart.month_info = Some(month_info);
    Ok(chart)
}

/// Decade start age: days from the birth instant to the next opening term
/// (forward) or from the previous one (backward), divided by three.
pub fn decade_start_age(
    corrected: NaiveDateTime,
    direction: Direction,
    month: &MonthPillarInfo,
) -> Result<u8, ChartError> {
    let span = match direction {
        Direction::Forward => month.end.ok_or(ChartError::MissingAdjacentTerm)? - corrected,
        Direction::Backward => corrected - month.start,
    };
    Ok(start_age_from_days(span.num_milliseconds() as f64 / MILLIS_PER_DAY))
}

/// Build a chart from already-known pillars (direct character input).
///
/// No birth moment is attached; `start_age` is clamped to 1..=10.
pub fn chart_from_pillars(
    year: StemBranch,
    month: StemBranch,
    day: StemBranch,
    hour: Option<StemBranch>,
    gender: Gender,
    start_age: u8,
) -> Chart {
    let direction = Direction::for_birth(year.stem, gender);
    assemble(
        year,
        month,
        day,
        hour,
        gender,
        direction,
        start_age.clamp(MIN_START_AGE, MAX_START_AGE),
    )
}

fn assemble(
    year: StemBranch,
    month: StemBranch,
    day: StemBranch,
    hour: Option<StemBranch>,
    gender: Gender,
    direction: Direction,
    start_age: u8,
) -> Chart {
    let day_stem = day.stem;
    Chart {
        year: Pillar::resolve(PillarLabel::Year, year, day_stem),
        month: Pillar::resolve(PillarLabel::Month, month, day_stem),
        day: Pillar::day(day),
        hour: hour.map(|h| Pillar::resolve(PillarLabel::Hour, h, day_stem)),
        gender,
        birth: None,
        month_info: None,
        direction,
        start_age,
        decade_pillars: decade_pillars(month, direction, start_age, day_stem),
    }
}
