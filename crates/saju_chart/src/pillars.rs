//! Pillar calculator: year, month, day and hour pillars from solar terms.
//!
//! Year and month pillars change at solar-term instants, never at civil
//! month boundaries. All instants are civil-timezone `NaiveDateTime`s.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use saju_base::{
    StemBranch, day_stem_branch, hour_stem_branch, month_stem_branch, year_stem_branch,
};
use saju_time::{MONTH_OPENING_TERMS, SolarTerm, SolarTermTable, TimeError};

use crate::chart_types::{MonthFallback, MonthPillarInfo, MonthResolution};
use crate::error::ChartError;

/// Days from CE of 2000-01-01, the day-cycle reference date (index 54).
pub const DAY_EPOCH_DAYS_FROM_CE: i32 = 730_120;

/// Sexagenary year of an instant: the civil year, minus one before that
/// year's Start of Spring.
pub fn sexagenary_year(table: &SolarTermTable, instant: NaiveDateTime) -> Result<i32, TimeError> {
    let year = instant.year();
    let start_of_spring = table.start_of_spring(year)?;
    Ok(if instant < start_of_spring { year - 1 } else { year })
}

/// Year pillar of an instant.
pub fn year_pillar(table: &SolarTermTable, instant: NaiveDateTime) -> Result<StemBranch, TimeError> {
    Ok(year_stem_branch(sexagenary_year(table, instant)?))
}

/// Month pillar of an instant, with the solar-term interval that contains it.
///
/// The 12 intervals run from Start of Spring of the sexagenary year to Start
/// of Spring of the next; the last opening term (Minor Cold) and the closing
/// boundary come from the next year's row. When that row is missing the
/// trailing intervals are open-ended: `Strict` rejects an instant that lands
/// in one, `LastBucket` accepts it and flags the result `Fallback`. An
/// instant matching nothing is an error in `Strict` and the 子 month from
/// Major Snow in `LastBucket`.
pub fn month_pillar_for_instant(
    table: &SolarTermTable,
    instant: NaiveDateTime,
    fallback: MonthFallback,
) -> Result<MonthPillarInfo, ChartError> {
    let sexagenary_year = sexagenary_year(table, instant)?;
    let this_year = table.year_terms(sexagenary_year)?;
    let next_year = table.year_terms(sexagenary_year + 1).ok();

    let mut boundaries: [Option<NaiveDateTime>; 13] = [None; 13];
    for (pos, term) in MONTH_OPENING_TERMS.iter().enumerate() {
        boundaries[pos] = if *term == SolarTerm::MinorCold {
            next_year.map(|t| t[term.index() as usize])
        } else {
            Some(this_year[term.index() as usize])
        };
    }
    boundaries[12] = next_year.map(|t| t[SolarTerm::StartOfSpring.index() as usize]);

    let year_stem = year_stem_branch(sexagenary_year).stem;
    for pos in 0..12 {
        let Some(start) = boundaries[pos] else {
            continue;
        };
        let end = boundaries[pos + 1];
        if instant >= start && end.is_none_or(|e| instant < e) {
            let resolution = if end.is_some() {
                MonthResolution::Exact
            } else if fallback == MonthFallback::Strict {
                return Err(ChartError::UnresolvedMonthInterval {
                    year: sexagenary_year,
                });
            } else {
                tracing::warn!(
                    %instant,
                    sexagenary_year,
                    position = pos,
                    "month interval has no closing term; resolved open-ended"
                );
                MonthResolution::Fallback
            };
            return Ok(MonthPillarInfo {
                sexagenary_year,
                position: pos as u8,
                stem_branch: month_stem_branch(year_stem, pos as u8),
                start,
                end,
                resolution,
            });
        }
    }

    match fallback {
        MonthFallback::Strict => Err(ChartError::UnresolvedMonthInterval {
            year: sexagenary_year,
        }),
        MonthFallback::LastBucket => {
            const JA_POSITION: u8 = 10;
            tracing::warn!(
                %instant,
                sexagenary_year,
                "no month interval matched; assigning the 子 month"
            );
            Ok(MonthPillarInfo {
                sexagenary_year,
                position: JA_POSITION,
                stem_branch: month_stem_branch(year_stem, JA_POSITION),
                start: this_year[SolarTerm::MajorSnow.index() as usize],
                end: None,
                resolution: MonthResolution::Fallback,
            })
        }
    }
}

/// Whether a civil clock time falls in the 23:30–23:59 night window.
pub fn in_night_window(civil: NaiveDateTime) -> bool {
    civil.hour() == 23 && civil.minute() >= 30
}

/// Calendar date that decides the day pillar.
///
/// The corrected date rolls forward one day once the corrected clock reaches
/// 23:00, except that with `night_bucket` a civil (uncorrected) time of
/// 23:30–23:59 keeps the corrected date.
pub fn day_pillar_date(
    corrected: NaiveDateTime,
    civil: NaiveDateTime,
    night_bucket: bool,
) -> NaiveDate {
    let date = corrected.date();
    let suppress_roll = night_bucket && in_night_window(civil);
    if corrected.hour() >= 23 && !suppress_roll {
        date.succ_opt().unwrap_or(date)
    } else {
        date
    }
}

/// Day pillar of a calendar date (no 23:00 roll).
pub fn day_pillar_of_date(date: NaiveDate) -> StemBranch {
    day_stem_branch(i64::from(date.num_days_from_ce() - DAY_EPOCH_DAYS_FROM_CE))
}

/// Day pillar of a civil calendar date.
pub fn day_pillar(year: i32, month: u32, day: u32) -> Result<StemBranch, ChartError> {
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(TimeError::InvalidDate { year, month, day })?;
    Ok(day_pillar_of_date(date))
}

/// Hour pillar from the day pillar and the uncorrected civil clock hour.
pub fn hour_pillar(day: StemBranch, civil_hour: u32) -> StemBranch {
    hour_stem_branch(day.stem, civil_hour)
}
