//! Monthly (月運) pillars for one year.

use crate::branch::Branch;
use crate::pillar::{Pillar, PillarLabel};
use crate::sexagenary::{MONTH_BRANCHES, month_position, month_stem_branch, year_stem_branch};
use crate::stem::Stem;

use super::types::{MONTHS_PER_YEAR, MonthlyPillar};

/// Approximate civil month and year for a month branch of `year`.
///
/// 寅 → February .. 子 → December; 丑 → January of the following year.
pub const fn civil_month_of(year: i32, branch: Branch) -> (i64, u32) {
    let position = month_position(branch) as u32;
    if position == 11 {
        (year as i64 + 1, 1)
    } else {
        (year as i64, position + 2)
    }
}

/// The 12 monthly pillars of `year`, tiger month first.
pub fn monthly_pillars(year: i32, day_stem: Stem) -> Vec<MonthlyPillar> {
    let year_stem = year_stem_branch(year).stem;
    (0..MONTHS_PER_YEAR)
        .map(|pos| {
            let sb = month_stem_branch(year_stem, pos as u8);
            let (civil_year, civil_month) = civil_month_of(year, MONTH_BRANCHES[pos]);
            MonthlyPillar {
                civil_month,
                civil_year,
                pillar: Pillar::resolve(PillarLabel::Monthly, sb, day_stem),
            }
        })
        .collect()
}
