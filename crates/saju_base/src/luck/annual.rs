//! Annual (歲運) pillars.

use crate::pillar::{Pillar, PillarLabel};
use crate::sexagenary::year_stem_branch;
use crate::stem::Stem;

use super::types::AnnualPillar;

/// Annual pillar of a civil year.
pub fn annual_pillar(year: i32, day_stem: Stem) -> AnnualPillar {
    AnnualPillar {
        year,
        pillar: Pillar::resolve(PillarLabel::Annual, year_stem_branch(year), day_stem),
    }
}

/// `count` consecutive annual pillars starting at `start_year`.
///
/// The run stops early at `i32::MAX` rather than wrapping.
pub fn annual_pillars(start_year: i32, count: usize, day_stem: Stem) -> Vec<AnnualPillar> {
    std::iter::successors(Some(start_year), |y| y.checked_add(1))
        .take(count)
        .map(|y| annual_pillar(y, day_stem))
        .collect()
}
