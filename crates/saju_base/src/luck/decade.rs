//! Decade (大運) pillars.

use crate::pillar::{Pillar, PillarLabel};
use crate::sexagenary::StemBranch;
use crate::stem::Stem;

use super::types::{
    DECADE_PILLAR_COUNT, DECADE_SPAN_YEARS, DecadePillar, Direction, MAX_START_AGE, MIN_START_AGE,
};

/// Decade start age from the days between birth and the adjacent month
/// boundary: three days count as one year, rounded, clamped to 1..=10.
pub fn start_age_from_days(days: f64) -> u8 {
    let years = (days.abs() / 3.0).round();
    years.clamp(MIN_START_AGE as f64, MAX_START_AGE as f64) as u8
}

/// The 10 decade pillars.
///
/// Decade `k` is the month pillar's cycle neighbour at `month ± (k + 1)`
/// and begins at age `start_age + 10k`.
pub fn decade_pillars(
    month: StemBranch,
    direction: Direction,
    start_age: u8,
    day_stem: Stem,
) -> Vec<DecadePillar> {
    (0..DECADE_PILLAR_COUNT)
        .map(|k| {
            let sb = month.offset(direction.sign() * (k as i64 + 1));
            DecadePillar {
                age: u32::from(start_age) + DECADE_SPAN_YEARS * k as u32,
                pillar: Pillar::resolve(PillarLabel::Decade, sb, day_stem),
            }
        })
        .collect()
}

/// The decade active at `age`, if any.
pub fn decade_for_age(pillars: &[DecadePillar], age: u32) -> Option<&DecadePillar> {
    pillars.iter().find(|p| p.contains_age(age))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month() -> StemBranch {
        "丙寅".parse().unwrap()
    }

    #[test]
    fn forward_run_is_contiguous() {
        let pillars = decade_pillars(month(), Direction::Forward, 3, Stem::Gap);
        assert_eq!(pillars.len(), 10);
        assert_eq!(pillars[0].pillar.stem_branch.to_string(), "丁卯");
        for w in pillars.windows(2) {
            assert_eq!(
                (w[0].pillar.cycle_index() + 1) % 60,
                w[1].pillar.cycle_index()
            );
        }
    }

    #[test]
    fn backward_run_wraps() {
        let start: StemBranch = "乙丑".parse().unwrap();
        let pillars = decade_pillars(start, Direction::Backward, 7, Stem::Gap);
        assert_eq!(pillars[0].pillar.stem_branch.to_string(), "甲子");
        assert_eq!(pillars[1].pillar.cycle_index(), 59);
    }

    #[test]
    fn ages_step_by_ten() {
        let pillars = decade_pillars(month(), Direction::Forward, 4, Stem::Gap);
        let ages: Vec<u32> = pillars.iter().map(|p| p.age).collect();
        assert_eq!(ages, vec![4, 14, 24, 34, 44, 54, 64, 74, 84, 94]);
    }

    #[test]
    fn no_repeats_and_month_excluded() {
        let pillars = decade_pillars(month(), Direction::Backward, 1, Stem::Gap);
        let mut idx: Vec<u8> = pillars.iter().map(|p| p.pillar.cycle_index()).collect();
        assert!(!idx.contains(&month().index()));
        idx.sort_unstable();
        idx.dedup();
        assert_eq!(idx.len(), 10);
    }

    #[test]
    fn start_age_rounding_and_clamp() {
        assert_eq!(start_age_from_days(0.0), 1);
        assert_eq!(start_age_from_days(4.4), 1);
        assert_eq!(start_age_from_days(4.6), 2);
        assert_eq!(start_age_from_days(15.0), 5);
        assert_eq!(start_age_from_days(29.9), 10);
        assert_eq!(start_age_from_days(45.0), 10);
    }

    #[test]
    fn active_decade_lookup() {
        let pillars = decade_pillars(month(), Direction::Forward, 6, Stem::Gap);
        assert!(decade_for_age(&pillars, 5).is_none());
        assert_eq!(decade_for_age(&pillars, 6).map(|p| p.age), Some(6));
        assert_eq!(decade_for_age(&pillars, 25).map(|p| p.age), Some(16));
    }
}
