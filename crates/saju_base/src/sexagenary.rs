//! The 60-combination stem-branch cycle and the rules that index into it.
//!
//! Cycle entry `i` is always `stem[i mod 10]` + `branch[i mod 12]`; a pair is
//! valid only when stem and branch share parity. The year, month, day and
//! hour rules below all reduce to stepping through this one index space.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::branch::Branch;
use crate::error::BaseError;
use crate::stem::Stem;

/// Length of the sexagenary cycle.
pub const CYCLE_LEN: u8 = 60;

/// Reference epoch: CE 4 = 甲子 (index 0).
pub const SEXAGENARY_EPOCH_YEAR: i32 = 4;

/// Cycle index of the day 2000-01-01 (戊午).
pub const DAY_EPOCH_INDEX: u8 = 54;

/// Month branches by month position, starting at the tiger month.
pub const MONTH_BRANCHES: [Branch; 12] = [
    Branch::In,
    Branch::Myo,
    Branch::Jin,
    Branch::Sa,
    Branch::O,
    Branch::Mi,
    Branch::Sin,
    Branch::Yu,
    Branch::Sul,
    Branch::Hae,
    Branch::Ja,
    Branch::Chuk,
];

/// One entry of the 60-cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StemBranch {
    pub stem: Stem,
    pub branch: Branch,
}

/// All 60 combinations in cycle order (index 0 = 甲子).
pub const ALL_STEM_BRANCHES: [StemBranch; 60] = build_cycle();

const fn build_cycle() -> [StemBranch; 60] {
    let mut out = [StemBranch {
        stem: Stem::Gap,
        branch: Branch::Ja,
    }; 60];
    let mut i = 0;
    while i < 60 {
        out[i] = StemBranch::from_index(i as u8);
        i += 1;
    }
    out
}

impl StemBranch {
    /// Pair a stem and branch, rejecting combinations outside the cycle.
    pub fn new(stem: Stem, branch: Branch) -> Result<Self, BaseError> {
        if stem.index() % 2 != branch.index() % 2 {
            return Err(BaseError::InvalidPillar(format!(
                "{}{}",
                stem.hanja(),
                branch.hanja()
            )));
        }
        Ok(Self { stem, branch })
    }

    /// Entry at `i mod 60`.
    pub const fn from_index(i: u8) -> Self {
        let i = i % CYCLE_LEN;
        Self {
            stem: Stem::from_index(i % 10),
            branch: Branch::from_index(i % 12),
        }
    }

    /// Entry at any signed cycle position, wrapping mod 60.
    pub const fn from_cycle_position(i: i64) -> Self {
        Self::from_index(i.rem_euclid(CYCLE_LEN as i64) as u8)
    }

    /// 0-based cycle index (甲子=0 .. 癸亥=59).
    pub const fn index(self) -> u8 {
        // i ≡ stem (mod 10) and i ≡ branch (mod 12)
        let s = self.stem.index() as i16;
        let b = self.branch.index() as i16;
        (6 * s - 5 * b).rem_euclid(60) as u8
    }

    /// Step `steps` entries through the cycle (negative steps go back).
    pub const fn offset(self, steps: i64) -> Self {
        Self::from_cycle_position(self.index() as i64 + steps)
    }

    /// The 甲-headed decade (旬) this entry belongs to, 0..6.
    pub const fn decade(self) -> u8 {
        self.index() / 10
    }

    /// Two-character hanja form, e.g. "甲子".
    pub fn hanja(self) -> String {
        format!("{}{}", self.stem.hanja(), self.branch.hanja())
    }

    pub fn korean(self) -> String {
        format!("{}{}", self.stem.korean(), self.branch.korean())
    }
}

impl Display for StemBranch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.hanja(), self.branch.hanja())
    }
}

impl FromStr for StemBranch {
    type Err = BaseError;

    /// Parse two hanja characters, stem first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(sc), Some(bc), None) => Self::new(Stem::try_from(sc)?, Branch::try_from(bc)?),
            _ => Err(BaseError::InvalidPillar(s.to_string())),
        }
    }
}

impl Serialize for StemBranch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Year entry for a sexagenary year number: index `(year − 4) mod 60`.
///
/// The caller decides the sexagenary year (it changes at Start of Spring,
/// not on January 1).
pub const fn year_stem_branch(sexagenary_year: i32) -> StemBranch {
    StemBranch::from_cycle_position(sexagenary_year as i64 - SEXAGENARY_EPOCH_YEAR as i64)
}

/// Day entry `days` days after 2000-01-01 (negative for earlier days).
pub const fn day_stem_branch(days_since_epoch: i64) -> StemBranch {
    StemBranch::from_cycle_position(DAY_EPOCH_INDEX as i64 + days_since_epoch)
}

/// Five-tiger rule: stem of the tiger month (position 0) for a year stem.
///
/// 甲己→丙, 乙庚→戊, 丙辛→庚, 丁壬→壬, 戊癸→甲.
pub const fn tiger_month_stem(year_stem: Stem) -> Stem {
    Stem::from_index((year_stem.index() % 5) * 2 + 2)
}

/// Month entry for a month position (0 = 寅 .. 11 = 丑) in a year.
pub const fn month_stem_branch(year_stem: Stem, position: u8) -> StemBranch {
    let position = position % 12;
    StemBranch {
        stem: Stem::from_index(tiger_month_stem(year_stem).index() + position),
        branch: MONTH_BRANCHES[position as usize],
    }
}

/// Month position (0 = 寅) of a month branch.
pub const fn month_position(branch: Branch) -> u8 {
    (branch.index() + 10) % 12
}

/// Five-rat rule: stem of the rat hour (子, bucket 0) for a day stem.
///
/// 甲己→甲, 乙庚→丙, 丙辛→戊, 丁壬→庚, 戊癸→壬.
pub const fn rat_hour_stem(day_stem: Stem) -> Stem {
    Stem::from_index((day_stem.index() % 5) * 2)
}

/// Two-hour bucket branch for a clock hour; 23:00 opens the 子 bucket.
pub const fn hour_branch(clock_hour: u32) -> Branch {
    if clock_hour >= 23 {
        Branch::Ja
    } else {
        Branch::from_index((((clock_hour + 1) / 2) % 12) as u8)
    }
}

/// Hour entry for a day stem and clock hour.
pub const fn hour_stem_branch(day_stem: Stem, clock_hour: u32) -> StemBranch {
    let branch = hour_branch(clock_hour);
    StemBranch {
        stem: Stem::from_index(rat_hour_stem(day_stem).index() + branch.index()),
        branch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_has_60_distinct_entries() {
        let mut seen = std::collections::HashSet::new();
        for sb in ALL_STEM_BRANCHES {
            assert!(seen.insert(sb));
        }
        assert_eq!(seen.len(), 60);
    }

    #[test]
    fn index_roundtrip() {
        for (i, sb) in ALL_STEM_BRANCHES.iter().enumerate() {
            assert_eq!(sb.index() as usize, i);
            assert_eq!(sb.stem.index() as usize, i % 10);
            assert_eq!(sb.branch.index() as usize, i % 12);
        }
    }

    #[test]
    fn known_entries() {
        assert_eq!(ALL_STEM_BRANCHES[0].to_string(), "甲子");
        assert_eq!(ALL_STEM_BRANCHES[10].to_string(), "甲戌");
        assert_eq!(ALL_STEM_BRANCHES[54].to_string(), "戊午");
        assert_eq!(ALL_STEM_BRANCHES[59].to_string(), "癸亥");
    }

    #[test]
    fn mismatched_parity_rejected() {
        assert!(StemBranch::new(Stem::Gap, Branch::Chuk).is_err());
        assert!("甲丑".parse::<StemBranch>().is_err());
        assert!("乙丑".parse::<StemBranch>().is_ok());
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert!("甲".parse::<StemBranch>().is_err());
        assert!("甲子丑".parse::<StemBranch>().is_err());
    }

    #[test]
    fn offset_wraps_both_ways() {
        let first = ALL_STEM_BRANCHES[0];
        assert_eq!(first.offset(-1).index(), 59);
        assert_eq!(first.offset(61).index(), 1);
        assert_eq!(ALL_STEM_BRANCHES[59].offset(1).index(), 0);
    }

    #[test]
    fn year_1984_is_gap_ja() {
        assert_eq!(year_stem_branch(1984).index(), 0);
        assert_eq!(year_stem_branch(2024).to_string(), "甲辰");
        assert_eq!(year_stem_branch(2000).to_string(), "庚辰");
    }

    #[test]
    fn day_epoch() {
        let sb = day_stem_branch(0);
        assert_eq!(sb.index(), 54);
        assert_eq!(sb.stem.index(), 4);
        assert_eq!(sb.branch.index(), 6);
        assert_eq!(day_stem_branch(-54).index(), 0);
        assert_eq!(day_stem_branch(60), sb);
    }

    #[test]
    fn five_tiger_rule() {
        assert_eq!(tiger_month_stem(Stem::Gap), Stem::Byeong);
        assert_eq!(tiger_month_stem(Stem::Gi), Stem::Byeong);
        assert_eq!(tiger_month_stem(Stem::Eul), Stem::Mu);
        assert_eq!(tiger_month_stem(Stem::Byeong), Stem::Gyeong);
        assert_eq!(tiger_month_stem(Stem::Jeong), Stem::Im);
        assert_eq!(tiger_month_stem(Stem::Gye), Stem::Gap);
    }

    #[test]
    fn month_entries_are_valid_cycle_members() {
        for y in crate::stem::ALL_STEMS {
            for p in 0..12 {
                let sb = month_stem_branch(y, p);
                assert!(StemBranch::new(sb.stem, sb.branch).is_ok());
            }
        }
        assert_eq!(month_stem_branch(Stem::Gyeong, 0).to_string(), "戊寅");
        assert_eq!(month_stem_branch(Stem::Gyeong, 11).to_string(), "己丑");
    }

    #[test]
    fn month_position_inverts_branch_table() {
        for (p, b) in MONTH_BRANCHES.iter().enumerate() {
            assert_eq!(month_position(*b) as usize, p);
        }
    }

    #[test]
    fn five_rat_rule() {
        assert_eq!(rat_hour_stem(Stem::Gap), Stem::Gap);
        assert_eq!(rat_hour_stem(Stem::Eul), Stem::Byeong);
        assert_eq!(rat_hour_stem(Stem::Mu), Stem::Im);
        assert_eq!(rat_hour_stem(Stem::Gye), Stem::Im);
    }

    #[test]
    fn hour_buckets() {
        assert_eq!(hour_branch(23), Branch::Ja);
        assert_eq!(hour_branch(0), Branch::Ja);
        assert_eq!(hour_branch(1), Branch::Chuk);
        assert_eq!(hour_branch(2), Branch::Chuk);
        assert_eq!(hour_branch(11), Branch::O);
        assert_eq!(hour_branch(12), Branch::O);
        assert_eq!(hour_branch(22), Branch::Hae);
    }

    #[test]
    fn hour_entry_for_gap_day_noon() {
        assert_eq!(hour_stem_branch(Stem::Gap, 12).to_string(), "庚午");
        assert_eq!(hour_stem_branch(Stem::Mu, 23).to_string(), "壬子");
    }
}
