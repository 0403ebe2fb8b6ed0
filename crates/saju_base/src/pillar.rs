//! Pillars enriched with their attributes relative to the day stem.

use serde::Serialize;

use crate::branch::Branch;
use crate::element::{Element, Polarity};
use crate::sexagenary::StemBranch;
use crate::stem::Stem;
use crate::ten_gods::{TenGod, ten_god};
use crate::twelve_stage::{TwelveStage, twelve_stage};

/// Which slot a pillar fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PillarLabel {
    Year,
    Month,
    Day,
    Hour,
    Decade,
    Annual,
    Monthly,
    Daily,
}

impl PillarLabel {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Decade => "decade",
            Self::Annual => "annual",
            Self::Monthly => "monthly",
            Self::Daily => "daily",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Year => "年柱",
            Self::Month => "月柱",
            Self::Day => "日柱",
            Self::Hour => "時柱",
            Self::Decade => "大運",
            Self::Annual => "歲運",
            Self::Monthly => "月運",
            Self::Daily => "日運",
        }
    }
}

/// The stem half of a pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StemDetail {
    pub stem: Stem,
    pub element: Element,
    pub polarity: Polarity,
    /// `None` for the day master (日干).
    pub ten_god: Option<TenGod>,
}

impl StemDetail {
    pub fn is_day_master(&self) -> bool {
        self.ten_god.is_none()
    }
}

/// A stem buried in a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HiddenStem {
    pub stem: Stem,
    pub element: Element,
    pub ten_god: TenGod,
}

/// The branch half of a pillar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BranchDetail {
    pub branch: Branch,
    pub element: Element,
    pub polarity: Polarity,
    pub ten_god: TenGod,
    pub hidden_stems: Vec<HiddenStem>,
    pub twelve_stage: TwelveStage,
}

/// A labelled stem-branch pair with resolved attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pillar {
    pub label: PillarLabel,
    pub stem_branch: StemBranch,
    pub stem: StemDetail,
    pub branch: BranchDetail,
}

impl Pillar {
    /// Resolve all attributes of `sb` relative to `day_stem`.
    ///
    /// The stem of a `Day` pillar is the day master and carries no ten-god.
    pub fn resolve(label: PillarLabel, sb: StemBranch, day_stem: Stem) -> Self {
        let stem_ten_god = if label == PillarLabel::Day {
            None
        } else {
            Some(ten_god(day_stem, sb.stem.into()))
        };
        let hidden_stems = sb
            .branch
            .hidden_stems()
            .iter()
            .map(|h| HiddenStem {
                stem: *h,
                element: h.element(),
                ten_god: ten_god(day_stem, (*h).into()),
            })
            .collect();

        Self {
            label,
            stem_branch: sb,
            stem: StemDetail {
                stem: sb.stem,
                element: sb.stem.element(),
                polarity: sb.stem.polarity(),
                ten_god: stem_ten_god,
            },
            branch: BranchDetail {
                branch: sb.branch,
                element: sb.branch.element(),
                polarity: sb.branch.polarity(),
                ten_god: ten_god(day_stem, sb.branch.into()),
                hidden_stems,
                twelve_stage: twelve_stage(day_stem, sb.branch),
            },
        }
    }

    /// Day pillar; its own stem is the reference.
    pub fn day(sb: StemBranch) -> Self {
        Self::resolve(PillarLabel::Day, sb, sb.stem)
    }

    pub fn cycle_index(&self) -> u8 {
        self.stem_branch.index()
    }

    /// Elements of the stem and the branch.
    pub fn elements(&self) -> [Element; 2] {
        [self.stem.element, self.branch.element]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sb(s: &str) -> StemBranch {
        s.parse().unwrap()
    }

    #[test]
    fn day_pillar_stem_is_day_master() {
        let p = Pillar::day(sb("戊午"));
        assert!(p.stem.is_day_master());
        assert_eq!(p.stem.ten_god, None);
        // 午 (yin fire) to 戊 (yang earth) is Direct Resource.
        assert_eq!(p.branch.ten_god, TenGod::DirectResource);
        assert_eq!(p.branch.twelve_stage, TwelveStage::Peak);
    }

    #[test]
    fn same_stem_elsewhere_is_friend() {
        let p = Pillar::resolve(PillarLabel::Hour, sb("戊午"), Stem::Mu);
        assert_eq!(p.stem.ten_god, Some(TenGod::Friend));
        assert!(!p.stem.is_day_master());
    }

    #[test]
    fn hidden_stems_resolved() {
        let p = Pillar::resolve(PillarLabel::Year, sb("庚辰"), Stem::Gap);
        let hidden: Vec<Stem> = p.branch.hidden_stems.iter().map(|h| h.stem).collect();
        assert_eq!(hidden, vec![Stem::Eul, Stem::Gye, Stem::Mu]);
        assert_eq!(p.branch.hidden_stems[0].ten_god, TenGod::RobWealth);
        assert_eq!(p.branch.hidden_stems[2].ten_god, TenGod::IndirectWealth);
        assert_eq!(p.stem.ten_god, Some(TenGod::SevenKillings));
    }

    #[test]
    fn cycle_index_and_elements() {
        let p = Pillar::day(sb("甲子"));
        assert_eq!(p.cycle_index(), 0);
        assert_eq!(p.elements(), [Element::Wood, Element::Water]);
    }
}
