//! Twelve-stage life cycle of a branch relative to a reference stem.
//!
//! Each stem is "born" (長生) at a fixed branch. Yang stems walk the branch
//! circle forward from there, yin stems walk it backward.

use serde::Serialize;

use crate::branch::Branch;
use crate::error::BaseError;
use crate::stem::Stem;

/// The 12 stages in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TwelveStage {
    LongLife,
    Bath,
    Crowning,
    Prosperity,
    Peak,
    Decline,
    Sickness,
    Death,
    Tomb,
    Extinction,
    Conception,
    Nurture,
}

/// All 12 stages in order (index 0 = 長生).
pub const ALL_TWELVE_STAGES: [TwelveStage; 12] = [
    TwelveStage::LongLife,
    TwelveStage::Bath,
    TwelveStage::Crowning,
    TwelveStage::Prosperity,
    TwelveStage::Peak,
    TwelveStage::Decline,
    TwelveStage::Sickness,
    TwelveStage::Death,
    TwelveStage::Tomb,
    TwelveStage::Extinction,
    TwelveStage::Conception,
    TwelveStage::Nurture,
];

const STAGE_HANJA: [&str; 12] = [
    "長生", "沐浴", "冠帶", "建祿", "帝旺", "衰", "病", "死", "墓", "絶", "胎", "養",
];

const STAGE_KOREAN: [&str; 12] = [
    "장생", "목욕", "관대", "건록", "제왕", "쇠", "병", "사", "묘", "절", "태", "양",
];

impl TwelveStage {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::LongLife => "Long Life",
            Self::Bath => "Bath",
            Self::Crowning => "Crowning",
            Self::Prosperity => "Prosperity",
            Self::Peak => "Peak",
            Self::Decline => "Decline",
            Self::Sickness => "Sickness",
            Self::Death => "Death",
            Self::Tomb => "Tomb",
            Self::Extinction => "Extinction",
            Self::Conception => "Conception",
            Self::Nurture => "Nurture",
        }
    }

    pub const fn hanja(self) -> &'static str {
        STAGE_HANJA[self.index() as usize]
    }

    pub const fn korean(self) -> &'static str {
        STAGE_KOREAN[self.index() as usize]
    }
}

/// Branch where a stem's cycle begins (長生).
pub const fn long_life_branch(stem: Stem) -> Branch {
    match stem {
        Stem::Gap => Branch::Hae,
        Stem::Byeong | Stem::Mu => Branch::In,
        Stem::Gyeong => Branch::Sa,
        Stem::Im => Branch::Sin,
        Stem::Eul => Branch::O,
        Stem::Jeong | Stem::Gi => Branch::Yu,
        Stem::Sin => Branch::Ja,
        Stem::Gye => Branch::Myo,
    }
}

/// Stage of `target` for the reference stem.
pub const fn twelve_stage(reference: Stem, target: Branch) -> TwelveStage {
    let start = long_life_branch(reference).index() as i8;
    let mut diff = target.index() as i8 - start;
    if !reference.polarity().is_yang() {
        diff = -diff;
    }
    ALL_TWELVE_STAGES[diff.rem_euclid(12) as usize]
}

/// Stage by hanja characters, e.g. `('甲', '卯')`.
pub fn twelve_stage_for_chars(reference: char, target: char) -> Result<TwelveStage, BaseError> {
    Ok(twelve_stage(Stem::try_from(reference)?, Branch::try_from(target)?))
}
