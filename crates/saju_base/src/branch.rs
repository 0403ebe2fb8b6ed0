//! The twelve earthly branches and their hidden stems.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::element::{Element, Polarity};
use crate::error::BaseError;
use crate::stem::Stem;

/// The 12 earthly branches in cycle order, by Korean reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Branch {
    Ja,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Sin,
    Yu,
    Sul,
    Hae,
}

/// All 12 branches in order (index 0 = Ja 子).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Ja,
    Branch::Chuk,
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
];

const BRANCH_HANJA: [char; 12] = [
    '子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥',
];

const BRANCH_NAMES: [&str; 12] = [
    "Ja", "Chuk", "In", "Myo", "Jin", "Sa", "O", "Mi", "Sin", "Yu", "Sul", "Hae",
];

const BRANCH_KOREAN: [&str; 12] = [
    "자", "축", "인", "묘", "진", "사", "오", "미", "신", "유", "술", "해",
];

const BRANCH_ANIMALS: [&str; 12] = [
    "Rat", "Ox", "Tiger", "Rabbit", "Dragon", "Snake", "Horse", "Goat", "Monkey", "Rooster",
    "Dog", "Pig",
];

impl Branch {
    /// 0-based index (Ja=0 .. Hae=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Branch at `i mod 12`.
    pub const fn from_index(i: u8) -> Self {
        ALL_BRANCHES[(i % 12) as usize]
    }

    pub const fn hanja(self) -> char {
        BRANCH_HANJA[self.index() as usize]
    }

    /// Romanized Korean reading.
    pub const fn name(self) -> &'static str {
        BRANCH_NAMES[self.index() as usize]
    }

    pub const fn korean(self) -> &'static str {
        BRANCH_KOREAN[self.index() as usize]
    }

    pub const fn animal(self) -> &'static str {
        BRANCH_ANIMALS[self.index() as usize]
    }

    pub const fn element(self) -> Element {
        match self {
            Self::In | Self::Myo => Element::Wood,
            Self::Sa | Self::O => Element::Fire,
            Self::Chuk | Self::Jin | Self::Mi | Self::Sul => Element::Earth,
            Self::Sin | Self::Yu => Element::Metal,
            Self::Hae | Self::Ja => Element::Water,
        }
    }

    /// Polarity by substance, not by cycle position: 子 and 午 are yin,
    /// 巳 and 亥 are yang.
    pub const fn polarity(self) -> Polarity {
        match self {
            Self::In | Self::Jin | Self::Sa | Self::Sin | Self::Sul | Self::Hae => Polarity::Yang,
            Self::Ja | Self::Chuk | Self::Myo | Self::O | Self::Mi | Self::Yu => Polarity::Yin,
        }
    }

    /// Hidden stems, residual first and principal last.
    pub const fn hidden_stems(self) -> &'static [Stem] {
        use Stem::*;
        match self {
            Self::Ja => &[Im, Gye],
            Self::Chuk => &[Gye, Sin, Gi],
            Self::In => &[Mu, Byeong, Gap],
            Self::Myo => &[Gap, Eul],
            Self::Jin => &[Eul, Gye, Mu],
            Self::Sa => &[Mu, Gyeong, Byeong],
            Self::O => &[Byeong, Gi, Jeong],
            Self::Mi => &[Jeong, Eul, Gi],
            Self::Sin => &[Mu, Im, Gyeong],
            Self::Yu => &[Gyeong, Sin],
            Self::Sul => &[Sin, Jeong, Mu],
            Self::Hae => &[Mu, Gap, Im],
        }
    }

    /// Look up a branch by its hanja character.
    pub fn from_char(c: char) -> Option<Self> {
        BRANCH_HANJA
            .iter()
            .position(|h| *h == c)
            .map(|i| ALL_BRANCHES[i])
    }
}

impl TryFrom<char> for Branch {
    type Error = BaseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c).ok_or(BaseError::NotABranch(c))
    }
}

impl FromStr for Branch {
    type Err = BaseError;

    /// Accepts the hanja character, the romanized name or the animal name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(branch) = Self::from_char(c) {
                return Ok(branch);
            }
        }
        ALL_BRANCHES
            .iter()
            .copied()
            .find(|b| {
                b.name().eq_ignore_ascii_case(s)
                    || b.animal().eq_ignore_ascii_case(s)
                    || b.korean() == s
            })
            .ok_or_else(|| BaseError::NotABranch(s.chars().next().unwrap_or(' ')))
    }
}

impl Display for Branch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hanja())
    }
}
