//! The ten heavenly stems.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::element::{Element, Polarity};
use crate::error::BaseError;

/// The 10 heavenly stems in cycle order, by Korean reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Stem {
    Gap,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

/// All 10 stems in order (index 0 = Gap 甲).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Gap,
    Stem::Eul,
    Stem::Byeong,
    Stem::Jeong,
    Stem::Mu,
    Stem::Gi,
    Stem::Gyeong,
    Stem::Sin,
    Stem::Im,
    Stem::Gye,
];

const STEM_HANJA: [char; 10] = ['甲', '乙', '丙', '丁', '戊', '己', '庚', '辛', '壬', '癸'];

const STEM_NAMES: [&str; 10] = [
    "Gap", "Eul", "Byeong", "Jeong", "Mu", "Gi", "Gyeong", "Sin", "Im", "Gye",
];

const STEM_KOREAN: [&str; 10] = ["갑", "을", "병", "정", "무", "기", "경", "신", "임", "계"];

impl Stem {
    /// 0-based index (Gap=0 .. Gye=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Stem at `i mod 10`.
    pub const fn from_index(i: u8) -> Self {
        ALL_STEMS[(i % 10) as usize]
    }

    pub const fn hanja(self) -> char {
        STEM_HANJA[self.index() as usize]
    }

    /// Romanized Korean reading.
    pub const fn name(self) -> &'static str {
        STEM_NAMES[self.index() as usize]
    }

    pub const fn korean(self) -> &'static str {
        STEM_KOREAN[self.index() as usize]
    }

    /// Stems come in element pairs: Gap/Eul wood, Byeong/Jeong fire, ...
    pub const fn element(self) -> Element {
        match self.index() / 2 {
            0 => Element::Wood,
            1 => Element::Fire,
            2 => Element::Earth,
            3 => Element::Metal,
            _ => Element::Water,
        }
    }

    /// Even-indexed stems are yang.
    pub const fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    /// Look up a stem by its hanja character.
    pub fn from_char(c: char) -> Option<Self> {
        STEM_HANJA
            .iter()
            .position(|h| *h == c)
            .map(|i| ALL_STEMS[i])
    }
}

impl TryFrom<char> for Stem {
    type Error = BaseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c).ok_or(BaseError::NotAStem(c))
    }
}

impl FromStr for Stem {
    type Err = BaseError;

    /// Accepts the hanja character or the romanized name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(stem) = Self::from_char(c) {
                return Ok(stem);
            }
        }
        ALL_STEMS
            .iter()
            .copied()
            .find(|st| st.name().eq_ignore_ascii_case(s) || st.korean() == s)
            .ok_or_else(|| BaseError::NotAStem(s.chars().next().unwrap_or(' ')))
    }
}

impl Display for Stem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hanja())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
            assert_eq!(Stem::from_index(i as u8), *s);
        }
    }

    #[test]
    fn from_index_wraps() {
        assert_eq!(Stem::from_index(13), Stem::Jeong);
    }

    #[test]
    fn elements_pair_up() {
        assert_eq!(Stem::Gap.element(), Element::Wood);
        assert_eq!(Stem::Eul.element(), Element::Wood);
        assert_eq!(Stem::Mu.element(), Element::Earth);
        assert_eq!(Stem::Sin.element(), Element::Metal);
        assert_eq!(Stem::Gye.element(), Element::Water);
    }

    #[test]
    fn polarity_alternates() {
        assert_eq!(Stem::Gap.polarity(), Polarity::Yang);
        assert_eq!(Stem::Eul.polarity(), Polarity::Yin);
        assert_eq!(Stem::Im.polarity(), Polarity::Yang);
        assert_eq!(Stem::Gye.polarity(), Polarity::Yin);
    }

    #[test]
    fn char_roundtrip() {
        for s in ALL_STEMS {
            assert_eq!(Stem::try_from(s.hanja()).unwrap(), s);
        }
    }

    #[test]
    fn branch_char_is_not_a_stem() {
        assert_eq!(Stem::try_from('子'), Err(BaseError::NotAStem('子')));
    }

    #[test]
    fn parse_by_name_or_korean() {
        assert_eq!("gyeong".parse::<Stem>().unwrap(), Stem::Gyeong);
        assert_eq!("계".parse::<Stem>().unwrap(), Stem::Gye);
        assert_eq!("壬".parse::<Stem>().unwrap(), Stem::Im);
        assert!("xyz".parse::<Stem>().is_err());
    }
}
