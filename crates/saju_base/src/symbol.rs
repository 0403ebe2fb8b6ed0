//! A single stem-or-branch symbol, as written in a chart.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::branch::Branch;
use crate::element::{Element, Polarity};
use crate::error::BaseError;
use crate::stem::Stem;

/// One of the 22 stem/branch characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Symbol {
    Stem(Stem),
    Branch(Branch),
}

impl Symbol {
    pub const fn element(self) -> Element {
        match self {
            Self::Stem(s) => s.element(),
            Self::Branch(b) => b.element(),
        }
    }

    pub const fn polarity(self) -> Polarity {
        match self {
            Self::Stem(s) => s.polarity(),
            Self::Branch(b) => b.polarity(),
        }
    }

    pub const fn hanja(self) -> char {
        match self {
            Self::Stem(s) => s.hanja(),
            Self::Branch(b) => b.hanja(),
        }
    }
}

impl From<Stem> for Symbol {
    fn from(s: Stem) -> Self {
        Self::Stem(s)
    }
}

impl From<Branch> for Symbol {
    fn from(b: Branch) -> Self {
        Self::Branch(b)
    }
}

impl TryFrom<char> for Symbol {
    type Error = BaseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if let Some(s) = Stem::from_char(c) {
            return Ok(Self::Stem(s));
        }
        Branch::from_char(c)
            .map(Self::Branch)
            .ok_or(BaseError::UnknownSymbol(c))
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hanja())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stems_and_branches_are_disjoint() {
        for s in crate::stem::ALL_STEMS {
            assert!(Branch::from_char(s.hanja()).is_none());
        }
    }

    #[test]
    fn resolves_both_kinds() {
        assert_eq!(Symbol::try_from('丙').unwrap(), Symbol::Stem(Stem::Byeong));
        assert_eq!(Symbol::try_from('午').unwrap(), Symbol::Branch(Branch::O));
        assert_eq!(Symbol::try_from('X'), Err(BaseError::UnknownSymbol('X')));
    }

    #[test]
    fn attributes_delegate() {
        let s = Symbol::from(Branch::Hae);
        assert_eq!(s.element(), Element::Water);
        assert_eq!(s.polarity(), Polarity::Yang);
    }
}
