//! Ten-gods relation of a stem or branch to a reference (day) stem.
//!
//! The element distance along the generating cycle picks a category pair
//! (peer, output, wealth, authority, resource); matching polarity picks the
//! first of the pair, differing polarity the second.

use serde::Serialize;

use crate::element::{Element, Polarity};
use crate::error::BaseError;
use crate::stem::Stem;
use crate::symbol::Symbol;

/// The 10 relation categories in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TenGod {
    Friend,
    RobWealth,
    EatingGod,
    HurtingOfficer,
    IndirectWealth,
    DirectWealth,
    SevenKillings,
    DirectOfficer,
    IndirectResource,
    DirectResource,
}

/// All 10 categories in table order.
pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::Friend,
    TenGod::RobWealth,
    TenGod::EatingGod,
    TenGod::HurtingOfficer,
    TenGod::IndirectWealth,
    TenGod::DirectWealth,
    TenGod::SevenKillings,
    TenGod::DirectOfficer,
    TenGod::IndirectResource,
    TenGod::DirectResource,
];

impl TenGod {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Friend => "Friend",
            Self::RobWealth => "Rob Wealth",
            Self::EatingGod => "Eating God",
            Self::HurtingOfficer => "Hurting Officer",
            Self::IndirectWealth => "Indirect Wealth",
            Self::DirectWealth => "Direct Wealth",
            Self::SevenKillings => "Seven Killings",
            Self::DirectOfficer => "Direct Officer",
            Self::IndirectResource => "Indirect Resource",
            Self::DirectResource => "Direct Resource",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Friend => "比肩",
            Self::RobWealth => "劫財",
            Self::EatingGod => "食神",
            Self::HurtingOfficer => "傷官",
            Self::IndirectWealth => "偏財",
            Self::DirectWealth => "正財",
            Self::SevenKillings => "偏官",
            Self::DirectOfficer => "正官",
            Self::IndirectResource => "偏印",
            Self::DirectResource => "正印",
        }
    }

    pub const fn korean(self) -> &'static str {
        match self {
            Self::Friend => "비견",
            Self::RobWealth => "겁재",
            Self::EatingGod => "식신",
            Self::HurtingOfficer => "상관",
            Self::IndirectWealth => "편재",
            Self::DirectWealth => "정재",
            Self::SevenKillings => "편관",
            Self::DirectOfficer => "정관",
            Self::IndirectResource => "편인",
            Self::DirectResource => "정인",
        }
    }
}

/// Relation of an element/polarity to a reference stem.
pub const fn ten_god_of(reference: Stem, element: Element, polarity: Polarity) -> TenGod {
    let pair = reference.element().steps_to(element) * 2;
    let same = matches!(
        (reference.polarity(), polarity),
        (Polarity::Yang, Polarity::Yang) | (Polarity::Yin, Polarity::Yin)
    );
    ALL_TEN_GODS[(pair + if same { 0 } else { 1 }) as usize]
}

/// Relation of a stem or branch to a reference stem.
pub const fn ten_god(reference: Stem, target: Symbol) -> TenGod {
    ten_god_of(reference, target.element(), target.polarity())
}

/// Relation by hanja characters, e.g. `('甲', '庚')`.
pub fn ten_god_for_chars(reference: char, target: char) -> Result<TenGod, BaseError> {
    let reference = Stem::try_from(reference)?;
    let target = Symbol::try_from(target)?;
    Ok(ten_god(reference, target))
}
