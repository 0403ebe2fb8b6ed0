//! The five elements, yin/yang polarity and per-element counts.

use serde::Serialize;

/// The five elements in generating order (wood feeds fire, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All 5 elements in generating order (index 0 = Wood).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// 0-based index in generating order.
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "wood",
            Self::Fire => "fire",
            Self::Earth => "earth",
            Self::Metal => "metal",
            Self::Water => "water",
        }
    }

    pub const fn hanja(self) -> char {
        match self {
            Self::Wood => '木',
            Self::Fire => '火',
            Self::Earth => '土',
            Self::Metal => '金',
            Self::Water => '水',
        }
    }

    /// The element this one generates.
    pub const fn generates(self) -> Self {
        ALL_ELEMENTS[(self.index() as usize + 1) % 5]
    }

    /// The element this one controls.
    pub const fn controls(self) -> Self {
        ALL_ELEMENTS[(self.index() as usize + 2) % 5]
    }

    /// Steps from `self` to `other` along the generating cycle (0..5).
    pub const fn steps_to(self, other: Self) -> u8 {
        (other.index() + 5 - self.index()) % 5
    }
}

/// Yin/yang polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "yang",
            Self::Yin => "yin",
        }
    }

    pub const fn hanja(self) -> char {
        match self {
            Self::Yang => '陽',
            Self::Yin => '陰',
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Self::Yang => Self::Yin,
            Self::Yin => Self::Yang,
        }
    }

    pub const fn is_yang(self) -> bool {
        matches!(self, Self::Yang)
    }
}

/// Occurrence count of each element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ElementTally {
    pub wood: u8,
    pub fire: u8,
    pub earth: u8,
    pub metal: u8,
    pub water: u8,
}

impl ElementTally {
    /// Count one more occurrence of `element`.
    pub fn add(&mut self, element: Element) {
        *self.slot(element) += 1;
    }

    pub fn get(&self, element: Element) -> u8 {
        match element {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    pub fn total(&self) -> u8 {
        ALL_ELEMENTS.iter().map(|e| self.get(*e)).sum()
    }

    /// Elements that never occurred.
    pub fn missing(&self) -> Vec<Element> {
        ALL_ELEMENTS
            .iter()
            .copied()
            .filter(|e| self.get(*e) == 0)
            .collect()
    }

    fn slot(&mut self, element: Element) -> &mut u8 {
        match element {
            Element::Wood => &mut self.wood,
            Element::Fire => &mut self.fire,
            Element::Earth => &mut self.earth,
            Element::Metal => &mut self.metal,
            Element::Water => &mut self.water,
        }
    }
}

impl FromIterator<Element> for ElementTally {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        let mut tally = Self::default();
        for e in iter {
            tally.add(e);
        }
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, e) in ALL_ELEMENTS.iter().enumerate() {
            assert_eq!(e.index() as usize, i);
        }
    }

    #[test]
    fn generating_cycle_closes() {
        assert_eq!(Element::Wood.generates(), Element::Fire);
        assert_eq!(Element::Water.generates(), Element::Wood);
        let mut e = Element::Earth;
        for _ in 0..5 {
            e = e.generates();
        }
        assert_eq!(e, Element::Earth);
    }

    #[test]
    fn controlling_cycle() {
        assert_eq!(Element::Wood.controls(), Element::Earth);
        assert_eq!(Element::Metal.controls(), Element::Wood);
        assert_eq!(Element::Water.controls(), Element::Fire);
    }

    #[test]
    fn steps_wrap_forward() {
        assert_eq!(Element::Fire.steps_to(Element::Wood), 4);
        assert_eq!(Element::Wood.steps_to(Element::Fire), 1);
        assert_eq!(Element::Metal.steps_to(Element::Metal), 0);
    }

    #[test]
    fn polarity_opposite() {
        assert_eq!(Polarity::Yang.opposite(), Polarity::Yin);
        assert!(!Polarity::Yin.is_yang());
    }

    #[test]
    fn tally_counts_and_missing() {
        let tally: ElementTally = [Element::Wood, Element::Wood, Element::Water]
            .into_iter()
            .collect();
        assert_eq!(tally.wood, 2);
        assert_eq!(tally.water, 1);
        assert_eq!(tally.total(), 3);
        assert_eq!(
            tally.missing(),
            vec![Element::Fire, Element::Earth, Element::Metal]
        );
    }
}
