//! Symbolic stars (神殺) derived from the day pillar and the chart's branches.
//!
//! Most stars are closed lookup tables keyed by the day stem. Peach blossom
//! and traveling horse are keyed by a reference branch's trine group, and a
//! few stars test the pillar itself.

use serde::Serialize;

use crate::branch::Branch;
use crate::sexagenary::StemBranch;
use crate::stem::Stem;

/// A named symbolic star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Star {
    HeavenlyNobleman,
    ScholarNobleman,
    LiteraryNobleman,
    SupremeNobleman,
    AcademicStar,
    HiddenWealth,
    GoldenCarriage,
    Prosperity,
    FlankedProsperity,
    PeachBlossom,
    RedGlow,
    CommandingPower,
    SwordEdge,
    Needle,
    TravelingHorse,
    Void,
}

/// Every star in report order.
pub const ALL_STARS: [Star; 16] = [
    Star::HeavenlyNobleman,
    Star::ScholarNobleman,
    Star::LiteraryNobleman,
    Star::SupremeNobleman,
    Star::AcademicStar,
    Star::HiddenWealth,
    Star::GoldenCarriage,
    Star::Prosperity,
    Star::FlankedProsperity,
    Star::PeachBlossom,
    Star::RedGlow,
    Star::CommandingPower,
    Star::SwordEdge,
    Star::Needle,
    Star::TravelingHorse,
    Star::Void,
];

const STAR_HANJA: [&str; 16] = [
    "天乙貴人", "學堂貴人", "文曲貴人", "太極貴人", "文昌貴人", "暗祿", "金輿祿", "建祿", "夾祿",
    "桃花殺", "紅艶殺", "魁罡殺", "羊刃殺", "懸針殺", "驛馬殺", "空亡",
];

const STAR_KOREAN: [&str; 16] = [
    "천을귀인", "학당귀인", "문곡귀인", "태극귀인", "문창귀인", "암록", "금여록", "건록", "협록",
    "도화살", "홍염살", "괴강살", "양인살", "현침살", "역마살", "공망",
];

impl Star {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::HeavenlyNobleman => "Heavenly Nobleman",
            Self::ScholarNobleman => "Scholar Nobleman",
            Self::LiteraryNobleman => "Literary Nobleman",
            Self::SupremeNobleman => "Supreme Ultimate Nobleman",
            Self::AcademicStar => "Academic Star",
            Self::HiddenWealth => "Hidden Wealth",
            Self::GoldenCarriage => "Golden Carriage",
            Self::Prosperity => "Prosperity",
            Self::FlankedProsperity => "Flanked Prosperity",
            Self::PeachBlossom => "Peach Blossom",
            Self::RedGlow => "Red Glow",
            Self::CommandingPower => "Commanding Power",
            Self::SwordEdge => "Sword Edge",
            Self::Needle => "Needle",
            Self::TravelingHorse => "Traveling Horse",
            Self::Void => "Void",
        }
    }

    pub const fn hanja(self) -> &'static str {
        STAR_HANJA[self.index() as usize]
    }

    pub const fn korean(self) -> &'static str {
        STAR_KOREAN[self.index() as usize]
    }
}

/// The two heavenly-nobleman (天乙貴人) branches for a day stem.
pub const fn nobleman_branches(day_stem: Stem) -> [Branch; 2] {
    match day_stem {
        Stem::Gap | Stem::Mu | Stem::Gyeong => [Branch::Chuk, Branch::Mi],
        Stem::Eul | Stem::Gi => [Branch::Ja, Branch::Sin],
        Stem::Byeong | Stem::Jeong => [Branch::Hae, Branch::Yu],
        Stem::Im | Stem::Gye => [Branch::Myo, Branch::Sa],
        Stem::Sin => [Branch::In, Branch::O],
    }
}

/// Scholar nobleman (學堂貴人) branch for a day stem.
pub const fn scholar_branch(day_stem: Stem) -> Branch {
    match day_stem {
        Stem::Gap => Branch::Hae,
        Stem::Eul => Branch::O,
        Stem::Byeong | Stem::Mu => Branch::In,
        Stem::Jeong | Stem::Gi => Branch::Yu,
        Stem::Gyeong => Branch::Sa,
        Stem::Sin => Branch::Ja,
        Stem::Im => Branch::Sin,
        Stem::Gye => Branch::Myo,
    }
}

/// Literary nobleman (文曲貴人) branch for a day stem.
pub const fn literary_branch(day_stem: Stem) -> Branch {
    match day_stem {
        Stem::Gap | Stem::Im => Branch::Hae,
        Stem::Eul | Stem::Gye => Branch::Ja,
        Stem::Byeong => Branch::In,
        Stem::Jeong => Branch::Myo,
        Stem::Mu => Branch::Sa,
        Stem::Gi => Branch::O,
        Stem::Gyeong => Branch::Sin,
        Stem::Sin => Branch::Yu,
    }
}

/// Supreme-ultimate nobleman (太極貴人) branches for a day stem.
///
/// Earth stems take all four storage branches; every other stem has one.
pub const fn supreme_branches(day_stem: Stem) -> &'static [Branch] {
    match day_stem {
        Stem::Gap => &[Branch::Ja],
        Stem::Eul => &[Branch::O],
        Stem::Byeong => &[Branch::Myo],
        Stem::Jeong => &[Branch::Yu],
        Stem::Mu | Stem::Gi => &[Branch::Jin, Branch::Sul, Branch::Chuk, Branch::Mi],
        Stem::Gyeong => &[Branch::Hae],
        Stem::Sin => &[Branch::In],
        Stem::Im => &[Branch::Sin],
        Stem::Gye => &[Branch::Sa],
    }
}

/// Academic star (文昌貴人) branch for a day stem.
pub const fn academic_branch(day_stem: Stem) -> Branch {
    match day_stem {
        Stem::Gap => Branch::Sa,
        Stem::Eul => Branch::O,
        Stem::Byeong | Stem::Mu => Branch::Sin,
        Stem::Jeong | Stem::Gi => Branch::Yu,
        Stem::Gyeong => Branch::Hae,
        Stem::Sin => Branch::Ja,
        Stem::Im => Branch::In,
        Stem::Gye => Branch::Myo,
    }
}

/// Hidden wealth (暗祿) branch for a day stem.
pub const fn hidden_wealth_branch(day_stem: Stem) -> Branch {
    match day_stem {
        Stem::Gap => Branch::Hae,
        Stem::Eul => Branch::Sul,
        Stem::Byeong | Stem::Mu => Branch::Sin,
        Stem::Jeong | Stem::Gi => Branch::Mi,
        Stem::Gyeong => Branch::Sa,
        Stem::Sin => Branch::Jin,
        Stem::Im => Branch::In,
        Stem::Gye => Branch::Chuk,
    }
}

/// Golden carriage (金輿祿) branch for a day stem.
pub const fn golden_carriage_branch(day_stem: Stem) -> Branch {
    match day_stem {
        Stem::Gap | Stem::Im => Branch::Jin,
        Stem::Eul | Stem::Gye => Branch::Sa,
        Stem::Byeong => Branch::Sul,
        Stem::Jeong => Branch::Hae,
        Stem::Mu => Branch::Mi,
        Stem::Gi => Branch::Sin,
        Stem::Gyeong => Branch::Chuk,
        Stem::Sin => Branch::In,
    }
}

/// Prosperity (建祿) branch for a day stem.
pub const fn prosperity_branch(day_stem: Stem) -> Branch {
    match day_stem {
        Stem::Gap => Branch::In,
        Stem::Eul => Branch::Myo,
        Stem::Byeong | Stem::Mu => Branch::Sa,
        Stem::Jeong | Stem::Gi => Branch::O,
        Stem::Gyeong => Branch::Sin,
        Stem::Sin => Branch::Yu,
        Stem::Im => Branch::Hae,
        Stem::Gye => Branch::Ja,
    }
}

/// The branches either side of the prosperity branch (夾祿).
pub const fn flanking_branches(day_stem: Stem) -> [Branch; 2] {
    let at = prosperity_branch(day_stem).index();
    [Branch::from_index(at + 11), Branch::from_index(at + 1)]
}

/// Red glow (紅艶殺) branch for a day stem.
pub const fn red_glow_branch(day_stem: Stem) -> Branch {
    match day_stem {
        Stem::Gap | Stem::Eul => Branch::O,
        Stem::Byeong => Branch::In,
        Stem::Jeong => Branch::Mi,
        Stem::Mu | Stem::Gi => Branch::Jin,
        Stem::Gyeong => Branch::Sul,
        Stem::Sin => Branch::Yu,
        Stem::Im => Branch::Ja,
        Stem::Gye => Branch::Sin,
    }
}

/// Sword edge (羊刃殺) branch; only yang day stems carry one.
pub const fn sword_edge_branch(day_stem: Stem) -> Option<Branch> {
    match day_stem {
        Stem::Gap => Some(Branch::Myo),
        Stem::Byeong | Stem::Mu => Some(Branch::O),
        Stem::Gyeong => Some(Branch::Yu),
        Stem::Im => Some(Branch::Ja),
        _ => None,
    }
}

/// Peach blossom (桃花殺) branch for the trine group of `reference`.
pub const fn peach_blossom_branch(reference: Branch) -> Branch {
    match reference {
        Branch::Hae | Branch::Myo | Branch::Mi => Branch::Ja,
        Branch::In | Branch::O | Branch::Sul => Branch::Myo,
        Branch::Sa | Branch::Yu | Branch::Chuk => Branch::O,
        Branch::Sin | Branch::Ja | Branch::Jin => Branch::Yu,
    }
}

/// Traveling horse (驛馬殺) branch for the trine group of `reference`.
pub const fn traveling_horse_branch(reference: Branch) -> Branch {
    match reference {
        Branch::In | Branch::O | Branch::Sul => Branch::Sin,
        Branch::Sa | Branch::Yu | Branch::Chuk => Branch::Hae,
        Branch::Sin | Branch::Ja | Branch::Jin => Branch::In,
        Branch::Hae | Branch::Myo | Branch::Mi => Branch::Sa,
    }
}

/// Commanding power (魁罡): 庚辰 庚戌 壬辰 壬戌 戊辰 戊戌.
pub const fn is_commanding_power(pillar: StemBranch) -> bool {
    matches!(pillar.stem, Stem::Gyeong | Stem::Im | Stem::Mu)
        && matches!(pillar.branch, Branch::Jin | Branch::Sul)
}

/// Needle (懸針): the pillar shows 甲 or 辛 as stem, or 申 卯 午 未 as branch.
pub const fn is_needle(pillar: StemBranch) -> bool {
    matches!(pillar.stem, Stem::Gap | Stem::Sin)
        || matches!(pillar.branch, Branch::Sin | Branch::Myo | Branch::O | Branch::Mi)
}

/// The two void (空亡) branches of the 甲-headed decade containing `pillar`.
///
/// A decade pairs 10 stems with 10 branches; the 2 branches left over are void.
pub const fn void_branches(pillar: StemBranch) -> [Branch; 2] {
    let first_branch = (pillar.decade() * 10) % 12;
    [
        Branch::from_index(first_branch + 10),
        Branch::from_index(first_branch + 11),
    ]
}

/// Chart-wide inputs the per-pillar stars are judged against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarContext {
    pub day: StemBranch,
    pub year_branch: Branch,
    /// Branches of every present pillar.
    pub branches: Vec<Branch>,
}

impl StarContext {
    pub fn new(day: StemBranch, year_branch: Branch, branches: Vec<Branch>) -> Self {
        Self {
            day,
            year_branch,
            branches,
        }
    }

    fn flanked(&self) -> Option<[Branch; 2]> {
        let pair = flanking_branches(self.day.stem);
        pair.iter()
            .all(|b| self.branches.contains(b))
            .then_some(pair)
    }
}

/// The stars one pillar carries, in [`ALL_STARS`] order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SymbolicStars {
    stars: Vec<Star>,
}

impl SymbolicStars {
    /// Stars of `pillar` within the chart described by `ctx`.
    pub fn for_pillar(ctx: &StarContext, pillar: StemBranch) -> Self {
        let stem = ctx.day.stem;
        let branch = pillar.branch;
        let horse = [
            traveling_horse_branch(ctx.year_branch),
            traveling_horse_branch(ctx.day.branch),
        ];
        let flanked = ctx.flanked().is_some_and(|pair| pair.contains(&branch));

        let stars = ALL_STARS
            .into_iter()
            .filter(|star| match star {
                Star::HeavenlyNobleman => nobleman_branches(stem).contains(&branch),
                Star::ScholarNobleman => scholar_branch(stem) == branch,
                Star::LiteraryNobleman => literary_branch(stem) == branch,
                Star::SupremeNobleman => supreme_branches(stem).contains(&branch),
                Star::AcademicStar => academic_branch(stem) == branch,
                Star::HiddenWealth => hidden_wealth_branch(stem) == branch,
                Star::GoldenCarriage => golden_carriage_branch(stem) == branch,
                Star::Prosperity => prosperity_branch(stem) == branch,
                Star::FlankedProsperity => flanked,
                Star::PeachBlossom => peach_blossom_branch(ctx.day.branch) == branch,
                Star::RedGlow => red_glow_branch(stem) == branch,
                Star::CommandingPower => is_commanding_power(pillar),
                Star::SwordEdge => sword_edge_branch(stem) == Some(branch),
                Star::Needle => is_needle(pillar),
                Star::TravelingHorse => horse.contains(&branch),
                Star::Void => void_branches(ctx.day).contains(&branch),
            })
            .collect();
        Self { stars }
    }

    pub fn contains(&self, star: Star) -> bool {
        self.stars.contains(&star)
    }

    pub fn iter(&self) -> impl Iterator<Item = Star> + '_ {
        self.stars.iter().copied()
    }

    pub fn any(&self) -> bool {
        !self.stars.is_empty()
    }

    pub fn nobleman(&self) -> bool {
        self.contains(Star::HeavenlyNobleman)
    }

    pub fn void(&self) -> bool {
        self.contains(Star::Void)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sexagenary::ALL_STEM_BRANCHES;
    use crate::stem::ALL_STEMS;
    use crate::twelve_stage::{TwelveStage, long_life_branch, twelve_stage};

    fn sb(s: char, b: char) -> StemBranch {
        StemBranch::new(Stem::from_char(s).unwrap(), Branch::from_char(b).unwrap()).unwrap()
    }

    fn br(c: char) -> Branch {
        Branch::from_char(c).unwrap()
    }

    fn per_stem(f: impl Fn(Stem) -> Branch) -> String {
        ALL_STEMS.iter().map(|&s| f(s).hanja()).collect()
    }

    #[test]
    fn star_names_line_up() {
        assert_eq!(Star::HeavenlyNobleman.hanja(), "天乙貴人");
        assert_eq!(Star::FlankedProsperity.korean(), "협록");
        assert_eq!(Star::Void.korean(), "공망");
        for (i, star) in ALL_STARS.iter().enumerate() {
            assert_eq!(star.index() as usize, i);
        }
    }

    #[test]
    fn void_per_decade() {
        let expected = [
            [Branch::Sul, Branch::Hae],
            [Branch::Sin, Branch::Yu],
            [Branch::O, Branch::Mi],
            [Branch::Jin, Branch::Sa],
            [Branch::In, Branch::Myo],
            [Branch::Ja, Branch::Chuk],
        ];
        for (d, pair) in expected.iter().enumerate() {
            assert_eq!(void_branches(ALL_STEM_BRANCHES[d * 10]), *pair);
            assert_eq!(void_branches(ALL_STEM_BRANCHES[d * 10 + 9]), *pair);
        }
    }

    #[test]
    fn void_branches_never_in_own_decade() {
        for sb in ALL_STEM_BRANCHES {
            let void = void_branches(sb);
            for k in 0..10 {
                let member = ALL_STEM_BRANCHES[(sb.decade() * 10 + k) as usize];
                assert!(!void.contains(&member.branch));
            }
        }
    }

    #[test]
    fn nobleman_table() {
        assert_eq!(nobleman_branches(Stem::Gyeong), [Branch::Chuk, Branch::Mi]);
        assert_eq!(nobleman_branches(Stem::Sin), [Branch::In, Branch::O]);
        assert_eq!(nobleman_branches(Stem::Gye), [Branch::Myo, Branch::Sa]);
    }

    #[test]
    fn scholar_table_is_long_life_branch() {
        // 甲..癸 read in stem order.
        assert_eq!(per_stem(scholar_branch), "亥午寅酉寅酉巳子申卯");
        for s in ALL_STEMS {
            assert_eq!(scholar_branch(s), long_life_branch(s));
        }
    }

    #[test]
    fn literary_table() {
        assert_eq!(per_stem(literary_branch), "亥子寅卯巳午申酉亥子");
    }

    #[test]
    fn supreme_table() {
        assert_eq!(supreme_branches(Stem::Gap), &[Branch::Ja]);
        assert_eq!(supreme_branches(Stem::Gye), &[Branch::Sa]);
        assert_eq!(supreme_branches(Stem::Mu), supreme_branches(Stem::Gi));
        assert_eq!(supreme_branches(Stem::Gi).len(), 4);
        let singles: String = ALL_STEMS
            .iter()
            .filter(|s| !matches!(s, Stem::Mu | Stem::Gi))
            .map(|&s| supreme_branches(s)[0].hanja())
            .collect();
        assert_eq!(singles, "子午卯酉亥寅申巳");
    }

    #[test]
    fn academic_table() {
        assert_eq!(per_stem(academic_branch), "巳午申酉申酉亥子寅卯");
    }

    #[test]
    fn hidden_wealth_table() {
        assert_eq!(per_stem(hidden_wealth_branch), "亥戌申未申未巳辰寅丑");
    }

    #[test]
    fn golden_carriage_table() {
        assert_eq!(per_stem(golden_carriage_branch), "辰巳戌亥未申丑寅辰巳");
    }

    #[test]
    fn prosperity_table_matches_twelve_stage() {
        assert_eq!(per_stem(prosperity_branch), "寅卯巳午巳午申酉亥子");
        for s in ALL_STEMS {
            assert_eq!(twelve_stage(s, prosperity_branch(s)), TwelveStage::Prosperity);
        }
    }

    #[test]
    fn flanking_wraps_around_the_circle() {
        assert_eq!(flanking_branches(Stem::Gap), [br('丑'), br('卯')]);
        // 癸 prospers at 子, flanked by 亥 and 丑.
        assert_eq!(flanking_branches(Stem::Gye), [br('亥'), br('丑')]);
    }

    #[test]
    fn red_glow_table() {
        assert_eq!(per_stem(red_glow_branch), "午午寅未辰辰戌酉子申");
    }

    #[test]
    fn sword_edge_only_for_yang_stems() {
        for s in ALL_STEMS {
            match sword_edge_branch(s) {
                Some(b) => {
                    assert!(s.polarity().is_yang(), "{s:?}");
                    assert_eq!(twelve_stage(s, b), TwelveStage::Peak);
                }
                None => assert!(!s.polarity().is_yang(), "{s:?}"),
            }
        }
        assert_eq!(sword_edge_branch(Stem::Mu), Some(br('午')));
    }

    #[test]
    fn peach_blossom_by_trine() {
        let by_branch: String = crate::branch::ALL_BRANCHES
            .iter()
            .map(|&b| peach_blossom_branch(b).hanja())
            .collect();
        // 子..亥 read in branch order.
        assert_eq!(by_branch, "酉午卯子酉午卯子酉午卯子");
    }

    #[test]
    fn traveling_horse_by_trine() {
        let by_branch: String = crate::branch::ALL_BRANCHES
            .iter()
            .map(|&b| traveling_horse_branch(b).hanja())
            .collect();
        assert_eq!(by_branch, "寅亥申巳寅亥申巳寅亥申巳");
    }

    #[test]
    fn commanding_power_set() {
        let hits: Vec<_> = ALL_STEM_BRANCHES
            .into_iter()
            .filter(|&p| is_commanding_power(p))
            .collect();
        assert_eq!(hits.len(), 6);
        assert!(hits.contains(&sb('庚', '辰')));
        assert!(hits.contains(&sb('戊', '戌')));
        assert!(!is_commanding_power(sb('甲', '辰')));
    }

    #[test]
    fn needle_checks_stem_and_branch() {
        assert!(is_needle(sb('甲', '子')));
        assert!(is_needle(sb('辛', '亥')));
        assert!(is_needle(sb('丙', '午')));
        assert!(is_needle(sb('癸', '未')));
        assert!(!is_needle(sb('丙', '子')));
        assert!(!is_needle(sb('壬', '辰')));
    }

    #[test]
    fn stars_for_pillar() {
        // 甲子 day: nobleman 丑/未, void 戌/亥.
        let day = ALL_STEM_BRANCHES[0];
        let ctx = StarContext::new(day, Branch::Ja, vec![Branch::Ja, Branch::Mi, Branch::Ja]);
        assert!(SymbolicStars::for_pillar(&ctx, sb('乙', '未')).nobleman());
        let hae = SymbolicStars::for_pillar(&ctx, sb('丁', '亥'));
        assert!(hae.void());
        // 亥 is also 甲's scholar, literary and hidden wealth branch.
        assert!(hae.contains(Star::ScholarNobleman));
        assert!(hae.contains(Star::LiteraryNobleman));
        assert!(hae.contains(Star::HiddenWealth));
        assert!(!SymbolicStars::for_pillar(&ctx, sb('丙', '戌')).contains(Star::Needle));
        assert!(!SymbolicStars::for_pillar(&ctx, sb('壬', '子')).nobleman());
    }

    #[test]
    fn stars_come_out_in_report_order() {
        let day = sb('甲', '子');
        let ctx = StarContext::new(day, Branch::Ja, vec![Branch::Ja, Branch::Hae]);
        let stars: Vec<_> = SymbolicStars::for_pillar(&ctx, sb('丁', '亥')).iter().collect();
        let mut sorted = stars.clone();
        sorted.sort();
        assert_eq!(stars, sorted);
    }

    #[test]
    fn flanked_prosperity_needs_both_neighbours() {
        // 甲 prospers at 寅; flanked when 丑 and 卯 both appear.
        let day = sb('甲', '子');
        let both = StarContext::new(day, Branch::Chuk, vec![Branch::Chuk, Branch::Myo, Branch::Ja]);
        assert!(SymbolicStars::for_pillar(&both, sb('丁', '卯')).contains(Star::FlankedProsperity));
        assert!(SymbolicStars::for_pillar(&both, sb('乙', '丑')).contains(Star::FlankedProsperity));
        assert!(!SymbolicStars::for_pillar(&both, day).contains(Star::FlankedProsperity));

        let one = StarContext::new(day, Branch::Chuk, vec![Branch::Chuk, Branch::Ja]);
        assert!(!SymbolicStars::for_pillar(&one, sb('乙', '丑')).contains(Star::FlankedProsperity));
    }

    #[test]
    fn traveling_horse_uses_year_and_day_branch() {
        // Year 午 points at 申, day 子 points at 寅.
        let ctx = StarContext::new(sb('丙', '子'), Branch::O, vec![Branch::O, Branch::Ja]);
        assert!(SymbolicStars::for_pillar(&ctx, sb('壬', '申')).contains(Star::TravelingHorse));
        assert!(SymbolicStars::for_pillar(&ctx, sb('戊', '寅')).contains(Star::TravelingHorse));
        assert!(!SymbolicStars::for_pillar(&ctx, sb('癸', '巳')).contains(Star::TravelingHorse));
    }

    #[test]
    fn peach_blossom_uses_day_branch() {
        // Day 子 sits in 申子辰, whose peach blossom is 酉.
        let ctx = StarContext::new(sb('丙', '子'), Branch::O, vec![Branch::O, Branch::Ja]);
        assert!(SymbolicStars::for_pillar(&ctx, sb('丁', '酉')).contains(Star::PeachBlossom));
        assert!(!SymbolicStars::for_pillar(&ctx, sb('乙', '卯')).contains(Star::PeachBlossom));
    }
}
