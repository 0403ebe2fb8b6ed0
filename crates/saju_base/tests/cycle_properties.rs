//! Property sweeps over the full symbol tables.

use saju_base::{
    ALL_BRANCHES, ALL_STEM_BRANCHES, ALL_STEMS, Direction, Gender, Pillar, PillarLabel,
    StemBranch, Symbol, TenGod, annual_pillars, day_stem_branch, decade_pillars, monthly_pillars,
    ten_god, ten_god_of, twelve_stage, year_stem_branch,
};

#[test]
fn day_index_has_period_60() {
    for d in -400..400 {
        assert_eq!(day_stem_branch(d), day_stem_branch(d + 60));
        assert_ne!(day_stem_branch(d), day_stem_branch(d + 1));
    }
}

#[test]
fn every_cycle_entry_parses_back() {
    for sb in ALL_STEM_BRANCHES {
        let parsed: StemBranch = sb.to_string().parse().unwrap();
        assert_eq!(parsed, sb);
    }
}

#[test]
fn ten_gods_peer_categories() {
    for r in ALL_STEMS {
        for t in ALL_STEMS {
            let god = ten_god(r, Symbol::Stem(t));
            if r.element() == t.element() {
                let expected = if r.polarity() == t.polarity() {
                    TenGod::Friend
                } else {
                    TenGod::RobWealth
                };
                assert_eq!(god, expected, "{r} -> {t}");
            } else {
                assert_ne!(god, TenGod::Friend);
                assert_ne!(god, TenGod::RobWealth);
            }
        }
    }
}

#[test]
fn ten_god_depends_only_on_element_and_polarity() {
    for r in ALL_STEMS {
        for b in ALL_BRANCHES {
            assert_eq!(
                ten_god(r, Symbol::Branch(b)),
                ten_god_of(r, b.element(), b.polarity())
            );
        }
    }
}

#[test]
fn twelve_stage_permutation_for_every_stem() {
    for s in ALL_STEMS {
        let mut seen = [false; 12];
        for b in ALL_BRANCHES {
            let i = twelve_stage(s, b).index() as usize;
            assert!(!seen[i], "{s} repeats stage {i}");
            seen[i] = true;
        }
    }
}

#[test]
fn decade_runs_in_both_directions() {
    for month in ALL_STEM_BRANCHES {
        for dir in [Direction::Forward, Direction::Backward] {
            let pillars = decade_pillars(month, dir, 5, ALL_STEMS[0]);
            assert_eq!(pillars.len(), 10);
            for (k, p) in pillars.iter().enumerate() {
                let expected = month.offset(dir.sign() * (k as i64 + 1));
                assert_eq!(p.pillar.stem_branch, expected);
                assert_eq!(p.pillar.label, PillarLabel::Decade);
            }
        }
    }
}

#[test]
fn direction_matches_year_polarity_and_gender() {
    for year in 1940..=2050 {
        let stem = year_stem_branch(year).stem;
        let male = Direction::for_birth(stem, Gender::Male);
        let female = Direction::for_birth(stem, Gender::Female);
        assert_ne!(male, female);
        assert_eq!(male == Direction::Forward, stem.polarity().is_yang());
    }
}

#[test]
fn monthly_pillars_start_with_five_tiger_stem() {
    for year in 2000..2012 {
        let months = monthly_pillars(year, ALL_STEMS[0]);
        let year_stem = year_stem_branch(year).stem;
        assert_eq!(
            months[0].pillar.stem_branch.stem,
            saju_base::tiger_month_stem(year_stem)
        );
        for w in months.windows(2) {
            assert_eq!(
                (w[0].pillar.cycle_index() + 1) % 60,
                w[1].pillar.cycle_index()
            );
        }
    }
}

#[test]
fn annual_and_year_rule_agree() {
    let pillars = annual_pillars(1990, 30, ALL_STEMS[3]);
    for p in &pillars {
        assert_eq!(p.pillar.stem_branch, year_stem_branch(p.year));
    }
}

#[test]
fn only_day_label_marks_day_master() {
    let sb = ALL_STEM_BRANCHES[17];
    for label in [
        PillarLabel::Year,
        PillarLabel::Month,
        PillarLabel::Hour,
        PillarLabel::Decade,
    ] {
        assert!(!Pillar::resolve(label, sb, sb.stem).stem.is_day_master());
    }
    assert!(Pillar::day(sb).stem.is_day_master());
}
