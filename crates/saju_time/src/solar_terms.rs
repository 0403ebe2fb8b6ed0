//! Solar term table: the 24 yearly boundary instants of the solar year.
//!
//! The table is year-keyed; each year maps to exactly 24 civil timestamps
//! written as `"MM-DD HH:MM"` in the reference timezone. Entry `i` is the
//! instant the Sun's apparent longitude reaches `285° + 15°·i`, so index 0 is
//! Minor Cold (early January) and index 23 is the Winter Solstice.
//!
//! The table is loaded once, validated, and never mutated afterwards.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::error::TimeError;

/// Number of solar terms per year.
pub const TERMS_PER_YEAR: usize = 24;

/// Format of a table entry once prefixed with its `YYYY-` year.
const TERM_ENTRY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// The 24 solar terms in table order (index 0 = Minor Cold).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SolarTerm {
    MinorCold,
    MajorCold,
    StartOfSpring,
    RainWater,
    AwakeningOfInsects,
    SpringEquinox,
    PureBrightness,
    GrainRain,
    StartOfSummer,
    GrainBuds,
    GrainInEar,
    SummerSolstice,
    MinorHeat,
    MajorHeat,
    StartOfAutumn,
    EndOfHeat,
    WhiteDew,
    AutumnEquinox,
    ColdDew,
    FrostsDescent,
    StartOfWinter,
    MinorSnow,
    MajorSnow,
    WinterSolstice,
}

/// All 24 solar terms in table order.
pub const ALL_SOLAR_TERMS: [SolarTerm; TERMS_PER_YEAR] = [
    SolarTerm::MinorCold,
    SolarTerm::MajorCold,
    SolarTerm::StartOfSpring,
    SolarTerm::RainWater,
    SolarTerm::AwakeningOfInsects,
    SolarTerm::SpringEquinox,
    SolarTerm::PureBrightness,
    SolarTerm::GrainRain,
    SolarTerm::StartOfSummer,
    SolarTerm::GrainBuds,
    SolarTerm::GrainInEar,
    SolarTerm::SummerSolstice,
    SolarTerm::MinorHeat,
    SolarTerm::MajorHeat,
    SolarTerm::StartOfAutumn,
    SolarTerm::EndOfHeat,
    SolarTerm::WhiteDew,
    SolarTerm::AutumnEquinox,
    SolarTerm::ColdDew,
    SolarTerm::FrostsDescent,
    SolarTerm::StartOfWinter,
    SolarTerm::MinorSnow,
    SolarTerm::MajorSnow,
    SolarTerm::WinterSolstice,
];

/// The 12 month-opening terms, beginning with Start of Spring (tiger month)
/// and ending with Minor Cold of the following civil year (ox month).
pub const MONTH_OPENING_TERMS: [SolarTerm; 12] = [
    SolarTerm::StartOfSpring,
    SolarTerm::AwakeningOfInsects,
    SolarTerm::PureBrightness,
    SolarTerm::StartOfSummer,
    SolarTerm::GrainInEar,
    SolarTerm::MinorHeat,
    SolarTerm::StartOfAutumn,
    SolarTerm::WhiteDew,
    SolarTerm::ColdDew,
    SolarTerm::StartOfWinter,
    SolarTerm::MajorSnow,
    SolarTerm::MinorCold,
];

impl SolarTerm {
    /// 0-based table index (MinorCold=0 .. WinterSolstice=23).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Term from a table index.
    pub fn from_index(i: u8) -> Option<Self> {
        ALL_SOLAR_TERMS.get(i as usize).copied()
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::MinorCold => "Minor Cold",
            Self::MajorCold => "Major Cold",
            Self::StartOfSpring => "Start of Spring",
            Self::RainWater => "Rain Water",
            Self::AwakeningOfInsects => "Awakening of Insects",
            Self::SpringEquinox => "Spring Equinox",
            Self::PureBrightness => "Pure Brightness",
            Self::GrainRain => "Grain Rain",
            Self::StartOfSummer => "Start of Summer",
            Self::GrainBuds => "Grain Buds",
            Self::GrainInEar => "Grain in Ear",
            Self::SummerSolstice => "Summer Solstice",
            Self::MinorHeat => "Minor Heat",
            Self::MajorHeat => "Major Heat",
            Self::StartOfAutumn => "Start of Autumn",
            Self::EndOfHeat => "End of Heat",
            Self::WhiteDew => "White Dew",
            Self::AutumnEquinox => "Autumn Equinox",
            Self::ColdDew => "Cold Dew",
            Self::FrostsDescent => "Frost's Descent",
            Self::StartOfWinter => "Start of Winter",
            Self::MinorSnow => "Minor Snow",
            Self::MajorSnow => "Major Snow",
            Self::WinterSolstice => "Winter Solstice",
        }
    }

    /// Traditional name in hanja.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::MinorCold => "小寒",
            Self::MajorCold => "大寒",
            Self::StartOfSpring => "立春",
            Self::RainWater => "雨水",
            Self::AwakeningOfInsects => "驚蟄",
            Self::SpringEquinox => "春分",
            Self::PureBrightness => "淸明",
            Self::GrainRain => "穀雨",
            Self::StartOfSummer => "立夏",
            Self::GrainBuds => "小滿",
            Self::GrainInEar => "芒種",
            Self::SummerSolstice => "夏至",
            Self::MinorHeat => "小暑",
            Self::MajorHeat => "大暑",
            Self::StartOfAutumn => "立秋",
            Self::EndOfHeat => "處暑",
            Self::WhiteDew => "白露",
            Self::AutumnEquinox => "秋分",
            Self::ColdDew => "寒露",
            Self::FrostsDescent => "霜降",
            Self::StartOfWinter => "立冬",
            Self::MinorSnow => "小雪",
            Self::MajorSnow => "大雪",
            Self::WinterSolstice => "冬至",
        }
    }

    /// Apparent solar longitude at this term, in degrees [0, 360).
    pub const fn solar_longitude_deg(self) -> u16 {
        (285 + 15 * self.index() as u16) % 360
    }
}

/// Year-keyed table of the 24 solar term instants.
#[derive(Debug, Clone, PartialEq)]
pub struct SolarTermTable {
    years: BTreeMap<i32, [NaiveDateTime; TERMS_PER_YEAR]>,
}

static BUNDLED_DATA: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/data/solar_terms.json"
));

impl SolarTermTable {
    /// Load a table file from a path.
    pub fn load(path: &Path) -> Result<Self, TimeError> {
        let content = std::fs::read_to_string(path)?;
        let table = Self::parse(&content)?;
        tracing::info!(
            source = %path.display(),
            first_year = table.first_year(),
            last_year = table.last_year(),
            "solar term table loaded"
        );
        Ok(table)
    }

    /// Parse the table from its JSON text content.
    pub fn parse(content: &str) -> Result<Self, TimeError> {
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(content)?;
        let mut years = BTreeMap::new();
        for (key, entries) in &raw {
            let year: i32 = key
                .trim()
                .parse()
                .map_err(|_| TimeError::TermParse(format!("invalid year key '{key}'")))?;
            years.insert(year, parse_year(year, entries)?);
        }
        Self::from_years(years)
    }

    /// The 1940–2050 table shipped with the crate.
    pub fn bundled() -> Result<Self, TimeError> {
        let table = Self::parse(BUNDLED_DATA)?;
        tracing::info!(
            source = "bundled",
            first_year = table.first_year(),
            last_year = table.last_year(),
            "solar term table loaded"
        );
        Ok(table)
    }

    /// Build from already-parsed rows, validating ordering and contiguity.
    pub fn from_years(
        years: BTreeMap<i32, [NaiveDateTime; TERMS_PER_YEAR]>,
    ) -> Result<Self, TimeError> {
        if years.is_empty() {
            return Err(TimeError::TermParse("table has no years".into()));
        }
        let mut prev: Option<(i32, NaiveDateTime)> = None;
        for (&year, terms) in &years {
            if let Some((prev_year, prev_last)) = prev {
                if year != prev_year + 1 {
                    return Err(TimeError::TermParse(format!(
                        "missing year(s) between {prev_year} and {year}"
                    )));
                }
                if terms[0] <= prev_last {
                    return Err(TimeError::TermParse(format!(
                        "year {year} starts before year {prev_year} ends"
                    )));
                }
            }
            prev = Some((year, terms[TERMS_PER_YEAR - 1]));
        }
        Ok(Self { years })
    }

    /// First year covered.
    pub fn first_year(&self) -> i32 {
        self.years.keys().next().copied().unwrap_or_default()
    }

    /// Last year covered.
    pub fn last_year(&self) -> i32 {
        self.years.keys().next_back().copied().unwrap_or_default()
    }

    /// Number of years covered.
    pub fn len(&self) -> usize {
        self.years.len()
    }

    /// Always false for a validated table.
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Whether `year` has data.
    pub fn contains_year(&self, year: i32) -> bool {
        self.years.contains_key(&year)
    }

    /// All 24 term instants of `year`.
    pub fn year_terms(&self, year: i32) -> Result<&[NaiveDateTime; TERMS_PER_YEAR], TimeError> {
        self.years.get(&year).ok_or(TimeError::UnsupportedYear(year))
    }

    /// Instant of a single term in `year`.
    pub fn term(&self, year: i32, term: SolarTerm) -> Result<NaiveDateTime, TimeError> {
        Ok(self.year_terms(year)?[term.index() as usize])
    }

    /// Instant of Start of Spring in `year`.
    pub fn start_of_spring(&self, year: i32) -> Result<NaiveDateTime, TimeError> {
        self.term(year, SolarTerm::StartOfSpring)
    }
}

fn parse_year(year: i32, entries: &[String]) -> Result<[NaiveDateTime; TERMS_PER_YEAR], TimeError> {
    if entries.len() != TERMS_PER_YEAR {
        return Err(TimeError::TermParse(format!(
            "year {year} has {} terms, expected {TERMS_PER_YEAR}",
            entries.len()
        )));
    }
    let mut out = [NaiveDateTime::default(); TERMS_PER_YEAR];
    for (i, entry) in entries.iter().enumerate() {
        out[i] = parse_term_instant(year, entry)?;
        if i > 0 && out[i] <= out[i - 1] {
            return Err(TimeError::TermParse(format!(
                "year {year}: term {i} ({entry}) is not after term {}",
                i - 1
            )));
        }
    }
    Ok(out)
}

/// Parse a `"MM-DD HH:MM"` entry for `year`.
pub fn parse_term_instant(year: i32, entry: &str) -> Result<NaiveDateTime, TimeError> {
    NaiveDateTime::parse_from_str(&format!("{year}-{}", entry.trim()), TERM_ENTRY_FORMAT)
        .map_err(|e| TimeError::TermParse(format!("year {year}: malformed entry '{entry}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row(year: i32) -> String {
        let terms = [
            "01-06 09:58", "01-21 03:24", "02-04 21:36", "02-19 17:32", "03-05 15:36",
            "03-20 16:32", "04-04 20:24", "04-20 03:36", "05-05 13:44", "05-21 02:48",
            "06-05 17:56", "06-21 10:48", "07-07 04:14", "07-22 21:43", "08-07 14:05",
            "08-23 04:48", "09-07 17:00", "09-23 02:24", "10-08 08:37", "10-23 11:42",
            "11-07 11:46", "11-22 09:12", "12-07 04:34", "12-21 22:30",
        ];
        let quoted: Vec<String> = terms.iter().map(|t| format!("\"{t}\"")).collect();
        format!("\"{year}\": [{}]", quoted.join(", "))
    }

    #[test]
    fn term_indices_sequential() {
        for (i, t) in ALL_SOLAR_TERMS.iter().enumerate() {
            assert_eq!(t.index() as usize, i);
            assert_eq!(SolarTerm::from_index(i as u8), Some(*t));
        }
        assert_eq!(SolarTerm::from_index(24), None);
    }

    #[test]
    fn solar_longitudes() {
        assert_eq!(SolarTerm::MinorCold.solar_longitude_deg(), 285);
        assert_eq!(SolarTerm::StartOfSpring.solar_longitude_deg(), 315);
        assert_eq!(SolarTerm::SpringEquinox.solar_longitude_deg(), 0);
        assert_eq!(SolarTerm::WinterSolstice.solar_longitude_deg(), 270);
    }

    #[test]
    fn month_opening_terms_are_even_indices() {
        for (pos, t) in MONTH_OPENING_TERMS.iter().enumerate() {
            assert_eq!(t.index() as usize, (2 + 2 * pos) % 24);
        }
    }

    #[test]
    fn parse_single_year() {
        let json = format!("{{{}}}", sample_row(2000));
        let table = SolarTermTable::parse(&json).unwrap();
        assert_eq!(table.first_year(), 2000);
        assert_eq!(table.last_year(), 2000);
        let ipchun = table.start_of_spring(2000).unwrap();
        assert_eq!(ipchun.to_string(), "2000-02-04 21:36:00");
    }

    #[test]
    fn unsupported_year_errors() {
        let json = format!("{{{}}}", sample_row(2000));
        let table = SolarTermTable::parse(&json).unwrap();
        assert_eq!(
            table.year_terms(2001).unwrap_err(),
            TimeError::UnsupportedYear(2001)
        );
    }

    #[test]
    fn gap_between_years_rejected() {
        let json = format!("{{{}, {}}}", sample_row(2000), sample_row(2002));
        assert!(matches!(
            SolarTermTable::parse(&json),
            Err(TimeError::TermParse(_))
        ));
    }

    #[test]
    fn wrong_term_count_rejected() {
        let json = r#"{"2000": ["01-06 09:58"]}"#;
        assert!(matches!(
            SolarTermTable::parse(json),
            Err(TimeError::TermParse(_))
        ));
    }

    #[test]
    fn unordered_terms_rejected() {
        let row = sample_row(2000).replace("\"01-21 03:24\"", "\"01-01 03:24\"");
        let json = format!("{{{row}}}");
        assert!(SolarTermTable::parse(&json).is_err());
    }

    #[test]
    fn entry_parses_with_year_prefix() {
        let at = parse_term_instant(2024, " 02-04 17:27 ").unwrap();
        assert_eq!(at.to_string(), "2024-02-04 17:27:00");
    }

    #[test]
    fn malformed_entry_rejected() {
        assert!(matches!(
            parse_term_instant(2000, "02-04"),
            Err(TimeError::TermParse(_))
        ));
        assert!(parse_term_instant(2000, "0206 10:00").is_err());
        assert!(parse_term_instant(2000, "02-30 10:00").is_err());
        assert!(parse_term_instant(2000, "02-03 25:00").is_err());
    }

    #[test]
    fn bundled_covers_1940_to_2050() {
        let table = SolarTermTable::bundled().unwrap();
        assert_eq!(table.first_year(), 1940);
        assert_eq!(table.last_year(), 2050);
        assert_eq!(table.len(), 111);
    }
}
