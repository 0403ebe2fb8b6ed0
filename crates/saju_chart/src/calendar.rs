//! Calendar helpers: a given day's pillar read against a chart.

use chrono::NaiveDate;
use serde::Serialize;

use saju_base::{
    Branch, Pillar, PillarLabel, Stem, TenGod, TwelveStage, nobleman_branches, ten_god,
};

use crate::chart_types::Chart;
use crate::error::ChartError;
use crate::pillars::{day_pillar, day_pillar_of_date};

/// Pillar of a civil date resolved against an arbitrary day stem.
pub fn daily_pillar(year: i32, month: u32, day: u32, day_stem: Stem) -> Result<Pillar, ChartError> {
    Ok(Pillar::resolve(
        PillarLabel::Daily,
        day_pillar(year, month, day)?,
        day_stem,
    ))
}

/// Whether the month branch supports the day master (得令): the month
/// branch is a peer or a resource of the day stem.
pub fn month_supports_day_master(day_stem: Stem, month_branch: Branch) -> bool {
    matches!(
        ten_god(day_stem, month_branch.into()),
        TenGod::Friend | TenGod::RobWealth | TenGod::IndirectResource | TenGod::DirectResource
    )
}

/// How one calendar day reads against a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyOutlook {
    pub date: NaiveDate,
    pub pillar: Pillar,
    /// The day's branch is a heavenly-nobleman branch of the day master.
    pub nobleman: bool,
    pub twelve_stage: TwelveStage,
    /// Ten-god of the chart's month branch.
    pub month_ten_god: TenGod,
    pub month_support: bool,
}

/// Outlook of `date` for `chart`.
pub fn daily_outlook(chart: &Chart, date: NaiveDate) -> DailyOutlook {
    let day_stem = chart.day_master();
    let month_branch = chart.month.stem_branch.branch;
    let pillar = Pillar::resolve(PillarLabel::Daily, day_pillar_of_date(date), day_stem);
    DailyOutlook {
        date,
        nobleman: nobleman_branches(day_stem).contains(&pillar.stem_branch.branch),
        twelve_stage: pillar.branch.twelve_stage,
        month_ten_god: ten_god(day_stem, month_branch.into()),
        month_support: month_supports_day_master(day_stem, month_branch),
        pillar,
    }
}
