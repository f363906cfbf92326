use crate::core::calculator::period;
use crate::db::pool::DbPool;
use crate::db::queries::load_punches_in_range;
use crate::errors::AppResult;
use crate::models::date_range::{DateRange, WeekStart};
use crate::models::day_total::PeriodTotal;
use crate::utils::formatting::format_duration;
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportScope {
    Day,
    Week,
    Month,
}

impl ReportScope {
    pub fn range_for(&self, day: NaiveDate, week_start: WeekStart) -> DateRange {
        match self {
            ReportScope::Day => DateRange::single(day),
            ReportScope::Week => DateRange::week_of(day, week_start),
            ReportScope::Month => DateRange::month_of(day),
        }
    }
}

/// Flat, serializable view of a period total.
#[derive(Debug, Serialize)]
pub struct ReportView {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub total_minutes: i64,
    pub total: String,
    pub average_minutes: i64,
    pub average: String,
    pub active_days: usize,
    pub days: Vec<ReportDay>,
}

#[derive(Debug, Serialize)]
pub struct ReportDay {
    pub date: NaiveDate,
    pub punches: usize,
    pub worked_minutes: i64,
    pub worked: String,
}

impl From<&PeriodTotal> for ReportView {
    fn from(p: &PeriodTotal) -> Self {
        Self {
            start: p.range.start,
            end: p.range.end,
            total_minutes: p.total.num_minutes(),
            total: format_duration(p.total),
            average_minutes: p.average.num_minutes(),
            average: format_duration(p.average),
            active_days: p.active_day_count(),
            days: p
                .per_day
                .values()
                .map(|d| ReportDay {
                    date: d.date,
                    punches: d.punches.len(),
                    worked_minutes: d.worked.num_minutes(),
                    worked: format_duration(d.worked),
                })
                .collect(),
        }
    }
}

pub struct ReportLogic;

impl ReportLogic {
    pub fn build(pool: &DbPool, range: DateRange) -> AppResult<PeriodTotal> {
        let punches = load_punches_in_range(pool, &range)?;
        Ok(period::aggregate_punches(range, &punches))
    }
}
