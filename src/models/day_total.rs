use super::date_range::DateRange;
use super::punch::PunchEvent;
use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub worked: Duration,
    /// Sorted by timestamp.
    pub punches: Vec<PunchEvent>,
}

impl DailyTotal {
    pub fn is_empty(&self) -> bool {
        self.punches.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodTotal {
    pub range: DateRange,
    pub per_day: BTreeMap<NaiveDate, DailyTotal>,
    pub total: Duration,
    pub average: Duration,
}

impl PeriodTotal {
    /// Days that carry at least one punch.
    pub fn active_days(&self) -> impl Iterator<Item = &DailyTotal> {
        self.per_day.values().filter(|d| !d.is_empty())
    }

    pub fn active_day_count(&self) -> usize {
        self.active_days().count()
    }
}
