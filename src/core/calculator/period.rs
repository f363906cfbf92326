//! Day grouping and period aggregation (daily, weekly, monthly reports).

use super::accumulator;
use crate::models::date_range::DateRange;
use crate::models::day_total::{DailyTotal, PeriodTotal};
use crate::models::punch::PunchEvent;
use chrono::{Duration, NaiveDate};
use std::collections::{BTreeMap, HashMap};

/// Group punches by the local calendar day of their timestamp.
pub fn group_by_day(punches: &[PunchEvent]) -> BTreeMap<NaiveDate, Vec<PunchEvent>> {
    let mut grouped: BTreeMap<NaiveDate, Vec<PunchEvent>> = BTreeMap::new();
    for p in punches {
        grouped.entry(p.day()).or_default().push(p.clone());
    }
    grouped
}

pub fn daily_total(date: NaiveDate, punches: &[PunchEvent]) -> DailyTotal {
    DailyTotal {
        date,
        worked: accumulator::compute(punches),
        punches: accumulator::sorted(punches),
    }
}

/// Aggregate every day of `range`. Days missing from `day_to_punches` count as empty;
/// the average only considers days with at least one punch.
pub fn aggregate(
    range: DateRange,
    day_to_punches: &HashMap<NaiveDate, Vec<PunchEvent>>,
) -> PeriodTotal {
    let mut per_day = BTreeMap::new();
    let mut total = Duration::zero();
    let mut active_days = 0i32;

    for day in range.days() {
        let punches = day_to_punches.get(&day).map(Vec::as_slice).unwrap_or(&[]);
        let daily = daily_total(day, punches);

        if !daily.is_empty() {
            active_days += 1;
        }
        total = total + daily.worked;
        per_day.insert(day, daily);
    }

    let average = if active_days > 0 {
        total / active_days
    } else {
        Duration::zero()
    };

    PeriodTotal {
        range,
        per_day,
        total,
        average,
    }
}

/// Aggregate raw punches (any order, any days) over `range`.
pub fn aggregate_punches(range: DateRange, punches: &[PunchEvent]) -> PeriodTotal {
    let by_day: HashMap<NaiveDate, Vec<PunchEvent>> = group_by_day(punches)
        .into_iter()
        .filter(|(day, _)| range.contains(*day))
        .collect();
    aggregate(range, &by_day)
}
