use crate::errors::{AppError, AppResult};
use crate::models::date_range::DateRange;
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Range covered by a single period token: `YYYY-MM-DD`, `YYYY-MM` or `YYYY`.
pub fn range_from_period(p: &str) -> AppResult<DateRange> {
    let p = p.trim();

    // YYYY-MM-DD
    if let Some(d) = parse_date(p) {
        return Ok(DateRange::single(d));
    }

    // YYYY-MM
    if let Ok(dm) = NaiveDate::parse_from_str(&format!("{}-01", p), "%Y-%m-%d") {
        return Ok(DateRange::month_of(dm));
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
    {
        let start = NaiveDate::from_ymd_opt(year, 1, 1);
        let end = NaiveDate::from_ymd_opt(year, 12, 31);
        if let (Some(start), Some(end)) = (start, end) {
            return Ok(DateRange::new(start, end));
        }
    }

    Err(AppError::InvalidDate(format!("Invalid period: {}", p)))
}

/// Resolve a `--period` value: a single token or `start:end` of tokens.
pub fn resolve_period(p: &str) -> AppResult<DateRange> {
    if let Some((start, end)) = p.split_once(':') {
        let s = range_from_period(start)?;
        let e = range_from_period(end)?;
        return Ok(DateRange::new(s.start, e.end));
    }
    range_from_period(p)
}

pub fn current_month() -> DateRange {
    DateRange::month_of(today())
}

pub fn weekday_short(d: NaiveDate) -> String {
    d.weekday().to_string()
}
