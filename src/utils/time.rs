//! Time utilities: parsing HH:MM, punch timestamps, reminder durations, etc.

use crate::errors::{AppError, AppResult};
use crate::models::reminder::ReminderSettings;
use chrono::{DateTime, Local, NaiveDateTime, NaiveTime, TimeZone};
use regex::Regex;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t.trim(), "%H:%M:%S"))
        .ok()
}

/// Parse a reminder time given on the command line: `HH:MM`, or `off`/`none` to disable.
pub fn parse_reminder_time(s: &str) -> AppResult<Option<NaiveTime>> {
    match s.trim().to_lowercase().as_str() {
        "off" | "none" | "-" => Ok(None),
        other => parse_time(other)
            .map(Some)
            .ok_or_else(|| AppError::InvalidTime(s.to_string())),
    }
}

/// Parse a local punch timestamp `YYYY-MM-DD HH:MM[:SS]`.
pub fn parse_local_datetime(s: &str) -> AppResult<DateTime<Local>> {
    let naive = NaiveDateTime::parse_from_str(s.trim(), "%Y-%m-%d %H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(s.trim(), "%Y-%m-%d %H:%M:%S"))
        .map_err(|_| AppError::InvalidDate(s.to_string()))?;

    // Ambiguous local times (DST fold) resolve to the earliest instant.
    Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| AppError::InvalidDate(format!("{} does not exist in local time", s)))
}

/// Parse an hours threshold: `8`, `7.5`, `8h`, `7h30m`, `90m`. At most 24 hours.
pub fn parse_hours(s: &str) -> AppResult<f64> {
    let hours = parse_hours_unbounded(s)?;
    if hours > ReminderSettings::MAX_EXIT_REMINDER_HOURS {
        return Err(AppError::InvalidDuration(format!(
            "{} (at most {} hours)",
            s,
            ReminderSettings::MAX_EXIT_REMINDER_HOURS
        )));
    }
    Ok(hours)
}

fn parse_hours_unbounded(s: &str) -> AppResult<f64> {
    let input = s.trim().to_lowercase();

    if let Ok(h) = input.parse::<f64>() {
        return if h.is_finite() && h >= 0.0 {
            Ok(h)
        } else {
            Err(AppError::InvalidDuration(s.to_string()))
        };
    }

    let re = Regex::new(r"^(?:(\d+)h)?\s*(?:(\d+)m)?$")
        .map_err(|e| AppError::Other(e.to_string()))?;
    let caps = re
        .captures(&input)
        .ok_or_else(|| AppError::InvalidDuration(s.to_string()))?;

    let hours = caps.get(1).map(|m| m.as_str().parse::<u32>());
    let minutes = caps.get(2).map(|m| m.as_str().parse::<u32>());

    if hours.is_none() && minutes.is_none() {
        return Err(AppError::InvalidDuration(s.to_string()));
    }

    let h = hours
        .transpose()
        .map_err(|_| AppError::InvalidDuration(s.to_string()))?
        .unwrap_or(0);
    let m = minutes
        .transpose()
        .map_err(|_| AppError::InvalidDuration(s.to_string()))?
        .unwrap_or(0);

    Ok(h as f64 + m as f64 / 60.0)
}

/// Serde adapter for optional `"HH:MM"` times (`null` when unset).
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(t) => serializer.serialize_str(&t.format("%H:%M").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(s) if s.trim().is_empty() => Ok(None),
            Some(s) => super::parse_time(&s)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid time '{}'", s))),
        }
    }
}
