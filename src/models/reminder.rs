use crate::utils::time::hhmm;
use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderKind {
    Entry,
    LunchExit,
    AfternoonEntry,
    Exit,
}

impl ReminderKind {
    pub const ALL: [ReminderKind; 4] = [
        ReminderKind::Entry,
        ReminderKind::LunchExit,
        ReminderKind::AfternoonEntry,
        ReminderKind::Exit,
    ];

    pub fn to_db_str(&self) -> &'static str {
        match self {
            ReminderKind::Entry => "entry",
            ReminderKind::LunchExit => "lunch_exit",
            ReminderKind::AfternoonEntry => "afternoon_entry",
            ReminderKind::Exit => "exit",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "entry" => Some(ReminderKind::Entry),
            "lunch_exit" => Some(ReminderKind::LunchExit),
            "afternoon_entry" => Some(ReminderKind::AfternoonEntry),
            "exit" => Some(ReminderKind::Exit),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ReminderKind::Entry => "Time to clock in",
            ReminderKind::LunchExit => "Lunch time",
            ReminderKind::AfternoonEntry => "Back from lunch?",
            ReminderKind::Exit => "Time to clock out",
        }
    }

    pub fn body(&self) -> &'static str {
        match self {
            ReminderKind::Entry => "You have not clocked in yet today.",
            ReminderKind::LunchExit => "Remember to punch out for your lunch break.",
            ReminderKind::AfternoonEntry => "Remember to punch back in after lunch.",
            ReminderKind::Exit => "You have reached your working hours. Remember to clock out.",
        }
    }
}

impl fmt::Display for ReminderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}

/// Reminder configuration. Replaced wholesale on every edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderSettings {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_entry_time", with = "hhmm")]
    pub entry_reminder_time: Option<NaiveTime>,
    #[serde(default = "default_lunch_exit_time", with = "hhmm")]
    pub lunch_exit_reminder_time: Option<NaiveTime>,
    #[serde(default = "default_afternoon_entry_time", with = "hhmm")]
    pub afternoon_entry_reminder_time: Option<NaiveTime>,
    /// Hours after the first clock-in before the exit reminder; 0 disables it.
    #[serde(default = "default_exit_hours")]
    pub exit_reminder_hours: f64,
    #[serde(default = "default_interval")]
    pub check_interval_minutes: i64,
}

fn default_enabled() -> bool {
    true
}
fn default_entry_time() -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(9, 0, 0)
}
fn default_lunch_exit_time() -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(12, 0, 0)
}
fn default_afternoon_entry_time() -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(13, 0, 0)
}
fn default_exit_hours() -> f64 {
    8.0
}
fn default_interval() -> i64 {
    5
}

impl Default for ReminderSettings {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            entry_reminder_time: default_entry_time(),
            lunch_exit_reminder_time: default_lunch_exit_time(),
            afternoon_entry_reminder_time: default_afternoon_entry_time(),
            exit_reminder_hours: default_exit_hours(),
            check_interval_minutes: default_interval(),
        }
    }
}

impl ReminderSettings {
    /// A day's punches never span more than this.
    pub const MAX_EXIT_REMINDER_HOURS: f64 = 24.0;
    pub const MAX_CHECK_INTERVAL_MINUTES: i64 = 24 * 60;

    /// Check interval in minutes, clamped to `1..=MAX_CHECK_INTERVAL_MINUTES`.
    pub fn effective_interval_minutes(&self) -> u64 {
        self.check_interval_minutes.clamp(1, Self::MAX_CHECK_INTERVAL_MINUTES) as u64
    }

    /// Exit threshold as a duration. `None` when unset, non-positive or beyond a day.
    pub fn exit_threshold(&self) -> Option<Duration> {
        let hours = self.exit_reminder_hours;
        if !hours.is_finite() || hours <= 0.0 || hours > Self::MAX_EXIT_REMINDER_HOURS {
            return None;
        }
        Duration::try_seconds((hours * 3600.0).round() as i64)
    }
}
