//! Reminder predicates: which reminders are due for today's punches at `now`.
//!
//! Pure functions of their inputs. Whether a due reminder was already sent
//! today is the caller's concern.

use crate::core::calculator::accumulator;
use crate::models::punch::PunchEvent;
use crate::models::punch_kind::PunchKind;
use crate::models::reminder::{ReminderKind, ReminderSettings};
use chrono::{DateTime, Local, NaiveTime, Timelike};
use std::collections::BTreeSet;

/// Every reminder kind whose condition holds. Several kinds may be due at once.
pub fn due_reminders(
    now: DateTime<Local>,
    todays_punches: &[PunchEvent],
    settings: &ReminderSettings,
) -> BTreeSet<ReminderKind> {
    let mut due = BTreeSet::new();

    if !settings.enabled {
        return due;
    }

    let punches = accumulator::sorted(todays_punches);

    if entry_due(now, &punches, settings) {
        due.insert(ReminderKind::Entry);
    }
    if lunch_exit_due(now, &punches, settings) {
        due.insert(ReminderKind::LunchExit);
    }
    if afternoon_entry_due(now, &punches, settings) {
        due.insert(ReminderKind::AfternoonEntry);
    }
    if exit_due(now, &punches, settings) {
        due.insert(ReminderKind::Exit);
    }

    due
}

/// `now`'s time of day has reached `threshold`, compared hour then minute.
pub fn time_reached(now: DateTime<Local>, threshold: NaiveTime) -> bool {
    (now.hour(), now.minute()) >= (threshold.hour(), threshold.minute())
}

fn has_kind(punches: &[PunchEvent], kind: PunchKind) -> bool {
    punches.iter().any(|p| p.kind == kind)
}

/// True when the last `opener` exists and no `closer` comes after it.
fn open_since_last(punches: &[PunchEvent], opener: PunchKind, closer: PunchKind) -> bool {
    match punches.iter().rposition(|p| p.kind == opener) {
        Some(idx) => !punches[idx + 1..].iter().any(|p| p.kind == closer),
        None => false,
    }
}

fn entry_due(now: DateTime<Local>, punches: &[PunchEvent], settings: &ReminderSettings) -> bool {
    match settings.entry_reminder_time {
        Some(at) => !has_kind(punches, PunchKind::ClockIn) && time_reached(now, at),
        None => false,
    }
}

fn lunch_exit_due(
    now: DateTime<Local>,
    punches: &[PunchEvent],
    settings: &ReminderSettings,
) -> bool {
    match settings.lunch_exit_reminder_time {
        Some(at) => {
            open_since_last(punches, PunchKind::ClockIn, PunchKind::LunchOut)
                && time_reached(now, at)
        }
        None => false,
    }
}

fn afternoon_entry_due(
    now: DateTime<Local>,
    punches: &[PunchEvent],
    settings: &ReminderSettings,
) -> bool {
    match settings.afternoon_entry_reminder_time {
        Some(at) => {
            open_since_last(punches, PunchKind::LunchOut, PunchKind::LunchIn)
                && time_reached(now, at)
        }
        None => false,
    }
}

fn exit_due(now: DateTime<Local>, punches: &[PunchEvent], settings: &ReminderSettings) -> bool {
    let Some(threshold) = settings.exit_threshold() else {
        return false;
    };
    let Some(first_in) = punches.iter().find(|p| p.kind == PunchKind::ClockIn) else {
        return false;
    };

    let clocked_out = punches
        .last()
        .is_some_and(|p| p.kind == PunchKind::ClockOut);

    !clocked_out && now - first_in.timestamp >= threshold
}
