//! Per-day record of reminders already sent.
//!
//! Entries are keyed by calendar day, so a new day starts with nothing sent
//! and no reset is ever needed.

use crate::errors::{AppError, AppResult};
use crate::models::reminder::ReminderKind;
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

pub trait ReminderSentLog: Send + Sync {
    fn has_fired(&self, kind: ReminderKind, day: NaiveDate) -> AppResult<bool>;

    /// Record `kind` as sent on `day`. Must be durable when it returns.
    fn mark_fired(&self, kind: ReminderKind, day: NaiveDate) -> AppResult<()>;

    fn fired_on(&self, day: NaiveDate) -> AppResult<Vec<ReminderKind>> {
        let mut out = Vec::new();
        for kind in ReminderKind::ALL {
            if self.has_fired(kind, day)? {
                out.push(kind);
            }
        }
        Ok(out)
    }
}

#[derive(Debug, Default)]
pub struct InMemorySentLog {
    sent: Mutex<HashMap<NaiveDate, HashSet<ReminderKind>>>,
}

impl InMemorySentLog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReminderSentLog for InMemorySentLog {
    fn has_fired(&self, kind: ReminderKind, day: NaiveDate) -> AppResult<bool> {
        let sent = self
            .sent
            .lock()
            .map_err(|_| AppError::Other("sent log lock poisoned".into()))?;
        Ok(sent.get(&day).is_some_and(|kinds| kinds.contains(&kind)))
    }

    fn mark_fired(&self, kind: ReminderKind, day: NaiveDate) -> AppResult<()> {
        let mut sent = self
            .sent
            .lock()
            .map_err(|_| AppError::Other("sent log lock poisoned".into()))?;
        sent.entry(day).or_default().insert(kind);
        Ok(())
    }
}
