use super::punch_kind::PunchKind;
use chrono::{DateTime, Local, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PunchEvent {
    /// Identifier owned by the punch store (`None` until persisted).
    pub id: Option<i64>,
    pub timestamp: DateTime<Local>,
    pub kind: PunchKind,
}

impl PunchEvent {
    pub fn new(timestamp: DateTime<Local>, kind: PunchKind) -> Self {
        Self {
            id: None,
            timestamp,
            kind,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Local calendar day of the punch.
    pub fn day(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    pub fn date_str(&self) -> String {
        self.timestamp.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

/// One continuous worked span between an opening and a closing punch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkSegment {
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
}

impl WorkSegment {
    pub fn duration(&self) -> chrono::Duration {
        self.end - self.start
    }
}
