use crate::core::reminders::sent_log::ReminderSentLog;
use crate::db::shared::SharedDb;
use crate::errors::AppResult;
use crate::models::reminder::ReminderKind;
use chrono::{Local, NaiveDate};
use rusqlite::{OptionalExtension, params};

/// Reminder sent-log persisted in the `reminders_sent` table.
/// Every `mark_fired` is committed before it returns.
#[derive(Clone)]
pub struct SqliteSentLog {
    db: SharedDb,
}

impl SqliteSentLog {
    pub fn new(db: SharedDb) -> Self {
        Self { db }
    }
}

impl ReminderSentLog for SqliteSentLog {
    fn has_fired(&self, kind: ReminderKind, day: NaiveDate) -> AppResult<bool> {
        let pool = self.db.lock()?;
        let mut stmt = pool
            .conn
            .prepare_cached("SELECT 1 FROM reminders_sent WHERE date = ?1 AND kind = ?2")?;
        let found = stmt
            .query_row(
                params![day.format("%Y-%m-%d").to_string(), kind.to_db_str()],
                |_| Ok(()),
            )
            .optional()?;
        Ok(found.is_some())
    }

    fn mark_fired(&self, kind: ReminderKind, day: NaiveDate) -> AppResult<()> {
        let pool = self.db.lock()?;
        pool.conn.execute(
            "INSERT OR IGNORE INTO reminders_sent (date, kind, fired_at) VALUES (?1, ?2, ?3)",
            params![
                day.format("%Y-%m-%d").to_string(),
                kind.to_db_str(),
                Local::now().to_rfc3339()
            ],
        )?;
        Ok(())
    }
}
