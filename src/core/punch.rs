use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{
    delete_punch, insert_punch, last_punch_of_day, load_punch_by_id, update_punch,
};
use crate::errors::{AppError, AppResult};
use crate::models::punch::PunchEvent;
use crate::models::punch_kind::PunchKind;
use chrono::{DateTime, Local};
use tracing::{info, warn};

/// High-level business logic for recording and correcting punches.
pub struct PunchLogic;

impl PunchLogic {
    /// Record a punch at `at`. Unless `force` is set, the kind must be a valid
    /// successor of the last punch of the same day.
    pub fn record(
        pool: &mut DbPool,
        kind: PunchKind,
        at: DateTime<Local>,
        force: bool,
    ) -> AppResult<PunchEvent> {
        let day = at.date_naive();
        let last = last_punch_of_day(pool, &day)?.map(|p| p.kind);

        if !force && !kind.can_follow(last) {
            return Err(AppError::PunchOutOfSequence {
                last,
                attempted: kind,
            });
        }

        let punch = PunchEvent::new(at, kind);
        let id = insert_punch(&pool.conn, &punch, "cli")?;
        let punch = punch.with_id(id);

        info!(id, kind = %kind, at = %at, forced = force, "punch recorded");
        audit(
            pool,
            "punch",
            &id.to_string(),
            &format!("{} at {}", kind.label(), at.format("%Y-%m-%d %H:%M:%S")),
        );

        Ok(punch)
    }

    /// Manually correct a punch: new timestamp and/or kind.
    pub fn update(
        pool: &mut DbPool,
        id: i64,
        at: Option<DateTime<Local>>,
        kind: Option<PunchKind>,
    ) -> AppResult<PunchEvent> {
        let mut punch = load_punch_by_id(pool, id)?.ok_or(AppError::PunchNotFound(id))?;
        let before = format!(
            "{} at {}",
            punch.kind.label(),
            punch.timestamp.format("%Y-%m-%d %H:%M:%S")
        );

        if let Some(ts) = at {
            punch.timestamp = ts;
        }
        if let Some(k) = kind {
            punch.kind = k;
        }

        update_punch(&pool.conn, &punch)?;

        info!(id, kind = %punch.kind, at = %punch.timestamp, "punch updated");
        audit(
            pool,
            "edit",
            &id.to_string(),
            &format!(
                "{} → {} at {}",
                before,
                punch.kind.label(),
                punch.timestamp.format("%Y-%m-%d %H:%M:%S")
            ),
        );

        Ok(punch)
    }

    pub fn delete(pool: &mut DbPool, id: i64) -> AppResult<PunchEvent> {
        let punch = load_punch_by_id(pool, id)?.ok_or(AppError::PunchNotFound(id))?;
        delete_punch(&pool.conn, id)?;

        info!(id, "punch deleted");
        audit(
            pool,
            "del",
            &id.to_string(),
            &format!(
                "Deleted {} at {}",
                punch.kind.label(),
                punch.timestamp.format("%Y-%m-%d %H:%M:%S")
            ),
        );

        Ok(punch)
    }
}

/// Audit logging never blocks the operation it describes.
fn audit(pool: &DbPool, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(&pool.conn, operation, target, message) {
        warn!(operation, error = %e, "failed to write audit log");
    }
}
