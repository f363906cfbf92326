use crate::core::calculator::accumulator;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::date_range::DateRange;
use crate::models::punch::PunchEvent;
use crate::models::punch_kind::PunchKind;
use chrono::{DateTime, Local, NaiveDate};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const PUNCH_COLUMNS: &str = "id, date, timestamp, kind";

fn date_key(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

fn conversion_error(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

pub fn map_row(row: &Row) -> Result<PunchEvent> {
    let ts_str: String = row.get("timestamp")?;
    let timestamp = DateTime::parse_from_rfc3339(&ts_str)
        .map(|dt| dt.with_timezone(&Local))
        .map_err(|_| conversion_error(AppError::InvalidDate(ts_str.clone())))?;

    let kind_str: String = row.get("kind")?;
    let kind = PunchKind::from_db_str(&kind_str)
        .ok_or_else(|| conversion_error(AppError::InvalidPunchKind(kind_str.clone())))?;

    Ok(PunchEvent {
        id: Some(row.get("id")?),
        timestamp,
        kind,
    })
}

fn collect_punches(
    conn: &Connection,
    sql: &str,
    args: &[&dyn rusqlite::ToSql],
) -> AppResult<Vec<PunchEvent>> {
    let mut stmt = conn.prepare_cached(sql)?;
    let rows = stmt.query_map(args, map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_punches_by_date(pool: &DbPool, date: &NaiveDate) -> AppResult<Vec<PunchEvent>> {
    let sql = format!(
        "SELECT {PUNCH_COLUMNS} FROM punches
         WHERE date = ?1
         ORDER BY timestamp ASC, id ASC"
    );
    collect_punches(&pool.conn, &sql, params![date_key(date)])
}

pub fn load_punches_in_range(pool: &DbPool, range: &DateRange) -> AppResult<Vec<PunchEvent>> {
    let sql = format!(
        "SELECT {PUNCH_COLUMNS} FROM punches
         WHERE date >= ?1 AND date <= ?2
         ORDER BY timestamp ASC, id ASC"
    );
    collect_punches(
        &pool.conn,
        &sql,
        params![date_key(&range.start), date_key(&range.end)],
    )
}

pub fn load_punch_by_id(pool: &DbPool, id: i64) -> AppResult<Option<PunchEvent>> {
    let sql = format!("SELECT {PUNCH_COLUMNS} FROM punches WHERE id = ?1");
    let mut stmt = pool.conn.prepare_cached(&sql)?;
    let punch = stmt.query_row([id], map_row).optional()?;
    Ok(punch)
}

pub fn last_punch_of_day(pool: &DbPool, date: &NaiveDate) -> AppResult<Option<PunchEvent>> {
    let punches = load_punches_by_date(pool, date)?;
    Ok(accumulator::sorted(&punches).pop())
}

/// Insert a punch and return its new id.
pub fn insert_punch(conn: &Connection, punch: &PunchEvent, source: &str) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO punches (date, timestamp, kind, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            punch.date_str(),
            punch.timestamp.to_rfc3339(),
            punch.kind.to_db_str(),
            source,
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Replace timestamp and kind of an existing punch.
pub fn update_punch(conn: &Connection, punch: &PunchEvent) -> AppResult<()> {
    let id = punch
        .id
        .ok_or_else(|| AppError::Other("cannot update a punch without id".into()))?;

    let changed = conn.execute(
        "UPDATE punches SET date = ?1, timestamp = ?2, kind = ?3 WHERE id = ?4",
        params![
            punch.date_str(),
            punch.timestamp.to_rfc3339(),
            punch.kind.to_db_str(),
            id
        ],
    )?;

    if changed == 0 {
        return Err(AppError::PunchNotFound(id));
    }
    Ok(())
}

pub fn delete_punch(conn: &Connection, id: i64) -> AppResult<()> {
    let deleted = conn.execute("DELETE FROM punches WHERE id = ?1", [id])?;
    if deleted == 0 {
        return Err(AppError::PunchNotFound(id));
    }
    Ok(())
}

/// Audit rows, newest first: (date, operation, target, message).
pub fn load_log(pool: &DbPool) -> Result<Vec<(String, String, String, String)>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT date, operation, target, message FROM log ORDER BY id DESC")?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            row.get::<_, String>(3)?,
        ))
    })?;

    rows.collect()
}
