use rusqlite::{Connection, OptionalExtension, Result};
use tracing::info;

/// Schema steps, applied in order and recorded once in the `log` table.
const MIGRATIONS: &[(&str, &str, &str)] = &[
    (
        "20250301_0001_create_punches",
        "Created punches table",
        r#"
        CREATE TABLE IF NOT EXISTS punches (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            date        TEXT NOT NULL,          -- local YYYY-MM-DD
            timestamp   TEXT NOT NULL,          -- RFC 3339 with offset
            kind        TEXT NOT NULL CHECK (kind IN ('clock_in','lunch_out','lunch_in','clock_out')),
            source      TEXT NOT NULL DEFAULT 'cli',
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_punches_date_timestamp ON punches(date, timestamp);
        "#,
    ),
    (
        "20250301_0002_create_reminders_sent",
        "Created reminders_sent table",
        r#"
        CREATE TABLE IF NOT EXISTS reminders_sent (
            date      TEXT NOT NULL,            -- local YYYY-MM-DD
            kind      TEXT NOT NULL CHECK (kind IN ('entry','lunch_exit','afternoon_entry','exit')),
            fired_at  TEXT NOT NULL,
            PRIMARY KEY (date, kind)
        );
        "#,
    ),
];

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    for &(version, message, sql) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }

        conn.execute_batch(sql)?;
        conn.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
            [version, message],
        )?;

        info!(version, "migration applied");
    }

    Ok(())
}

/// Versions already recorded as applied, oldest first.
pub fn applied_versions(conn: &Connection) -> Result<Vec<String>> {
    ensure_log_table(conn)?;
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    rows.collect()
}
