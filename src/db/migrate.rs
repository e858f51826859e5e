use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension, Result};

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

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{table}')"))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now', 'localtime'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// One record per calendar date: the UNIQUE constraint is the store's invariant.
fn create_attendance_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS attendance_records (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            date             TEXT NOT NULL UNIQUE,
            start_time       TEXT,
            end_time         TEXT,
            break_minutes    INTEGER CHECK(break_minutes IS NULL OR break_minutes >= 0),
            interruptions    TEXT NOT NULL DEFAULT '[]',
            side_job_minutes INTEGER CHECK(side_job_minutes IS NULL OR side_job_minutes >= 0),
            comment          TEXT,
            updated_at       TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn create_holidays_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS holidays (
            id    INTEGER PRIMARY KEY AUTOINCREMENT,
            date  TEXT NOT NULL UNIQUE,
            name  TEXT NOT NULL DEFAULT ''
        );
        "#,
    )?;
    Ok(())
}

/// Databases created before comments were supported lack the column.
fn migrate_add_comment_column(conn: &Connection) -> Result<()> {
    let version = "20250310_0002_add_attendance_comment";

    if has_column(conn, "attendance_records", "comment")? {
        return Ok(());
    }

    warning("Adding 'comment' column to attendance_records...");
    conn.execute("ALTER TABLE attendance_records ADD COLUMN comment TEXT;", [])?;
    mark_applied(conn, version, "Added comment column to attendance_records")?;

    success(format!("Migration applied: {version}"));
    Ok(())
}

fn create_indexes(conn: &Connection) -> Result<()> {
    let version = "20250310_0003_month_indexes";

    conn.execute_batch(
        r#"
        CREATE INDEX IF NOT EXISTS idx_attendance_date ON attendance_records(date);
        CREATE INDEX IF NOT EXISTS idx_holidays_date ON holidays(date);
        "#,
    )?;

    if !migration_applied(conn, version)? {
        mark_applied(conn, version, "Created date indexes")?;
    }
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Called by db::init_db() every time the database is opened, so it stays
/// silent unless something actually changes.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Internal log first: migrations are recorded there
    ensure_log_table(conn)?;

    // 2) Base tables
    let had_attendance = table_exists(conn, "attendance_records")?;
    create_attendance_table(conn)?;
    create_holidays_table(conn)?;

    if !had_attendance {
        mark_applied(
            conn,
            "20250301_0001_initial_schema",
            "Created attendance_records and holidays tables",
        )?;
    }

    // 3) Upgrades of older schemas
    migrate_add_comment_column(conn)?;
    create_indexes(conn)?;

    Ok(())
}
