use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists. Besides operation auditing it also
/// records which migrations have been applied.
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

/// Check if the `jobs` table exists.
fn jobs_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='jobs'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `jobs` and `job_photos` tables (base schema).
fn create_jobs_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS jobs (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            date        TEXT NOT NULL,
            location    TEXT NOT NULL DEFAULT 'otro'
                        CHECK(location IN ('delegacion','farmacia','optica','otro')),
            duration    INTEGER NOT NULL DEFAULT 0 CHECK(duration >= 0),
            description TEXT NOT NULL DEFAULT '',
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_jobs_date ON jobs(date);

        CREATE TABLE IF NOT EXISTS job_photos (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            job_id      INTEGER NOT NULL REFERENCES jobs(id),
            photo       TEXT NOT NULL,
            kind        TEXT NOT NULL CHECK(kind IN ('before','after')),
            uploaded_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_job_photos_job ON job_photos(job_id);
        "#,
    )?;
    Ok(())
}

/// Versioned migration: tag support arrived after the first release.
fn migrate_add_tags(conn: &Connection) -> Result<()> {
    let version = "20250406_0002_add_tags";

    // 1) Skip if already applied
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    // 2) Apply
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS tags (
            id   INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE COLLATE NOCASE
        );

        CREATE TABLE IF NOT EXISTS job_tags (
            job_id INTEGER NOT NULL REFERENCES jobs(id),
            tag_id INTEGER NOT NULL REFERENCES tags(id),
            UNIQUE(job_id, tag_id)
        );
        "#,
    )?;

    // 3) Mark as applied
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added tags and job_tags tables')",
        [version],
    )?;

    success(format!("Migration applied: {}", version));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Ensure base schema
    if !jobs_table_exists(conn)? {
        create_jobs_tables(conn)?;
        success("Created jobs tables (base schema).");
    } else {
        conn.execute_batch(
            r#"
            CREATE INDEX IF NOT EXISTS idx_jobs_date ON jobs(date);
            CREATE INDEX IF NOT EXISTS idx_job_photos_job ON job_photos(job_id);
            "#,
        )?;
    }

    // 3) Versioned migrations
    migrate_add_tags(conn)?;

    Ok(())
}
