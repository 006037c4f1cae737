use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Prepare a database file for use.
///
/// Referential integrity is enforced per connection, and all schema
/// creation / upgrades are delegated to the migration engine — no direct
/// CREATE TABLE happens here.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.pragma_update(None, "foreign_keys", "ON")?;
    run_pending_migrations(conn)?;
    Ok(())
}
