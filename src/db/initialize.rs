use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database.
/// Delegates all schema creation / upgrades to the migration engine.
/// Returns the number of migrations applied by this call.
pub fn init_db(conn: &Connection) -> AppResult<usize> {
    let applied = run_pending_migrations(conn)?;
    Ok(applied)
}
