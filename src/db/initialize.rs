use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::time::Duration;

/// Wait this long on a locked database before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(2);

/// Prepare a freshly opened connection: lock handling plus schema upgrades.
/// Returns how many migrations were applied.
pub fn init_db(conn: &Connection) -> AppResult<usize> {
    conn.busy_timeout(BUSY_TIMEOUT)?;

    let applied = run_pending_migrations(conn)?;
    if applied > 0 {
        log::info!("database schema upgraded ({} step(s))", applied);
    }
    Ok(applied)
}
