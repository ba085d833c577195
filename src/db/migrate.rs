use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// A schema step, applied once and remembered in the `log` table.
struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20261016_0001_create_alarms",
        description: "Created alarms table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS alarms (
            id           TEXT PRIMARY KEY NOT NULL,
            hours        INTEGER NOT NULL CHECK(hours BETWEEN 0 AND 23),
            minutes      INTEGER NOT NULL CHECK(minutes BETWEEN 0 AND 59),
            label        TEXT NOT NULL DEFAULT 'New Alarm',
            active       INTEGER NOT NULL DEFAULT 1 CHECK(active IN (0, 1)),
            date         TEXT,
            repeat_days  TEXT,
            created_at   TEXT NOT NULL,
            CHECK(date IS NULL OR repeat_days IS NULL)
        );
        "#,
    },
    Migration {
        version: "20261016_0002_alarms_time_index",
        description: "Added time-of-day index on alarms",
        sql: r#"
        CREATE INDEX IF NOT EXISTS idx_alarms_time ON alarms(hours, minutes);
        "#,
    },
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

fn apply(conn: &Connection, migration: &Migration) -> Result<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(migration.sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [migration.version, migration.description],
    )?;

    tx.commit()
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db(). Returns how many steps were applied.
pub fn run_pending_migrations(conn: &Connection) -> Result<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for migration in MIGRATIONS {
        if is_applied(conn, migration.version)? {
            continue;
        }

        apply(conn, migration)?;
        applied += 1;

        log::debug!("migration {} applied", migration.version);
        success(format!(
            "Migration applied: {} → {}",
            migration.version, migration.description
        ));
    }

    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        assert_eq!(run_pending_migrations(&conn).unwrap(), MIGRATIONS.len());
        assert_eq!(run_pending_migrations(&conn).unwrap(), 0);

        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, MIGRATIONS.len() as i64);
    }

    #[test]
    fn schema_refuses_both_date_and_days() {
        let conn = Connection::open_in_memory().unwrap();
        run_pending_migrations(&conn).unwrap();

        let res = conn.execute(
            "INSERT INTO alarms (id, hours, minutes, label, active, date, repeat_days, created_at)
             VALUES ('x', 7, 0, 'a', 1, '2026-10-20', 'Mon', '2026-10-16T00:00:00Z')",
            [],
        );
        assert!(res.is_err());
    }
}
