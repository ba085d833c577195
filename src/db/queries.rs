use crate::errors::AppError;
use crate::models::{Alarm, AlarmId, Schedule, TimeOfDay};
use chrono::NaiveDate;
use rusqlite::params;
use rusqlite::{Connection, OptionalExtension, Result, Row};

const SELECT_ALARMS: &str = "SELECT id, hours, minutes, label, active, date, repeat_days, created_at
     FROM alarms";

fn corrupt(column: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(err))
}

pub fn map_row(row: &Row) -> Result<Alarm> {
    let id_str: String = row.get("id")?;
    let id = AlarmId::parse(&id_str)
        .ok_or_else(|| corrupt(0, AppError::CorruptRecord(format!("bad id '{}'", id_str))))?;

    let hours: i64 = row.get("hours")?;
    let minutes: i64 = row.get("minutes")?;
    let time = u8::try_from(hours)
        .ok()
        .zip(u8::try_from(minutes).ok())
        .and_then(|(h, m)| TimeOfDay::new(h, m).ok())
        .ok_or_else(|| {
            corrupt(
                1,
                AppError::InvalidTime(format!("{}:{:02} (alarm {})", hours, minutes, id_str)),
            )
        })?;

    let date_str: Option<String> = row.get("date")?;
    let date = match date_str {
        Some(d) => Some(
            NaiveDate::parse_from_str(&d, "%Y-%m-%d")
                .map_err(|_| corrupt(5, AppError::InvalidDate(d.clone())))?,
        ),
        None => None,
    };
    let days: Option<String> = row.get("repeat_days")?;
    let schedule = Schedule::from_parts(date, days.as_deref()).map_err(|e| corrupt(6, e))?;

    Ok(Alarm {
        id,
        time,
        label: row.get("label")?,
        active: row.get("active")?,
        schedule,
        created_at: row.get("created_at")?,
    })
}

pub fn load_alarms(conn: &Connection) -> Result<Vec<Alarm>> {
    let mut stmt = conn.prepare(&format!(
        "{SELECT_ALARMS} ORDER BY hours ASC, minutes ASC, created_at ASC"
    ))?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_alarm(conn: &Connection, id: &AlarmId) -> Result<Option<Alarm>> {
    let mut stmt = conn.prepare(&format!("{SELECT_ALARMS} WHERE id = ?1"))?;
    stmt.query_row([id.to_string()], map_row).optional()
}

/// Ids whose textual form starts with `prefix` (hyphens ignored).
/// The prefix is compared literally: `_` and `%` are not wildcards.
pub fn find_ids_by_prefix(conn: &Connection, prefix: &str) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT id FROM alarms
         WHERE substr(replace(id, '-', ''), 1, length(?1)) = ?1
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([prefix.replace('-', "").to_lowercase()], |row| {
        row.get::<_, String>(0)
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_alarm(conn: &Connection, alarm: &Alarm) -> Result<()> {
    let (date, days) = Schedule::to_columns(alarm.schedule.as_ref());
    conn.execute(
        "INSERT INTO alarms (id, hours, minutes, label, active, date, repeat_days, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            alarm.id.to_string(),
            i64::from(alarm.time.hours()),
            i64::from(alarm.time.minutes()),
            alarm.label,
            alarm.active,
            date,
            days,
            alarm.created_at,
        ],
    )?;
    Ok(())
}

/// Update an alarm (all fields except id and created_at).
/// Returns the number of rows touched (0 when the id is unknown).
pub fn update_alarm(conn: &Connection, alarm: &Alarm) -> Result<usize> {
    let (date, days) = Schedule::to_columns(alarm.schedule.as_ref());
    conn.execute(
        "UPDATE alarms
         SET hours = ?1, minutes = ?2, label = ?3,
             active = ?4, date = ?5, repeat_days = ?6
         WHERE id = ?7",
        params![
            i64::from(alarm.time.hours()),
            i64::from(alarm.time.minutes()),
            alarm.label,
            alarm.active,
            date,
            days,
            alarm.id.to_string(),
        ],
    )
}

pub fn delete_alarm(conn: &Connection, id: &AlarmId) -> Result<usize> {
    conn.execute("DELETE FROM alarms WHERE id = ?1", [id.to_string()])
}

/// Remove every alarm in one transaction.
pub fn delete_all_alarms(conn: &mut Connection) -> Result<usize> {
    let tx = conn.transaction()?;
    let removed = tx.execute("DELETE FROM alarms", [])?;
    tx.commit()?;
    Ok(removed)
}

pub fn count_alarms(conn: &Connection) -> Result<(i64, i64)> {
    conn.query_row(
        "SELECT COUNT(*), COALESCE(SUM(active), 0) FROM alarms",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )
}
