use crate::db::pool::DbPool;
use crate::db::queries::count_alarms;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) ALARMS
    //
    let (total, active) = count_alarms(&pool.conn)?;
    println!(
        "{}• Alarms:{} {}{}{} ({} active, {} off)",
        CYAN,
        RESET,
        GREEN,
        total,
        RESET,
        active,
        total - active
    );

    //
    // 3) ONE-SHOT DATE RANGE
    //
    let first_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM alarms WHERE date IS NOT NULL ORDER BY date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM alarms WHERE date IS NOT NULL ORDER BY date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let recurring: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM alarms WHERE repeat_days IS NOT NULL",
        [],
        |row| row.get(0),
    )?;

    let fmt_first = first_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• One-shot dates:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);
    println!("{}• Recurring alarms:{} {}", CYAN, RESET, recurring);

    println!();
    Ok(())
}
