use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::errors::{AppError, AppResult};
use crate::export::AlarmRow;
use crate::models::{Alarm, Schedule, TimeOfDay};
use crate::store::SqliteAlarmStore;
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_caption, colorize_active, dim_unless};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { json } = cmd {
        let store = SqliteAlarmStore::open(&cfg.database)?;
        let alarms = ListLogic::fetch(&store);

        if *json {
            let rows: Vec<AlarmRow> = alarms.iter().map(AlarmRow::from).collect();
            let out = serde_json::to_string_pretty(&rows)
                .map_err(|e| AppError::Other(e.to_string()))?;
            println!("{}", out);
            return Ok(());
        }

        if alarms.is_empty() {
            info("No alarms yet. Add one with `ralarm add HH:MM`.");
            return Ok(());
        }

        print_table(cfg, &alarms);
    }

    Ok(())
}

/// Time as configured: "14:05" or "2:05 PM".
pub(crate) fn format_time(cfg: &Config, time: &TimeOfDay) -> String {
    if cfg.uses_12h() {
        time.to_12h_string()
    } else {
        time.to_string()
    }
}

fn print_table(cfg: &Config, alarms: &[Alarm]) {
    let mut table = Table::new(vec![
        Column::new("ID", 8),
        Column::new("TIME", 5),
        Column::new("LABEL", 10),
        Column::new("SCHEDULE", 10),
        Column::new("ON", 3),
    ]);

    for a in alarms {
        let schedule = Schedule::describe(a.schedule.as_ref());
        let schedule = format!("{}{}{}", color_for_caption(&schedule), schedule, RESET);

        table.add_row(vec![
            a.id.short(),
            dim_unless(a.active, &format_time(cfg, &a.time)),
            dim_unless(a.active, &a.label),
            schedule,
            colorize_active(a.active),
        ]);
    }

    table.fit();
    header("⏰ Alarms", &format!("{} total", alarms.len()));
    println!("{}", table.render());
}
