use crate::cli::commands::add::schedule_from_flags;
use crate::cli::commands::list::format_time;
use crate::cli::commands::toggle::forced_state;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::{AlarmChanges, EditLogic};
use crate::core::resolve::resolve_id;
use crate::errors::AppResult;
use crate::models::Schedule;
use crate::store::SqliteAlarmStore;
use crate::ui::messages::{info, success};
use crate::utils::time::parse_optional_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        time,
        label,
        date,
        days,
        no_schedule,
        on,
        off,
    } = cmd
    {
        let changes = AlarmChanges {
            time: parse_optional_time(time.as_ref())?,
            label: label.clone(),
            active: forced_state(*on, *off),
            schedule: schedule_from_flags(date.as_ref(), days.as_deref(), *no_schedule)?,
        };

        let mut store = SqliteAlarmStore::open(&cfg.database)?;
        let id = resolve_id(&store, id)?;

        if changes.is_empty() {
            info("Nothing to change.");
            return Ok(());
        }

        let alarm = EditLogic::apply(&mut store, &id, changes)?;

        store.audit(
            "edit",
            &alarm.id.to_string(),
            &format!("Edited alarm '{}' at {}", alarm.label, alarm.time),
        );

        success(format!(
            "Alarm {} updated: {} '{}' ({})",
            alarm.id.short(),
            format_time(cfg, &alarm.time),
            alarm.label,
            Schedule::describe(alarm.schedule.as_ref())
        ));
    }

    Ok(())
}
