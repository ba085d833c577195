use crate::cli::commands::list::format_time;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::{AppError, AppResult};
use crate::models::Schedule;
use crate::store::SqliteAlarmStore;
use crate::ui::messages::success;
use crate::utils::date;

/// Add a new alarm.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        time,
        label,
        date: date_arg,
        days,
        no_schedule,
        inactive,
    } = cmd
    {
        //
        // 1. Schedule (default = ring once, today)
        //
        let schedule = schedule_from_flags(date_arg.as_ref(), days.as_deref(), *no_schedule)?
            .unwrap_or_else(|| Some(Schedule::OneShot(date::today())));

        //
        // 2. Label (default from configuration)
        //
        let label = label.as_deref().unwrap_or(&cfg.default_label);

        //
        // 3. Store
        //
        let mut store = SqliteAlarmStore::open(&cfg.database)?;
        let alarm = AddLogic::apply(&mut store, time, label, !*inactive, schedule)?;

        store.audit(
            "add",
            &alarm.id.to_string(),
            &format!("Added alarm '{}' at {}", alarm.label, alarm.time),
        );

        success(format!(
            "Alarm {} set for {} ({})",
            alarm.id.short(),
            format_time(cfg, &alarm.time),
            Schedule::describe(alarm.schedule.as_ref())
        ));
    }

    Ok(())
}

/// Schedule requested through `--date` / `--days` / `--no-schedule`.
///
/// `None` means no flag was given; `Some(None)` asks for no schedule at all.
pub(crate) fn schedule_from_flags(
    date_arg: Option<&String>,
    days: Option<&str>,
    no_schedule: bool,
) -> AppResult<Option<Option<Schedule>>> {
    if no_schedule {
        return Ok(Some(None));
    }

    let date = date::parse_optional_date(date_arg).map_err(AppError::InvalidDate)?;
    if date.is_none() && days.is_none() {
        return Ok(None);
    }

    Schedule::from_parts(date, days).map(Some)
}
