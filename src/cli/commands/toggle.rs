use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::resolve::resolve_id;
use crate::core::toggle::ToggleLogic;
use crate::errors::AppResult;
use crate::store::SqliteAlarmStore;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Toggle { id, on, off } = cmd {
        let mut store = SqliteAlarmStore::open(&cfg.database)?;
        let id = resolve_id(&store, id)?;

        let alarm = ToggleLogic::apply(&mut store, &id, forced_state(*on, *off))?;
        let state = if alarm.active { "on" } else { "off" };

        store.audit(
            "toggle",
            &alarm.id.to_string(),
            &format!("Alarm switched {}", state),
        );
        success(format!("Alarm {} is now {}.", alarm.id.short(), state));
    }

    Ok(())
}

/// `--on` / `--off` pair as an optional forced state.
pub(crate) fn forced_state(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}
