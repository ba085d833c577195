use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::core::resolve::resolve_id;
use crate::errors::AppResult;
use crate::store::SqliteAlarmStore;
use crate::ui::messages::{info, success};
use crate::ui::prompt::confirm;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, all, force } = cmd {
        let mut store = SqliteAlarmStore::open(&cfg.database)?;

        if *all {
            if !*force && !confirm("Delete all alarms?") {
                info("Operation cancelled.");
                return Ok(());
            }

            let removed = DeleteLogic::all(&mut store)?;
            store.audit(
                "del_all",
                "alarms",
                &format!("Deleted {} alarm(s)", removed),
            );
            success(format!("{} alarm(s) deleted.", removed));
            return Ok(());
        }

        if let Some(token) = id {
            let id = resolve_id(&store, token)?;
            DeleteLogic::one(&mut store, &id)?;

            store.audit("del", &id.to_string(), "Alarm deleted");
            success(format!("Alarm {} has been deleted.", id.short()));
        }
    }

    Ok(())
}
