use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::errors::AppResult;
use crate::store::SqliteAlarmStore;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { format, file } = cmd {
        let mut store = SqliteAlarmStore::open(&cfg.database)?;
        let path = expand_tilde(file);
        let created = ImportLogic::import(&mut store, *format, &path)?;

        store.audit(
            "import",
            &path.display().to_string(),
            &format!("Imported {} alarm(s)", created.len()),
        );
        success(format!(
            "Imported {} alarm(s) from {}",
            created.len(),
            path.display()
        ));
    }
    Ok(())
}
