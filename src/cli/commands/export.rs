use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::errors::AppResult;
use crate::store::SqliteAlarmStore;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let store = SqliteAlarmStore::open(&cfg.database)?;
        let path = expand_tilde(file);
        let count = ExportLogic::export(&store, *format, &path, *force)?;

        store.audit(
            "export",
            &path.display().to_string(),
            &format!("Exported {} alarm(s) as {}", count, format.as_str()),
        );
    }
    Ok(())
}
