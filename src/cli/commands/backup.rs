use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::store::SqliteAlarmStore;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        let store = SqliteAlarmStore::open(&cfg.database)?;
        BackupLogic::backup(
            &store,
            &cfg.database,
            &expand_tilde(file),
            *compress,
            *force,
        )?;
    }

    Ok(())
}
