use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::errors::AppResult;
use crate::store::SqliteAlarmStore;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let mut store = SqliteAlarmStore::open(&cfg.database)?;
        LogLogic::print_log(store.pool())?;
    }

    Ok(())
}
