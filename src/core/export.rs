use crate::errors::AppResult;
use crate::export::{AlarmRow, ExportFormat, ensure_writable, notify_export_success};
use crate::store::AlarmStore;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Write every alarm to `path`. Returns the number of alarms written.
    pub fn export<S: AlarmStore + ?Sized>(
        store: &S,
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<usize> {
        ensure_writable(path, force)?;

        let rows: Vec<AlarmRow> = store.list()?.iter().map(AlarmRow::from).collect();
        format.write(path, &rows)?;

        log::info!("exported {} alarms as {}", rows.len(), format.as_str());
        notify_export_success(rows.len(), path);
        Ok(rows.len())
    }
}
