use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::models::{Alarm, AlarmDraft};
use crate::store::AlarmStore;
use std::path::Path;

pub struct ImportLogic;

impl ImportLogic {
    /// Create one new alarm per row of `path`.
    ///
    /// Every row is validated before anything is stored and the rows are
    /// stored in one batch, so a bad row or a failed write leaves the store
    /// untouched. Ids in the file are ignored.
    pub fn import<S: AlarmStore + ?Sized>(
        store: &mut S,
        format: ExportFormat,
        path: &Path,
    ) -> AppResult<Vec<Alarm>> {
        let rows = format.read(path)?;

        let drafts = rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                row.to_draft()
                    .map_err(|e| AppError::Import(format!("row {}: {}", i + 1, e)))
            })
            .collect::<AppResult<Vec<AlarmDraft>>>()?;

        let created = store.add_all(drafts)?;

        log::info!("imported {} alarms from {}", created.len(), path.display());
        Ok(created)
    }
}
