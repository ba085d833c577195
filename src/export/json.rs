use super::model::AlarmRow;
use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::Path;

/// Write alarms as a pretty-printed JSON array.
pub fn write_json(path: &Path, rows: &[AlarmRow]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows).map_err(|e| AppError::Export(e.to_string()))?;
    fs::write(path, json)?;
    Ok(())
}

pub fn read_json(path: &Path) -> AppResult<Vec<AlarmRow>> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| AppError::Import(e.to_string()))
}
