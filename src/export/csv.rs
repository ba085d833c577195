use super::model::AlarmRow;
use crate::errors::{AppError, AppResult};
use csv::{Reader, Writer};
use std::path::Path;

/// Write alarms as CSV, one row per alarm with a header line.
pub fn write_csv(path: &Path, rows: &[AlarmRow]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(|e| AppError::Export(e.to_string()))?;

    for row in rows {
        wtr.serialize(row)
            .map_err(|e| AppError::Export(e.to_string()))?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn read_csv(path: &Path) -> AppResult<Vec<AlarmRow>> {
    let mut rdr = Reader::from_path(path).map_err(|e| AppError::Import(e.to_string()))?;

    let mut out = Vec::new();
    for (i, rec) in rdr.deserialize::<AlarmRow>().enumerate() {
        let row = rec.map_err(|e| AppError::Import(format!("row {}: {}", i + 1, e)))?;
        out.push(row);
    }
    Ok(out)
}
