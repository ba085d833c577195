// src/export/mod.rs

mod csv;
mod fs_utils;
mod json;
mod model;

pub use model::AlarmRow;
pub(crate) use fs_utils::ensure_writable;

use crate::errors::AppResult;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for exports.
pub(crate) fn notify_export_success(count: usize, path: &Path) {
    success(format!(
        "Exported {} alarm(s) to {}",
        count,
        path.display()
    ));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn write(&self, path: &Path, rows: &[AlarmRow]) -> AppResult<()> {
        match self {
            ExportFormat::Csv => csv::write_csv(path, rows),
            ExportFormat::Json => json::write_json(path, rows),
        }
    }

    pub fn read(&self, path: &Path) -> AppResult<Vec<AlarmRow>> {
        match self {
            ExportFormat::Csv => csv::read_csv(path),
            ExportFormat::Json => json::read_json(path),
        }
    }
}
