// src/export/mod.rs

mod fs_utils;
mod json_csv;
mod model;
mod xlsx;

pub use model::{MemberExport, rows_from};

use crate::errors::{AppError, AppResult};
use crate::models::Reconciliation;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Shared completion message for every export format.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    /// Pick the format from the output file extension.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "xlsx" => Ok(ExportFormat::Xlsx),
            other => Err(AppError::InvalidExportFormat(other.to_string())),
        }
    }
}

/// Write the per-member result of a reconciliation to `path`.
pub fn export_reconciliation(rec: &Reconciliation, path: &Path, force: bool) -> AppResult<()> {
    let format = ExportFormat::from_path(path)?;
    fs_utils::ensure_writable(path, force)?;

    let rows = rows_from(rec);
    info(format!(
        "Exporting {} member row(s) as {}",
        rows.len(),
        format.as_str()
    ));
    match format {
        ExportFormat::Csv => json_csv::export_csv(&rows, path),
        ExportFormat::Json => json_csv::export_json(&rows, path),
        ExportFormat::Xlsx => xlsx::export_xlsx(&rows, path),
    }
}
