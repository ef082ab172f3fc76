//! Report downloads.
//!
//! Thin wiring from any serialisable record collection to the export
//! builders, plus the filename the download is saved under.

use serde::Serialize;

use axon_export::{csv, json, ExportError};

/// Download format picked on the export screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// A rendered download.
#[derive(Debug, Clone)]
pub struct Export {
    pub file_name: String,
    pub content: String,
}

/// Render `records` in the chosen format, named after the dataset
/// (`"employees"` -> `employees.csv`).
pub fn export_records<T: Serialize>(
    dataset: &str,
    records: &[T],
    format: ExportFormat,
) -> Result<Export, ExportError> {
    let content = match format {
        ExportFormat::Csv => csv::to_csv(records)?,
        ExportFormat::Json => json::to_json_pretty(records)?,
    };

    Ok(Export {
        file_name: export_file_name(dataset, format),
        content,
    })
}

/// `("employees", Csv)` -> `"employees.csv"`.
pub fn export_file_name(dataset: &str, format: ExportFormat) -> String {
    format!("{dataset}.{}", format.extension())
}
