// src/export/mod.rs

mod excel_date;
mod fs_utils;
mod json_csv;
pub mod logic;
mod model;
mod pdf;
mod pdf_export;
pub mod range;
mod xlsx;

pub use logic::ExportLogic;
pub use model::DayExport;

use crate::ui::messages::{success, warning};
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every export format.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
    Pdf,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }

    /// Warn when the output file name suggests another format.
    pub(crate) fn check_extension(&self, path: &Path) {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase());

        if ext.as_deref() != Some(self.as_str()) {
            warning(format!(
                "'{}' does not end in .{}: the content is {} anyway.",
                path.display(),
                self.as_str(),
                self.as_str().to_uppercase()
            ));
        }
    }
}
