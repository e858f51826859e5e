// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{days_to_table, get_headers};
use crate::export::pdf::PdfManager;
use crate::export::{DayExport, notify_export_success};
use crate::ui::messages::info;
use std::path::Path;

/// Export PDF: a paginated table of the per-day rows, with a totals line.
pub(crate) fn export_pdf(days: &[DayExport], path: &Path, title: &str) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let actual: f64 = days.iter().map(|d| d.actual_work_hours).sum();
    let gross: f64 = days.iter().map(|d| d.gross_hours).sum();
    let subtitle = format!(
        "{} day(s) - actual {:.2} h - gross {:.2} h",
        days.len(),
        actual,
        gross
    );

    let mut pdf = PdfManager::new();
    pdf.write_table(title, &subtitle, &get_headers(), &days_to_table(days));

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
