// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::parse_to_excel_date;
use crate::export::model::{day_to_row, get_headers};
use crate::export::{DayExport, notify_export_success};
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Export XLSX with banded rows, a frozen header, a totals row and
/// auto-sized columns.
pub(crate) fn export_xlsx(days: &[DayExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Attendance").map_err(to_app_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_app_error)?;
    }
    worksheet.set_freeze_panes(1, 0).map_err(to_app_error)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, day) in days.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in day_to_row(day).iter().enumerate() {
            write_cell(worksheet, row, col as u16, value, band)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    // ---------------------------
    // Totals (hour columns only)
    // ---------------------------
    if !days.is_empty() {
        let total_row = (days.len() + 1) as u32;
        let total_format = Format::new()
            .set_bold()
            .set_num_format("0.00")
            .set_border(FormatBorder::Thin);

        worksheet
            .write_with_format(total_row, 0, "Total", &total_format)
            .map_err(to_app_error)?;

        let totals = [
            days.iter().map(|d| d.break_hours).sum::<f64>(),
            days.iter().map(|d| d.interrupt_hours).sum(),
            days.iter().map(|d| d.side_job_hours).sum(),
            days.iter().map(|d| d.work_hours).sum(),
            days.iter().map(|d| d.actual_work_hours).sum(),
            days.iter().map(|d| d.gross_hours).sum(),
        ];
        for (i, total) in totals.iter().enumerate() {
            worksheet
                .write_with_format(total_row, (3 + i) as u16, *total, &total_format)
                .map_err(to_app_error)?;
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    workbook.save(path).map_err(to_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Write one cell, as a date/time serial or a number when the text allows it.
fn write_cell(ws: &mut Worksheet, row: u32, col: u16, s: &str, bg: Color) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    if let Some((num_format, serial)) = parse_to_excel_date(s) {
        ws.write_with_format(row, col, serial, &base.set_num_format(num_format))
            .map_err(to_app_error)?;
        return Ok(());
    }

    if let Ok(num) = s.parse::<f64>() {
        let fmt = base.set_num_format("0.00").set_align(FormatAlign::Right);
        ws.write_with_format(row, col, num, &fmt)
            .map_err(to_app_error)?;
        return Ok(());
    }

    ws.write_with_format(row, col, s, &base)
        .map_err(to_app_error)?;
    Ok(())
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
