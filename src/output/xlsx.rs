// Spreadsheet export.
//
// Each evaluation writes a new workbook named after the local time its report
// was generated, final_ranking_YYYYMMDD-HHMMSS.xlsx. Earlier files are never
// touched.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use rust_xlsxwriter::{Format, Workbook};
use tracing::info;

use crate::report::models::COLUMNS;
use crate::report::Report;

/// Name offered to the browser for the latest spreadsheet, regardless of the
/// generated file name on disk.
pub const DOWNLOAD_FILENAME: &str = "ranked_candidates.xlsx";

/// The on-disk file name for a report generated at `at`.
pub fn export_filename(at: &DateTime<Local>) -> String {
    format!("final_ranking_{}.xlsx", at.format("%Y%m%d-%H%M%S"))
}

/// Write `report` into `output_dir` and return the path of the new file.
pub fn export_report(report: &Report, output_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir).with_context(|| {
        format!("Failed to create output directory {}", output_dir.display())
    })?;

    let path = output_dir.join(export_filename(&report.generated_at));
    let buffer = render_workbook(report)?;
    std::fs::write(&path, buffer)
        .with_context(|| format!("Failed to write spreadsheet {}", path.display()))?;

    info!(path = %path.display(), rows = report.len(), "Exported ranking spreadsheet");
    Ok(path)
}

/// Render the report as an in-memory .xlsx workbook.
pub fn render_workbook(report: &Report) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet
        .set_name("Ranking")
        .context("Unable to configure the ranking worksheet")?;

    let header_format = Format::new().set_bold();
    let percent_format = Format::new().set_num_format("0.00");

    for (col, header) in COLUMNS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (i, record) in report.records.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_string(row, 0, &record.filename)?;
        sheet.write_number_with_format(row, 1, record.match_pct, &percent_format)?;
        sheet.write_string(row, 2, record.rating.as_str())?;
        sheet.write_number(row, 3, record.rank as f64)?;
        sheet.write_string(row, 4, record.missing_keywords_display())?;
        sheet.write_string(row, 5, &record.suggestion)?;
    }

    sheet.set_column_width(0, 32)?;
    sheet.set_column_width(4, 60)?;
    sheet.set_column_width(5, 32)?;

    workbook
        .save_to_buffer()
        .context("Unable to serialize the ranking workbook")
}
