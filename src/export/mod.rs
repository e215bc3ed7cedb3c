//! Spreadsheet export for the checklist
//!
//! Produces a single-sheet xlsx workbook in memory. Rows always follow the
//! template order and ignore whatever filter the dashboard has active.

use chrono::{Datelike, NaiveDate};
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::checklist::Checklist;
use crate::errors::{ChecklistError, Result};

/// MIME type of the exported workbook
pub const MIME_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Header row of the exported sheet
pub const HEADERS: [&str; 3] = ["Activity", "Status", "Due Date"];

/// Default sheet name
pub const DEFAULT_SHEET_NAME: &str = "Performance Checklist";

/// Default file name without extension
pub const DEFAULT_FILE_STEM: &str = "digital_export_performance";

const DATE_FORMAT: &str = "yyyy-mm-dd";

/// Years an Excel date cell can hold
const EXCEL_YEARS: std::ops::RangeInclusive<i32> = 1900..=9999;

/// Whether `date` can be written as a real Excel date value
pub fn is_excel_date(date: NaiveDate) -> bool {
    EXCEL_YEARS.contains(&date.year())
}

/// Naming options for the exported workbook
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub sheet_name: String,
    pub file_stem: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            file_stem: DEFAULT_FILE_STEM.to_string(),
        }
    }
}

impl ExportOptions {
    /// Suggested download file name
    pub fn file_name(&self) -> String {
        format!("{}.xlsx", self.file_stem)
    }
}

/// Serialized workbook ready for delivery
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub sheet_name: String,
}

impl ExportArtifact {
    pub fn mime_type(&self) -> &'static str {
        MIME_TYPE
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Write the workbook into `dir`, creating it if needed
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        fs::write(&path, &self.bytes)?;
        info!(
            path = %path.display(),
            bytes = self.len(),
            mime = self.mime_type(),
            "export written"
        );
        Ok(path)
    }
}

/// Serialize every checklist row (label, status, due date) into an xlsx blob
pub fn export_table(checklist: &Checklist, options: &ExportOptions) -> Result<ExportArtifact> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let date_format = Format::new().set_num_format(DATE_FORMAT);

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(&options.sheet_name)?;

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (i, record) in checklist.records().iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet.write_string(row, 0, record.label.as_str())?;
        worksheet.write_string(row, 1, record.status.as_str())?;
        worksheet.write_datetime_with_format(row, 2, &excel_date(record.due_date)?, &date_format)?;
    }

    worksheet.set_column_width(0, 44.0)?;
    worksheet.set_column_width(1, 14.0)?;
    worksheet.set_column_width(2, 12.0)?;
    worksheet.set_freeze_panes(1, 0)?;

    let bytes = workbook.save_to_buffer()?;
    info!(
        rows = checklist.len(),
        bytes = bytes.len(),
        sheet = %options.sheet_name,
        "checklist exported"
    );

    Ok(ExportArtifact {
        bytes,
        file_name: options.file_name(),
        sheet_name: options.sheet_name.clone(),
    })
}

fn excel_date(date: NaiveDate) -> Result<ExcelDateTime> {
    let year = u16::try_from(date.year())
        .ok()
        .filter(|_| is_excel_date(date))
        .ok_or_else(|| {
            ChecklistError::InvalidDate(format!("{} is outside Excel's 1900-9999 range", date))
        })?;

    Ok(ExcelDateTime::from_ymd(
        year,
        date.month() as u8,
        date.day() as u8,
    )?)
}
