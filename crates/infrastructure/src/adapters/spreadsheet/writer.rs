//! Spreadsheet writer - Implements ReportSinkPort
//!
//! Every input column is written back unchanged, followed by the result
//! columns. A result column whose header already exists in the input is
//! overwritten in place instead of being duplicated.

use std::path::{Path, PathBuf};

use application::ApplicationError;
use application::ports::ReportSinkPort;
use domain::{CellValue, DistanceReport, OutputRecord, RowOutcome};
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use tracing::{info, instrument};

use super::format::SheetFormat;
use crate::config::OutputConfig;

/// Header of the distance column
pub const DISTANCE_COLUMN: &str = "Distance_km";
/// Header of the duration column
pub const DURATION_COLUMN: &str = "Duration_minutes";
/// Header of the failure reason column
pub const ERROR_COLUMN: &str = "Error";

/// Writes the distance report to a spreadsheet file
#[derive(Debug, Clone)]
pub struct SpreadsheetWriter {
    path: PathBuf,
    include_error_column: bool,
}

impl SpreadsheetWriter {
    /// Writer for `path`, including the error column
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            include_error_column: true,
        }
    }

    /// Writer configured from the `[output]` section
    #[must_use]
    pub fn from_config(config: &OutputConfig) -> Self {
        Self::new(&config.path).with_error_column(config.include_error_column)
    }

    /// Toggle the error column
    #[must_use]
    pub const fn with_error_column(mut self, include: bool) -> Self {
        self.include_error_column = include;
        self
    }
}

/// The report flattened into a header line and rows of cells
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct OutputTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl OutputTable {
    pub(crate) fn from_report(report: &DistanceReport, include_error_column: bool) -> Self {
        let mut headers = report.headers.clone();
        let mut column = |name: &str| {
            headers.iter().position(|h| h == name).unwrap_or_else(|| {
                headers.push(name.to_string());
                headers.len() - 1
            })
        };

        let distance_col = column(DISTANCE_COLUMN);
        let duration_col = column(DURATION_COLUMN);
        let error_col = include_error_column.then(|| column(ERROR_COLUMN));

        let rows = report
            .rows
            .iter()
            .map(|row| {
                let mut cells = row.record.cells().to_vec();
                cells.resize(headers.len(), CellValue::Empty);

                let (distance, duration) = result_cells(row);
                cells[distance_col] = distance;
                cells[duration_col] = duration;
                if let Some(error_col) = error_col {
                    cells[error_col] = row
                        .outcome
                        .error()
                        .map_or(CellValue::Empty, CellValue::from);
                }
                cells
            })
            .collect();

        Self { headers, rows }
    }
}

fn result_cells(row: &OutputRecord) -> (CellValue, CellValue) {
    match &row.outcome {
        RowOutcome::Routed(route) => (
            CellValue::Number(route.distance_km()),
            CellValue::Number(route.duration_minutes()),
        ),
        outcome => {
            let marker = CellValue::from(outcome.marker().unwrap_or_default());
            (marker.clone(), marker)
        },
    }
}

#[allow(clippy::needless_pass_by_value)]
fn write_error(e: impl std::fmt::Display) -> ApplicationError {
    ApplicationError::Write(e.to_string())
}

fn write_xlsx(path: &Path, table: &OutputTable) -> Result<(), ApplicationError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();

    for (col, header) in table.headers.iter().enumerate() {
        worksheet
            .write_string_with_format(0, column_index(col)?, header, &header_format)
            .map_err(write_error)?;
    }

    for (idx, cells) in table.rows.iter().enumerate() {
        let row = u32::try_from(idx + 1).map_err(|_| too_large("rows"))?;
        for (col, cell) in cells.iter().enumerate() {
            let col = column_index(col)?;
            let written: Result<_, XlsxError> = match cell {
                CellValue::Empty => continue,
                CellValue::Text(text) => worksheet.write_string(row, col, text),
                CellValue::Number(value) => worksheet.write_number(row, col, *value),
                CellValue::Bool(value) => worksheet.write_boolean(row, col, *value),
            };
            written.map_err(write_error)?;
        }
    }

    workbook.save(path).map_err(write_error)
}

fn column_index(col: usize) -> Result<u16, ApplicationError> {
    u16::try_from(col).map_err(|_| too_large("columns"))
}

fn too_large(what: &str) -> ApplicationError {
    ApplicationError::Write(format!("too many {what} for a worksheet"))
}

fn write_csv(path: &Path, table: &OutputTable) -> Result<(), ApplicationError> {
    let mut writer = csv::Writer::from_path(path).map_err(write_error)?;
    writer.write_record(&table.headers).map_err(write_error)?;
    for cells in &table.rows {
        writer
            .write_record(cells.iter().map(ToString::to_string))
            .map_err(write_error)?;
    }
    writer.flush().map_err(write_error)
}

impl ReportSinkPort for SpreadsheetWriter {
    #[instrument(skip(self, report), fields(path = %self.path.display(), rows = report.rows.len()))]
    fn write(&self, report: &DistanceReport) -> Result<(), ApplicationError> {
        let format = SheetFormat::from_path(&self.path)?;
        if !format.is_writable() {
            return Err(ApplicationError::UnsupportedFormat(format!(
                "cannot write '{}' (expected .xlsx or .csv)",
                self.path.display()
            )));
        }

        let table = OutputTable::from_report(report, self.include_error_column);
        match format {
            SheetFormat::Csv => write_csv(&self.path, &table)?,
            _ => write_xlsx(&self.path, &table)?,
        }

        info!("Results saved to {}", self.path.display());
        Ok(())
    }
}
