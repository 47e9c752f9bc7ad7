//! Spreadsheet reader - Implements AddressSourcePort
//!
//! Workbooks (.xlsx, .xlsm, .xlsb, .xls, .ods) are read with `calamine`,
//! CSV files with `csv`. Either way the sheet is first turned into a grid of
//! [`CellValue`]s indexed from cell A1, so `header_row` always counts from
//! the top of the sheet.

use std::path::{Path, PathBuf};

use application::ApplicationError;
use application::ports::AddressSourcePort;
use calamine::{Data, Reader, open_workbook_auto};
use domain::{AddressRecord, AddressSheet, CellValue};
use tracing::{debug, info, instrument};

use super::format::SheetFormat;
use crate::config::InputConfig;

/// Headers of the three address columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnNames {
    /// Street and house number
    pub address: String,
    /// Postal code
    pub postal_code: String,
    /// City
    pub city: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            address: "Address".to_string(),
            postal_code: "PostalCode".to_string(),
            city: "City".to_string(),
        }
    }
}

/// Reads the address sheet from a spreadsheet file
#[derive(Debug, Clone)]
pub struct SpreadsheetReader {
    path: PathBuf,
    sheet: Option<String>,
    header_row: usize,
    columns: ColumnNames,
}

impl SpreadsheetReader {
    /// Reader for the first sheet of `path` with the default column names
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            sheet: None,
            header_row: 0,
            columns: ColumnNames::default(),
        }
    }

    /// Reader configured from the `[input]` section
    #[must_use]
    pub fn from_config(config: &InputConfig) -> Self {
        let reader = Self::new(&config.path)
            .with_header_row(config.header_row)
            .with_columns(ColumnNames {
                address: config.address_column.clone(),
                postal_code: config.postal_code_column.clone(),
                city: config.city_column.clone(),
            });
        match &config.sheet {
            Some(sheet) => reader.with_sheet(sheet.clone()),
            None => reader,
        }
    }

    /// Read the named worksheet instead of the first one
    #[must_use]
    pub fn with_sheet(mut self, sheet: impl Into<String>) -> Self {
        self.sheet = Some(sheet.into());
        self
    }

    /// Zero-based row holding the headers
    #[must_use]
    pub const fn with_header_row(mut self, header_row: usize) -> Self {
        self.header_row = header_row;
        self
    }

    /// Use custom column headers
    #[must_use]
    pub fn with_columns(mut self, columns: ColumnNames) -> Self {
        self.columns = columns;
        self
    }

    fn read_workbook(&self) -> Result<Vec<Vec<CellValue>>, ApplicationError> {
        let mut workbook = open_workbook_auto(&self.path).map_err(input_error)?;

        let range = match &self.sheet {
            Some(name) => workbook.worksheet_range(name),
            None => workbook.worksheet_range_at(0).ok_or_else(|| {
                ApplicationError::InputRead("workbook contains no worksheets".to_string())
            })?,
        }
        .map_err(input_error)?;

        // calamine ranges start at the first used cell, not at A1
        let (first_row, first_col) = range.start().unwrap_or((0, 0));
        let mut grid: Vec<Vec<CellValue>> = vec![Vec::new(); first_row as usize];
        for row in range.rows() {
            let mut cells = vec![CellValue::Empty; first_col as usize];
            cells.extend(row.iter().map(cell_from_data));
            grid.push(cells);
        }
        Ok(grid)
    }
}

fn read_csv(path: &Path) -> Result<Vec<Vec<CellValue>>, ApplicationError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(input_error)?;

    reader
        .records()
        .map(|record| {
            record
                .map(|record| record.iter().map(CellValue::from).collect())
                .map_err(input_error)
        })
        .collect()
}

#[allow(clippy::needless_pass_by_value)]
fn input_error(e: impl std::fmt::Display) -> ApplicationError {
    ApplicationError::InputRead(e.to_string())
}

#[allow(clippy::cast_precision_loss)]
fn cell_from_data(data: &Data) -> CellValue {
    match data {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(text) => CellValue::from(text.as_str()),
        Data::Float(value) => CellValue::Number(*value),
        Data::Int(value) => CellValue::Number(*value as f64),
        Data::Bool(value) => CellValue::Bool(*value),
        other => CellValue::Text(other.to_string()),
    }
}

/// Turn a raw grid into an address sheet
///
/// Rows above `header_row` are ignored, every row below it is a record.
/// Headers are padded with blanks to the widest row so that no cell is
/// lost on the way to the output.
pub(crate) fn build_sheet(
    grid: Vec<Vec<CellValue>>,
    header_row: usize,
    columns: &ColumnNames,
) -> Result<AddressSheet, ApplicationError> {
    let mut rows = grid.into_iter().skip(header_row);
    let header_cells = rows.next().unwrap_or_default();
    let data: Vec<Vec<CellValue>> = rows.collect();

    let mut headers: Vec<String> = header_cells
        .iter()
        .map(|cell| cell.normalized().trim_start_matches('\u{feff}').to_string())
        .collect();
    let width = data.iter().map(Vec::len).max().unwrap_or(0);
    if width > headers.len() {
        headers.resize(width, String::new());
    }

    let position = |name: &str| headers.iter().position(|h| h == name.trim());
    let indices = [
        position(&columns.address),
        position(&columns.postal_code),
        position(&columns.city),
    ];

    let [Some(address_col), Some(postal_code_col), Some(city_col)] = indices else {
        let missing: Vec<&str> = [&columns.address, &columns.postal_code, &columns.city]
            .into_iter()
            .zip(indices)
            .filter(|(_, idx)| idx.is_none())
            .map(|(name, _)| name.as_str())
            .collect();
        return Err(schema_error(&missing, &headers));
    };

    let records = data
        .into_iter()
        .enumerate()
        .map(|(row_index, cells)| {
            AddressRecord::from_cells(row_index, cells, address_col, postal_code_col, city_col)
        })
        .collect();

    Ok(AddressSheet::new(headers, records))
}

fn schema_error(missing: &[&str], headers: &[String]) -> ApplicationError {
    let available: Vec<&str> = headers
        .iter()
        .map(String::as_str)
        .filter(|h| !h.is_empty())
        .collect();
    let available = if available.is_empty() {
        "(no columns detected)".to_string()
    } else {
        available.join(", ")
    };

    ApplicationError::Schema {
        missing: missing.join(", "),
        available,
    }
}

impl AddressSourcePort for SpreadsheetReader {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<AddressSheet, ApplicationError> {
        if !self.path.is_file() {
            return Err(ApplicationError::FileNotFound(
                self.path.display().to_string(),
            ));
        }

        let format = SheetFormat::from_path(&self.path)?;
        debug!(?format, "Reading input sheet");

        let grid = match format {
            SheetFormat::Csv => read_csv(&self.path)?,
            _ => self.read_workbook()?,
        };

        let sheet = build_sheet(grid, self.header_row, &self.columns)?;
        info!(
            rows = sheet.len(),
            columns = sheet.headers.len(),
            "Loaded input sheet"
        );
        Ok(sheet)
    }
}
