//! Spreadsheet file formats, chosen by extension

use std::path::Path;

use application::ApplicationError;

/// A spreadsheet format known to the reader or writer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    /// Office Open XML workbook
    Xlsx,
    /// Macro-enabled workbook
    Xlsm,
    /// Binary workbook
    Xlsb,
    /// Legacy Excel workbook
    Xls,
    /// OpenDocument spreadsheet
    Ods,
    /// Comma-separated values
    Csv,
}

impl SheetFormat {
    /// Detect the format from the file extension (case-insensitive)
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedFormat` for a missing or unknown extension.
    pub fn from_path(path: &Path) -> Result<Self, ApplicationError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "xlsx" => Ok(Self::Xlsx),
            "xlsm" => Ok(Self::Xlsm),
            "xlsb" => Ok(Self::Xlsb),
            "xls" => Ok(Self::Xls),
            "ods" => Ok(Self::Ods),
            "csv" => Ok(Self::Csv),
            _ => Err(ApplicationError::UnsupportedFormat(format!(
                "'{}' (expected .xlsx, .xlsm, .xlsb, .xls, .ods or .csv)",
                path.display()
            ))),
        }
    }

    /// Whether results can be written in this format
    #[must_use]
    pub const fn is_writable(self) -> bool {
        matches!(self, Self::Xlsx | Self::Csv)
    }
}
