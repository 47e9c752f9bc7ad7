//! Spreadsheet adapters - reading addresses and writing distance reports

mod format;
mod reader;
mod writer;

pub use format::SheetFormat;
pub use reader::{ColumnNames, SpreadsheetReader};
pub use writer::{DISTANCE_COLUMN, DURATION_COLUMN, ERROR_COLUMN, SpreadsheetWriter};
