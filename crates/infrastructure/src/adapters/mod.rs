//! Adapters implementing application ports

mod openrouteservice_adapter;
pub mod spreadsheet;

pub use openrouteservice_adapter::OpenRouteServiceAdapter;
pub use spreadsheet::{SheetFormat, SpreadsheetReader, SpreadsheetWriter};
