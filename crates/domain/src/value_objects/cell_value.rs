//! Raw spreadsheet cell value

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single cell as read from an input sheet
///
/// Spreadsheets hand back loosely typed values: postal codes often arrive
/// as floats (`8001.0`), blank cells as empty strings or nothing at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    /// Blank cell
    #[default]
    Empty,
    /// Text content, untrimmed
    Text(String),
    /// Numeric content
    Number(f64),
    /// Boolean content
    Bool(bool),
}

impl CellValue {
    /// Normalized text of this cell, as used when composing addresses
    ///
    /// Text is trimmed, integral numbers lose their fractional part
    /// and non-finite numbers become empty.
    #[must_use]
    pub fn normalized(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(text) => text.trim().to_string(),
            Self::Number(value) => format_number(*value),
            Self::Bool(value) => value.to_string(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            Self::Empty
        } else {
            Self::Text(value.to_string())
        }
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        if value.is_empty() {
            Self::Empty
        } else {
            Self::Text(value)
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            other => f.write_str(&other.normalized()),
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_trimmed() {
        let cell = CellValue::Text("  Bahnhofstrasse 1 ".to_string());
        assert_eq!(cell.normalized(), "Bahnhofstrasse 1");
    }

    #[test]
    fn integral_number_has_no_fraction() {
        assert_eq!(CellValue::Number(8001.0).normalized(), "8001");
        assert_eq!(CellValue::Number(-3.0).normalized(), "-3");
    }

    #[test]
    fn fractional_number_is_kept() {
        assert_eq!(CellValue::Number(12.5).normalized(), "12.5");
    }

    #[test]
    fn non_finite_number_normalizes_to_empty() {
        assert_eq!(CellValue::Number(f64::NAN).normalized(), "");
        assert_eq!(CellValue::Number(f64::INFINITY).normalized(), "");
    }

    #[test]
    fn empty_and_whitespace_normalize_to_empty() {
        assert_eq!(CellValue::Empty.normalized(), "");
        assert_eq!(CellValue::Text("   ".to_string()).normalized(), "");
        assert_eq!(CellValue::Bool(false).normalized(), "false");
    }

    #[test]
    fn from_empty_str_is_empty() {
        assert_eq!(CellValue::from(""), CellValue::Empty);
        assert_eq!(CellValue::from("Bern"), CellValue::Text("Bern".to_string()));
    }

    #[test]
    fn display_keeps_raw_text() {
        let cell = CellValue::Text(" Zürich ".to_string());
        assert_eq!(cell.to_string(), " Zürich ");
        assert_eq!(CellValue::Number(3000.0).to_string(), "3000");
    }
}
