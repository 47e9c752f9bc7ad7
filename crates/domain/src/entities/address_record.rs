//! Address record entity - one destination row of the input sheet

use serde::{Deserialize, Serialize};

use crate::value_objects::CellValue;

/// A destination address read from one input row
///
/// Immutable once read. Besides the three address fields it keeps the
/// complete original row so every input column can be written back out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressRecord {
    row_index: usize,
    address: String,
    postal_code: String,
    city: String,
    cells: Vec<CellValue>,
}

impl AddressRecord {
    /// Create a record from already-normalized address fields
    pub fn new(
        row_index: usize,
        address: impl Into<String>,
        postal_code: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            row_index,
            address: address.into(),
            postal_code: postal_code.into(),
            city: city.into(),
            cells: Vec::new(),
        }
    }

    /// Create a record from a raw row, picking the address fields by column index
    ///
    /// Missing cells (short rows) count as blank.
    #[must_use]
    pub fn from_cells(
        row_index: usize,
        cells: Vec<CellValue>,
        address_col: usize,
        postal_code_col: usize,
        city_col: usize,
    ) -> Self {
        let field = |idx: usize| cells.get(idx).map(CellValue::normalized).unwrap_or_default();
        Self {
            row_index,
            address: field(address_col),
            postal_code: field(postal_code_col),
            city: field(city_col),
            cells,
        }
    }

    /// 0-based index of the data row (header excluded)
    #[must_use]
    pub const fn row_index(&self) -> usize {
        self.row_index
    }

    /// Street and house number
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Postal code
    #[must_use]
    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    /// City
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Original row cells, in input column order
    #[must_use]
    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }

    /// Whether the street field is blank
    #[must_use]
    pub fn has_street(&self) -> bool {
        !self.address.trim().is_empty()
    }

    /// Compose the free-text address sent to the geocoder
    ///
    /// Format is `street, postal city, country` with blank parts dropped.
    #[must_use]
    pub fn full_address(&self, country_hint: &str) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(3);

        let street = self.address.trim();
        if !street.is_empty() {
            parts.push(street.to_string());
        }

        let locality: Vec<&str> = [self.postal_code.trim(), self.city.trim()]
            .into_iter()
            .filter(|p| !p.is_empty())
            .collect();
        if !locality.is_empty() {
            parts.push(locality.join(" "));
        }

        let country = country_hint.trim();
        if !country.is_empty() {
            parts.push(country.to_string());
        }

        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_address_with_all_parts() {
        let record = AddressRecord::new(0, "Bahnhofstrasse 1", "8001", "Zürich");
        assert_eq!(
            record.full_address("Switzerland"),
            "Bahnhofstrasse 1, 8001 Zürich, Switzerland"
        );
    }

    #[test]
    fn full_address_without_country() {
        let record = AddressRecord::new(0, "10 Downing St", "SW1A 2AA", "London");
        assert_eq!(record.full_address(""), "10 Downing St, SW1A 2AA London");
    }

    #[test]
    fn full_address_drops_blank_locality() {
        let record = AddressRecord::new(0, "???", "", "  ");
        assert_eq!(record.full_address("Switzerland"), "???, Switzerland");
    }

    #[test]
    fn full_address_city_only() {
        let record = AddressRecord::new(0, "Marktgasse 5", "", "Bern");
        assert_eq!(record.full_address(""), "Marktgasse 5, Bern");
    }

    #[test]
    fn has_street_detects_blank() {
        assert!(!AddressRecord::new(0, "  ", "3000", "Bern").has_street());
        assert!(AddressRecord::new(0, "Marktgasse 5", "", "").has_street());
    }

    #[test]
    fn from_cells_normalizes_fields() {
        let cells = vec![
            CellValue::from("ID-7"),
            CellValue::Text(" Marktgasse 5 ".to_string()),
            CellValue::Number(3011.0),
            CellValue::from("Bern"),
        ];
        let record = AddressRecord::from_cells(4, cells.clone(), 1, 2, 3);
        assert_eq!(record.row_index(), 4);
        assert_eq!(record.address(), "Marktgasse 5");
        assert_eq!(record.postal_code(), "3011");
        assert_eq!(record.city(), "Bern");
        assert_eq!(record.cells(), cells.as_slice());
    }

    #[test]
    fn from_cells_short_row_is_blank() {
        let record = AddressRecord::from_cells(0, vec![CellValue::from("Marktgasse 5")], 0, 1, 2);
        assert_eq!(record.postal_code(), "");
        assert_eq!(record.city(), "");
    }
}
