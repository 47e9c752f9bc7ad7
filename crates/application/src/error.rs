//! Application-level errors

use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A required setting (such as the API key) is absent
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    /// A setting has an invalid value
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input file does not exist
    #[error("Input file '{0}' not found")]
    FileNotFound(String),

    /// Required columns are absent from the input sheet
    #[error("Missing columns: {missing}. Available columns: {available}")]
    Schema {
        /// Names of the missing columns, comma-separated
        missing: String,
        /// Names of the columns found, comma-separated
        available: String,
    },

    /// File extension is not a supported spreadsheet format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// The input file exists but could not be read
    #[error("Error while reading the input file: {0}")]
    InputRead(String),

    /// Geocoding an address failed
    #[error("Geocoding failed: {0}")]
    Geocode(String),

    /// Routing between two points failed
    #[error("Routing failed: {0}")]
    Route(String),

    /// The fixed origin could not be geocoded
    #[error("Origin address '{address}' could not be resolved: {reason}")]
    OriginUnresolved {
        /// The configured origin address
        address: String,
        /// Underlying failure
        reason: String,
    },

    /// A row failed while the batch runs with the abort policy
    #[error("Row {row} failed, aborting: {reason}")]
    RowAborted {
        /// 1-based data row number
        row: usize,
        /// Underlying failure
        reason: String,
    },

    /// The output file could not be written
    #[error("Error while writing the output file: {0}")]
    Write(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_error_message() {
        let err = ApplicationError::Schema {
            missing: "PostalCode, City".to_string(),
            available: "Address, Name".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Missing columns: PostalCode, City. Available columns: Address, Name"
        );
    }

    #[test]
    fn file_not_found_message() {
        let err = ApplicationError::FileNotFound("addresses.xlsx".to_string());
        assert_eq!(err.to_string(), "Input file 'addresses.xlsx' not found");
    }

    #[test]
    fn origin_unresolved_message() {
        let err = ApplicationError::OriginUnresolved {
            address: "???".to_string(),
            reason: "Geocoding failed: Address not found".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Origin address '???' could not be resolved: Geocoding failed: Address not found"
        );
    }
}
