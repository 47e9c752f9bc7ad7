//! Application configuration
//!
//! Layered from serde defaults, an optional `automap.toml` and `AUTOMAP_*`
//! environment variables (`__` separates sections, e.g.
//! `AUTOMAP_INPUT__PATH`). The openrouteservice API key is read separately
//! from `OPENROUTESERVICE_API_KEY` and never stored in this struct.

use std::{fmt, path::Path, path::PathBuf, time::Duration};

use application::{ApplicationError, DistanceServiceConfig, FailurePolicy};
use integration_openrouteservice::OpenRouteServiceConfig;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Environment variable holding the openrouteservice API key
pub const API_KEY_ENV: &str = "OPENROUTESERVICE_API_KEY";

/// Name of the optional configuration file (any format the `config` crate knows)
pub const DEFAULT_CONFIG_NAME: &str = "automap";

/// Prefix of configuration environment variables
const ENV_PREFIX: &str = "AUTOMAP";

// ==============================
// Input / Output
// ==============================

/// Where and how to read the address sheet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Input file (.xlsx, .xlsm, .xlsb, .xls, .ods or .csv)
    #[serde(default = "default_input_path")]
    pub path: PathBuf,

    /// Worksheet name; the first sheet when unset
    #[serde(default)]
    pub sheet: Option<String>,

    /// Zero-based row holding the column headers
    #[serde(default)]
    pub header_row: usize,

    /// Header of the street address column
    #[serde(default = "default_address_column")]
    pub address_column: String,

    /// Header of the postal code column
    #[serde(default = "default_postal_code_column")]
    pub postal_code_column: String,

    /// Header of the city column
    #[serde(default = "default_city_column")]
    pub city_column: String,
}

fn default_input_path() -> PathBuf {
    PathBuf::from("addresses.xlsx")
}

fn default_address_column() -> String {
    "Address".to_string()
}

fn default_postal_code_column() -> String {
    "PostalCode".to_string()
}

fn default_city_column() -> String {
    "City".to_string()
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_input_path(),
            sheet: None,
            header_row: 0,
            address_column: default_address_column(),
            postal_code_column: default_postal_code_column(),
            city_column: default_city_column(),
        }
    }
}

/// Where to write the result sheet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output file (.xlsx or .csv)
    #[serde(default = "default_output_path")]
    pub path: PathBuf,

    /// Add an `Error` column with the failure reason of each failed row
    #[serde(default = "default_true")]
    pub include_error_column: bool,
}

fn default_output_path() -> PathBuf {
    PathBuf::from("addresses_with_distances.xlsx")
}

const fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            include_error_column: true,
        }
    }
}

// ==============================
// Processing
// ==============================

/// The fixed starting point of every route
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OriginConfig {
    /// Origin address, geocoded once per run
    #[serde(default)]
    pub address: String,

    /// Country appended to each destination address (empty to disable)
    #[serde(default = "default_country_hint")]
    pub country_hint: String,
}

fn default_country_hint() -> String {
    "Switzerland".to_string()
}

impl Default for OriginConfig {
    fn default() -> Self {
        Self {
            address: String::new(),
            country_hint: default_country_hint(),
        }
    }
}

/// Row handling settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// What a failed row does to the rest of the run
    #[serde(default)]
    pub failure_policy: FailurePolicy,

    /// Pause after each row that called the API, in milliseconds
    #[serde(default = "default_pause_between_rows_ms")]
    pub pause_between_rows_ms: u64,
}

const fn default_pause_between_rows_ms() -> u64 {
    200
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            failure_policy: FailurePolicy::default(),
            pause_between_rows_ms: default_pause_between_rows_ms(),
        }
    }
}

// ==============================
// Logging
// ==============================

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable lines
    #[default]
    #[serde(alias = "pretty")]
    Text,
    /// One JSON object per event
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

// ==============================
// Application Configuration
// ==============================

/// Complete configuration of one batch run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Input sheet
    #[serde(default)]
    pub input: InputConfig,

    /// Output sheet
    #[serde(default)]
    pub output: OutputConfig,

    /// Fixed origin
    #[serde(default)]
    pub origin: OriginConfig,

    /// Row handling
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// openrouteservice endpoints and request settings
    #[serde(default)]
    pub openrouteservice: OpenRouteServiceConfig,

    /// Log output format
    #[serde(default)]
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Load configuration from the optional file and the environment
    ///
    /// With `path` the file must exist; otherwise `automap.toml` (or
    /// another supported extension) in the working directory is used when
    /// present.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::load_with(path, Self::environment())
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn load_with(
        path: Option<&Path>,
        environment: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let config = config::Config::builder()
            .add_source(file)
            .add_source(environment)
            .build()?;
        config.try_deserialize()
    }

    /// Check the settings a run cannot do without
    ///
    /// # Errors
    ///
    /// Returns `MissingConfiguration` for an unset origin and
    /// `Configuration` for any other invalid value.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        if self.origin.address.trim().is_empty() {
            return Err(ApplicationError::MissingConfiguration(
                "origin.address must be set (e.g. AUTOMAP_ORIGIN__ADDRESS or --origin)"
                    .to_string(),
            ));
        }

        if self.input.path.as_os_str().is_empty() {
            return Err(ApplicationError::Configuration(
                "input.path must not be empty".to_string(),
            ));
        }

        if self.output.path.as_os_str().is_empty() {
            return Err(ApplicationError::Configuration(
                "output.path must not be empty".to_string(),
            ));
        }

        self.openrouteservice
            .validate()
            .map_err(|e| ApplicationError::Configuration(format!("openrouteservice.{e}")))
    }

    /// Settings for the distance service
    #[must_use]
    pub fn distance_service_config(&self) -> DistanceServiceConfig {
        DistanceServiceConfig::new(self.origin.address.trim())
            .with_country_hint(self.origin.country_hint.trim())
            .with_failure_policy(self.processing.failure_policy)
            .with_pause(Duration::from_millis(self.processing.pause_between_rows_ms))
    }
}

/// Read the API key from the process environment
///
/// # Errors
///
/// Returns `MissingConfiguration` if the variable is unset or blank.
pub fn resolve_api_key() -> Result<SecretString, ApplicationError> {
    api_key_from(|name| std::env::var(name).ok())
}

/// Read the API key through the given variable lookup
///
/// # Errors
///
/// Returns `MissingConfiguration` if the variable is unset or blank.
pub fn api_key_from(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<SecretString, ApplicationError> {
    match lookup(API_KEY_ENV) {
        Some(key) if !key.trim().is_empty() => Ok(SecretString::from(key.trim().to_string())),
        _ => Err(ApplicationError::MissingConfiguration(format!(
            "{API_KEY_ENV} is not set"
        ))),
    }
}
