//! openrouteservice client configuration

use serde::{Deserialize, Serialize};

/// Configuration for the openrouteservice geocoding and directions APIs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenRouteServiceConfig {
    /// Base URL of the API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Directions profile (e.g. "driving-car", "cycling-regular")
    #[serde(default = "default_profile")]
    pub profile: String,

    /// ISO country code restricting geocoding results (empty to disable)
    #[serde(default = "default_country_filter")]
    pub country_filter: String,
}

fn default_base_url() -> String {
    "https://api.openrouteservice.org".to_string()
}

const fn default_timeout_secs() -> u64 {
    15
}

fn default_profile() -> String {
    "driving-car".to_string()
}

fn default_country_filter() -> String {
    "CH".to_string()
}

impl Default for OpenRouteServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            profile: default_profile(),
            country_filter: default_country_filter(),
        }
    }
}

impl OpenRouteServiceConfig {
    /// Create a configuration suitable for testing against a mock server
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Base URL without a trailing slash
    #[must_use]
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.profile.trim().is_empty() {
            return Err("profile must not be empty".to_string());
        }

        Ok(())
    }
}
