//! Geocoding configuration

use serde::{Deserialize, Serialize};

/// Configuration for the Mapbox geocoding service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    /// Mapbox API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Mapbox access token (required for real requests)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum number of candidates per query (1-10)
    #[serde(default = "default_limit")]
    pub limit: u8,

    /// Comma-separated result types filter (e.g. "address", "address,poi")
    #[serde(default = "default_types")]
    pub types: String,

    /// Preferred response language (IETF tag, e.g. "en", "es")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

fn default_base_url() -> String {
    "https://api.mapbox.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_limit() -> u8 {
    5
}

fn default_types() -> String {
    "address".to_string()
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            access_token: None,
            timeout_secs: default_timeout_secs(),
            limit: default_limit(),
            types: default_types(),
            language: None,
        }
    }
}

impl GeocodingConfig {
    /// Create a configuration for testing (dummy token, short timeout)
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            access_token: Some("pk.test-token".to_string()),
            timeout_secs: 5,
            limit: 3,
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.limit == 0 || self.limit > 10 {
            return Err("limit must be between 1 and 10".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.types.is_empty() {
            return Err("types must not be empty".to_string());
        }

        Ok(())
    }
}
