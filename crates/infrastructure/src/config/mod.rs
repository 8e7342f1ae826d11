//! Application configuration
//!
//! Layered configuration: defaults, then an optional TOML file, then
//! environment variables.

use serde::{Deserialize, Serialize};

pub use integration_geocoding::GeocodingConfig;

/// Search service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Per-query timeout in seconds; slower responses are treated as
    /// zero-result answers
    #[serde(default = "default_query_timeout_secs")]
    pub query_timeout_secs: u64,
}

const fn default_query_timeout_secs() -> u64 {
    10
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            query_timeout_secs: default_query_timeout_secs(),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Geocoding service configuration
    #[serde(default)]
    pub geocoder: GeocodingConfig,

    /// Search service configuration
    #[serde(default)]
    pub search: SearchConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional `config.toml`
    ///
    /// # Errors
    ///
    /// Returns an error if the file or environment values cannot be
    /// parsed into the configuration shape.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a named file (extension resolved by the
    /// config loader), with environment overrides
    ///
    /// Environment variables use the `MAPSEARCH` prefix with `__` as
    /// the section separator, e.g. `MAPSEARCH__GEOCODER__ACCESS_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file or environment values cannot be
    /// parsed into the configuration shape.
    pub fn load_from(file: &str) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name(file).required(false))
            .add_source(
                config::Environment::with_prefix("MAPSEARCH")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// Validate the loaded configuration
    ///
    /// # Errors
    ///
    /// Returns a message describing the first invalid setting.
    pub fn validate(&self) -> Result<(), String> {
        self.geocoder.validate()?;

        if self.search.query_timeout_secs == 0 {
            return Err("search.query_timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sane_values() {
        let config = AppConfig::default();
        assert_eq!(config.search.query_timeout_secs, 10);
        assert_eq!(config.geocoder.base_url, "https://api.mapbox.com");
        assert!(config.geocoder.access_token.is_none());
    }

    #[test]
    fn default_config_validates() {
        // A token is still needed for real requests, but that is
        // checked at client construction, not here.
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_query_timeout_is_rejected() {
        let config = AppConfig {
            search: SearchConfig {
                query_timeout_secs: 0,
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn toml_file_shape_deserializes() {
        let toml_str = r#"
            [geocoder]
            access_token = "pk.example"
            limit = 7
            language = "es"

            [search]
            query_timeout_secs = 3
        "#;

        let config: AppConfig = toml::from_str(toml_str).expect("valid config");
        assert_eq!(config.geocoder.access_token.as_deref(), Some("pk.example"));
        assert_eq!(config.geocoder.limit, 7);
        assert_eq!(config.geocoder.language.as_deref(), Some("es"));
        assert_eq!(config.search.query_timeout_secs, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = AppConfig::load_from("does-not-exist-anywhere").expect("defaults");
        assert_eq!(config.search.query_timeout_secs, 10);
    }
}
