//! Mapbox geocoding client
//!
//! HTTP client for the Mapbox Geocoding v5 forward-geocoding endpoint.

use async_trait::async_trait;
use domain::{GeoBounds, GeoLocation};
use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::GeocodingConfig;
use crate::error::GeocoderError;
use crate::models::{FeatureCollection, GeocodeResult, Place};
use crate::urlencoding::encode_path_segment;

/// Trait for forward geocoding providers
#[async_trait]
pub trait ForwardGeocoder: Send + Sync {
    /// Geocode a free-text partial address
    ///
    /// # Arguments
    ///
    /// * `query` - Free-text partial address
    /// * `proximity` - Optional location hint; nearby results rank higher
    /// * `bounds` - Optional rectangle; results inside it rank higher
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// parsed. An empty place list is a success, not an error.
    async fn forward_geocode(
        &self,
        query: &str,
        proximity: Option<GeoLocation>,
        bounds: Option<GeoBounds>,
    ) -> Result<GeocodeResult, GeocoderError>;

    /// Check if the geocoding service is healthy/reachable
    async fn is_healthy(&self) -> bool;
}

/// Mapbox Geocoding v5 HTTP client implementation
#[derive(Debug)]
pub struct MapboxGeocodingClient {
    client: Client,
    config: GeocodingConfig,
    access_token: String,
}

impl MapboxGeocodingClient {
    /// Create a new Mapbox geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if no access token is configured, the
    /// configuration is invalid, or the HTTP client cannot be
    /// initialized.
    pub fn new(config: GeocodingConfig) -> Result<Self, GeocoderError> {
        config
            .validate()
            .map_err(GeocoderError::ConfigurationError)?;

        let access_token = config
            .access_token
            .clone()
            .ok_or(GeocoderError::MissingAccessToken)?;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GeocoderError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config,
            access_token,
        })
    }

    /// Build the request URL for a forward-geocoding query
    ///
    /// The query is percent-encoded into the path; proximity is
    /// `lon,lat` and bbox is `minLon,minLat,maxLon,maxLat`, both in the
    /// GeoJSON axis order the API expects.
    fn build_url(
        &self,
        query: &str,
        proximity: Option<GeoLocation>,
        bounds: Option<GeoBounds>,
    ) -> String {
        let mut url = format!(
            "{}/geocoding/v5/mapbox.places/{}.json?access_token={}&autocomplete=true&types={}&limit={}",
            self.config.base_url,
            encode_path_segment(query),
            self.access_token,
            self.config.types,
            self.config.limit.clamp(1, 10),
        );

        if let Some(center) = proximity {
            url.push_str(&format!(
                "&proximity={},{}",
                center.longitude(),
                center.latitude()
            ));
        }

        if let Some(bounds) = bounds {
            url.push_str(&format!(
                "&bbox={},{},{},{}",
                bounds.southwest().longitude(),
                bounds.southwest().latitude(),
                bounds.northeast().longitude(),
                bounds.northeast().latitude()
            ));
        }

        if let Some(ref language) = self.config.language {
            url.push_str(&format!("&language={language}"));
        }

        url
    }

    /// Map an HTTP status to a geocoder error, if it is one
    fn check_status(status: reqwest::StatusCode) -> Result<(), GeocoderError> {
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(GeocoderError::AuthenticationFailed(format!("HTTP {status}")));
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GeocoderError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(GeocoderError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(GeocoderError::RequestFailed(format!("HTTP {status}")));
        }
        Ok(())
    }
}

#[async_trait]
impl ForwardGeocoder for MapboxGeocodingClient {
    #[instrument(skip(self), fields(query_len = query.len()))]
    async fn forward_geocode(
        &self,
        query: &str,
        proximity: Option<GeoLocation>,
        bounds: Option<GeoBounds>,
    ) -> Result<GeocodeResult, GeocoderError> {
        let url = self.build_url(query, proximity, bounds);
        debug!("Fetching geocoding candidates");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| GeocoderError::RequestFailed(e.to_string()))?;

        Self::check_status(response.status())?;

        let collection: FeatureCollection = response
            .json()
            .await
            .map_err(|e| GeocoderError::ParseError(e.to_string()))?;

        let places = collection
            .features
            .into_iter()
            .map(Place::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(places = places.len(), "Geocoding response parsed");
        Ok(GeocodeResult::new(query.to_string(), places))
    }

    async fn is_healthy(&self) -> bool {
        // A minimal real query; Mapbox has no dedicated health endpoint.
        self.forward_geocode("Main Street", None, None)
            .await
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> MapboxGeocodingClient {
        MapboxGeocodingClient::new(GeocodingConfig::for_testing()).expect("client builds")
    }

    #[test]
    fn test_client_requires_access_token() {
        let result = MapboxGeocodingClient::new(GeocodingConfig::default());
        assert!(matches!(result, Err(GeocoderError::MissingAccessToken)));
    }

    #[test]
    fn test_client_rejects_invalid_config() {
        let config = GeocodingConfig {
            limit: 0,
            ..GeocodingConfig::for_testing()
        };
        assert!(matches!(
            MapboxGeocodingClient::new(config),
            Err(GeocoderError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_build_url_basic() {
        let url = test_client().build_url("main st", None, None);
        assert!(url.contains("/geocoding/v5/mapbox.places/main%20st.json"));
        assert!(url.contains("access_token=pk.test-token"));
        assert!(url.contains("autocomplete=true"));
        assert!(url.contains("types=address"));
        assert!(url.contains("limit=3"));
        assert!(!url.contains("proximity="));
        assert!(!url.contains("bbox="));
    }

    #[test]
    fn test_build_url_with_proximity_uses_lon_lat_order() {
        let center = GeoLocation::new_unchecked(19.4326, -99.1332);
        let url = test_client().build_url("main", Some(center), None);
        assert!(url.contains("&proximity=-99.1332,19.4326"));
    }

    #[test]
    fn test_build_url_with_bbox() {
        let bounds = GeoBounds::new(
            GeoLocation::new_unchecked(19.2, -99.4),
            GeoLocation::new_unchecked(19.6, -98.9),
        )
        .expect("valid bounds");
        let url = test_client().build_url("main", None, Some(bounds));
        assert!(url.contains("&bbox=-99.4,19.2,-98.9,19.6"));
    }

    #[test]
    fn test_build_url_with_language() {
        let config = GeocodingConfig {
            language: Some("es".to_string()),
            ..GeocodingConfig::for_testing()
        };
        let client = MapboxGeocodingClient::new(config).expect("client builds");
        let url = client.build_url("main", None, None);
        assert!(url.contains("&language=es"));
    }

    #[test]
    fn test_build_url_clamps_limit() {
        let config = GeocodingConfig {
            limit: 10,
            ..GeocodingConfig::for_testing()
        };
        let client = MapboxGeocodingClient::new(config).expect("client builds");
        let url = client.build_url("main", None, None);
        assert!(url.contains("limit=10"));
    }

    #[test]
    fn test_check_status_mapping() {
        use reqwest::StatusCode;

        assert!(MapboxGeocodingClient::check_status(StatusCode::OK).is_ok());
        assert!(matches!(
            MapboxGeocodingClient::check_status(StatusCode::UNAUTHORIZED),
            Err(GeocoderError::AuthenticationFailed(_))
        ));
        assert!(matches!(
            MapboxGeocodingClient::check_status(StatusCode::FORBIDDEN),
            Err(GeocoderError::AuthenticationFailed(_))
        ));
        assert!(matches!(
            MapboxGeocodingClient::check_status(StatusCode::TOO_MANY_REQUESTS),
            Err(GeocoderError::RateLimitExceeded)
        ));
        assert!(matches!(
            MapboxGeocodingClient::check_status(StatusCode::INTERNAL_SERVER_ERROR),
            Err(GeocoderError::ServiceUnavailable(_))
        ));
        assert!(matches!(
            MapboxGeocodingClient::check_status(StatusCode::NOT_FOUND),
            Err(GeocoderError::RequestFailed(_))
        ));
    }
}
