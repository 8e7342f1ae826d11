//! Geocoder adapter
//!
//! Implements the application's `GeocoderPort` over the Mapbox
//! geocoding client, translating integration errors and wire-level
//! places into application and domain types.

use application::error::ApplicationError;
use application::ports::GeocoderPort;
use async_trait::async_trait;
use domain::{Candidate, GeoBounds, GeoLocation};
use integration_geocoding::{
    ForwardGeocoder, GeocoderError, GeocodingConfig, MapboxGeocodingClient, Place,
};
use tracing::instrument;

/// Adapter exposing the Mapbox geocoding client as a `GeocoderPort`
pub struct GeocoderAdapter {
    client: MapboxGeocodingClient,
}

impl GeocoderAdapter {
    /// Create an adapter from geocoding configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the access token is missing or
    /// the configuration is invalid.
    pub fn new(config: GeocodingConfig) -> Result<Self, ApplicationError> {
        let client = MapboxGeocodingClient::new(config).map_err(Self::map_error)?;
        Ok(Self { client })
    }

    /// Map integration-level geocoder errors to application errors
    fn map_error(err: GeocoderError) -> ApplicationError {
        match err {
            GeocoderError::RateLimitExceeded => ApplicationError::RateLimited,
            GeocoderError::MissingAccessToken | GeocoderError::ConfigurationError(_) => {
                ApplicationError::Configuration(err.to_string())
            }
            GeocoderError::ParseError(_) => ApplicationError::Internal(err.to_string()),
            GeocoderError::ConnectionFailed(_)
            | GeocoderError::RequestFailed(_)
            | GeocoderError::AuthenticationFailed(_)
            | GeocoderError::ServiceUnavailable(_) => {
                ApplicationError::ExternalService(err.to_string())
            }
        }
    }

    fn map_place(place: Place) -> Candidate {
        Candidate::new(place.id, place.display_name, place.coordinate)
    }
}

impl std::fmt::Debug for GeocoderAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocoderAdapter").finish_non_exhaustive()
    }
}

#[async_trait]
impl GeocoderPort for GeocoderAdapter {
    #[instrument(skip(self), fields(query_len = query.len()))]
    async fn forward_geocode(
        &self,
        query: &str,
        bias: Option<GeoLocation>,
        bounds: Option<GeoBounds>,
    ) -> Result<Vec<Candidate>, ApplicationError> {
        let result = self
            .client
            .forward_geocode(query, bias, bounds)
            .await
            .map_err(Self::map_error)?;

        Ok(result.places.into_iter().map(Self::map_place).collect())
    }

    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}
