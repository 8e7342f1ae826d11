//! Geocoder port
//!
//! Defines the interface for forward geocoding a partial address into a
//! ranked list of candidates.

use async_trait::async_trait;
use domain::{Candidate, GeoBounds, GeoLocation};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for forward geocoding operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocoderPort: Send + Sync {
    /// Geocode a free-text partial address into candidates
    ///
    /// # Arguments
    /// * `query` - Free-text partial address, non-empty
    /// * `bias` - Optional location hint; nearby results rank higher
    /// * `bounds` - Optional viewport rectangle; results inside rank higher
    ///
    /// Candidates are returned in vendor ranking order. An empty list is
    /// a valid outcome, not an error.
    async fn forward_geocode(
        &self,
        query: &str,
        bias: Option<GeoLocation>,
        bounds: Option<GeoBounds>,
    ) -> Result<Vec<Candidate>, ApplicationError>;

    /// Check if the geocoding service is reachable
    async fn is_available(&self) -> bool;
}
