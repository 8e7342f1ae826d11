//! Geocoding data models
//!
//! The wire types mirror the Mapbox v5 response, a GeoJSON feature
//! collection of "Carmen" features. [`Place`] and [`GeocodeResult`] are
//! the crate's public, already-validated view of that payload.

use chrono::{DateTime, Utc};
use domain::GeoLocation;
use serde::{Deserialize, Serialize};

use crate::error::GeocoderError;

/// Wire format: the Mapbox v5 geocoding response
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCollection {
    /// Candidate features in vendor ranking order
    #[serde(default)]
    pub features: Vec<CarmenFeature>,

    /// Vendor attribution string
    #[serde(default)]
    pub attribution: Option<String>,
}

/// Wire format: one geocoded feature
#[derive(Debug, Clone, Deserialize)]
pub struct CarmenFeature {
    /// Vendor identifier, e.g. "address.12345"
    pub id: String,

    /// Human-readable "street, city, region, country" string
    pub place_name: String,

    /// Position as `[longitude, latitude]`
    pub center: Vec<f64>,

    /// Vendor ranking score in [0, 1]
    #[serde(default)]
    pub relevance: Option<f64>,
}

impl CarmenFeature {
    /// Extract the coordinate, validating the GeoJSON `[lon, lat]` pair
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` when the center array is too short or the
    /// coordinates are out of range.
    pub fn coordinate(&self) -> Result<GeoLocation, GeocoderError> {
        let (Some(&longitude), Some(&latitude)) = (self.center.first(), self.center.get(1)) else {
            return Err(GeocoderError::ParseError(format!(
                "feature {} has a malformed center array",
                self.id
            )));
        };
        GeoLocation::new(latitude, longitude)
            .map_err(|e| GeocoderError::ParseError(format!("feature {}: {e}", self.id)))
    }
}

/// A validated geocoded place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Opaque vendor identifier
    pub id: String,

    /// Vendor-formatted display name
    pub display_name: String,

    /// Geographic position
    pub coordinate: GeoLocation,

    /// Vendor ranking score, if reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance: Option<f64>,
}

impl TryFrom<CarmenFeature> for Place {
    type Error = GeocoderError;

    fn try_from(feature: CarmenFeature) -> Result<Self, Self::Error> {
        let coordinate = feature.coordinate()?;
        Ok(Self {
            id: feature.id,
            display_name: feature.place_name,
            coordinate,
            relevance: feature.relevance,
        })
    }
}

/// Result of one forward-geocoding request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodeResult {
    /// The query that produced this result
    pub query: String,

    /// Places in vendor ranking order
    pub places: Vec<Place>,

    /// When the response was received
    pub retrieved_at: DateTime<Utc>,
}

impl GeocodeResult {
    /// Create a result stamped with the current time
    #[must_use]
    pub fn new(query: String, places: Vec<Place>) -> Self {
        Self {
            query,
            places,
            retrieved_at: Utc::now(),
        }
    }

    /// Check if the result has any places
    #[must_use]
    pub fn has_places(&self) -> bool {
        !self.places.is_empty()
    }
}
