//! Mapbox geocoding integration
//!
//! HTTP client for the Mapbox Geocoding v5 API (forward geocoding).
//! Turns a partial address plus an optional viewport bias into a ranked
//! list of places.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_geocoding::{ForwardGeocoder, GeocodingConfig, MapboxGeocodingClient};
//!
//! let config = GeocodingConfig {
//!     access_token: Some("pk.test".to_string()),
//!     ..Default::default()
//! };
//! let client = MapboxGeocodingClient::new(config)?;
//!
//! let result = client.forward_geocode("main st", None, None).await?;
//! for place in result.places {
//!     println!("{} @ {}", place.display_name, place.coordinate);
//! }
//! ```

pub mod client;
mod config;
mod error;
mod models;
mod urlencoding;

pub use client::{ForwardGeocoder, MapboxGeocodingClient};
pub use config::GeocodingConfig;
pub use error::GeocoderError;
pub use models::{CarmenFeature, FeatureCollection, GeocodeResult, Place};
