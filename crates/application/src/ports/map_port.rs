//! Map host port
//!
//! The map surface, camera, and markers are owned by an external
//! collaborator. The application only reads the viewport for bias hints
//! and hands over a coordinate once the user has picked a candidate.

use async_trait::async_trait;
use domain::{GeoBounds, GeoLocation};
#[cfg(test)]
use mockall::automock;

/// Port for the map host collaborator
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MapPort: Send + Sync {
    /// Current center of the visible map region
    ///
    /// Callers snapshot this at the moment the user starts interacting
    /// with the search input, not earlier, so the bias is never stale.
    fn viewport_center(&self) -> GeoLocation;

    /// Current visible map region, if the host exposes one
    fn viewport_bounds(&self) -> Option<GeoBounds>;

    /// Place a marker at the coordinate and move the camera there
    ///
    /// Invoked only in response to a candidate selection, never
    /// autonomously.
    async fn place_marker_and_center(&self, coordinate: GeoLocation);
}
