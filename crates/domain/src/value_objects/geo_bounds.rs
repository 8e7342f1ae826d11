//! Viewport bounding box value object
//!
//! Used as a bias hint for geocoding: results inside the visible map
//! region are preferred over results elsewhere.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::GeoLocation;

/// A rectangular geographic region defined by two corners
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    southwest: GeoLocation,
    northeast: GeoLocation,
}

impl GeoBounds {
    /// Create a new bounding box with corner ordering validation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidBounds` if the southwest corner is
    /// north or east of the northeast corner.
    pub fn new(southwest: GeoLocation, northeast: GeoLocation) -> Result<Self, DomainError> {
        if southwest.latitude() > northeast.latitude()
            || southwest.longitude() > northeast.longitude()
        {
            return Err(DomainError::InvalidBounds);
        }
        Ok(Self {
            southwest,
            northeast,
        })
    }

    /// Get the southwest corner
    #[must_use]
    pub const fn southwest(&self) -> GeoLocation {
        self.southwest
    }

    /// Get the northeast corner
    #[must_use]
    pub const fn northeast(&self) -> GeoLocation {
        self.northeast
    }

    /// Get the center point of the box
    #[must_use]
    pub fn center(&self) -> GeoLocation {
        GeoLocation::new_unchecked(
            f64::midpoint(self.southwest.latitude(), self.northeast.latitude()),
            f64::midpoint(self.southwest.longitude(), self.northeast.longitude()),
        )
    }

    /// Check whether a location lies inside the box (corners inclusive)
    #[must_use]
    pub fn contains(&self, location: &GeoLocation) -> bool {
        (self.southwest.latitude()..=self.northeast.latitude()).contains(&location.latitude())
            && (self.southwest.longitude()..=self.northeast.longitude())
                .contains(&location.longitude())
    }
}

impl fmt::Display for GeoBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} .. {}]", self.southwest, self.northeast)
    }
}
