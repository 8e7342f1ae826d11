//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Display name cannot be split into street and remainder
    #[error("Malformed address, no comma separator: {0}")]
    MalformedAddress(String),

    /// Latitude or longitude out of range
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Bounding box corners in the wrong order
    #[error("Invalid bounds: southwest corner must not be north or east of northeast corner")]
    InvalidBounds,
}
