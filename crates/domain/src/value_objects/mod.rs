//! Value Objects - Immutable, identity-less domain primitives

mod address_lines;
mod geo_bounds;
mod geo_location;

pub use address_lines::AddressLines;
pub use geo_bounds::GeoBounds;
pub use geo_location::GeoLocation;
